/// Minimap overlay
/// Drawn without depth test into the bottom-right corner of the framebuffer.
/// Minimap pixels are y-up, so rows are flipped on the way out.
use super::framebuffer::{rgb_to_u32, Framebuffer};
use crate::minimap::{camera_marker, frame_segments, heading_segment};
use crate::perf_scope;
use crate::raster2d::{clip_and_rasterize, rasterize, segment_pixels};
use crate::scene::Scene;
use glam::IVec2;

pub const FRAME_COLOR: u32 = rgb_to_u32(255, 255, 255);
pub const TRACE_COLOR: u32 = rgb_to_u32(255, 0, 0);
pub const MARKER_COLOR: u32 = rgb_to_u32(0, 255, 0);
pub const HEADING_COLOR: u32 = rgb_to_u32(0, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapOverlay {
    pub size: usize,
    pub margin: usize,
    /// Side of the square drawn for each trace and marker point
    pub point_size: i32,
}

impl MinimapOverlay {
    pub fn new(size: usize, margin: usize) -> Self {
        Self {
            size,
            margin,
            point_size: 2,
        }
    }

    /// Framebuffer position of minimap pixel `p`.
    #[inline]
    pub fn to_screen(&self, framebuffer: &Framebuffer, p: IVec2) -> IVec2 {
        let x0 = framebuffer.width as i32 - (self.margin + self.size) as i32;
        let bottom = framebuffer.height as i32 - 1 - self.margin as i32;
        IVec2::new(x0 + p.x, bottom - p.y)
    }

    pub fn draw(&self, framebuffer: &mut Framebuffer, scene: &Scene) {
        perf_scope!("minimap_overlay");

        let mapping = scene.tracer().mapping();
        let bounds = mapping.bounds();

        for edge in frame_segments(self.size) {
            let (start, end) = segment_pixels(&edge);
            for p in rasterize(start, end) {
                self.plot(framebuffer, p, FRAME_COLOR);
            }
        }

        for &p in scene.path_trace() {
            self.plot_point(framebuffer, p, TRACE_COLOR);
        }

        let center = scene.camera_minimap_position();
        for p in camera_marker(center) {
            let pixel = p.floor().as_ivec2();
            if mapping.contains_pixel(pixel) {
                self.plot_point(framebuffer, pixel, MARKER_COLOR);
            }
        }

        let heading = heading_segment(center, scene.camera.front());
        for p in clip_and_rasterize(heading, &bounds) {
            self.plot(framebuffer, p, HEADING_COLOR);
        }
    }

    #[inline]
    fn plot(&self, framebuffer: &mut Framebuffer, p: IVec2, color: u32) {
        let s = self.to_screen(framebuffer, p);
        framebuffer.set_pixel_no_depth(s.x, s.y, color);
    }

    // Grows up and to the right in minimap space so squares on the last
    // row or column stay inside the frame.
    fn plot_point(&self, framebuffer: &mut Framebuffer, p: IVec2, color: u32) {
        let max = self.size as i32 - 1;
        for dy in 0..self.point_size {
            for dx in 0..self.point_size {
                let q = IVec2::new((p.x - dx).clamp(0, max), (p.y - dy).clamp(0, max));
                self.plot(framebuffer, q, color);
            }
        }
    }
}
