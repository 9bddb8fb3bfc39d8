/// Wireframe terrain pass
///
/// Vertices are projected once per frame, then the framebuffer is split into
/// row stripes that render in parallel. Each stripe clips every edge to its
/// own rows with Cohen-Sutherland and walks the survivors with Bresenham,
/// depth-testing each pixel. Edges with an endpoint outside the depth range
/// are dropped rather than clipped in 3D.
use super::framebuffer::{rgb_to_u32, FrameSlice, Framebuffer};
use crate::math::Mat4;
use crate::perf_scope;
use crate::raster2d::{clip_segment, segment_pixels, BresenhamLine, Segment};
use crate::terrain::TerrainMesh;
use glam::DVec2;
use rayon::prelude::*;

const NEAR_W_EPS: f32 = 0.001;

/// Screen-space vertex after projection and viewport mapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenVertex {
    pub pos: DVec2,
    /// NDC depth in [-1, 1]
    pub depth: f32,
    /// Normalised elevation in [0, 1], used for colouring
    pub tint: f32,
}

pub struct WireframeRenderer {
    edges: Vec<[u32; 2]>,
    height_range: (f32, f32),
    pub low_color: [u8; 3],
    pub high_color: [u8; 3],
    /// Stripes per rayon worker; more stripes balance uneven edge density
    pub stripes_per_thread: usize,
}

impl WireframeRenderer {
    pub fn new(mesh: &TerrainMesh) -> Self {
        Self {
            edges: unique_edges(mesh),
            height_range: mesh.height_range(),
            low_color: [46, 112, 58],
            high_color: [236, 232, 220],
            stripes_per_thread: 4,
        }
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Project every mesh vertex with `mvp`. `None` marks vertices outside
    /// the near/far range.
    pub fn project(
        &self,
        mesh: &TerrainMesh,
        mvp: &Mat4,
        width: usize,
        height: usize,
    ) -> Vec<Option<ScreenVertex>> {
        let (lo, hi) = self.height_range;
        let span = (hi - lo).max(f32::EPSILON);
        let (w, h) = (width as f64, height as f64);

        mesh.vertices()
            .par_iter()
            .map(|v| {
                let [x, y, z, cw] = mvp.transform_point4(v.position);
                if cw <= NEAR_W_EPS {
                    return None;
                }
                let ndc_z = z / cw;
                if !(-1.0..=1.0).contains(&ndc_z) {
                    return None;
                }
                let (ndc_x, ndc_y) = ((x / cw) as f64, (y / cw) as f64);
                Some(ScreenVertex {
                    pos: DVec2::new((ndc_x + 1.0) * 0.5 * w, (1.0 - ndc_y) * 0.5 * h),
                    depth: ndc_z,
                    tint: ((v.position.y - lo) / span).clamp(0.0, 1.0),
                })
            })
            .collect()
    }

    /// Draw the mesh into `framebuffer`. Returns the number of pixels written.
    pub fn render(&self, framebuffer: &mut Framebuffer, mesh: &TerrainMesh, mvp: &Mat4) -> usize {
        perf_scope!("wireframe_render");

        let projected = self.project(mesh, mvp, framebuffer.width, framebuffer.height);
        let stripe_count = rayon::current_num_threads() * self.stripes_per_thread.max(1);

        framebuffer
            .split_into_stripes(stripe_count)
            .into_par_iter()
            .map(|mut slice| self.render_stripe(&mut slice, &projected))
            .sum()
    }

    fn render_stripe(&self, slice: &mut FrameSlice<'_>, projected: &[Option<ScreenVertex>]) -> usize {
        let rect = slice.clip_rect();
        let mut written = 0;

        for &[a, b] in &self.edges {
            let (Some(va), Some(vb)) = (projected[a as usize], projected[b as usize]) else {
                continue;
            };
            let Some(clipped) = clip_segment(Segment::new(va.pos, vb.pos), &rect) else {
                continue;
            };

            let d0 = lerp(va.depth, vb.depth, param_along(va.pos, vb.pos, clipped.start));
            let d1 = lerp(va.depth, vb.depth, param_along(va.pos, vb.pos, clipped.end));
            let color = self.color((va.tint + vb.tint) * 0.5);

            let (start, end) = segment_pixels(&clipped);
            let line = BresenhamLine::new(start, end);
            let steps = (line.len().max(2) - 1) as f32;
            for (i, p) in line.enumerate() {
                let depth = lerp(d0, d1, i as f32 / steps);
                if slice.set_pixel(p.x, p.y, color, depth) {
                    written += 1;
                }
            }
        }
        written
    }

    fn color(&self, t: f32) -> u32 {
        let mix = |lo: u8, hi: u8| (lo as f32 + (hi as f32 - lo as f32) * t).round() as u8;
        rgb_to_u32(
            mix(self.low_color[0], self.high_color[0]),
            mix(self.low_color[1], self.high_color[1]),
            mix(self.low_color[2], self.high_color[2]),
        )
    }
}

/// Every triangle edge exactly once, as sorted index pairs.
pub fn unique_edges(mesh: &TerrainMesh) -> Vec<[u32; 2]> {
    let mut edges: Vec<[u32; 2]> = mesh
        .triangles()
        .flat_map(|[a, b, c]| [[a, b], [b, c], [c, a]])
        .map(|[a, b]| [a.min(b), a.max(b)])
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Parameter of `p` projected onto segment `a -> b`, clamped to [0, 1].
#[inline]
fn param_along(a: DVec2, b: DVec2, p: DVec2) -> f32 {
    let d = b - a;
    let len_sq = d.length_squared();
    if len_sq == 0.0 {
        return 0.0;
    }
    ((p - a).dot(d) / len_sq).clamp(0.0, 1.0) as f32
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
