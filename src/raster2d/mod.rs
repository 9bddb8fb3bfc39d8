/// 2D line clipping and rasterization for overlay drawing
/// Cohen-Sutherland trims a segment to a rectangle, Bresenham turns it into pixels
pub mod clip;
pub mod line;

pub use clip::{clip, clip_segment, ClipRect, OutCode, Segment, MAX_CLIP_PASSES};
pub use line::{rasterize, BresenhamLine};

use glam::IVec2;

/// Integer pixel endpoints of a clipped segment (coordinates floored).
#[inline]
pub fn segment_pixels(segment: &Segment) -> (IVec2, IVec2) {
    (
        segment.start.floor().as_ivec2(),
        segment.end.floor().as_ivec2(),
    )
}

/// Clip `segment` to `rect` and rasterize whatever survives.
/// Returns an empty list when the segment lies fully outside.
pub fn clip_and_rasterize(segment: Segment, rect: &ClipRect) -> Vec<IVec2> {
    match clip_segment(segment, rect) {
        Some(clipped) => {
            let (start, end) = segment_pixels(&clipped);
            rasterize(start, end)
        }
        None => Vec::new(),
    }
}
