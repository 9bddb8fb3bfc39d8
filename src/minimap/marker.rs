/// Minimap decorations: frame, camera position marker and heading indicator
/// All coordinates are continuous minimap pixels (y-up).
use crate::math::Vec3;
use crate::raster2d::Segment;
use glam::{DVec2, Vec2};
use std::f32::consts::TAU;

pub const MARKER_POINTS: usize = 8;
pub const MARKER_RADIUS: f32 = 3.0;
pub const HEADING_LENGTH: f32 = 8.0;

/// Ring of points around the camera's minimap position.
pub fn camera_marker(center: Vec2) -> [Vec2; MARKER_POINTS] {
    std::array::from_fn(|i| {
        let angle = i as f32 * TAU / MARKER_POINTS as f32;
        center + Vec2::new(angle.cos(), angle.sin()) * MARKER_RADIUS
    })
}

/// Short segment from `center` along the ground projection of `front`.
/// A vertical `front` has no ground direction and yields a zero-length segment.
pub fn heading_segment(center: Vec2, front: Vec3) -> Segment {
    let dir = Vec3::new(front.x, 0.0, front.z).normalize();
    let tip = center + Vec2::new(dir.x, dir.z) * HEADING_LENGTH;
    Segment::new(center.as_dvec2(), tip.as_dvec2())
}

/// Outline of a `size x size` minimap as four closed edges.
pub fn frame_segments(size: usize) -> [Segment; 4] {
    let max = size.saturating_sub(1) as f64;
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(max, 0.0),
        DVec2::new(max, max),
        DVec2::new(0.0, max),
    ];
    std::array::from_fn(|i| Segment::new(corners[i], corners[(i + 1) % 4]))
}
