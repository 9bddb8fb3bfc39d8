/// Minimap path tracing
/// Camera ground positions are mapped into minimap pixels, clipped to the
/// minimap square and rasterized into an append-only trace.
pub mod mapping;
pub mod marker;
pub mod trace;

pub use mapping::{ground_position, MinimapMapping};
pub use marker::{camera_marker, frame_segments, heading_segment, HEADING_LENGTH, MARKER_RADIUS};
pub use trace::{PathTrace, PathTracer, TraceUpdate};
