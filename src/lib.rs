/// Terrain Viewer - procedural heightfield terrain with a path-tracing minimap
/// Pure geometry core (terrain, clipping, rasterization, path trace) plus a
/// software wireframe renderer used by the viewer binary
pub mod camera;
pub mod config;
pub mod error;
pub mod math;
pub mod minimap;
pub mod perf;
pub mod raster2d;
pub mod render;
pub mod scene;
pub mod terrain;

pub use camera::{Camera, CameraController};
pub use config::{TerrainConfig, ViewerConfig};
pub use error::{TerrainError, ViewerError};
pub use math::{Mat4, Vec3};
pub use minimap::{MinimapMapping, PathTrace, PathTracer, TraceUpdate};
pub use raster2d::{clip, clip_segment, rasterize, BresenhamLine, ClipRect, OutCode, Segment};
pub use render::{Framebuffer, MinimapOverlay, WireframeRenderer};
pub use scene::Scene;
pub use terrain::{generate_terrain_mesh, HeightProfile, TerrainMesh, TerrainVertex};
