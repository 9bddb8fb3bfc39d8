/// Value-type vector and matrix algebra used by the terrain and camera code
/// Column-major storage so matrices can be uploaded without transposition
pub mod mat4;
pub mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;
