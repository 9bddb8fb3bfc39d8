/// Procedural heightfield terrain
/// Height sampling and mesh + vertex normal generation, run once at startup
pub mod height;
pub mod mesh;

pub use height::{smoothstep, HeightField, HeightProfile};
pub use mesh::{
    generate_terrain_mesh, TerrainMesh, TerrainVertex, FLOATS_PER_VERTEX, NORMAL_OFFSET,
    POSITION_OFFSET, VERTEX_STRIDE,
};
