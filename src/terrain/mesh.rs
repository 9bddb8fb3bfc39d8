/// Heightfield mesh generation
///
/// Grid layout: vertex `(x, z)` lives at index `z * width + x` (row-major over z).
/// Each cell `(x, z)` with corners
///
/// ```text
///   i0 = (x, z)      i1 = (x + 1, z)
///   i2 = (x, z + 1)  i3 = (x + 1, z + 1)
/// ```
///
/// is split into triangles `(i0, i2, i1)` and `(i1, i2, i3)`. Both wind so that
/// `(b - a) x (c - a)` points towards +Y, which makes every face of the
/// heightfield front-facing from above.
use super::height::{HeightField, HeightProfile};
use crate::error::TerrainError;
use crate::math::Vec3;
use crate::perf_scope;

/// Floats per interleaved vertex: position xyz, normal xyz
pub const FLOATS_PER_VERTEX: usize = 6;
/// Byte stride of one vertex record
pub const VERTEX_STRIDE: usize = FLOATS_PER_VERTEX * std::mem::size_of::<f32>();
/// Attribute 0 byte offset
pub const POSITION_OFFSET: usize = 0;
/// Attribute 1 byte offset
pub const NORMAL_OFFSET: usize = 3 * std::mem::size_of::<f32>();
pub const INDICES_PER_CELL: usize = 6;

/// One interleaved vertex record, laid out exactly as the vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TerrainVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Immutable terrain mesh: interleaved vertices plus triangle indices.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMesh {
    width: usize,
    depth: usize,
    vertices: Vec<TerrainVertex>,
    indices: Vec<u32>,
}

impl TerrainMesh {
    /// Build the mesh for a `width x depth` grid using the default height profile.
    pub fn generate(width: usize, depth: usize) -> Result<Self, TerrainError> {
        Self::generate_with_profile(width, depth, &HeightProfile::default())
    }

    pub fn generate_with_profile(
        width: usize,
        depth: usize,
        profile: &HeightProfile,
    ) -> Result<Self, TerrainError> {
        validate_dimensions(width, depth)?;
        perf_scope!("terrain_generate");

        let field = HeightField::new(width, depth, profile.clone());

        // 1. Raw positions
        let mut positions = Vec::with_capacity(width * depth);
        for z in 0..depth {
            for x in 0..width {
                positions.push(Vec3::new(x as f32, field.sample(x, z), z as f32));
            }
        }

        // 2. Triangles + accumulated face normals
        let cells = (width - 1) * (depth - 1);
        let mut indices = Vec::with_capacity(cells * INDICES_PER_CELL);
        let mut normal_sums = vec![Vec3::ZERO; positions.len()];

        for z in 0..depth.saturating_sub(1) {
            for x in 0..width.saturating_sub(1) {
                let i0 = (z * width + x) as u32;
                let i1 = i0 + 1;
                let i2 = i0 + width as u32;
                let i3 = i2 + 1;

                for tri in [[i0, i2, i1], [i1, i2, i3]] {
                    let normal = face_normal(&positions, tri);
                    for &i in &tri {
                        normal_sums[i as usize] += normal;
                    }
                    indices.extend_from_slice(&tri);
                }
            }
        }

        // 3. Normalise once, after every triangle has contributed
        let vertices: Vec<TerrainVertex> = positions
            .into_iter()
            .zip(normal_sums)
            .map(|(position, sum)| TerrainVertex {
                position,
                normal: sum.normalize(),
            })
            .collect();

        log::debug!(
            "terrain {}x{}: {} vertices, {} triangles",
            width,
            depth,
            vertices.len(),
            indices.len() / 3
        );

        Ok(Self {
            width,
            depth,
            vertices,
            indices,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Triangles as index triples in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Vertex at grid cell `(x, z)`.
    #[inline]
    pub fn vertex_at(&self, x: usize, z: usize) -> &TerrainVertex {
        &self.vertices[z * self.width + x]
    }

    /// Lowest and highest vertex elevation.
    pub fn height_range(&self) -> (f32, f32) {
        self.vertices
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v.position.y), hi.max(v.position.y))
            })
    }

    /// Interleaved `px, py, pz, nx, ny, nz` floats, one record per vertex.
    pub fn vertex_buffer(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertices.len() * FLOATS_PER_VERTEX);
        for v in &self.vertices {
            out.extend_from_slice(&v.position.to_array());
            out.extend_from_slice(&v.normal.to_array());
        }
        out
    }

    /// Consume the mesh into `(vertex_buffer, index_buffer)`.
    pub fn into_buffers(self) -> (Vec<f32>, Vec<u32>) {
        (self.vertex_buffer(), self.indices)
    }
}

/// Generate the terrain and return the raw upload buffers.
pub fn generate_terrain_mesh(
    width: usize,
    depth: usize,
) -> Result<(Vec<f32>, Vec<u32>), TerrainError> {
    TerrainMesh::generate(width, depth).map(TerrainMesh::into_buffers)
}

fn validate_dimensions(width: usize, depth: usize) -> Result<(), TerrainError> {
    if width == 0 || depth == 0 {
        return Err(TerrainError::InvalidDimension { width, depth });
    }
    match width.checked_mul(depth) {
        Some(count) if count <= u32::MAX as usize => Ok(()),
        _ => Err(TerrainError::TooManyVertices { width, depth }),
    }
}

/// Unit face normal of a triangle, `(b - a) x (c - a)`.
#[inline]
fn face_normal(positions: &[Vec3], [a, b, c]: [u32; 3]) -> Vec3 {
    let a = positions[a as usize];
    let b = positions[b as usize];
    let c = positions[c as usize];
    (b - a).cross(c - a).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_profile() -> HeightProfile {
        HeightProfile {
            hill_height: 0.0,
            wave_amplitudes: [0.0; 3],
            ripple_amplitude: 0.0,
            detail_amplitude: 0.0,
            floor: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            TerrainMesh::generate(0, 10),
            Err(TerrainError::InvalidDimension { width: 0, depth: 10 })
        );
        assert_eq!(
            TerrainMesh::generate(10, 0),
            Err(TerrainError::InvalidDimension { width: 10, depth: 0 })
        );
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert!(matches!(
            TerrainMesh::generate(1 << 20, 1 << 20),
            Err(TerrainError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn flat_grid_normals_point_up() {
        let mesh = TerrainMesh::generate_with_profile(6, 4, &flat_profile()).unwrap();
        for v in mesh.vertices() {
            assert_eq!(v.position.y, 0.0);
            assert!((v.normal.y - 1.0).abs() < 1e-6, "normal {:?}", v.normal);
        }
    }

    #[test]
    fn single_row_has_no_triangles() {
        let mesh = TerrainMesh::generate(5, 1).unwrap();
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.triangle_count(), 0);
        // Untouched vertices keep the zero normal rather than NaN.
        assert!(mesh.vertices().iter().all(|v| v.normal == Vec3::ZERO));
    }

    #[test]
    fn vertex_record_matches_upload_layout() {
        assert_eq!(std::mem::size_of::<TerrainVertex>(), VERTEX_STRIDE);
        assert_eq!(VERTEX_STRIDE, 24);
        assert_eq!(std::mem::offset_of!(TerrainVertex, position), POSITION_OFFSET);
        assert_eq!(std::mem::offset_of!(TerrainVertex, normal), NORMAL_OFFSET);
    }

    #[test]
    fn cell_indices_follow_documented_order() {
        let mesh = TerrainMesh::generate(3, 2).unwrap();
        assert_eq!(mesh.indices(), &[0, 3, 1, 1, 3, 4, 1, 4, 2, 2, 4, 5]);
    }
}
