/// Explicit viewer state
/// Everything the per-frame update touches lives here and is passed by
/// reference; nothing is process-global.
use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::error::TerrainError;
use crate::math::{Mat4, Vec3};
use crate::minimap::{ground_position, MinimapMapping, PathTrace, PathTracer, TraceUpdate};
use crate::terrain::TerrainMesh;

pub struct Scene {
    pub camera: Camera,
    mesh: TerrainMesh,
    model: Mat4,
    tracer: PathTracer,
}

impl Scene {
    /// Generate the terrain and place the camera. The terrain is centred on
    /// the world origin in x/z by the model matrix.
    pub fn new(config: &ViewerConfig) -> Result<Self, TerrainError> {
        let terrain = &config.terrain;
        let mesh =
            TerrainMesh::generate_with_profile(terrain.width, terrain.depth, &terrain.profile)?;

        let model = Mat4::translate(Vec3::new(
            -(terrain.width as f32) * 0.5,
            terrain.base_elevation,
            -(terrain.depth as f32) * 0.5,
        ));

        let mut camera = Camera::new(config.camera_start, config.aspect_ratio());
        camera.fov = config.fov_degrees.to_radians();
        camera.near = config.near;
        camera.far = config.far;
        camera.move_speed = config.move_speed;
        camera.mouse_sensitivity = config.mouse_sensitivity;

        let mapping =
            MinimapMapping::for_terrain(config.minimap_size, terrain.width, terrain.depth);
        let tracer = PathTracer::new(
            mapping,
            config.trace_threshold,
            ground_position(camera.position),
        );

        Ok(Self {
            camera,
            mesh,
            model,
            tracer,
        })
    }

    /// Per-frame bookkeeping after the camera has moved.
    pub fn update(&mut self) -> TraceUpdate {
        self.tracer.update(ground_position(self.camera.position))
    }

    #[inline]
    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        self.model
    }

    /// `projection * view * model` for the terrain pass.
    pub fn model_view_projection(&self) -> Mat4 {
        self.camera.view_projection_matrix() * self.model
    }

    #[inline]
    pub fn path_trace(&self) -> &PathTrace {
        self.tracer.trace()
    }

    #[inline]
    pub fn tracer(&self) -> &PathTracer {
        &self.tracer
    }

    /// Camera position in continuous minimap coordinates.
    pub fn camera_minimap_position(&self) -> glam::Vec2 {
        self.tracer
            .mapping()
            .ground_to_minimap(ground_position(self.camera.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_terrain_is_reported() {
        let mut config = ViewerConfig::default();
        config.terrain.width = 0;
        assert!(matches!(
            Scene::new(&config),
            Err(TerrainError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn walking_forward_records_a_trace() {
        let config = ViewerConfig::default();
        let mut scene = Scene::new(&config).unwrap();
        assert!(scene.path_trace().is_empty());

        // (10, 30) is outside the terrain square; walking -Z re-enters it.
        for _ in 0..40 {
            scene.camera.move_local(1.0, 0.0, 0.1);
            scene.update();
        }

        let trace = scene.path_trace();
        assert!(!trace.is_empty());
        let size = config.minimap_size as i32;
        assert!(trace
            .iter()
            .all(|p| p.x >= 0 && p.y >= 0 && p.x < size && p.y < size));
        assert!(trace.iter().all(|p| p.x == 140));
    }

    #[test]
    fn model_centres_the_terrain() {
        let scene = Scene::new(&ViewerConfig::default()).unwrap();
        let corner = scene.model_matrix().transform_point3(Vec3::new(50.0, 0.0, 50.0));
        assert_eq!(corner, Vec3::new(25.0, -5.0, 25.0));
    }
}
