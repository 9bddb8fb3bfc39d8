/// Viewer and terrain configuration
use crate::math::Vec3;
use crate::terrain::HeightProfile;

/// Terrain grid parameters
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainConfig {
    /// Grid samples along x
    pub width: usize,
    /// Grid samples along z
    pub depth: usize,
    pub profile: HeightProfile,
    /// Vertical offset applied by the model matrix
    pub base_elevation: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 50,
            depth: 50,
            profile: HeightProfile::default(),
            base_elevation: -5.0,
        }
    }
}

/// Top-level viewer settings
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub terrain: TerrainConfig,

    // Camera
    pub camera_start: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// World units per second
    pub move_speed: f32,
    /// Degrees per pixel of mouse motion
    pub mouse_sensitivity: f32,

    // Minimap
    /// Side of the square minimap in pixels
    pub minimap_size: usize,
    /// Distance of the minimap from the bottom-right window corner
    pub minimap_margin: usize,
    /// Ground displacement (per axis) that triggers a new path segment
    pub trace_threshold: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            terrain: TerrainConfig::default(),
            camera_start: Vec3::new(10.0, 5.0, 30.0),
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            move_speed: 5.0,
            mouse_sensitivity: 0.1,
            minimap_size: 200,
            minimap_margin: 20,
            trace_threshold: 0.5,
        }
    }
}

impl ViewerConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}
