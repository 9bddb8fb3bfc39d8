/// Fly camera with yaw/pitch orientation
/// Produces the view and projection matrices for the terrain pass
use crate::math::{Mat4, Vec3};

/// Pitch is clamped just short of straight up/down so `look_at` never sees
/// a forward vector parallel to the world up axis.
pub const MAX_PITCH_DEGREES: f32 = 89.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,   // Degrees around Y, -90 looks down -Z
    pub pitch: f32, // Degrees above the horizon
    pub fov: f32,   // Vertical, radians
    pub near: f32,
    pub far: f32,
    pub aspect_ratio: f32,

    pub move_speed: f32,
    pub mouse_sensitivity: f32,

    front: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            position,
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            fov: 45f32.to_radians(),
            near: 0.1,
            far: 100.0,
            aspect_ratio,
            move_speed: 5.0,
            mouse_sensitivity: 0.1,
            front: Vec3::new(0.0, 0.0, -1.0),
        };
        camera.update_vectors();
        camera
    }

    /// Unit view direction
    #[inline]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit strafe direction
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.world_up).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.world_up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect_ratio, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Apply a mouse delta in pixels. Positive `dy` looks up.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch = (self.pitch + dy * self.mouse_sensitivity)
            .clamp(-MAX_PITCH_DEGREES, MAX_PITCH_DEGREES);
        self.update_vectors();
    }

    /// Move along the view direction and strafe axis.
    /// `forward` and `right` are in [-1, 1]; distance is `move_speed * dt`.
    pub fn move_local(&mut self, forward: f32, right: f32, dt: f32) {
        let velocity = self.move_speed * dt;
        self.position += self.front * (forward * velocity) + self.right() * (right * velocity);
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
    }
}

/// Held movement keys, turned into a camera move each frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct CameraController {
    pub forward_pressed: bool,
    pub backward_pressed: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update camera based on controller state
    pub fn update_camera(&self, camera: &mut Camera, dt: f32) {
        let axis = |pos: bool, neg: bool| pos as i32 as f32 - neg as i32 as f32;
        let forward = axis(self.forward_pressed, self.backward_pressed);
        let right = axis(self.right_pressed, self.left_pressed);

        if forward != 0.0 || right != 0.0 {
            camera.move_local(forward, right, dt);
        }
    }
}
