use glam::{Mat4, Vec3};
use rebound_render::RenderView;

/// Free camera with position, yaw, pitch, and projection parameters.
/// Starts at the demo pose and can be flown around by the host; camera
/// motion never feeds back into the simulation.
pub struct FreeCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::from_view(&RenderView::default())
    }
}

impl FreeCamera {
    /// Place the camera at a view's eye, aimed at its target.
    pub fn from_view(view: &RenderView) -> Self {
        let mut camera = Self {
            position: view.eye,
            yaw: 0.0,
            pitch: 0.0,
            fov: view.fov_degrees.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            speed: 10.0,
            sensitivity: 0.003,
        };
        camera.look_at(view.target);
        camera
    }

    /// Aim the camera at a world-space point.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or(Vec3::Z);
        self.yaw = dir.z.atan2(dir.x);
        self.pitch = dir.y.asin();
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn move_forward(&mut self, dt: f32) {
        let fwd = self.forward();
        self.position += fwd * self.speed * dt;
    }

    pub fn move_backward(&mut self, dt: f32) {
        let fwd = self.forward();
        self.position -= fwd * self.speed * dt;
    }

    pub fn move_left(&mut self, dt: f32) {
        let right = self.right();
        self.position -= right * self.speed * dt;
    }

    pub fn move_right(&mut self, dt: f32) {
        let right = self.right();
        self.position += right * self.speed * dt;
    }

    pub fn move_up(&mut self, dt: f32) {
        self.position.y += self.speed * dt;
    }

    pub fn move_down(&mut self, dt: f32) {
        self.position.y -= self.speed * dt;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_matches_demo_pose() {
        let cam = FreeCamera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 5.0, -10.0));
        // Aimed at the origin: forward is the normalized eye-to-origin direction.
        let expected = (Vec3::ZERO - cam.position).normalize();
        assert!(cam.forward().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn projection_has_no_nan() {
        let cam = FreeCamera::default();
        let vp = cam.view_projection();
        for col in 0..4 {
            assert!(!vp.col(col).x.is_nan());
            assert!(!vp.col(col).y.is_nan());
        }
    }

    #[test]
    fn camera_movement() {
        let mut cam = FreeCamera::default();
        let start = cam.position;
        cam.move_forward(1.0);
        assert_ne!(cam.position, start);
    }

    #[test]
    fn look_at_handles_degenerate_target() {
        let mut cam = FreeCamera::default();
        let pos = cam.position;
        cam.look_at(pos);
        assert!(!cam.yaw.is_nan());
        assert!(!cam.pitch.is_nan());
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut cam = FreeCamera::default();
        for _ in 0..10_000 {
            cam.rotate(0.0, -100.0);
        }
        assert!(cam.pitch <= 89.0_f32.to_radians());
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }
}
