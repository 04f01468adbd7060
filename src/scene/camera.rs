use glam::{Mat4, Vec3};

pub const ORBIT_RADIUS: f32 = 25.0;
pub const ORBIT_HEIGHT: f32 = 15.0;
/// Degrees added to the orbit angle every frame.
pub const ORBIT_STEP_DEG: f32 = 0.2;

const FOV_Y_DEG: f32 = 45.0;
const NEAR: f32 = 1.0;
const FAR: f32 = 1000.0;

/// Perspective camera that circles the origin at a fixed height.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    angle_deg: f32,
    radius: f32,
    position: Vec3,
    target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            angle_deg: 0.0,
            radius: ORBIT_RADIUS,
            position: Vec3::new(ORBIT_RADIUS, ORBIT_HEIGHT, 0.0),
            // aims slightly above the floor until the first update
            target: Vec3::new(0.0, 3.0, 0.0),
        }
    }

    pub fn update(&mut self) {
        // kept in [0, 360) so the step never drops below f32 resolution
        self.angle_deg = (self.angle_deg + ORBIT_STEP_DEG) % 360.0;

        let rad = self.angle_deg.to_radians();
        self.position.x = self.radius * rad.sin();
        self.position.z = self.radius * rad.cos();

        self.target = Vec3::ZERO;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(FOV_Y_DEG.to_radians(), aspect, NEAR, FAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_positive_x_axis() {
        let camera = OrbitCamera::new();
        assert_eq!(camera.position(), Vec3::new(25.0, 15.0, 0.0));
        assert_eq!(camera.target(), Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn quarter_orbit_after_450_frames() {
        let mut camera = OrbitCamera::new();
        for _ in 0..450 {
            camera.update();
        }
        let p = camera.position();
        assert!((camera.angle_deg() - 90.0).abs() < 1e-2);
        assert!((p.x - 25.0).abs() < 1e-2, "{p:?}");
        assert!(p.z.abs() < 1e-2, "{p:?}");
        assert_eq!(p.y, ORBIT_HEIGHT);
        assert_eq!(camera.target(), Vec3::ZERO);
    }

    #[test]
    fn angle_wraps_after_a_full_turn() {
        let mut camera = OrbitCamera::new();
        for _ in 0..1_801 {
            camera.update();
        }
        assert!(camera.angle_deg() < 1.0, "{}", camera.angle_deg());
        assert!((camera.position().z - 25.0).abs() < 1e-2);
    }

    #[test]
    fn view_matrix_maps_target_onto_view_axis() {
        let mut camera = OrbitCamera::new();
        camera.update();
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.x.abs() < 1e-4 && origin.y.abs() < 1e-4, "{origin:?}");
        assert!(origin.z < 0.0);
    }
}
