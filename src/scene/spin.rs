//! Rotation state for the cube, globe and shape-ring demos.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

use crate::frame::Scene;

/// Radians added per frame to the globe and shape ring.
pub const SPIN_PER_FRAME: f32 = 0.005;

/// Cube rotating by elapsed time: one radian per second around Z, 0.7 around Y.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubeSpin {
    rotation: f32,
}

impl CubeSpin {
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn model_view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0))
            * Mat4::from_rotation_z(self.rotation)
            * Mat4::from_rotation_y(self.rotation * 0.7)
    }
}

impl Scene for CubeSpin {
    fn advance(&mut self, dt: f32) {
        self.rotation += dt;
    }
}

/// Sphere tumbling by a fixed step on every axis each frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobeSpin {
    rotation: Vec3,
}

impl GlobeSpin {
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// XYZ Euler order, matching a scene-graph object's default.
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }
}

impl Scene for GlobeSpin {
    fn advance(&mut self, _dt: f32) {
        self.rotation += Vec3::splat(SPIN_PER_FRAME);
    }
}

/// Radius of the circle the shapes sit on.
pub const RING_RADIUS: f32 = 400.0;

/// Container holding `count` shapes evenly spaced on a circle, turning about Y.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRing {
    count: usize,
    rotation_y: f32,
}

impl ShapeRing {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            rotation_y: 0.0,
        }
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Position of shape `index` inside the (unrotated) container.
    pub fn slot(&self, index: usize) -> Vec3 {
        let t = index as f32 / self.count.max(1) as f32 * TAU;
        Vec3::new(RING_RADIUS * t.sin(), 0.0, RING_RADIUS * t.cos())
    }

    /// World transform of shape `index`.
    pub fn model(&self, index: usize) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y) * Mat4::from_translation(self.slot(index))
    }
}

impl Scene for ShapeRing {
    fn advance(&mut self, _dt: f32) {
        self.rotation_y += SPIN_PER_FRAME;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_rotation_is_owned_per_instance() {
        let mut a = CubeSpin::default();
        let b = CubeSpin::default();
        a.advance(0.25);
        a.advance(0.25);
        assert_eq!(a.rotation(), 0.5);
        assert_eq!(b.rotation(), 0.0);
    }

    #[test]
    fn cube_sits_six_units_in_front() {
        let centre = CubeSpin::default().model_view().transform_point3(Vec3::ZERO);
        assert_eq!(centre, Vec3::new(0.0, 0.0, -6.0));
    }

    #[test]
    fn globe_turns_on_all_axes() {
        let mut globe = GlobeSpin::default();
        for _ in 0..10 {
            globe.advance(1.0);
        }
        assert!((globe.rotation() - Vec3::splat(0.05)).length() < 1e-6);
    }

    #[test]
    fn ring_slots_lie_on_the_circle() {
        let mut ring = ShapeRing::new(7);
        ring.advance(0.0);
        assert_eq!(ring.slot(0), Vec3::new(0.0, 0.0, RING_RADIUS));
        for i in 0..7 {
            let p = ring.model(i).transform_point3(Vec3::ZERO);
            assert!(((p.x * p.x + p.z * p.z).sqrt() - RING_RADIUS).abs() < 1e-2);
        }
    }
}
