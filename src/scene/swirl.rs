use glam::Vec2;

/// Vertical texture offset of the swirl; only the horizontal offset animates.
pub const SWIRL_OFFSET_Y: f32 = -0.25;

/// Flat torus on the floor whose texture spins slowly. The horizontal offset
/// is `-0.2` times the angle in radians, reported modulo 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Swirl {
    frames: u64,
    offset: Vec2,
}

impl Default for Swirl {
    fn default() -> Self {
        Self::new()
    }
}

impl Swirl {
    pub fn new() -> Self {
        Self {
            frames: 0,
            offset: Vec2::new(0.0, SWIRL_OFFSET_Y),
        }
    }

    pub fn update(&mut self) {
        self.frames += 1;
        let angle = (self.frames as f64).to_radians();
        self.offset.x = (-angle * 0.2).rem_euclid(1.0) as f32;
    }

    pub fn texture_offset(&self) -> Vec2 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spins_backwards_at_fixed_height() {
        let mut swirl = Swirl::new();
        assert_eq!(swirl.texture_offset(), Vec2::new(0.0, SWIRL_OFFSET_Y));
        for _ in 0..180 {
            swirl.update();
        }
        let offset = swirl.texture_offset();
        let expected = (-std::f32::consts::PI * 0.2).rem_euclid(1.0);
        assert!((offset.x - expected).abs() < 1e-5, "{offset:?}");
        assert_eq!(offset.y, SWIRL_OFFSET_Y);
    }

    #[test]
    fn keeps_spinning_after_days_of_frames() {
        let mut swirl = Swirl::new();
        swirl.frames = 40_000_000;
        swirl.update();
        let before = swirl.texture_offset().x;
        swirl.update();
        let after = swirl.texture_offset().x;
        // one degree backwards per frame, scaled by 0.2
        let moved = (before - after).rem_euclid(1.0);
        assert!((moved - 0.2 * 1f32.to_radians()).abs() < 1e-5, "{before} -> {after}");
    }
}
