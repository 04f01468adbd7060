use glam::Vec2;

/// Pillar texture wraps ten times around the cylinder.
pub const PILLAR_TEXTURE_REPEAT: Vec2 = Vec2::new(10.0, 1.0);

/// Degrees the pillar texture turns per frame.
const DEG_PER_FRAME: f64 = 0.5;
/// Frames in one full turn of the pillar; the bob repeats within it.
const BOB_PERIOD: u64 = 720;

/// A column of light: an open cylinder whose texture scrolls around it and
/// bobs up and down.
///
/// The offset's `x` is the pillar's angle in radians, reported modulo 1: the
/// texture repeats, so only the fractional part moves the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Pillar {
    frames: u64,
    offset: Vec2,
    top_radius: f32,
    bottom_radius: f32,
    height: f32,
}

impl Pillar {
    pub fn new(top_radius: f32, bottom_radius: f32, height: f32) -> Self {
        Self {
            frames: 0,
            offset: Vec2::ZERO,
            top_radius,
            bottom_radius,
            height,
        }
    }

    pub fn update(&mut self) {
        self.frames += 1;
        let scroll = (self.frames as f64 * DEG_PER_FRAME).to_radians().rem_euclid(1.0);
        let bob = ((self.frames % BOB_PERIOD) as f64 * DEG_PER_FRAME).to_radians();
        self.offset = Vec2::new(scroll as f32, (0.1 + 0.2 * (bob * 3.0).sin()) as f32);
    }

    pub fn texture_offset(&self) -> Vec2 {
        self.offset
    }

    pub fn top_radius(&self) -> f32 {
        self.top_radius
    }

    pub fn bottom_radius(&self) -> f32 {
        self.bottom_radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The cylinder is centred on its own origin; lift it so it stands on the floor.
    pub fn base_lift(&self) -> f32 {
        self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_counter() {
        let mut pillar = Pillar::new(3.0, 3.0, 10.0);
        for _ in 0..120 {
            pillar.update();
        }
        // 120 * 0.5 = 60 degrees
        let angle = 60f32.to_radians();
        let offset = pillar.texture_offset();
        assert!((offset.x - angle.fract()).abs() < 1e-5);
        assert!((offset.y - (0.1 + 0.2 * (3.0 * angle).sin())).abs() < 1e-5);
        assert_eq!(pillar.base_lift(), 5.0);
    }

    #[test]
    fn keeps_scrolling_after_days_of_frames() {
        let mut pillar = Pillar::new(3.0, 3.0, 10.0);
        pillar.frames = 40_000_000;
        pillar.update();
        let before = pillar.texture_offset();
        for _ in 0..10 {
            pillar.update();
        }
        let after = pillar.texture_offset();
        assert!((0.0..1.0).contains(&after.x), "{after:?}");
        // ten frames is 5 degrees of scroll
        let moved = (after.x - before.x).rem_euclid(1.0);
        assert!((moved - 5f32.to_radians()).abs() < 1e-4, "{before:?} -> {after:?}");
        assert_ne!(before.y, after.y);
    }
}
