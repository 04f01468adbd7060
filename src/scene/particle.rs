use glam::Vec3;
use rand::Rng;

/// Opacity lost per frame.
pub const FADE_PER_FRAME: f32 = 0.009;
/// Frames in one pulse of the scale (30 degrees per frame).
const PULSE_FRAMES: u32 = 12;

/// A single rising sprite. Particles are never destroyed: once fully faded
/// they respawn at the origin with a fresh velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    counter: u32,
    position: Vec3,
    velocity: Vec3,
    opacity: f32,
    scale: f32,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut particle = Self {
            counter: 0,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            opacity: 1.0,
            scale: 1.0,
        };
        particle.respawn(rng);
        particle
    }

    // Same spawn point every time, random drift.
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = Vec3::ZERO;
        self.scale = 1.0;
        self.velocity = Vec3::new(
            rng.gen_range(-0.015..0.015),
            rng.gen_range(0.05..0.1),
            rng.gen_range(-0.015..0.015),
        );
        self.opacity = 1.0;
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.counter = (self.counter + 1) % PULSE_FRAMES;
        self.position += self.velocity;
        self.opacity -= FADE_PER_FRAME;

        self.scale = 0.5 + (self.counter as f32 * 30.0).to_radians().sin();

        if self.opacity <= 0.0 {
            self.respawn(rng);
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Uniform sprite scale. Can go negative for part of the cycle, which
    /// mirrors the sprite.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_at_origin_with_velocity_in_range() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let p = Particle::new(&mut rng);
            assert_eq!(p.position(), Vec3::ZERO);
            assert_eq!(p.opacity(), 1.0);
            let v = p.velocity();
            assert!((-0.015..0.015).contains(&v.x), "{v:?}");
            assert!((0.05..0.1).contains(&v.y), "{v:?}");
            assert!((-0.015..0.015).contains(&v.z), "{v:?}");
        }
    }

    #[test]
    fn moves_by_velocity_and_fades() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut p = Particle::new(&mut rng);
        let v = p.velocity();
        p.update(&mut rng);
        assert!((p.position() - v).length() < 1e-7);
        assert!((p.opacity() - (1.0 - FADE_PER_FRAME)).abs() < 1e-6);
        // counter = 1 -> 0.5 + sin(30deg)
        assert!((p.scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn respawns_after_fading_out() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut p = Particle::new(&mut rng);
        let mut respawned = false;
        for _ in 0..200 {
            let before = p.opacity();
            p.update(&mut rng);
            if before <= FADE_PER_FRAME {
                assert_eq!(p.opacity(), 1.0);
                assert_eq!(p.position(), Vec3::ZERO);
                assert_eq!(p.scale(), 1.0);
                respawned = true;
            } else {
                assert!((p.opacity() - (before - FADE_PER_FRAME)).abs() < 1e-6);
            }
        }
        assert!(respawned);
    }

    #[test]
    fn scale_pulse_holds_over_long_runs() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut p = Particle::new(&mut rng);
        let mut frames: u64 = 0;
        for _ in 0..5_000_000 {
            p.update(&mut rng);
            frames += 1;
        }
        for _ in 0..24 {
            p.update(&mut rng);
            frames += 1;
            if p.opacity() == 1.0 {
                continue;
            }
            let expected = 0.5 + ((frames % 12) as f32 * 30.0).to_radians().sin();
            assert!((p.scale() - expected).abs() < 1e-6, "frame {frames}: {}", p.scale());
        }
    }
}
