use crate::frame::Scene;

use super::camera::OrbitCamera;
use super::emitter::ParticleEmitter;
use super::pillar::Pillar;
use super::swirl::Swirl;

/// Tall narrow column.
pub const INNER_PILLAR: (f32, f32, f32) = (3.0, 3.0, 10.0);
/// Short column flaring out at the top.
pub const OUTER_PILLAR: (f32, f32, f32) = (8.0, 5.0, 2.5);

/// The glowing marker: two pillars, a floor swirl and rising particles.
#[derive(Debug, Clone)]
pub struct SavePoint {
    pillar: Pillar,
    pillar2: Pillar,
    swirl: Swirl,
    emitter: ParticleEmitter,
}

impl SavePoint {
    pub fn new(emitter: ParticleEmitter) -> Self {
        let (top, bottom, height) = INNER_PILLAR;
        let (top2, bottom2, height2) = OUTER_PILLAR;
        Self {
            pillar: Pillar::new(top, bottom, height),
            pillar2: Pillar::new(top2, bottom2, height2),
            swirl: Swirl::new(),
            emitter,
        }
    }

    pub fn update(&mut self) {
        self.pillar.update();
        self.pillar2.update();
        self.swirl.update();
        self.emitter.update();
    }

    pub fn pillars(&self) -> [&Pillar; 2] {
        [&self.pillar, &self.pillar2]
    }

    pub fn swirl(&self) -> &Swirl {
        &self.swirl
    }

    pub fn emitter(&self) -> &ParticleEmitter {
        &self.emitter
    }
}

/// Everything that moves in the save-point demo.
#[derive(Debug, Clone)]
pub struct SavePointScene {
    camera: OrbitCamera,
    save_point: SavePoint,
}

impl SavePointScene {
    /// `seed` pins the particle velocities; `None` draws from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let emitter = match seed {
            Some(seed) => ParticleEmitter::with_seed(seed),
            None => ParticleEmitter::new(),
        };
        Self {
            camera: OrbitCamera::new(),
            save_point: SavePoint::new(emitter),
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn save_point(&self) -> &SavePoint {
        &self.save_point
    }
}

impl Scene for SavePointScene {
    // frame-counted, so the delta is unused
    fn advance(&mut self, _dt: f32) {
        self.camera.update();
        self.save_point.update();
    }
}
