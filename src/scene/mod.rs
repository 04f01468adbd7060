//! Host-side animation state for every demo. Nothing in here touches WebGL;
//! the browser renderers read this state each frame.

pub mod camera;
pub mod emitter;
pub mod particle;
pub mod pillar;
pub mod save_point;
pub mod spin;
pub mod swirl;

pub use camera::OrbitCamera;
pub use emitter::ParticleEmitter;
pub use particle::Particle;
pub use pillar::Pillar;
pub use save_point::{SavePoint, SavePointScene};
pub use spin::{CubeSpin, GlobeSpin, ShapeRing};
pub use swirl::Swirl;
