//! Frame timing and the per-demo update loop, independent of any rendering
//! context so it can run under plain `cargo test`.

/// Converts `requestAnimationFrame` timestamps (milliseconds) into per-frame
/// deltas in seconds.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the seconds elapsed since the previous tick. The first tick
    /// returns 0 and a timestamp that goes backwards yields 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(match self.last_ms {
            Some(last) => last.max(now_ms),
            None => now_ms,
        });
        dt
    }
}

/// Animated state of one demo. `advance` is called once per rendered frame.
pub trait Scene {
    fn advance(&mut self, dt: f32);
}

/// Owns a demo's scene state and its clock. The browser calls [`FrameLoop::frame`]
/// from its animation callback; tests call it directly.
#[derive(Debug)]
pub struct FrameLoop<S> {
    clock: FrameClock,
    scene: S,
}

impl<S: Scene> FrameLoop<S> {
    pub fn new(scene: S) -> Self {
        Self {
            clock: FrameClock::new(),
            scene,
        }
    }

    /// Advances the scene by one frame and returns the delta used.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let dt = self.clock.tick(now_ms);
        self.scene.advance(dt);
        dt
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }
}
