//! Particle simulation for the fireworks celebration.
//!
//! Pure state machine driven by one `advance()` call per animation frame;
//! all randomness comes through the injected `Rng` so tests can replay a
//! burst deterministically. Drawing is left to the wasm glue in the parent
//! module.

use rand::Rng;

/// Particles created per burst, spread evenly around a full circle.
pub const BURST_COUNT: usize = 80;
/// Bursts fired immediately on trigger so the celebration starts dense.
pub const INITIAL_BURSTS: usize = 4;
/// Per-step chance of spawning one new burst.
pub const SPAWN_CHANCE: f64 = 0.08;
/// Constant downward acceleration applied to vertical velocity each step.
pub const GRAVITY: f64 = 0.05;

/// A single animated spark, owned exclusively by the engine.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Elapsed simulation steps.
    pub age: u32,
    /// Maximum lifetime in steps.
    pub life: f64,
    pub radius: f64,
}

impl Particle {
    /// Remaining opacity, decaying linearly from 1 at birth to 0 at `life`.
    pub fn opacity(&self) -> f64 {
        1.0 - self.age as f64 / self.life
    }

    /// Hue is a deterministic function of horizontal position, giving a
    /// rainbow-by-position gradient across the viewport.
    pub fn hue(&self, width: f64) -> f64 {
        360.0 * self.x / width.max(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dormant,
    Active,
}

/// The celebration simulation: dormant until triggered, then stepped once
/// per frame until explicitly stopped. There is no natural termination.
pub struct CelebrationSim<R: Rng> {
    rng: R,
    width: f64,
    height: f64,
    phase: Phase,
    particles: Vec<Particle>,
}

impl<R: Rng> CelebrationSim<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            width: 0.0,
            height: 0.0,
            phase: Phase::Dormant,
            particles: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Tracks the rendering surface dimensions (viewport resize).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Activates the simulation and fires the initial volley of bursts.
    pub fn trigger(&mut self, width: f64, height: f64) {
        self.resize(width, height);
        self.particles.clear();
        self.phase = Phase::Active;
        for _ in 0..INITIAL_BURSTS {
            self.burst();
        }
    }

    /// Deactivates and discards every particle. No-op while already dormant.
    pub fn stop(&mut self) {
        self.phase = Phase::Dormant;
        self.particles.clear();
    }

    /// One simulation step: maybe spawn a burst, integrate motion, prune
    /// expired particles. An empty collection is a valid steady state.
    pub fn advance(&mut self) {
        if self.phase == Phase::Dormant {
            return;
        }
        if self.rng.random_bool(SPAWN_CHANCE) {
            self.burst();
        }
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.age += 1;
        }
        self.particles.retain(|p| p.opacity() > 0.0);
    }

    /// One radial burst at a randomized origin within the central region of
    /// the viewport (15-85 % of width, 15-55 % of height).
    fn burst(&mut self) {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        let x = self.rng.random_range(0.15 * w..0.85 * w);
        let y = self.rng.random_range(0.15 * h..0.55 * h);
        for i in 0..BURST_COUNT {
            let angle = std::f64::consts::TAU * (i as f64 / BURST_COUNT as f64);
            let speed = self.rng.random_range(2.0..6.0);
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                age: 0,
                life: self.rng.random_range(40.0..70.0),
                radius: self.rng.random_range(1.5..3.5),
            });
        }
    }
}
