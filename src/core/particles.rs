use super::burst::{Burst, ConfettiSink};
use super::constants::{
    CONFETTI_DECAY, CONFETTI_DRIFT, CONFETTI_GRAVITY, CONFETTI_SCALAR, CONFETTI_START_VELOCITY,
    CONFETTI_TICKS, CONFETTI_TILT_STEP, CONFETTI_WOBBLE_RADIUS,
};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::PI;

/// One piece of confetti, in viewport pixels with +y pointing down.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    heading: f32,
    velocity: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt_angle: f32,
    jitter: f32,
    tick: u32,
    total_ticks: u32,
    pub color: &'static str,
}

impl Particle {
    fn spawn(burst: &Burst, origin_px: Vec2, rng: &mut StdRng) -> Self {
        let angle = burst.angle_deg.to_radians();
        let spread = burst.spread_deg.to_radians();
        let color = if burst.colors.is_empty() {
            "#ffffff"
        } else {
            burst.colors[rng.gen_range(0..burst.colors.len())]
        };
        Self {
            pos: origin_px,
            heading: -angle + (0.5 * spread - rng.gen::<f32>() * spread),
            velocity: CONFETTI_START_VELOCITY * 0.5 + rng.gen::<f32>() * CONFETTI_START_VELOCITY,
            wobble: rng.gen::<f32>() * 10.0,
            wobble_speed: (rng.gen::<f32>() * 0.1 + 0.05).min(0.11),
            tilt_angle: (rng.gen::<f32>() * 0.5 + 0.25) * PI,
            jitter: 0.0,
            tick: 0,
            total_ticks: CONFETTI_TICKS,
            color,
        }
    }

    fn update(&mut self, rng: &mut StdRng) {
        self.pos.x += self.heading.cos() * self.velocity + CONFETTI_DRIFT;
        self.pos.y += self.heading.sin() * self.velocity + CONFETTI_GRAVITY * 3.0;
        self.velocity *= CONFETTI_DECAY;
        self.wobble += self.wobble_speed;
        self.tilt_angle += CONFETTI_TILT_STEP;
        self.jitter = rng.gen::<f32>() + 2.0;
        self.tick += 1;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.tick < self.total_ticks
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.tick as f32 / self.total_ticks as f32
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        (1.0 - self.progress()).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Quad corners for drawing. The wobble point orbits the position, the
    /// tilt skews the opposite corners.
    pub fn corners(&self) -> [Vec2; 4] {
        let wobble = self.pos
            + Vec2::new(self.wobble.cos(), self.wobble.sin())
                * (CONFETTI_WOBBLE_RADIUS * CONFETTI_SCALAR);
        let tilt = Vec2::new(self.tilt_angle.cos(), self.tilt_angle.sin()) * self.jitter;
        let a = self.pos + tilt;
        let b = wobble + tilt;
        [
            self.pos.floor(),
            Vec2::new(wobble.x, a.y).floor(),
            b.floor(),
            Vec2::new(a.x, wobble.y).floor(),
        ]
    }
}

/// Live confetti for the whole viewport.
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            viewport: Vec2::ONE,
            rng,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn spawn(&mut self, burst: &Burst) {
        let origin_px = burst.origin * self.viewport;
        for _ in 0..burst.particle_count {
            let p = Particle::spawn(burst, origin_px, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// Advance one frame and drop expired particles.
    pub fn step(&mut self) {
        let rng = &mut self.rng;
        for p in &mut self.particles {
            p.update(rng);
        }
        self.particles.retain(Particle::is_alive);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

impl ConfettiSink for ParticleField {
    fn fire(&mut self, burst: &Burst) {
        self.spawn(burst);
    }
}
