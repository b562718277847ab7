use super::constants::{
    SPRING_DAMPING, SPRING_MAX_FRAME_SEC, SPRING_REST_EPSILON, SPRING_STIFFNESS,
    SPRING_SUBSTEP_SEC,
};
use glam::Vec2;

/// Damped spring pulling a rendered position toward a target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spring2 {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Spring2 {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Integrate `dt_sec` of motion in fixed sub-steps (semi-implicit Euler).
    pub fn step(&mut self, target: Vec2, dt_sec: f32) {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        let mut remaining = dt_sec.min(SPRING_MAX_FRAME_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let accel = (target - self.pos) * SPRING_STIFFNESS - self.vel * SPRING_DAMPING;
            self.vel += accel * h;
            self.pos += self.vel * h;
            remaining -= h;
        }
        if self.is_at_rest(target) {
            self.pos = target;
            self.vel = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn is_at_rest(&self, target: Vec2) -> bool {
        self.pos.distance(target) < SPRING_REST_EPSILON && self.vel.length() < SPRING_REST_EPSILON
    }
}
