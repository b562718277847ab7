use super::constants::{
    NUDGE_DISTANCE_PX, OFFSET_LIMIT_X_PX, OFFSET_LIMIT_Y_PX, PROXIMITY_THRESHOLD_PX,
};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Saturate each axis independently at the safe-zone bounds.
#[inline]
pub fn clamp_to_bounds(offset: Vec2) -> Vec2 {
    Vec2::new(
        offset.x.clamp(-OFFSET_LIMIT_X_PX, OFFSET_LIMIT_X_PX),
        offset.y.clamp(-OFFSET_LIMIT_Y_PX, OFFSET_LIMIT_Y_PX),
    )
}

#[inline]
pub fn within_bounds(offset: Vec2) -> bool {
    offset.x.abs() <= OFFSET_LIMIT_X_PX && offset.y.abs() <= OFFSET_LIMIT_Y_PX
}

/// Offset after one jump of fixed length in direction `angle` (radians).
#[inline]
pub fn nudge(offset: Vec2, angle: f32) -> Vec2 {
    clamp_to_bounds(offset + Vec2::from_angle(angle) * NUDGE_DISTANCE_PX)
}

#[inline]
pub fn is_near(pointer: Vec2, target_center: Vec2) -> bool {
    pointer.distance(target_center) < PROXIMITY_THRESHOLD_PX
}

/// Offset of the avoidance target relative to its laid-out origin.
///
/// The offset accumulates across jumps and is never re-centred, so a run of
/// jumps in one direction pins the target against a corner of the bounds.
pub struct Evader {
    offset: Vec2,
    rng: StdRng,
    jumps: u32,
}

impl Evader {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            offset: Vec2::ZERO,
            rng,
            jumps: 0,
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn jumps(&self) -> u32 {
        self.jumps
    }

    pub fn relocate(&mut self) -> Vec2 {
        let angle = self.rng.gen_range(0.0..TAU);
        self.offset = nudge(self.offset, angle);
        self.jumps += 1;
        self.offset
    }

    /// Jump away when the pointer comes within range of `target_center`.
    /// Returns whether a jump happened.
    pub fn track_pointer(&mut self, pointer: Vec2, target_center: Vec2) -> bool {
        if is_near(pointer, target_center) {
            self.relocate();
            true
        } else {
            false
        }
    }
}
