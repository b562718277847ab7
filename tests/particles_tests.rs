// Host-side tests for the confetti particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod burst {
        include!("../src/core/burst.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::burst::*;
use crate::core::constants::*;
use crate::core::particles::*;
use glam::Vec2;

fn make_field() -> ParticleField {
    let mut field = ParticleField::new(5);
    field.set_viewport(800.0, 600.0);
    field
}

#[test]
fn spawn_matches_particle_count_and_origin() {
    let mut field = make_field();
    let bursts = side_bursts();
    field.spawn(&bursts[0]);
    assert_eq!(field.len(), BURST_PARTICLE_COUNT as usize);
    for p in field.iter() {
        assert_eq!(p.pos, Vec2::new(0.0, 300.0));
        assert!(BURST_COLORS.contains(&p.color));
        assert_eq!(p.opacity(), 1.0);
    }
    field.fire(&bursts[1]);
    assert_eq!(field.len(), 2 * BURST_PARTICLE_COUNT as usize);
    assert_eq!(field.iter().filter(|p| p.pos.x == 800.0).count(), 5);
}

#[test]
fn edge_bursts_shoot_inward_and_up() {
    let bursts = side_bursts();

    let mut left = make_field();
    left.spawn(&bursts[0]);
    left.step();
    for p in left.iter() {
        assert!(p.pos.x > 0.0, "left particle moved to {:?}", p.pos);
        assert!(p.pos.y < 300.0, "left particle fell to {:?}", p.pos);
    }

    let mut right = make_field();
    right.spawn(&bursts[1]);
    right.step();
    for p in right.iter() {
        assert!(p.pos.x < 800.0, "right particle moved to {:?}", p.pos);
        assert!(p.pos.y < 300.0, "right particle fell to {:?}", p.pos);
    }
}

#[test]
fn velocity_decays_and_opacity_fades() {
    let mut field = make_field();
    field.spawn(&side_bursts()[0]);
    let v0: Vec<f32> = field.iter().map(|p| p.velocity()).collect();
    for _ in 0..10 {
        field.step();
    }
    for (p, v) in field.iter().zip(v0) {
        assert!(p.velocity() < v);
        assert!((p.progress() - 10.0 / CONFETTI_TICKS as f32).abs() < 1e-5);
        assert!(p.opacity() < 1.0 && p.opacity() > 0.0);
    }
}

#[test]
fn particles_expire_after_their_lifetime() {
    let mut field = make_field();
    field.spawn(&side_bursts()[1]);
    for _ in 0..CONFETTI_TICKS - 1 {
        field.step();
    }
    assert_eq!(field.len(), BURST_PARTICLE_COUNT as usize);
    field.step();
    assert!(field.is_empty());
}

#[test]
fn corners_are_finite() {
    let mut field = make_field();
    field.spawn(&side_bursts()[0]);
    for _ in 0..50 {
        field.step();
        for p in field.iter() {
            for c in p.corners() {
                assert!(c.is_finite());
            }
        }
    }
}

#[test]
fn viewport_never_collapses_to_zero() {
    let mut field = ParticleField::new(1);
    field.set_viewport(0.0, -5.0);
    assert_eq!(field.viewport(), Vec2::ONE);
}
