// Host-side tests for the page state machine and the celebration loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod evade {
        include!("../src/core/evade.rs");
    }
    pub mod burst {
        include!("../src/core/burst.rs");
    }
    pub mod card {
        include!("../src/core/card.rs");
    }
}

use crate::core::burst::*;
use crate::core::card::*;
use crate::core::constants::*;
use crate::core::evade::*;
use glam::Vec2;

#[derive(Default)]
struct Recorder {
    bursts: Vec<Burst>,
}

impl ConfettiSink for Recorder {
    fn fire(&mut self, burst: &Burst) {
        self.bursts.push(burst.clone());
    }
}

fn make_card() -> Card {
    Card::new(Evader::new(11))
}

#[test]
fn card_starts_with_the_question() {
    let card = make_card();
    assert_eq!(card.phase(), Phase::Question);
    assert!(!card.is_confirmed());
    assert_eq!(card.offset(), Vec2::ZERO);
}

#[test]
fn pointer_on_target_center_moves_it() {
    let mut card = make_card();
    let center = Vec2::new(400.0, 300.0);
    assert!(card.on_pointer_move(center, Some(center)));
    assert_ne!(card.offset(), Vec2::ZERO);
    assert!(within_bounds(card.offset()));
}

#[test]
fn unresolved_target_is_a_no_op() {
    let mut card = make_card();
    assert!(!card.on_pointer_move(Vec2::new(1.0, 1.0), None));
    assert_eq!(card.offset(), Vec2::ZERO);
}

#[test]
fn direct_relocate_ignores_distance() {
    let mut card = make_card();
    assert!(card.relocate());
    assert_eq!(card.evader().jumps(), 1);
}

#[test]
fn confirmation_disables_avoidance() {
    let mut card = make_card();
    card.relocate();
    let before = card.offset();
    assert!(card.confirm(0.0).is_some());
    assert_eq!(card.phase(), Phase::Celebration);

    let former_center = Vec2::new(250.0, 250.0);
    for dx in [-20.0, 0.0, 20.0] {
        let pointer = former_center + Vec2::new(dx, 0.0);
        assert!(!card.on_pointer_move(pointer, Some(former_center)));
    }
    assert!(!card.relocate());
    assert_eq!(card.offset(), before);
}

#[test]
fn confirm_is_idempotent() {
    let mut card = make_card();
    let first = card.confirm(100.0).expect("first confirm starts a burst");
    assert_eq!(first.end_ms(), 100.0 + BURST_DURATION_MS);
    assert!(card.confirm(200.0).is_none());
    assert!(card.confirm(300.0).is_none());
    assert_eq!(card.phase(), Phase::Celebration);
}

#[test]
fn celebration_bursts_every_frame_for_five_seconds() {
    let mut card = make_card();
    let start = 1000.0;
    let mut burst = card.confirm(start).expect("burst loop");
    let mut sink = Recorder::default();

    let frame_ms = 16.0;
    let mut now = start;
    let mut frames = 0;
    while burst.frame(now, &mut sink) {
        frames += 1;
        now += frame_ms;
        assert!(frames < 10_000, "burst loop never ended");
    }
    frames += 1;

    assert!(now >= start + BURST_DURATION_MS);
    assert!(now < start + BURST_DURATION_MS + frame_ms);
    let expected = (BURST_DURATION_MS / frame_ms).ceil() as u32 + 1;
    assert_eq!(frames, expected);
    assert_eq!(burst.frames(), frames);
    assert_eq!(sink.bursts.len(), 2 * frames as usize);
    assert!(burst.is_finished());

    // Once finished it stays quiet.
    assert!(!burst.frame(now + frame_ms, &mut sink));
    assert_eq!(sink.bursts.len(), 2 * frames as usize);
}
