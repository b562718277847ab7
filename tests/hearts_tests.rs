// Host-side tests for the background heart generator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod hearts {
        include!("../src/core/hearts.rs");
    }
}

use crate::core::hearts::*;

#[test]
fn generates_exactly_twenty_five() {
    let hearts = generate_hearts();
    assert_eq!(hearts.len(), 25);
    for (i, h) in hearts.iter().enumerate() {
        assert_eq!(h.id, i);
    }
}

#[test]
fn horizontal_position_follows_index() {
    for (i, h) in generate_hearts().iter().enumerate() {
        assert_eq!(h.left_pct as usize, (i * 13) % 100, "heart {i}");
        assert!(h.left_pct < 100);
    }
}

#[test]
fn size_duration_and_delay_follow_index() {
    let hearts = generate_hearts();
    assert_eq!(hearts[0].size_px, 15);
    assert_eq!(hearts[19].size_px, 34);
    assert_eq!(hearts[20].size_px, 15);
    assert_eq!(hearts[6].duration_sec, 11.0);
    assert_eq!(hearts[7].duration_sec, 5.0);
    assert!((hearts[10].delay_sec - 3.0).abs() < 1e-5);
    assert!((hearts[24].delay_sec - 7.2).abs() < 1e-4);
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(generate_hearts(), generate_hearts());
}

#[test]
fn css_style_carries_position_and_timing() {
    let css = Heart::from_index(3).css_style();
    assert!(css.contains("left:39%"), "{css}");
    assert!(css.contains("width:18px"), "{css}");
    assert!(css.contains("animation:rise 8.0s linear 0.9s infinite"), "{css}");
}

#[test]
fn rise_opacity_fades_in_holds_and_fades_out() {
    assert_eq!(rise_opacity(0.0), 0.0);
    assert!((rise_opacity(1.0 / 3.0) - 0.4).abs() < 1e-5);
    assert!((rise_opacity(0.5) - 0.4).abs() < 1e-5);
    assert!((rise_opacity(2.0 / 3.0) - 0.4).abs() < 1e-5);
    assert!(rise_opacity(1.0).abs() < 1e-5);
    assert!(rise_opacity(0.1) < rise_opacity(0.2));
    assert!(rise_opacity(0.9) < rise_opacity(0.8));
    // Out-of-range input is clamped.
    assert_eq!(rise_opacity(-1.0), 0.0);
}
