// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn heart_ranges_are_ordered_and_positive() {
    assert!(HEART_LEFT_PCT_MIN >= 0.0 && HEART_LEFT_PCT_MAX <= 100.0);
    assert!(HEART_DELAY_SEC_MIN < HEART_DELAY_SEC_MAX);
    assert!(HEART_DURATION_SEC_MIN > 0.0 && HEART_DURATION_SEC_MIN < HEART_DURATION_SEC_MAX);
    assert!(HEART_SIZE_PX_MIN > 0.0 && HEART_SIZE_PX_MIN < HEART_SIZE_PX_MAX);
    assert!(HEART_OPACITY_MIN > 0.0 && HEART_OPACITY_MAX <= 1.0);
    assert!(HEART_WINDOW_SIZE > 0);
    assert!(HEART_SPAWN_INTERVAL_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hearts_finish_falling_before_eviction() {
    // A heart is evicted WINDOW_SIZE intervals after it spawns; it should be
    // off screen by then so it never vanishes mid-fall.
    let lifetime_ms = HEART_WINDOW_SIZE as f32 * HEART_SPAWN_INTERVAL_MS as f32;
    let longest_fall_ms = (HEART_DELAY_SEC_MAX + HEART_DURATION_SEC_MAX) * 1000.0;
    assert!(longest_fall_ms <= lifetime_ms);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_bouncy() {
    assert!(EVASIVE_MAX_OFFSET_PX > 0.0);
    assert!(EVASIVE_SPRING_STIFFNESS > 0.0 && EVASIVE_SPRING_MASS > 0.0);
    let ratio =
        EVASIVE_SPRING_DAMPING / (2.0 * (EVASIVE_SPRING_STIFFNESS * EVASIVE_SPRING_MASS).sqrt());
    assert!(ratio > 0.0 && ratio < 1.0, "damping ratio {ratio}");
    assert!(SPRING_MAX_SUBSTEP_SEC < SPRING_MAX_FRAME_SEC);
}

#[test]
fn palettes_are_css_hex_colors() {
    for color in HEART_PALETTE.iter().chain(BURST_PALETTE.iter()) {
        assert_eq!(color.len(), 7, "{color}");
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "{color}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_and_card_timings() {
    assert_eq!(BURST_DURATION_MS, 3000.0);
    assert!(BURST_PARTICLES_PER_FRAME > 0);
    assert!(CONFETTI_DECAY > 0.0 && CONFETTI_DECAY < 1.0);
    assert!(CONFETTI_TICKS > 0);
    assert!(CARD_TRANSITION_MS > 0.0);
    assert!(CARD_HIDDEN_SCALE > 0.0 && CARD_HIDDEN_SCALE < 1.0);
    assert!(CELEBRATION_HEART_PERIOD_SEC < PROMPT_HEART_PERIOD_SEC);
    assert_eq!(PROMPT_HEART_SCALE.first(), PROMPT_HEART_SCALE.last());
    assert_eq!(CELEBRATION_HEART_ROTATE_DEG.first(), CELEBRATION_HEART_ROTATE_DEG.last());
}
