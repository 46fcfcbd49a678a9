// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/core/choreo.rs"]
mod choreo;

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_rates_are_positive_and_gentle() {
    assert!(HERO_SPIN_RATE > 0.0);
    assert!(DOTS_SPIN_RATE > 0.0);
    // particles drift slower than the hero
    assert!(DOTS_SPIN_RATE < HERO_SPIN_RATE);
    // tilt amplitudes stay well under a radian
    assert!(HERO_TILT_AMPL > 0.0 && HERO_TILT_AMPL < 1.0);
    assert!(DOTS_TILT_AMPL > 0.0 && DOTS_TILT_AMPL < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn light_rig_keeps_the_key_dominant() {
    assert!(KEY_INTENSITY > FILL_INTENSITY);
    assert!(FILL_INTENSITY > RIM_INTENSITY);
    assert!(RIM_INTENSITY > 0.0);
    assert!(FILL_WOBBLE_AMPL > 0.0);
    assert!(RIM_WOBBLE_AMPL > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_tuning_is_within_sane_ranges() {
    assert!(CURSOR_FOLLOW_FACTOR > 0.0 && CURSOR_FOLLOW_FACTOR < 1.0);
    assert!(CARD_MAGNET_STRENGTH > CTA_MAGNET_STRENGTH);
    assert!(MAGNET_Y_FACTOR > 0.0 && MAGNET_Y_FACTOR <= 1.0);
    assert!(MAX_PIXEL_RATIO == 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn preloader_timings_are_ordered() {
    assert!(PRELOADER_DURATION > 0.0);
    assert!(PRELOADER_FADE > 0.0);
    assert!(PRELOADER_FADE < PRELOADER_DURATION);
    assert!(TRIGGER_REFRESH_DELAY_MS > 0);
}

#[test]
fn shot_table_has_the_five_page_shots() {
    assert_eq!(choreo::SHOTS.len(), 5);
    assert!(choreo::SHOT_TWEEN_DURATION > 0.0);
    for (i, shot) in choreo::SHOTS.iter().enumerate() {
        // every shot keeps the camera behind and above the hero
        assert!(shot.cam.z > 5.0 && shot.cam.z < 10.0, "shot {}", i);
        assert!(shot.cam.y > 0.0, "shot {}", i);
        // look-at targets hover near the origin
        assert!(shot.look.length() < 1.0, "shot {}", i);
    }
}
