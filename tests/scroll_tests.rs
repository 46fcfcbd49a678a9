// Host-side tests for the scroll trigger publisher.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/scroll.rs"]
mod scroll;

use scroll::*;

const VIEWPORT: f32 = 1000.0;

fn triggers(panels: &[PanelRect]) -> ScrollTriggers {
    let mut t = ScrollTriggers::new();
    t.refresh(panels, VIEWPORT, 4000.0, 0.0);
    t
}

fn panel(shot: usize, top: f32, height: f32) -> PanelRect {
    PanelRect { shot, top, height }
}

// For a panel at top=1000, height=600 and a 1000 px viewport, the zone is
// [1000 - 600, 1600 - 400] = [400, 1200].

#[test]
fn crossing_the_entry_boundary_fires_the_bound_shot() {
    let mut t = triggers(&[panel(2, 1000.0, 600.0)]);
    assert_eq!(t.update(399.0), None);
    assert_eq!(t.update(400.0), Some(2));
}

#[test]
fn staying_inside_the_zone_does_not_refire() {
    let mut t = triggers(&[panel(2, 1000.0, 600.0)]);
    assert_eq!(t.update(500.0), Some(2));
    assert_eq!(t.update(700.0), None);
    assert_eq!(t.update(500.0), None);
}

#[test]
fn scrolling_back_into_the_zone_fires_again() {
    let mut t = triggers(&[panel(2, 1000.0, 600.0)]);
    assert_eq!(t.update(500.0), Some(2));
    // past the exit boundary
    assert_eq!(t.update(1300.0), None);
    // backward re-entry
    assert_eq!(t.update(1100.0), Some(2));
}

#[test]
fn leaving_a_zone_fires_nothing() {
    let mut t = triggers(&[panel(1, 1000.0, 600.0)]);
    assert_eq!(t.update(800.0), Some(1));
    assert_eq!(t.update(2000.0), None);
}

#[test]
fn fast_scroll_across_overlapping_zones_last_fired_wins() {
    // Both zones contain pos 900; the later panel in document order wins.
    let mut t = triggers(&[panel(1, 1000.0, 600.0), panel(2, 1200.0, 600.0)]);
    assert_eq!(t.update(900.0), Some(2));
}

#[test]
fn refresh_keeps_the_currently_active_zone_from_refiring() {
    let mut t = triggers(&[panel(3, 1000.0, 600.0)]);
    assert_eq!(t.update(800.0), Some(3));
    // a resize remeasures the same geometry while we sit inside the zone
    t.refresh(&[panel(3, 1000.0, 600.0)], VIEWPORT, 4000.0, 800.0);
    assert_eq!(t.update(800.0), None);
    assert_eq!(t.update(810.0), None);
}

#[test]
fn refresh_replaces_stale_geometry() {
    let mut t = triggers(&[panel(1, 1000.0, 600.0)]);
    assert_eq!(t.update(500.0), Some(1));
    // layout change pushes the panel far down the page
    t.refresh(&[panel(1, 3000.0, 600.0)], VIEWPORT, 5000.0, 500.0);
    assert_eq!(t.update(600.0), None);
    assert_eq!(t.update(2500.0), Some(1));
}

#[test]
fn progress_is_a_clamped_fraction_of_total_scroll() {
    let t = triggers(&[]);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(2000.0), 0.5);
    assert_eq!(t.progress(4000.0), 1.0);
    assert_eq!(t.progress(9000.0), 1.0);
    assert_eq!(t.progress(-50.0), 0.0);
}

#[test]
fn zero_total_scroll_reports_zero_progress() {
    let mut t = ScrollTriggers::new();
    t.refresh(&[], VIEWPORT, 0.0, 0.0);
    assert_eq!(t.progress(100.0), 0.0);
}

#[test]
fn chapters_pin_for_one_and_a_half_times_their_height() {
    assert_eq!(chapter_pin_distance(800.0), 1200.0);
    assert_eq!(CHAPTER_PIN_FACTOR, 1.5);
}

#[test]
fn boundary_fractions_match_the_observed_trigger_geometry() {
    assert_eq!(PANEL_ENTER_FRACTION, 0.60);
    assert_eq!(PANEL_EXIT_FRACTION, 0.40);
}
