// Host-side tests for pure pointer math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/input.rs"]
mod input;

use input::*;

#[test]
fn cursor_follower_converges_on_the_pointer() {
    let mut c = CursorState::centered(1000.0, 800.0);
    assert_eq!(c.cx, 500.0);
    assert_eq!(c.cy, 400.0);
    c.mx = 700.0;
    c.my = 100.0;
    for _ in 0..200 {
        c.step(0.18);
    }
    assert!((c.cx - 700.0).abs() < 0.01);
    assert!((c.cy - 100.0).abs() < 0.01);
}

#[test]
fn cursor_follower_moves_a_fixed_fraction_per_frame() {
    let mut c = CursorState::centered(0.0, 0.0);
    c.mx = 100.0;
    c.step(0.18);
    assert!((c.cx - 18.0).abs() < 1e-4);
}

#[test]
fn magnetic_offset_is_zero_at_the_rect_center() {
    let (dx, dy) = magnetic_offset(0.5, 0.5, 12.0, 0.8);
    assert_eq!(dx, 0.0);
    assert_eq!(dy, 0.0);
}

#[test]
fn magnetic_offset_peaks_at_the_rect_edges() {
    let (dx, dy) = magnetic_offset(1.0, 1.0, 12.0, 0.8);
    assert!((dx - 6.0).abs() < 1e-4);
    assert!((dy - 4.8).abs() < 1e-4);
    let (dx, dy) = magnetic_offset(0.0, 0.0, 12.0, 0.8);
    assert!((dx + 6.0).abs() < 1e-4);
    assert!((dy + 4.8).abs() < 1e-4);
}

#[test]
fn rect_fraction_maps_client_coords_into_the_rect() {
    assert_eq!(rect_fraction(150.0, 100.0, 200.0), 0.25);
    assert_eq!(rect_fraction(100.0, 100.0, 200.0), 0.0);
    assert_eq!(rect_fraction(300.0, 100.0, 200.0), 1.0);
}

#[test]
fn degenerate_rects_report_the_center() {
    assert_eq!(rect_fraction(150.0, 100.0, 0.0), 0.5);
}
