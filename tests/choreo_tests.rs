// Host-side tests for the choreography core.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/choreo.rs"]
mod choreo;

use choreo::*;
use glam::Vec3;

fn settled(choreo: &Choreographer, state: &mut RenderState, now: f64) {
    choreo.apply(state, now);
}

#[test]
fn every_shot_transition_lands_exactly_on_its_table_entry() {
    for i in 0..SHOTS.len() {
        let mut c = Choreographer::new(false);
        let mut state = RenderState::default();
        c.go_to_shot(i, &state, 0.0);
        // well past the 1.2 s duration
        settled(&c, &mut state, 5.0);
        assert_eq!(state.cam, SHOTS[i].cam, "cam mismatch for shot {}", i);
        assert_eq!(state.look, SHOTS[i].look, "look mismatch for shot {}", i);
        assert_eq!(state.key, SHOTS[i].key, "key mismatch for shot {}", i);
    }
}

#[test]
fn out_of_range_index_falls_back_to_shot_zero() {
    let mut c = Choreographer::new(false);
    let mut state = RenderState::at_shot(&SHOTS[3]);
    c.go_to_shot(7, &state, 0.0);
    assert_eq!(c.active_shot(), 0);
    settled(&c, &mut state, 5.0);
    assert_eq!(state.cam, SHOTS[0].cam);
    assert_eq!(state.look, SHOTS[0].look);
    assert_eq!(state.key, SHOTS[0].key);
}

#[test]
fn scroll_rotation_is_linear_from_zero_to_two_and_a_half_pi() {
    assert_eq!(scroll_rotation(0.0), 0.0);
    assert_eq!(scroll_rotation(1.0), std::f32::consts::PI * 2.5);
    assert_eq!(scroll_rotation(0.5), SCROLL_ROTATION_SPAN * 0.5);
    assert!((scroll_rotation(0.5) - std::f32::consts::PI * 1.25).abs() < 1e-5);
    // linearity between arbitrary points
    let a = scroll_rotation(0.2);
    let b = scroll_rotation(0.4);
    assert!((b - 2.0 * a).abs() < 1e-5);
    // values outside the page clamp
    assert_eq!(scroll_rotation(1.7), SCROLL_ROTATION_SPAN);
    assert_eq!(scroll_rotation(-0.3), 0.0);
}

#[test]
fn transition_is_mid_flight_before_its_duration_elapses() {
    let mut c = Choreographer::new(false);
    let mut state = RenderState::default();
    c.go_to_shot(1, &state, 0.0);
    assert!(c.in_transition(0.5));
    settled(&c, &mut state, 0.5);
    // strictly between the endpoints on the axis that moves
    assert!(state.cam.x > SHOTS[0].cam.x && state.cam.x < SHOTS[1].cam.x);
    assert!(!c.in_transition(2.0));
}

#[test]
fn retarget_mid_flight_converges_to_the_newer_shot() {
    let mut c = Choreographer::new(false);
    let mut state = RenderState::default();
    c.go_to_shot(1, &state, 0.0);
    settled(&c, &mut state, 0.5);
    let mid = state.cam;

    c.go_to_shot(2, &state, 0.5);
    // the new tween starts from the mid-flight value, not shot 0 or shot 1
    settled(&c, &mut state, 0.5);
    assert_eq!(state.cam, mid);

    settled(&c, &mut state, 5.0);
    assert_eq!(state.cam, SHOTS[2].cam);
    assert_eq!(state.look, SHOTS[2].look);
    assert_eq!(state.key, SHOTS[2].key);
}

#[test]
fn reduced_motion_snaps_with_no_intermediate_values() {
    let mut c = Choreographer::new(true);
    let mut state = RenderState::default();
    c.go_to_shot(3, &state, 10.0);
    // sampled at the very same instant the transition started
    settled(&c, &mut state, 10.0);
    assert_eq!(state.cam, SHOTS[3].cam);
    assert_eq!(state.look, SHOTS[3].look);
    assert_eq!(state.key, SHOTS[3].key);
    assert!(!c.in_transition(10.0));
}

#[test]
fn reduced_motion_disables_the_scroll_rotation_coupling() {
    let c = Choreographer::new(true);
    let mut state = RenderState::default();
    c.set_scroll_progress(&mut state, 0.8);
    assert_eq!(state.rot, 0.0);

    let c = Choreographer::new(false);
    c.set_scroll_progress(&mut state, 0.8);
    assert!(state.rot > 0.0);
}

#[test]
fn hero_to_work_transition_matches_the_published_values() {
    let mut c = Choreographer::new(false);
    let mut state = RenderState::default();
    assert_eq!(state.cam, Vec3::new(0.0, 0.75, 9.0));
    c.go_to_shot(1, &state, 0.0);
    settled(&c, &mut state, 2.0);
    assert_eq!(state.cam, Vec3::new(1.35, 0.45, 6.6));
    assert_eq!(state.look, Vec3::new(0.0, 0.1, 0.0));
}

#[test]
fn tween_retarget_replaces_rather_than_stacks() {
    let a = Vec3::ZERO;
    let b = Vec3::new(10.0, 0.0, 0.0);
    let c_target = Vec3::new(0.0, 10.0, 0.0);

    let mut tween = VecTween::settled(a);
    tween.retarget(a, b, 0.0, 1.0, Ease::Linear);
    let mid = tween.sample(0.5);
    assert_eq!(mid, Vec3::new(5.0, 0.0, 0.0));

    tween.retarget(mid, c_target, 0.5, 1.0, Ease::Linear);
    assert_eq!(tween.sample(0.5), mid);
    assert_eq!(tween.target(), c_target);
    assert_eq!(tween.sample(2.0), c_target);
}

#[test]
fn easing_curves_have_the_expected_shape() {
    assert_eq!(Ease::Linear.sample(0.3), 0.3);
    assert_eq!(Ease::QuadOut.sample(0.0), 0.0);
    assert_eq!(Ease::QuadOut.sample(1.0), 1.0);
    assert!((Ease::QuadOut.sample(0.5) - 0.75).abs() < 1e-6);
    assert!((Ease::CubicOut.sample(0.5) - 0.875).abs() < 1e-6);
    // decelerating: first half covers more ground than the second
    assert!(Ease::CubicOut.sample(0.5) > 0.5);
    // out-of-range inputs clamp
    assert_eq!(Ease::CubicOut.sample(1.5), 1.0);
    assert_eq!(Ease::CubicOut.sample(-0.5), 0.0);
}

#[test]
fn zero_duration_tween_samples_its_target_immediately() {
    let mut tween = VecTween::settled(Vec3::ZERO);
    tween.retarget(Vec3::ZERO, Vec3::ONE, 3.0, 0.0, Ease::Linear);
    assert_eq!(tween.sample(3.0), Vec3::ONE);
    assert!(tween.settled_at(3.0));
}
