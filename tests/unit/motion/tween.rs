use super::*;

fn hidden() -> VisualState {
    VisualState::REST.with_opacity(0.0).with_translate(0.0, 50.0)
}

#[test]
fn holds_initial_state_until_start() {
    let tw = Tween::new(hidden(), VisualState::REST, TimeMs(500), 1000, Ease::Linear);
    assert_eq!(tw.sample(TimeMs(0)), hidden());
    assert_eq!(tw.sample(TimeMs(499)), hidden());
    assert!(!tw.has_started(TimeMs(499)));
}

#[test]
fn interpolates_every_property() {
    let from = hidden().with_scale(0.5);
    let tw = Tween::new(from, VisualState::REST, TimeMs(0), 1000, Ease::Linear);
    let mid = tw.sample(TimeMs(500));
    assert!((mid.opacity - 0.5).abs() < 1e-9);
    assert!((mid.translate_y - 25.0).abs() < 1e-9);
    assert!((mid.scale - 0.75).abs() < 1e-9);
    assert_eq!(mid.translate_x, 0.0);
}

#[test]
fn eased_midpoint_is_symmetric() {
    let tw = Tween::new(0.0_f64, 10.0, TimeMs(0), 1000, Ease::InOutQuad);
    assert!((tw.sample(TimeMs(500)) - 5.0).abs() < 1e-9);
    assert!(tw.sample(TimeMs(250)) < 2.5);
}

#[test]
fn finishes_exactly_at_end() {
    let tw = Tween::new(0.0_f64, 1.0, TimeMs(100), 200, Ease::OutCubic);
    assert_eq!(tw.end(), TimeMs(300));
    assert!(!tw.is_finished(TimeMs(299)));
    assert!(tw.is_finished(TimeMs(300)));
    assert_eq!(tw.sample(TimeMs(10_000)), 1.0);
}

#[test]
fn zero_duration_jumps_to_target() {
    let tw = Tween::new(0.0_f64, 1.0, TimeMs(100), 0, Ease::Linear);
    assert_eq!(tw.sample(TimeMs(99)), 0.0);
    assert_eq!(tw.sample(TimeMs(100)), 1.0);
    assert!(tw.is_finished(TimeMs(100)));
}
