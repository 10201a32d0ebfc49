use super::*;

#[test]
fn lerp_extrapolates() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
}

#[test]
fn progress_between_is_unclamped() {
    assert_eq!(progress_between(50.0, 0.0, 100.0), 0.5);
    assert_eq!(progress_between(-50.0, 0.0, 100.0), -0.5);
    assert_eq!(progress_between(150.0, 0.0, 100.0), 1.5);
}

#[test]
fn zero_span_maps_to_zero() {
    assert_eq!(progress_between(10.0, 5.0, 5.0), 0.0);
    assert_eq!(progress_between(10.0, 0.0, f64::INFINITY), 0.0);
    assert_eq!(progress_between(f64::NAN, 0.0, 10.0), 0.0);
}

#[test]
fn finite_secs_filters() {
    assert_eq!(finite_secs(0.25), Some(0.25));
    assert_eq!(finite_secs(-0.1), None);
    assert_eq!(finite_secs(f64::NAN), None);
}
