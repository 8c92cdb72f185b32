use super::*;

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
}

#[test]
fn clamp_unit_handles_nan_and_bounds() {
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(-1.0), 0.0);
    assert_eq!(clamp_unit(3.0), 1.0);
    assert_eq!(clamp_unit(0.5), 0.5);
}

#[test]
fn clamp_finite_rejects_nan_only() {
    assert_eq!(clamp_finite(f64::NAN, 0.0, 5.0), None);
    assert_eq!(clamp_finite(f64::INFINITY, 0.0, 5.0), Some(5.0));
    assert_eq!(clamp_finite(-2.0, 0.0, 5.0), Some(0.0));
}
