pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp to `[0, 1]`; NaN maps to 0.
pub(crate) fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Clamp `v` into `[min, max]`, returning `None` for NaN so callers can ignore it.
pub(crate) fn clamp_finite(v: f64, min: f64, max: f64) -> Option<f64> {
    if v.is_nan() {
        return None;
    }
    Some(v.clamp(min, max))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
