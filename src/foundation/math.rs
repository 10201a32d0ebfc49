pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `value` within `start..end`, unclamped.
///
/// A zero-length or non-finite span has no meaningful position; it maps to 0.
pub fn progress_between(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if !value.is_finite() || !span.is_finite() || span.abs() <= f64::EPSILON {
        return 0.0;
    }
    (value - start) / span
}

/// Non-negative finite seconds, or `None`.
pub fn finite_secs(v: f64) -> Option<f64> {
    (v.is_finite() && v >= 0.0).then_some(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
