//! Scalar helpers shared by property normalization and curve evaluation.

/// Clamp `x` into `[0, 1]`.  `NaN` maps to `0`.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Linear interpolation from `a` to `b` by `t` (not clamped).
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `x` within `[min, max]`, clamped to `[0, 1]`.
///
/// A degenerate range (`min == max`) returns `0`.  The span is computed in
/// `f64` so ranges as wide as `f32::MIN..f32::MAX` do not overflow.
pub fn inverse_lerp(min: f64, max: f64, x: f64) -> f32 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    clamp01(((x - min) / span) as f32)
}
