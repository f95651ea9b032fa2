//! Keyframed response curves.
//!
//! A curve maps a normalized input in `[0, 1]` to a weight.  Keyframes are
//! kept sorted by time; between two keyframes the value is interpolated per
//! [`CurveMode`], and outside the first/last keyframe the curve is flat
//! (the boundary value is held).  Curves need not be monotonic and their
//! output need not stay in `[0, 1]`, though typical ones do.

use uai_core::lerp;

// ── Keyframe ──────────────────────────────────────────────────────────────────

/// One control point.  Tangents are slopes (`dvalue / dtime`) and are only
/// read by [`CurveMode::Hermite`].
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    pub time:  f32,
    pub value: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub in_tangent:  f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub out_tangent: f32,
}

impl Keyframe {
    /// A keyframe with flat tangents.
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value, in_tangent: 0.0, out_tangent: 0.0 }
    }

    pub fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self { time, value, in_tangent, out_tangent }
    }
}

// ── CurveMode ─────────────────────────────────────────────────────────────────

/// How values between keyframes are produced.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveMode {
    /// Straight line between neighbouring keyframes.
    #[default]
    Linear,
    /// Hold the value of the last keyframe at or before the input.
    Step,
    /// Cubic Hermite spline through the keyframes using their tangents.
    Hermite,
}

// ── ResponseCurve ─────────────────────────────────────────────────────────────

/// A clamped piecewise function over `[0, 1]`.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "CurveDef", into = "CurveDef"))]
pub struct ResponseCurve {
    keys: Vec<Keyframe>,
    mode: CurveMode,
}

/// Wire shape of a curve; goes through [`ResponseCurve::new`] so that
/// deserialized keyframes are sanitized and sorted.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CurveDef {
    keys: Vec<Keyframe>,
    #[serde(default)]
    mode: CurveMode,
}

#[cfg(feature = "serde")]
impl From<CurveDef> for ResponseCurve {
    fn from(def: CurveDef) -> Self {
        ResponseCurve::new(def.keys, def.mode)
    }
}

#[cfg(feature = "serde")]
impl From<ResponseCurve> for CurveDef {
    fn from(curve: ResponseCurve) -> Self {
        CurveDef { keys: curve.keys, mode: curve.mode }
    }
}

impl ResponseCurve {
    /// Build a curve from arbitrary keyframes.
    ///
    /// Keyframes with a `NaN` time or value are dropped; the rest are sorted
    /// by time.  When two keyframes share a time, the later one in `keys`
    /// wins on the right-hand side of that time.
    pub fn new(keys: Vec<Keyframe>, mode: CurveMode) -> Self {
        let mut keys: Vec<Keyframe> = keys
            .into_iter()
            .filter(|k| !k.time.is_nan() && !k.value.is_nan())
            .collect();
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys, mode }
    }

    /// Piecewise-linear curve through `(time, value)` points.
    pub fn from_points(points: &[(f32, f32)]) -> Self {
        let keys = points.iter().map(|&(t, v)| Keyframe::new(t, v)).collect();
        Self::new(keys, CurveMode::Linear)
    }

    /// `f(x) = x`, "prefer more".
    pub fn identity() -> Self {
        Self::from_points(&[(0.0, 0.0), (1.0, 1.0)])
    }

    /// `f(x) = 1 - x`, "prefer less".
    pub fn inverse() -> Self {
        Self::from_points(&[(0.0, 1.0), (1.0, 0.0)])
    }

    /// `f(x) = value` everywhere.
    pub fn constant(value: f32) -> Self {
        Self::from_points(&[(0.0, value)])
    }

    pub fn with_mode(mut self, mode: CurveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set every keyframe's tangents to the slope between its neighbours
    /// (one-sided at the ends).  Combined with [`CurveMode::Hermite`] this
    /// gives a smooth curve through the points.
    pub fn smooth_tangents(mut self) -> Self {
        let n = self.keys.len();
        if n < 2 {
            return self;
        }
        let slopes: Vec<f32> = (0..n)
            .map(|i| {
                let prev = self.keys[i.saturating_sub(1)];
                let next = self.keys[(i + 1).min(n - 1)];
                let dt = next.time - prev.time;
                if dt > 0.0 { (next.value - prev.value) / dt } else { 0.0 }
            })
            .collect();
        for (key, slope) in self.keys.iter_mut().zip(slopes) {
            key.in_tangent = slope;
            key.out_tangent = slope;
        }
        self
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    /// Evaluate at `x`.
    ///
    /// - no keyframes → `0`
    /// - one keyframe → its value
    /// - `x` before the first / after the last keyframe → that keyframe's value
    /// - `NaN` input is treated as the first keyframe's time
    pub fn evaluate(&self, x: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return 0.0,
        };
        if x.is_nan() || x <= first.time {
            return first.value;
        }
        if x >= last.time {
            return last.value;
        }

        // first.time < x < last.time, so 1 <= i < len.
        let i = self.keys.partition_point(|k| k.time <= x);
        let a = self.keys[i - 1];
        let b = self.keys[i];
        let dt = b.time - a.time;
        let t = (x - a.time) / dt;

        match self.mode {
            CurveMode::Step    => a.value,
            CurveMode::Linear  => lerp(a.value, b.value, t),
            CurveMode::Hermite => hermite(a, b, dt, t),
        }
    }
}

/// Cubic Hermite basis on the unit interval, tangents scaled by segment width.
fn hermite(a: Keyframe, b: Keyframe, dt: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * a.value + h10 * dt * a.out_tangent + h01 * b.value + h11 * dt * b.in_tangent
}
