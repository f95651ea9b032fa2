//! A single named, typed, bounded property.
//!
//! Storage differs per kind but the read/write contract is uniform, so the
//! kind is a tagged enum matched exhaustively rather than a trait object.

use std::fmt;

use uai_core::{clamp01, inverse_lerp};

// ── PropertyKind ──────────────────────────────────────────────────────────────

/// The storage type of a property.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PropertyKind {
    #[default]
    Bool,
    Int,
    Float,
}

impl PropertyKind {
    /// Lower-case label used in logs and `Display`.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Bool  => "bool",
            PropertyKind::Int   => "int",
            PropertyKind::Float => "float",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PropertyValue ─────────────────────────────────────────────────────────────

/// Kind-specific storage.  Bounds are kept ordered (`min <= max`) at all
/// times; misordered input is swapped on the way in.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PropertyValue {
    Bool(bool),
    Int { value: i32, min: i32, max: i32 },
    Float { value: f32, min: f32, max: f32 },
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Bool(_)      => PropertyKind::Bool,
            PropertyValue::Int { .. }   => PropertyKind::Int,
            PropertyValue::Float { .. } => PropertyKind::Float,
        }
    }
}

// ── Property ──────────────────────────────────────────────────────────────────

/// One facet of agent state, readable as a normalized value in `[0, 1]`.
///
/// Properties are owned by an agent's [`PropertyStore`][crate::PropertyStore];
/// considerations refer to them by [`PropertyId`][uai_core::PropertyId],
/// never by copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    name:  String,
    value: PropertyValue,
}

impl Property {
    /// A boolean property.
    pub fn new_bool(name: impl Into<String>, value: bool) -> Self {
        Self { name: name.into(), value: PropertyValue::Bool(value) }
    }

    /// An integer property bounded to `[min, max]` (swapped if misordered).
    /// `value` is clamped into the bounds.
    pub fn new_int(name: impl Into<String>, value: i32, min: i32, max: i32) -> Self {
        let (min, max) = ordered(min, max);
        Self {
            name:  name.into(),
            value: PropertyValue::Int { value: value.clamp(min, max), min, max },
        }
    }

    /// A float property bounded to `[min, max]` (swapped if misordered).
    /// `value` is clamped into the bounds; a `NaN` value starts at `min`.
    /// A `NaN` bound collapses onto the other bound (or `0.0` if both are).
    pub fn new_float(name: impl Into<String>, value: f32, min: f32, max: f32) -> Self {
        let (min, max) = match (min.is_nan(), max.is_nan()) {
            (true, true)   => (0.0, 0.0),
            (true, false)  => (max, max),
            (false, true)  => (min, min),
            (false, false) => ordered(min, max),
        };
        let value = if value.is_nan() { min } else { value.clamp(min, max) };
        Self {
            name:  name.into(),
            value: PropertyValue::Float { value, min, max },
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.value.kind()
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// The stored value as `f32` (`1.0`/`0.0` for booleans).
    pub fn raw_value(&self) -> f32 {
        match self.value {
            PropertyValue::Bool(b)              => if b { 1.0 } else { 0.0 },
            PropertyValue::Int { value, .. }    => value as f32,
            PropertyValue::Float { value, .. }  => value,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            PropertyValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self.value {
            PropertyValue::Int { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            PropertyValue::Float { value, .. } => Some(value),
            _ => None,
        }
    }

    /// `(min, max)` for numeric kinds; `None` for booleans.
    pub fn bounds(&self) -> Option<(f32, f32)> {
        match self.value {
            PropertyValue::Bool(_)                => None,
            PropertyValue::Int { min, max, .. }   => Some((min as f32, max as f32)),
            PropertyValue::Float { min, max, .. } => Some((min, max)),
        }
    }

    /// The value mapped into `[0, 1]`.  Pure; never fails.
    ///
    /// A degenerate range (`min == max`) returns `0.0`.
    pub fn normalized_value(&self) -> f32 {
        match self.value {
            PropertyValue::Bool(b) => if b { 1.0 } else { 0.0 },
            PropertyValue::Int { value, min, max } => {
                inverse_lerp(min as f64, max as f64, value as f64)
            }
            PropertyValue::Float { value, min, max } => {
                inverse_lerp(min as f64, max as f64, value as f64)
            }
        }
    }

    /// The raw value that would normalize to `t` (clamped to `[0, 1]`),
    /// without writing it.  Integer results round down.
    pub fn denormalize(&self, t: f32) -> f32 {
        let t = clamp01(t) as f64;
        match self.value {
            PropertyValue::Bool(_) => if t >= 0.5 { 1.0 } else { 0.0 },
            PropertyValue::Int { min, max, .. } => {
                let (min, max) = (min as f64, max as f64);
                (min + t * (max - min)).floor() as f32
            }
            PropertyValue::Float { min, max, .. } => {
                let (min, max) = (min as f64, max as f64);
                (min + t * (max - min)) as f32
            }
        }
    }

    // ── Write access ──────────────────────────────────────────────────────

    /// Store `v`, coerced to this property's kind.
    ///
    /// - `Bool`: `v >= 0.5`.
    /// - `Int`: clamped to the bounds, then rounded down.
    /// - `Float`: clamped to the bounds.
    ///
    /// Out-of-range input is clamped silently.  `NaN` is ignored.  Writing
    /// the same input twice leaves the same stored value as writing it once.
    pub fn set_value(&mut self, v: f32) {
        if v.is_nan() {
            return;
        }
        match &mut self.value {
            PropertyValue::Bool(b) => *b = v >= 0.5,
            PropertyValue::Int { value, min, max } => {
                *value = (v as f64).clamp(*min as f64, *max as f64).floor() as i32;
            }
            PropertyValue::Float { value, min, max } => {
                *value = v.clamp(*min, *max);
            }
        }
    }

    /// Write the raw value located at `t` along the bounds.
    pub fn set_normalized(&mut self, t: f32) {
        let raw = self.denormalize(t);
        self.set_value(raw);
    }

    /// Replace the bounds of a numeric property (swapped if misordered) and
    /// re-clamp the stored value.  No-op for booleans.
    ///
    /// Integer bounds are rounded outward so the new range never excludes a
    /// value the caller asked for.
    pub fn set_bounds(&mut self, a: f32, b: f32) {
        if a.is_nan() || b.is_nan() {
            return;
        }
        let (lo, hi) = ordered(a, b);
        match &mut self.value {
            PropertyValue::Bool(_) => {}
            PropertyValue::Int { value, min, max } => {
                *min = lo.floor() as i32;
                *max = hi.ceil() as i32;
                *value = (*value).clamp(*min, *max);
            }
            PropertyValue::Float { value, min, max } => {
                *min = lo;
                *max = hi;
                *value = value.clamp(lo, hi);
            }
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            PropertyValue::Bool(b) => write!(f, "{} (bool {b})", self.name),
            PropertyValue::Int { value, min, max } => {
                write!(f, "{} (int {value} in [{min}, {max}])", self.name)
            }
            PropertyValue::Float { value, min, max } => {
                write!(f, "{} (float {value} in [{min}, {max}])", self.name)
            }
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a > b { (b, a) } else { (a, b) }
}
