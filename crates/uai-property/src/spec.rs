//! Declarative property configuration.
//!
//! A `PropertySpec` is what a host writes in its agent configuration; it
//! becomes a live [`Property`] when the agent is built.  The only
//! non-trivial step is the optional randomized start value, which draws from
//! the agent's deterministic [`AgentRng`].
//!
//! ```rust
//! use uai_core::{AgentId, AgentRng};
//! use uai_property::{PropertyKind, PropertySpec};
//!
//! let spec = PropertySpec::new("Health", PropertyKind::Float)
//!     .bounds(0.0, 100.0)
//!     .value(80.0);
//! let prop = spec.instantiate(&mut AgentRng::new(42, AgentId(0)));
//! assert_eq!(prop.normalized_value(), 0.8);
//! ```

use uai_core::AgentRng;

use crate::{Property, PropertyKind};

/// Range a property's start value is drawn from, before clamping into the
/// property's bounds.  Endpoints may be given in either order.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartRange {
    pub min: f32,
    pub max: f32,
}

impl StartRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl Default for StartRange {
    fn default() -> Self {
        Self { min: 0.0, max: 100.0 }
    }
}

/// Creation parameters for one property.
///
/// | Field   | Meaning                                                     |
/// |---------|-------------------------------------------------------------|
/// | `value` | initial raw value; ignored when `start` is set              |
/// | `min`   | lower bound (numeric kinds); default `0`                    |
/// | `max`   | upper bound (numeric kinds); default `1`                    |
/// | `start` | if set, the initial value is drawn uniformly from this range |
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySpec {
    pub name: String,
    pub kind: PropertyKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_min"))]
    pub min: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_max"))]
    pub max: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Option<StartRange>,
}

#[cfg(feature = "serde")]
fn default_min() -> f32 {
    0.0
}

#[cfg(feature = "serde")]
fn default_max() -> f32 {
    1.0
}

impl PropertySpec {
    /// A spec with value `0` and bounds `[0, 1]`.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: 0.0,
            min:   0.0,
            max:   1.0,
            start: None,
        }
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn bounds(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Draw the start value uniformly from `[min, max]` instead of using
    /// `value`.  Booleans flip a fair coin and ignore the range.
    pub fn random_start(mut self, min: f32, max: f32) -> Self {
        self.start = Some(StartRange::new(min, max));
        self
    }

    /// Build the live property.
    ///
    /// Bounds are ordered first, then the start value (fixed or drawn) is
    /// written through [`Property::set_value`] so it obeys the same
    /// clamping and rounding as any later write.
    pub fn instantiate(&self, rng: &mut AgentRng) -> Property {
        match self.kind {
            PropertyKind::Bool => {
                let value = match self.start {
                    Some(_) => rng.gen_bool(0.5),
                    None    => self.value >= 0.5,
                };
                Property::new_bool(self.name.clone(), value)
            }
            PropertyKind::Int => {
                let min = saturating_floor(self.min);
                let max = saturating_floor(self.max);
                let mut prop = Property::new_int(self.name.clone(), 0, min, max);
                let value = match self.start {
                    Some(r) => {
                        rng.uniform_i32(saturating_floor(r.min), saturating_floor(r.max)) as f32
                    }
                    None => self.value,
                };
                prop.set_value(value);
                prop
            }
            PropertyKind::Float => {
                let mut prop = Property::new_float(self.name.clone(), self.min, self.min, self.max);
                let value = match self.start {
                    Some(r) => rng.uniform_f32(r.min, r.max),
                    None    => self.value,
                };
                prop.set_value(value);
                prop
            }
        }
    }
}

/// `f32 → i32` rounding down; `as` already saturates and maps `NaN` to 0.
#[inline]
fn saturating_floor(v: f32) -> i32 {
    v.floor() as i32
}
