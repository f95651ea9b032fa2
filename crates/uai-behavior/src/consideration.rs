//! A consideration: one property read through one response curve.
//!
//! Considerations are declared by property *name* so behaviors can be
//! written before the agent's properties exist.  The name is resolved to a
//! [`PropertyId`] once, on the first [`bind`](Consideration::bind) after the
//! registry is populated, and cached.  A name that does not resolve disables
//! the consideration for good; there is no retry.

use tracing::warn;

use uai_core::PropertyId;
use uai_property::PropertyStore;

use crate::ResponseCurve;

/// Resolution state of the property name.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Binding {
    Unresolved,
    Bound(PropertyId),
    Failed,
}

#[derive(Clone, Debug)]
pub struct Consideration {
    property_name: String,
    enabled:       bool,
    curve:         ResponseCurve,
    binding:       Binding,
}

impl Consideration {
    /// An enabled consideration reading `property_name` through `curve`.
    pub fn new(property_name: impl Into<String>, curve: ResponseCurve) -> Self {
        Self {
            property_name: property_name.into(),
            enabled:       true,
            curve,
            binding:       Binding::Unresolved,
        }
    }

    /// Builder-style [`set_enabled`](Self::set_enabled)`(false)`.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn curve(&self) -> &ResponseCurve {
        &self.curve
    }

    pub fn set_curve(&mut self, curve: ResponseCurve) {
        self.curve = curve;
    }

    /// Toggle the user-facing enabled flag.  Has no effect on a consideration
    /// whose property failed to resolve.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// `true` if this consideration counts towards its behavior's score:
    /// enabled by the user and not disabled by a failed resolution.
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.binding != Binding::Failed
    }

    /// The resolved property handle, if resolution has happened and succeeded.
    pub fn property(&self) -> Option<PropertyId> {
        match self.binding {
            Binding::Bound(id) => Some(id),
            _ => None,
        }
    }

    /// `true` once resolution has failed.
    pub fn is_unresolvable(&self) -> bool {
        self.binding == Binding::Failed
    }

    /// Resolve the property name against `props`, once.
    ///
    /// Later calls return the cached result without looking at `props`.  On
    /// failure a warning is logged and the consideration is permanently
    /// disabled.
    pub fn bind(&mut self, props: &PropertyStore) -> Option<PropertyId> {
        if self.binding == Binding::Unresolved {
            self.binding = match props.find(&self.property_name) {
                Some(id) => Binding::Bound(id),
                None => {
                    warn!(
                        property = %self.property_name,
                        "no property with this name; consideration disabled"
                    );
                    Binding::Failed
                }
            };
        }
        self.property()
    }

    /// Current weight: `curve(property.normalized_value())`.
    ///
    /// Returns `0` when disabled or when the property cannot be resolved.
    pub fn evaluate(&mut self, props: &PropertyStore) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        match self.bind(props).and_then(|id| props.normalized(id)) {
            Some(x) => self.curve.evaluate(x),
            None    => 0.0,
        }
    }
}
