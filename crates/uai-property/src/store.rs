//! `PropertyStore` — the per-agent property registry.
//!
//! Properties live in a dense `Vec` indexed by [`PropertyId`]; a side index
//! maps names to ids.  Considerations resolve a name once and then read by
//! id, so the hot path never hashes a string.
//!
//! # Name collisions
//!
//! Re-declaring a name replaces the existing property *in place*: the id is
//! unchanged, so any consideration already bound to that name keeps reading
//! the newest declaration.  The overwrite is logged at `warn`.

use tracing::warn;

use uai_core::{PropertyId, UaiError, UaiResult};

use crate::Property;

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, PropertyId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, PropertyId>;

/// Name-keyed registry of one agent's properties.
#[derive(Default, Clone, Debug)]
pub struct PropertyStore {
    properties: Vec<Property>,
    index:      NameIndex,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `property`, returning its handle.
    ///
    /// If the name is already taken the old property is overwritten and its
    /// handle returned.
    ///
    /// # Errors
    ///
    /// [`UaiError::RegistryFull`] once every `PropertyId` below the
    /// `INVALID` sentinel is taken.
    pub fn insert(&mut self, property: Property) -> UaiResult<PropertyId> {
        if let Some(&id) = self.index.get(property.name()) {
            warn!(
                property = property.name(),
                id = id.0,
                "property re-declared; overwriting previous declaration"
            );
            self.properties[id.index()] = property;
            return Ok(id);
        }

        let id = PropertyId::from_index(self.properties.len())
            .ok_or(UaiError::RegistryFull { what: "property" })?;
        self.index.insert(property.name().to_owned(), id);
        self.properties.push(property);
        Ok(id)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Handle of the property called `name`, if declared.
    pub fn find(&self, name: &str) -> Option<PropertyId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, id: PropertyId) -> Option<&Property> {
        self.properties.get(id.index())
    }

    pub fn get_mut(&mut self, id: PropertyId) -> Option<&mut Property> {
        self.properties.get_mut(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Property> {
        self.find(name).and_then(|id| self.get(id))
    }

    /// Normalized value of `id`, or `None` for a foreign / stale handle.
    #[inline]
    pub fn normalized(&self, id: PropertyId) -> Option<f32> {
        self.get(id).map(Property::normalized_value)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Write `value` to the property behind `id` (clamped per its kind).
    pub fn set_value(&mut self, id: PropertyId, value: f32) -> UaiResult<()> {
        let prop = self
            .properties
            .get_mut(id.index())
            .ok_or(UaiError::PropertyNotFound(id))?;
        prop.set_value(value);
        Ok(())
    }

    /// Write `value` to the property called `name`.
    ///
    /// Returns the handle that was written, or `None` if no property has
    /// that name.
    pub fn set_value_by_name(&mut self, name: &str, value: f32) -> Option<PropertyId> {
        let id = self.find(name)?;
        self.properties[id.index()].set_value(value);
        Some(id)
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// All properties in declaration order.  Every slot was issued a checked
    /// id by [`insert`](Self::insert), so the index always fits.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &Property)> + '_ {
        self.properties
            .iter()
            .enumerate()
            .map(|(i, p)| (PropertyId(i as u32), p))
    }
}
