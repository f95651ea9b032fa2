//! The `Agent` struct and its selection loop.

use tracing::{debug, trace};

use uai_behavior::{Behavior, BehaviorBuilder};
use uai_core::{AgentConfig, AgentId, AgentRng, BehaviorId, PropertyId, Tick, UaiError};
use uai_property::{Property, PropertySpec, PropertyStore};

use crate::{AgentError, AgentObserver, AgentResult, NoopObserver};

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A decision-maker: a property registry, a behavior registry and the
/// currently active behavior.
///
/// Each call to [`tick`](Self::tick) runs one round of selection:
///
/// 1. Score every registered behavior in registration order.  The active
///    behavior gets `config.commitment_bonus` added to its score.
/// 2. The running best starts at `0` with no behavior.  A behavior replaces
///    it only with a **strictly greater** score, so ties go to the earliest
///    registered and an all-nonpositive round selects nothing.
/// 3. If a best was found it becomes the active behavior.
/// 4. The active behavior's action runs, whether it just changed or not.
///
/// Create via [`AgentBuilder`][crate::AgentBuilder].
pub struct Agent {
    pub(crate) id:         AgentId,
    pub(crate) name:       String,
    pub(crate) config:     AgentConfig,
    pub(crate) properties: PropertyStore,
    /// Indexed by `BehaviorId`.  Removed behaviors leave a `None` slot so ids
    /// stay stable.
    pub(crate) behaviors:  Vec<Option<Behavior>>,
    pub(crate) current:    Option<BehaviorId>,
    pub(crate) tick:       Tick,
    pub(crate) rng:        AgentRng,
}

impl Agent {
    // ── Identity ──────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The tick the next call to [`tick`](Self::tick) will run.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    // ── Properties ────────────────────────────────────────────────────────

    /// Instantiate `spec` (drawing a random start value from this agent's RNG
    /// if requested) and register it.
    ///
    /// A property whose name is already registered is overwritten in place
    /// and keeps its id.
    pub fn create_property(&mut self, spec: &PropertySpec) -> AgentResult<PropertyId> {
        let property = spec.instantiate(&mut self.rng);
        Ok(self.properties.insert(property)?)
    }

    /// Register an already-built property.
    pub fn add_property(&mut self, property: Property) -> AgentResult<PropertyId> {
        Ok(self.properties.insert(property)?)
    }

    /// First property registered under `name`.
    pub fn find_property(&self, name: &str) -> Option<PropertyId> {
        self.properties.find(name)
    }

    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.get(id)
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    /// Write a property, clamping to its bounds.  Takes effect on the next
    /// tick.
    ///
    /// # Errors
    ///
    /// [`UaiError::PropertyNotFound`](uai_core::UaiError::PropertyNotFound)
    /// if `id` was not issued by this agent.
    pub fn set_value(&mut self, id: PropertyId, value: f32) -> AgentResult<()> {
        self.properties.set_value(id, value)?;
        Ok(())
    }

    /// Write a property by name.  Returns the id written, or `None` if no
    /// property has that name.
    pub fn set_value_by_name(&mut self, name: &str, value: f32) -> Option<PropertyId> {
        self.properties.set_value_by_name(name, value)
    }

    // ── Behaviors ─────────────────────────────────────────────────────────

    /// A [`BehaviorBuilder`] already bound to this agent.
    pub fn behavior(&self, name: impl Into<String>) -> BehaviorBuilder {
        BehaviorBuilder::new(name).owner(self.id)
    }

    /// Register `behavior`.
    ///
    /// Its considerations are resolved against the property registry on the
    /// first [`tick`](Self::tick) or [`scores`](Self::scores) call that sees
    /// them, so properties may be created before or after the behavior.
    ///
    /// Registration is idempotent by name: adding a behavior whose name is
    /// already registered drops the new one and returns the existing id.
    ///
    /// # Errors
    ///
    /// - [`AgentError::ForeignBehavior`] if `behavior` was built for another
    ///   agent.
    /// - [`UaiError::RegistryFull`](uai_core::UaiError::RegistryFull) if no
    ///   `BehaviorId` is left.
    pub fn add_behavior(&mut self, behavior: Behavior) -> AgentResult<BehaviorId> {
        if behavior.owner() != self.id {
            return Err(AgentError::ForeignBehavior {
                behavior: behavior.name().to_owned(),
                owner:    behavior.owner(),
                agent:    self.id,
            });
        }
        if let Some(existing) = self.find_behavior(behavior.name()) {
            debug!(agent = %self.id, behavior = behavior.name(), "behavior already registered");
            return Ok(existing);
        }
        let id = BehaviorId::from_index(self.behaviors.len())
            .ok_or(UaiError::RegistryFull { what: "behavior" })?;
        self.behaviors.push(Some(behavior));
        Ok(id)
    }

    /// Unregister a behavior.  Its id is never reused.  If it was active the
    /// agent becomes idle until something else scores above zero.
    pub fn remove_behavior(&mut self, id: BehaviorId) -> Option<Behavior> {
        let removed = self.behaviors.get_mut(id.index())?.take()?;
        if self.current == Some(id) {
            self.current = None;
        }
        Some(removed)
    }

    pub fn find_behavior(&self, name: &str) -> Option<BehaviorId> {
        self.iter_behaviors()
            .find(|(_, b)| b.name() == name)
            .map(|(id, _)| id)
    }

    pub fn get_behavior(&self, id: BehaviorId) -> Option<&Behavior> {
        self.behaviors.get(id.index())?.as_ref()
    }

    pub fn get_behavior_mut(&mut self, id: BehaviorId) -> Option<&mut Behavior> {
        self.behaviors.get_mut(id.index())?.as_mut()
    }

    /// Live behaviors in registration order.  Slot indices were checked by
    /// [`add_behavior`](Self::add_behavior), so the casts below always fit.
    pub fn iter_behaviors(&self) -> impl Iterator<Item = (BehaviorId, &Behavior)> + '_ {
        self.behaviors
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|b| (BehaviorId(i as u32), b)))
    }

    /// Number of live behaviors.
    pub fn behavior_count(&self) -> usize {
        self.behaviors.iter().flatten().count()
    }

    /// The active behavior's id, if any.
    pub fn current_behavior(&self) -> Option<BehaviorId> {
        self.current
    }

    /// The active behavior, if any.
    pub fn active_behavior(&self) -> Option<&Behavior> {
        self.get_behavior(self.current?)
    }

    /// Raw score of every live behavior, without the commitment bonus.
    ///
    /// Does not change the selection or run any action.  Considerations not
    /// yet resolved are bound as a side effect, exactly as a tick would.
    pub fn scores(&mut self) -> Vec<(BehaviorId, f32)> {
        let props = &self.properties;
        self.behaviors
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.as_mut()
                    .map(|b| (BehaviorId(i as u32), b.evaluate(props)))
            })
            .collect()
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one round of selection and return the active behavior.
    pub fn tick(&mut self) -> Option<BehaviorId> {
        self.tick_with(&mut NoopObserver)
    }

    /// [`tick`](Self::tick), reporting to `observer`.
    pub fn tick_with<O: AgentObserver>(&mut self, observer: &mut O) -> Option<BehaviorId> {
        let now = self.tick;
        observer.on_tick_start(now);

        let mut best:       Option<BehaviorId> = None;
        let mut best_score: f32                = 0.0;

        for (i, slot) in self.behaviors.iter_mut().enumerate() {
            let Some(behavior) = slot else { continue };
            let id = BehaviorId(i as u32);

            let mut score = behavior.evaluate(&self.properties);
            if self.current == Some(id) {
                score += self.config.commitment_bonus;
            }
            trace!(agent = %self.id, tick = %now, behavior = behavior.name(), score);
            observer.on_behavior_scored(now, id, behavior.name(), score);

            if score > best_score {
                best_score = score;
                best = Some(id);
            }
        }

        if let Some(id) = best {
            if self.current != Some(id) {
                debug!(
                    agent = %self.id,
                    tick  = %now,
                    from  = ?self.current,
                    to    = %id,
                    score = best_score,
                    "active behavior changed"
                );
                observer.on_selection_changed(now, self.current, id);
                self.current = Some(id);
            }
        }

        if let Some(id) = self.current {
            if let Some(behavior) = self.behaviors.get_mut(id.index()).and_then(Option::as_mut) {
                behavior.execute_action();
            }
        }

        observer.on_tick_end(now, self.current);
        self.tick = now.next();
        self.current
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("tick", &self.tick)
            .field("current", &self.current)
            .field("properties", &self.properties.len())
            .field("behaviors", &self.behavior_count())
            .finish()
    }
}
