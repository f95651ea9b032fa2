//! Behaviors: a named bundle of considerations plus an action.

use std::fmt;

use uai_core::AgentId;
use uai_property::PropertyStore;

use crate::{Action, BehaviorError, BehaviorResult, Consideration, NoopAction};

// ── Behavior ──────────────────────────────────────────────────────────────────

/// A candidate for "what to do next".
///
/// A behavior belongs to exactly one agent, fixed at construction.  Beyond
/// its considerations' cached bindings it holds no state: scoring is a pure
/// function of the agent's properties.
pub struct Behavior {
    name:           String,
    owner:          AgentId,
    considerations: Vec<Consideration>,
    action:         Box<dyn Action>,
}

impl Behavior {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The agent this behavior was built for.
    pub fn owner(&self) -> AgentId {
        self.owner
    }

    pub fn considerations(&self) -> &[Consideration] {
        &self.considerations
    }

    pub fn considerations_mut(&mut self) -> &mut [Consideration] {
        &mut self.considerations
    }

    /// Number of considerations currently counting towards the score.
    pub fn enabled_count(&self) -> usize {
        self.considerations.iter().filter(|c| c.is_enabled()).count()
    }

    /// Score in `[0, 1]` (given curves in `[0, 1]`): the arithmetic mean of
    /// all enabled considerations, or `0` if none are enabled.
    ///
    /// The first call resolves each consideration's property name against
    /// `props`.  The mean is accumulated incrementally, so N identical inputs
    /// `v` produce exactly `v`.
    pub fn evaluate(&mut self, props: &PropertyStore) -> f32 {
        let mut mean = 0.0_f32;
        let mut n = 0_u32;
        for c in &mut self.considerations {
            // Resolve first: a consideration that fails here drops out of
            // the denominator as well as the numerator.
            c.bind(props);
            if !c.is_enabled() {
                continue;
            }
            let v = c.evaluate(props);
            n += 1;
            mean += (v - mean) / n as f32;
        }
        mean
    }

    /// Run the bound action.
    pub fn execute_action(&mut self) {
        self.action.execute();
    }

    /// Replace the bound action.
    pub fn set_action<A: Action + 'static>(&mut self, action: A) {
        self.action = Box::new(action);
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("considerations", &self.considerations)
            .finish_non_exhaustive()
    }
}

// ── BehaviorBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Behavior`].
///
/// The owning agent is mandatory: a builder without one fails at
/// [`build`](Self::build) rather than producing a behavior that can never
/// be registered.
///
/// ```rust
/// use uai_behavior::{BehaviorBuilder, Consideration, ResponseCurve};
/// use uai_core::AgentId;
///
/// let flee = BehaviorBuilder::new("Flee")
///     .owner(AgentId(0))
///     .consideration(Consideration::new("Health", ResponseCurve::inverse()))
///     .action(|| println!("running away"))
///     .build()
///     .unwrap();
/// assert_eq!(flee.name(), "Flee");
///
/// assert!(BehaviorBuilder::new("Orphan").build().is_err());
/// ```
pub struct BehaviorBuilder {
    name:           String,
    owner:          Option<AgentId>,
    considerations: Vec<Consideration>,
    action:         Option<Box<dyn Action>>,
}

impl BehaviorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:           name.into(),
            owner:          None,
            considerations: Vec::new(),
            action:         None,
        }
    }

    /// Bind the behavior to the agent that will register it.
    pub fn owner(mut self, agent: AgentId) -> Self {
        self.owner = Some(agent);
        self
    }

    pub fn consideration(mut self, consideration: Consideration) -> Self {
        self.considerations.push(consideration);
        self
    }

    pub fn considerations<I>(mut self, considerations: I) -> Self
    where
        I: IntoIterator<Item = Consideration>,
    {
        self.considerations.extend(considerations);
        self
    }

    /// The callback run every tick the behavior is active.  Defaults to
    /// [`NoopAction`].
    pub fn action<A: Action + 'static>(mut self, action: A) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Validate and construct.
    ///
    /// # Errors
    ///
    /// - [`BehaviorError::Config`] if the name is empty.
    /// - [`BehaviorError::NoOwner`] if [`owner`](Self::owner) was never set
    ///   (or set to `AgentId::INVALID`).
    pub fn build(self) -> BehaviorResult<Behavior> {
        if self.name.trim().is_empty() {
            return Err(BehaviorError::Config("behavior name must not be empty".into()));
        }
        let owner = match self.owner {
            Some(id) if id != AgentId::INVALID => id,
            _ => return Err(BehaviorError::NoOwner { behavior: self.name }),
        };
        Ok(Behavior {
            name: self.name,
            owner,
            considerations: self.considerations,
            action: self.action.unwrap_or_else(|| Box::new(NoopAction)),
        })
    }
}
