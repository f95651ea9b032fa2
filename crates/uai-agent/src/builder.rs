//! Fluent builder for constructing an [`Agent`].

use tracing::debug;

use uai_core::{AgentConfig, AgentId, AgentRng, Tick};
use uai_property::{PropertySpec, PropertyStore};

use crate::{Agent, AgentError, AgentResult};

/// Fluent builder for [`Agent`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                     |
/// |--------------------------|-----------------------------|
/// | `.id(id)`                | `AgentId(0)`                |
/// | `.config(c)`             | `AgentConfig::default()`    |
/// | `.commitment_bonus(b)`   | `0.1`                       |
/// | `.seed(s)`               | `0`                         |
/// | `.property(spec)`        | no properties               |
///
/// Properties are instantiated in declaration order from an RNG seeded by
/// `(config.seed, id)`, so the same builder inputs always give the same
/// start values.
///
/// # Example
///
/// ```rust
/// use uai_agent::AgentBuilder;
/// use uai_behavior::{Consideration, ResponseCurve};
/// use uai_property::{PropertyKind, PropertySpec};
///
/// let mut agent = AgentBuilder::new("grunt")
///     .commitment_bonus(0.05)
///     .property(PropertySpec::new("Health", PropertyKind::Float).bounds(0.0, 100.0).value(80.0))
///     .build()
///     .unwrap();
///
/// let attack = agent
///     .behavior("Attack")
///     .consideration(Consideration::new("Health", ResponseCurve::identity()))
///     .build()
///     .unwrap();
/// let attack = agent.add_behavior(attack).unwrap();
/// assert_eq!(agent.tick(), Some(attack));
/// ```
pub struct AgentBuilder {
    name:       String,
    id:         AgentId,
    config:     AgentConfig,
    properties: Vec<PropertySpec>,
}

impl AgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            id:         AgentId(0),
            config:     AgentConfig::default(),
            properties: Vec::new(),
        }
    }

    /// Identity used as the owner of this agent's behaviors and mixed into
    /// its RNG seed.  Give every agent in a population a distinct id.
    pub fn id(mut self, id: AgentId) -> Self {
        self.id = id;
        self
    }

    pub fn config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn commitment_bonus(mut self, bonus: f32) -> Self {
        self.config.commitment_bonus = bonus;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn property(mut self, spec: PropertySpec) -> Self {
        self.properties.push(spec);
        self
    }

    pub fn properties<I>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = PropertySpec>,
    {
        self.properties.extend(specs);
        self
    }

    /// Validate the configuration, instantiate the declared properties and
    /// return an idle agent at tick 0.
    ///
    /// # Errors
    ///
    /// - [`AgentError::Config`] if the id is `AgentId::INVALID`.
    /// - [`AgentError::Core`] wrapping `UaiError::Config` if the
    ///   configuration fails [`AgentConfig::validate`].
    pub fn build(self) -> AgentResult<Agent> {
        if self.id == AgentId::INVALID {
            return Err(AgentError::Config("agent id must not be AgentId::INVALID".into()));
        }
        self.config.validate()?;

        let mut rng = AgentRng::new(self.config.seed, self.id);
        let mut properties = PropertyStore::new();
        for spec in &self.properties {
            properties.insert(spec.instantiate(&mut rng))?;
        }

        debug!(
            agent      = %self.id,
            name       = %self.name,
            properties = properties.len(),
            "agent built"
        );

        Ok(Agent {
            id: self.id,
            name: self.name,
            config: self.config,
            properties,
            behaviors: Vec::new(),
            current: None,
            tick: Tick::ZERO,
            rng,
        })
    }
}
