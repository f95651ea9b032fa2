//! Per-agent decision configuration.

use crate::{UaiError, UaiResult};

/// Commitment bonus used when none is configured.
pub const DEFAULT_COMMITMENT_BONUS: f32 = 0.1;

/// Tunables for one agent's selection loop.
///
/// Typically embedded in the host's own configuration file and handed to
/// `AgentBuilder`, which validates it before any tick runs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Flat score bias added to the currently active behavior before
    /// comparison.  The higher it is, the less likely the agent is to drop a
    /// task for a marginally better one.  Typical range: 0.01 – 0.15.
    pub commitment_bonus: f32,

    /// Master RNG seed for randomized property start values.
    pub seed: u64,
}

impl AgentConfig {
    /// [`UaiError::Config`] with a human-readable reason if the
    /// configuration is unusable.
    pub fn validate(&self) -> UaiResult<()> {
        if !self.commitment_bonus.is_finite() || self.commitment_bonus < 0.0 {
            return Err(UaiError::Config(format!(
                "commitment_bonus must be finite and >= 0, got {}",
                self.commitment_bonus
            )));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            commitment_bonus: DEFAULT_COMMITMENT_BONUS,
            seed:             0,
        }
    }
}
