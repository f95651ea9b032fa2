use thiserror::Error;

use uai_core::{AgentId, UaiError};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Core(#[from] UaiError),

    #[error("behavior {behavior:?} belongs to {owner}, not {agent}")]
    ForeignBehavior {
        behavior: String,
        owner:    AgentId,
        agent:    AgentId,
    },

    #[error("agent configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
