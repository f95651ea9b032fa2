//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `UaiError` as one variant
//! via `#[from]`, so configuration problems raised here surface unchanged.

use thiserror::Error;

use crate::PropertyId;

/// The top-level error type for `uai-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum UaiError {
    #[error("property {0} not found")]
    PropertyNotFound(PropertyId),

    #[error("{what} registry is full")]
    RegistryFull { what: &'static str },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `uai-*` crates.
pub type UaiResult<T> = Result<T, UaiError>;
