//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `ReefError` via `From` or wrap it as one variant.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `reef-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ReefError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `reef-*` crates.
pub type ReefResult<T> = Result<T, ReefError>;
