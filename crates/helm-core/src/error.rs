//! Engine error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `CoreError` via `From` impls or keep them separate and wrap `CoreError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `helm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `helm-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
