//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `GsError`
//! or wrap it as one variant.  None of these errors can occur inside a tick:
//! they are raised while loading configuration or building a simulation.

use thiserror::Error;

use crate::{AgentId, LaneId};

/// The top-level error type for `gs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GsError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("lane {0} not found")]
    LaneNotFound(LaneId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gs-*` crates.
pub type GsResult<T> = Result<T, GsError>;
