//! Behavior-subsystem error type.
//!
//! Only construction can fail.  A tick never returns an error: every
//! in-simulation failure (empty basket pool, blocked move, unreachable
//! waypoint) is a policy branch with a fallback.

use thiserror::Error;

use gs_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid tuning `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("store layout: {0}")]
    Layout(#[from] SpatialError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
