use gs_behavior::BehaviorError;
use gs_core::GsError;
use gs_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] GsError),

    #[error("store layout error: {0}")]
    Layout(#[from] SpatialError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
