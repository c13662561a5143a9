//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `gs-spatial`.
///
/// All of them are layout validation failures; probing itself never fails.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("store layout has no checkout lanes")]
    NoCheckoutLanes,

    #[error("store layout has no basket drop positions")]
    NoBasketPositions,

    #[error("store layout has no aisles")]
    NoAisles,

    #[error("lane {index} has a zero-length queue axis")]
    DegenerateQueueAxis { index: usize },

    #[error("obstacle {index} is inverted (min > max on some axis)")]
    InvertedObstacle { index: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
