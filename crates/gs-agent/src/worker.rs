//! Worker agents: staff who idle near a checkout lane.

use gs_core::{LaneId, Vec3, WorkerId};

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worker {
    pub id:       WorkerId,
    /// Lane the worker hovers beside.
    pub lane:     LaneId,
    /// Centre of the hover circle.
    pub base:     Vec3,
    /// Starting angle in radians.
    pub phase:    f32,
    pub position: Vec3,
}

impl Worker {
    /// An unplaced worker at the origin.
    pub fn new(id: WorkerId) -> Self {
        Self {
            id,
            lane:     LaneId::INVALID,
            base:     Vec3::ZERO,
            phase:    0.0,
            position: Vec3::ZERO,
        }
    }
}
