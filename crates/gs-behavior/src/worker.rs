//! Idle animation for worker agents.
//!
//! Workers never interact with customers.  Each one circles a point beside
//! a checkout lane:
//!
//! ```text
//!   position = base + radius · (cos θ, 0, sin θ),   θ = phase + t · angular_speed
//! ```

use std::f32::consts::TAU;

use gs_agent::Worker;
use gs_core::{LaneId, RandomSource, Vec3};
use gs_spatial::{StoreLayout, WALK_HEIGHT};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkerAnimator {
    /// Hover circle radius.
    pub radius:        f32,
    /// Radians per second.
    pub angular_speed: f32,
    /// Circle centre relative to the lane position.
    pub lane_offset:   Vec3,
}

impl Default for WorkerAnimator {
    fn default() -> Self {
        Self {
            radius:        1.2 * 0.5,
            angular_speed: 0.7,
            lane_offset:   Vec3::new(1.5, 0.0, 1.5),
        }
    }
}

impl WorkerAnimator {
    /// Assign workers to lanes round-robin and give each a random phase.
    pub fn place<R: RandomSource>(&self, workers: &mut [Worker], layout: &StoreLayout, rng: &mut R) {
        let lanes = layout.lanes.len();
        for (i, w) in workers.iter_mut().enumerate() {
            if lanes == 0 {
                w.lane = LaneId::INVALID;
                w.base = layout.spawn;
            } else {
                let lane = i % lanes;
                w.lane = LaneId(lane as u16);
                w.base = (layout.lanes[lane].position + self.lane_offset).with_y(WALK_HEIGHT);
            }
            w.phase = rng.range_f32(0.0, TAU);
            w.position = self.position_at(w, 0.0);
        }
    }

    /// Move every worker to its position at `time_secs` since the start.
    pub fn animate(&self, workers: &mut [Worker], time_secs: f32) {
        for w in workers {
            w.position = self.position_at(w, time_secs);
        }
    }

    pub fn position_at(&self, w: &Worker, time_secs: f32) -> Vec3 {
        let theta = w.phase + time_secs * self.angular_speed;
        w.base + Vec3::new(theta.cos() * self.radius, 0.0, theta.sin() * self.radius)
    }
}
