//! Static store map consumed by the behavior engine.
//!
//! A [`StoreLayout`] is immutable for the whole session.  It supplies the
//! obstacle volumes, checkout lane placements, basket drop points, and the
//! fixed waypoints every journey is assembled from.
//!
//! # Reference map
//!
//! [`StoreLayout::grocery`] builds the default store:
//!
//! ```text
//!   z = -15  ┌──────────────────────── back wall ────────────────────────┐
//!            │ [bakery]          [deli]          [restrooms]  [warehouse]│
//!            │  ║   ║   ║   ║   ║    back shelves, z ∈ [-10, -4]         │
//!            │  ║   ║   ║   ║   ║    front shelves, z ∈ [-3, 3]          │
//!            │  ·   ·   ·   ·   ·    aisle heads, z ∈ [5, 9]             │
//!   z = 11   │                entry                                      │
//!   z = 14   │  (L0)      (L1)     exit      (L2)      (L3)   lanes      │
//!            │  [desk]    [desk]             [desk]    [desk]            │
//!   z = 21   └─────────────────┘  entrance  └─────────────────────────────┘
//!                         baskets at z = 22, spawn at z = 23
//! ```
//!
//! Customers browse at the open head of each aisle, so every straight leg
//! between aisle heads, lanes, and the entry is clear of shelving.

use gs_core::Vec3;

use crate::aabb::Aabb;
use crate::error::{SpatialError, SpatialResult};

/// Height at which agents walk (sphere centre).
pub const WALK_HEIGHT: f32 = 0.5;

// ── LanePlacement ─────────────────────────────────────────────────────────────

/// Where a checkout lane sits and which way its queue grows.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanePlacement {
    /// The checkout waypoint; the agent being served stands here.
    pub position:     Vec3,
    /// Unit floor vector pointing from the till back along the queue.
    pub queue_axis:   Vec3,
    /// Distance from `position` to queue slot 0.
    pub queue_offset: f32,
}

impl LanePlacement {
    /// Target position of queue slot `index` with `spacing` between slots.
    #[inline]
    pub fn slot(&self, index: usize, spacing: f32) -> Vec3 {
        self.position + self.queue_axis * (self.queue_offset + index as f32 * spacing)
    }
}

// ── StoreLayout ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreLayout {
    /// Every static obstacle volume.
    pub obstacles:        Vec<Aabb>,
    /// Checkout lanes, indexed by `LaneId`.
    pub lanes:            Vec<LanePlacement>,
    /// Stacked basket positions at the entrance.
    pub basket_positions: Vec<Vec3>,
    /// Where a customer appears at the start of every journey.
    pub spawn:            Vec3,
    /// Spawn z is pushed back by up to this much so agents do not stack.
    pub spawn_jitter:     f32,
    /// Waypoint just inside the entrance, between the baskets and the aisles.
    pub entry:            Vec3,
    /// Last waypoint of every journey.
    pub exit:             Vec3,
    /// Centre-line `x` of each aisle corridor; aisle `n` is `aisle_xs[n - 1]`.
    pub aisle_xs:         Vec<f32>,
    /// `(z_min, z_max)` over which the aisle waypoints of one list are spread.
    pub aisle_span:       (f32, f32),
}

impl StoreLayout {
    /// The reference grocery store.
    pub fn grocery() -> Self {
        let mut obstacles = Vec::with_capacity(24);
        let wall_h = 4.0;
        let wall_t = 0.3;

        // Perimeter: back, two sides, and a front wall split by a 6-unit
        // entrance gap centred on x = 0.
        obstacles.push(Aabb::from_center_size(
            Vec3::new(0.0, wall_h / 2.0, -15.0 + wall_t / 2.0),
            Vec3::new(40.0, wall_h, wall_t),
        ));
        for x in [-20.0 + wall_t / 2.0, 20.0 - wall_t / 2.0] {
            obstacles.push(Aabb::from_center_size(
                Vec3::new(x, wall_h / 2.0, 3.0),
                Vec3::new(wall_t, wall_h, 36.0),
            ));
        }
        for x in [-11.5, 11.5] {
            obstacles.push(Aabb::from_center_size(
                Vec3::new(x, wall_h / 2.0, 21.0 - wall_t / 2.0),
                Vec3::new(17.0, wall_h, wall_t),
            ));
        }

        // Five shelf rows, each split by a cross aisle.
        for i in 0..5 {
            let x = -14.0 + 4.0 * i as f32;
            for z in [-7.0, 0.0] {
                obstacles.push(Aabb::from_center_size(
                    Vec3::new(x, 1.0, z),
                    Vec3::new(1.0, 2.0, 6.0),
                ));
            }
        }

        // Back sections: bakery, deli, restrooms, warehouse.
        let section = Vec3::new(4.0, 2.0, 4.0);
        obstacles.push(Aabb::from_center_size(Vec3::new(-18.0, 1.0, -12.0), section));
        obstacles.push(Aabb::from_center_size(Vec3::new(0.0, 1.0, -12.0), section));
        obstacles.push(Aabb::from_center_size(Vec3::new(14.0, 1.0, -12.0), section));
        obstacles.push(Aabb::from_center_size(
            Vec3::new(16.0, 1.5, -8.0),
            Vec3::new(8.0, 3.0, 6.0),
        ));

        // Checkout lanes; the cashier desk sits just past the till.
        let mut lanes = Vec::with_capacity(4);
        for x in [-12.0, -4.0, 4.0, 12.0] {
            lanes.push(LanePlacement {
                position:     Vec3::new(x, WALK_HEIGHT, 14.0),
                queue_axis:   Vec3::new(0.0, 0.0, -1.0),
                queue_offset: 0.0,
            });
            obstacles.push(Aabb::from_center_size(
                Vec3::new(x, 0.5, 15.1),
                Vec3::new(2.0, 1.0, 1.0),
            ));
        }

        let basket_positions = (0..5)
            .map(|k| Vec3::new(0.0, 0.25 + 0.3 * k as f32, 22.0))
            .collect();

        Self {
            obstacles,
            lanes,
            basket_positions,
            spawn:        Vec3::new(0.0, WALK_HEIGHT, 23.0),
            spawn_jitter: 2.0,
            entry:        Vec3::new(0.0, WALK_HEIGHT, 11.0),
            exit:         Vec3::new(0.0, WALK_HEIGHT, 14.0),
            aisle_xs:     vec![-12.0, -8.0, -4.0, 0.0, 4.0],
            aisle_span:   (5.0, 9.0),
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn aisle_count(&self) -> usize {
        self.aisle_xs.len()
    }

    /// Waypoint for the `index`-th of `count` list items, found in `aisle`
    /// (1-based).
    ///
    /// `z` is spread evenly over `aisle_span` in list order; a single item
    /// sits at the start of the span.  Aisle numbers outside the layout wrap.
    pub fn aisle_waypoint(&self, aisle: u8, index: usize, count: usize) -> Vec3 {
        let n = self.aisle_xs.len().max(1);
        let slot = (aisle.max(1) as usize - 1) % n;
        let x = self.aisle_xs.get(slot).copied().unwrap_or(0.0);
        let denom = count.saturating_sub(1).max(1) as f32;
        let (z0, z1) = self.aisle_span;
        let z = z0 + (z1 - z0) * (index as f32 / denom);
        Vec3::new(x, WALK_HEIGHT, z)
    }

    /// Basket drop `index` projected onto walking height.
    pub fn basket_waypoint(&self, index: usize) -> Option<Vec3> {
        self.basket_positions.get(index).map(|p| p.with_y(WALK_HEIGHT))
    }

    /// Reject layouts the behavior engine cannot route through.
    pub fn validate(&self) -> SpatialResult<()> {
        if self.lanes.is_empty() {
            return Err(SpatialError::NoCheckoutLanes);
        }
        if self.basket_positions.is_empty() {
            return Err(SpatialError::NoBasketPositions);
        }
        if self.aisle_xs.is_empty() {
            return Err(SpatialError::NoAisles);
        }
        for (index, lane) in self.lanes.iter().enumerate() {
            if lane.queue_axis.length() <= f32::EPSILON {
                return Err(SpatialError::DegenerateQueueAxis { index });
            }
        }
        for (index, b) in self.obstacles.iter().enumerate() {
            if !b.is_valid() {
                return Err(SpatialError::InvertedObstacle { index });
            }
        }
        Ok(())
    }
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self::grocery()
    }
}
