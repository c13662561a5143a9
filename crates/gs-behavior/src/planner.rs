//! Draws a fresh journey for a customer.

use gs_agent::{Journey, JourneyPlan};
use gs_core::{LaneId, RandomSource, Vec3};
use gs_inventory::Catalog;
use gs_spatial::StoreLayout;

use crate::tuning::BehaviorTuning;

/// Index of the first aisle waypoint: `[basket, entry, aisles…]`.
pub const AISLE_START: usize = 2;

/// Builds a [`JourneyPlan`] from the catalog, the map, and the tuning ranges.
///
/// Waypoints are `[basket drop, entry, one per list item…, lane, exit]`.
/// Each item's waypoint sits in its aisle, spread along the aisle in list
/// order.
#[derive(Clone, Debug)]
pub struct JourneyPlanner {
    catalog:          Catalog,
    list_len:         (usize, usize),
    speed_range:      (f32, f32),
    bounciness_range: (f32, f32),
}

impl JourneyPlanner {
    pub fn new(catalog: Catalog, tuning: &BehaviorTuning) -> Self {
        Self {
            catalog,
            list_len:         tuning.list_len,
            speed_range:      tuning.speed_range,
            bounciness_range: tuning.bounciness_range,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn plan<R: RandomSource>(&self, layout: &StoreLayout, rng: &mut R) -> JourneyPlan {
        let (lo, hi) = self.list_len;
        let count = lo + rng.below(hi.saturating_sub(lo) + 1);
        let shopping_list = self.catalog.random_shopping_list(count, rng);

        let basket = rng.below(layout.basket_positions.len());
        let lane_index = rng.below(layout.lanes.len());
        let lane = LaneId(lane_index as u16);

        let mut waypoints = Vec::with_capacity(shopping_list.len() + 4);
        waypoints.push(layout.basket_waypoint(basket).unwrap_or(layout.entry));
        waypoints.push(layout.entry);
        for (i, item) in shopping_list.iter().enumerate() {
            waypoints.push(layout.aisle_waypoint(item.aisle, i, shopping_list.len()));
        }
        waypoints.push(layout.lanes.get(lane_index).map_or(layout.exit, |l| l.position));
        waypoints.push(layout.exit);

        let spawn = layout.spawn + Vec3::new(0.0, 0.0, rng.unit() * layout.spawn_jitter);
        let speed = rng.range_f32(self.speed_range.0, self.speed_range.1);
        let bounciness = rng.range_f32(self.bounciness_range.0, self.bounciness_range.1);

        JourneyPlan {
            journey: Journey::new(waypoints, AISLE_START),
            shopping_list,
            lane,
            spawn,
            speed,
            bounciness,
        }
    }
}
