//! The customer lifecycle controller.
//!
//! [`ShopperController::step`] advances one customer by one tick.  The
//! orchestrator calls it for every customer in population order, after
//! rebuilding the [`CheckoutLaneRegistry`] and before animating workers.
//!
//! # Step order
//!
//! | # | Phase                | Applies when                                    |
//! |---|----------------------|-------------------------------------------------|
//! | 1 | new journey          | cursor is past the last waypoint                |
//! | 2 | dwell                | within arrival radius of an aisle/till/exit     |
//! | 3 | stuck detection      | same waypoint as last tick                      |
//! | 4 | mood decay           | queued and out of patience                      |
//! | 5 | basket pickup        | `GetBasket` at the basket stack                 |
//! | 6 | join queue           | `Shopping` near the till, holding a basket      |
//! | 7 | queue                | `Queueing`                                      |
//! | 8 | check out            | `CheckingOut`                                   |
//! | 9 | walk                 | anything else                                   |
//!
//! Phases 1, 2, 3 (on escape) and 5 end the step early.
//!
//! # Invariants maintained
//!
//! - the journey cursor stays in `[0, len]` and mood in `[0, 100]`;
//! - `items_collected` only ever grows by the next unfound list item;
//! - a lane's busy flag is only set by the customer at the front of its
//!   queue when the lane is idle, so at most one customer per lane is ever
//!   `CheckingOut`.

use tracing::debug;

use gs_agent::{BasketPool, Customer, CustomerState, Dwell, WaypointKind};
use gs_core::{BasketId, RandomSource, Vec3};
use gs_inventory::Catalog;
use gs_spatial::CollisionProbe;

use crate::context::StepEnv;
use crate::error::BehaviorResult;
use crate::event::AgentEvent;
use crate::lanes::CheckoutLaneRegistry;
use crate::planner::JourneyPlanner;
use crate::tuning::BehaviorTuning;

pub struct ShopperController {
    tuning:  BehaviorTuning,
    planner: JourneyPlanner,
}

impl ShopperController {
    /// Validate `tuning` and build a controller drawing lists from `catalog`.
    pub fn new(tuning: BehaviorTuning, catalog: Catalog) -> BehaviorResult<Self> {
        tuning.validate()?;
        let planner = JourneyPlanner::new(catalog, &tuning);
        Ok(Self { tuning, planner })
    }

    pub fn tuning(&self) -> &BehaviorTuning {
        &self.tuning
    }

    pub fn planner(&self) -> &JourneyPlanner {
        &self.planner
    }

    /// Advance `c` by `env.delta` seconds.
    ///
    /// Never fails.  Blocked moves leave the customer in place, an empty
    /// basket stack is shopped around, and an unreachable waypoint is
    /// eventually skipped.
    pub fn step<P, R>(
        &self,
        c:       &mut Customer,
        lanes:   &mut CheckoutLaneRegistry,
        baskets: &mut BasketPool,
        env:     &StepEnv<'_, P>,
        rng:     &mut R,
        events:  &mut Vec<AgentEvent>,
    ) where
        P: CollisionProbe + ?Sized,
        R: RandomSource,
    {
        let t = &self.tuning;
        let dt = env.delta;

        // 1. Terminal waypoint: recycle the customer.
        if c.journey.is_finished() {
            self.start_journey(c, baskets, env, rng, events);
            return;
        }
        let index = c.journey.current();
        let Some(target) = c.journey.target() else {
            return;
        };
        let dist = c.position.distance_xz(target);

        // 2. Dwell at aisles, the till, and the exit.  Shoppers reaching the
        //    till join its queue in step 6 instead of pausing.
        if !c.state.is_in_queue() && dist < t.arrive_radius {
            match c.journey.kind() {
                WaypointKind::Aisle => {
                    self.browse(c, index, dt, rng, events);
                    return;
                }
                WaypointKind::Checkout if c.state != CustomerState::Shopping => {
                    if tick_dwell(c, index, t.checkout_dwell_secs, dt) {
                        c.journey.advance();
                        c.state = CustomerState::Exiting;
                        debug!(agent = %c.id, "passed the till");
                    }
                    return;
                }
                WaypointKind::Exit => {
                    if tick_dwell(c, index, t.exit_dwell_secs, dt) {
                        c.journey.advance();
                    }
                    return;
                }
                _ => {}
            }
        }

        // 3. Stuck detection.
        if c.stuck.waypoint != Some(index) {
            c.stuck.reset_to(Some(index));
            c.patience = 0.0;
        } else {
            c.patience += dt;
            let aim = match c.state {
                CustomerState::Queueing => {
                    self.queue_slot(c, lanes, env).map_or(target, |(_, slot)| slot)
                }
                _ => target,
            };
            match c.state {
                CustomerState::CheckingOut => {}
                CustomerState::Queueing if c.position.distance_xz(aim) <= t.slot_radius => {
                    c.stuck.timer = 0.0;
                    c.stuck.nudges = 0;
                }
                _ => c.stuck.timer += dt,
            }
            if c.stuck.timer > t.nudge_after_secs && c.stuck.nudges < 1 {
                self.nudge(c, index, aim, env, rng, events);
            }
            if c.stuck.timer > t.escape_after_secs {
                self.escape(c, index, baskets, events);
                return;
            }
        }

        // 4. Mood decay while waiting in line.
        if c.state.is_in_queue() && c.patience > t.patience_secs {
            c.mood.decay(t.mood_decay_per_sec, dt);
        }

        // 5. Basket pickup.
        if c.state == CustomerState::GetBasket
            && !c.basket_attached()
            && c.journey.kind() == WaypointKind::Basket
            && dist < t.arrive_radius
        {
            match baskets.take() {
                Some(basket) => {
                    c.basket = Some(basket);
                    events.push(AgentEvent::BasketPickedUp { agent: c.id, basket });
                }
                None => {
                    debug!(agent = %c.id, "basket stack empty, shopping without one");
                    events.push(AgentEvent::BasketShortage { agent: c.id });
                }
            }
            c.journey.advance();
            c.state = CustomerState::Shopping;
            return;
        }

        // 6. Join the lane queue.
        // Patience carries over from the walk to the till.
        if c.state == CustomerState::Shopping
            && index == c.journey.checkout_index()
            && dist < t.queue_join_radius
        {
            c.state = CustomerState::Queueing;
            c.stuck.reset_to(Some(index));
            c.queue_index = lanes.join(c.lane, c.id);
            debug!(agent = %c.id, lane = %c.lane, position = ?c.queue_index, "joined queue");
            events.push(AgentEvent::QueueJoined { agent: c.id, lane: c.lane });
        }

        match c.state {
            // 7.
            CustomerState::Queueing => self.queue(c, lanes, baskets, env, events),
            // 8.
            CustomerState::CheckingOut => self.check_out(c, lanes, baskets, dt, events),
            // 9.
            _ => {
                if dist < t.arrive_radius {
                    c.journey.advance();
                } else {
                    self.move_toward(c, target, env);
                }
            }
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn start_journey<P, R>(
        &self,
        c:       &mut Customer,
        baskets: &mut BasketPool,
        env:     &StepEnv<'_, P>,
        rng:     &mut R,
        events:  &mut Vec<AgentEvent>,
    ) where
        P: CollisionProbe + ?Sized,
        R: RandomSource,
    {
        let plan = self.planner.plan(env.layout, rng);
        if let Some(basket) = c.begin_journey(plan) {
            self.return_basket(c, basket, baskets, events);
        }
        debug!(
            agent = %c.id,
            journey = c.journeys_started,
            items = c.shopping_list.len(),
            lane = %c.lane,
            "journey started"
        );
        events.push(AgentEvent::JourneyReset { agent: c.id, journey: c.journeys_started });
    }

    /// Aisle dwell: count down the browse timer and roll for the next item.
    fn browse<R: RandomSource>(
        &self,
        c:      &mut Customer,
        index:  usize,
        dt:     f32,
        rng:    &mut R,
        events: &mut Vec<AgentEvent>,
    ) {
        let t = &self.tuning;
        if c.dwell.at != Some(index) {
            c.dwell = Dwell {
                at:    Some(index),
                timer: rng.range_f32(t.browse_secs.0, t.browse_secs.1),
            };
            c.clue_level = 0.0;
        }
        c.dwell.timer -= dt;
        c.clue_level += dt;

        let found = match c.next_item() {
            Some(item) if rng.chance(t.discovery_chance(c.clue_level, dt)) => Some(item.clone()),
            _ => None,
        };
        if let Some(item) = found {
            let name = item.name.clone();
            c.items_collected.push(item);
            events.push(AgentEvent::ItemFound {
                agent: c.id,
                item: name,
                collected: c.items_collected.len(),
            });
        }

        if c.dwell.timer > 0.0 {
            return;
        }
        c.dwell.clear();
        if c.has_all_items() && t.skip_remaining_aisles {
            c.journey.jump_to_checkout();
        } else {
            c.journey.advance();
        }
    }

    fn queue<P: CollisionProbe + ?Sized>(
        &self,
        c:       &mut Customer,
        lanes:   &mut CheckoutLaneRegistry,
        baskets: &mut BasketPool,
        env:     &StepEnv<'_, P>,
        events:  &mut Vec<AgentEvent>,
    ) {
        let Some((position, slot)) = self.queue_slot(c, lanes, env) else {
            // The lane does not exist in this layout.
            self.walk_out(c, baskets, events);
            return;
        };
        c.queue_index = Some(position);

        if c.position.distance_xz(slot) > self.tuning.slot_radius {
            self.move_toward(c, slot, env);
            return;
        }
        if position == 0 && !lanes.is_busy(c.lane) {
            lanes.set_busy(c.lane, true);
            c.state = CustomerState::CheckingOut;
            c.checkout_timer = self.tuning.checkout_secs;
            debug!(agent = %c.id, lane = %c.lane, "checkout started");
            events.push(AgentEvent::CheckoutStarted { agent: c.id, lane: c.lane });
        }
    }

    fn check_out(
        &self,
        c:       &mut Customer,
        lanes:   &mut CheckoutLaneRegistry,
        baskets: &mut BasketPool,
        dt:      f32,
        events:  &mut Vec<AgentEvent>,
    ) {
        c.checkout_timer -= dt;
        if c.checkout_timer > 0.0 {
            return;
        }
        c.checkout_timer = 0.0;
        let items = c.items_collected.len();
        self.release_basket(c, baskets, events);
        c.items_collected.clear();
        lanes.set_busy(c.lane, false);
        c.state = CustomerState::Exiting;
        c.queue_index = None;
        c.journey.advance();
        debug!(agent = %c.id, lane = %c.lane, items, "checkout finished");
        events.push(AgentEvent::CheckoutFinished { agent: c.id, lane: c.lane, items });
    }

    /// One sideways hop, perpendicular to the line towards `aim`.
    fn nudge<P, R>(
        &self,
        c:      &mut Customer,
        index:  usize,
        aim:    Vec3,
        env:    &StepEnv<'_, P>,
        rng:    &mut R,
        events: &mut Vec<AgentEvent>,
    ) where
        P: CollisionProbe + ?Sized,
        R: RandomSource,
    {
        c.stuck.nudges += 1;
        let Some(dir) = c.position.direction_xz(aim) else {
            return;
        };
        let side = if rng.chance(0.5) { dir.perp_left() } else { dir.perp_right() };
        let next = c.position + side * c.bounciness;
        let applied = !env.probe.collides(next, self.tuning.agent_radius);
        if applied {
            c.position = next;
        }
        events.push(AgentEvent::StuckNudge { agent: c.id, waypoint: index, applied });
    }

    /// Give up on the current waypoint.
    fn escape(
        &self,
        c:       &mut Customer,
        index:   usize,
        baskets: &mut BasketPool,
        events:  &mut Vec<AgentEvent>,
    ) {
        c.mood.penalize(self.tuning.escape_mood_penalty);
        c.stuck.reset_to(None);
        c.patience = 0.0;
        debug!(agent = %c.id, waypoint = index, mood = c.mood.value(), "stuck, skipping waypoint");
        events.push(AgentEvent::StuckEscape { agent: c.id, waypoint: index });

        match c.state {
            CustomerState::Queueing => {
                let lane = c.lane;
                self.walk_out(c, baskets, events);
                events.push(AgentEvent::QueueAbandoned { agent: c.id, lane });
            }
            _ => {
                c.journey.advance();
                if c.state == CustomerState::GetBasket {
                    c.state = CustomerState::Shopping;
                }
                if c.state == CustomerState::Shopping
                    && c.journey.current() == c.journey.exit_index()
                {
                    // Skipped the till.
                    self.walk_out(c, baskets, events);
                }
            }
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Queue position and slot target for a queued customer.
    fn queue_slot<P: CollisionProbe + ?Sized>(
        &self,
        c:     &Customer,
        lanes: &mut CheckoutLaneRegistry,
        env:   &StepEnv<'_, P>,
    ) -> Option<(usize, Vec3)> {
        let placement = env.layout.lanes.get(c.lane.index())?;
        let position = lanes.join(c.lane, c.id)?;
        Some((position, placement.slot(position, self.tuning.queue_spacing)))
    }

    /// Straight-line step towards `to`, applied only if collision-free.
    ///
    /// The step never overshoots `to`.
    fn move_toward<P: CollisionProbe + ?Sized>(
        &self,
        c:   &mut Customer,
        to:  Vec3,
        env: &StepEnv<'_, P>,
    ) -> bool {
        let Some(dir) = c.position.direction_xz(to) else {
            return false;
        };
        let step = (c.speed * env.delta).min(c.position.distance_xz(to));
        let next = c.position + dir * step;
        if env.probe.collides(next, self.tuning.agent_radius) {
            return false;
        }
        c.position = next;
        true
    }

    /// Leave the lane for the exit: drop the basket and whatever is in it.
    fn walk_out(&self, c: &mut Customer, baskets: &mut BasketPool, events: &mut Vec<AgentEvent>) {
        self.release_basket(c, baskets, events);
        c.items_collected.clear();
        c.queue_index = None;
        c.state = CustomerState::Exiting;
        c.journey.jump_to_exit();
    }

    fn release_basket(
        &self,
        c:       &mut Customer,
        baskets: &mut BasketPool,
        events:  &mut Vec<AgentEvent>,
    ) {
        if let Some(basket) = c.basket.take() {
            self.return_basket(c, basket, baskets, events);
        }
    }

    fn return_basket(
        &self,
        c:       &Customer,
        basket:  BasketId,
        baskets: &mut BasketPool,
        events:  &mut Vec<AgentEvent>,
    ) {
        let returned = self.tuning.replenish_baskets;
        if returned {
            baskets.give_back(basket);
        }
        events.push(AgentEvent::BasketReleased { agent: c.id, basket, returned });
    }
}

/// Count down a fixed pause at waypoint `index`.  Returns `true` on the tick
/// the pause ends.
fn tick_dwell(c: &mut Customer, index: usize, secs: f32, dt: f32) -> bool {
    if c.dwell.at != Some(index) {
        c.dwell = Dwell { at: Some(index), timer: secs };
    }
    c.dwell.timer -= dt;
    if c.dwell.timer > 0.0 {
        return false;
    }
    c.dwell.clear();
    true
}
