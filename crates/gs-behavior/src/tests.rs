//! Unit tests for gs-behavior.

#[cfg(test)]
mod helpers {
    use gs_agent::{BasketPool, Customer, Journey, JourneyPlan};
    use gs_core::{AgentId, LaneId, RandomSource, Vec3};
    use gs_inventory::{Catalog, ShoppingItem};
    use gs_spatial::{CollisionProbe, StoreLayout};

    use crate::{
        AgentEvent, BehaviorTuning, CheckoutLaneRegistry, ShopperController, StepEnv, AISLE_START,
    };

    /// Nothing is ever in the way.
    pub struct Open;

    impl CollisionProbe for Open {
        fn collides(&self, _: Vec3, _: f32) -> bool {
            false
        }
        fn obstacle_count(&self) -> usize {
            0
        }
    }

    /// Every move is blocked.
    pub struct Walled;

    impl CollisionProbe for Walled {
        fn collides(&self, _: Vec3, _: f32) -> bool {
            true
        }
        fn obstacle_count(&self) -> usize {
            1
        }
    }

    /// Returns the same value forever.
    pub struct Fixed(pub f32);

    impl RandomSource for Fixed {
        fn unit(&mut self) -> f32 {
            self.0
        }
    }

    pub fn controller() -> ShopperController {
        ShopperController::new(BehaviorTuning::default(), Catalog::grocery()).unwrap()
    }

    /// A customer on the reference map whose list is the first `items`
    /// catalog entries and whose lane is `lane`.  Cursor at 0, at spawn.
    pub fn shopper(id: u32, items: usize, lane: usize) -> Customer {
        let layout = StoreLayout::grocery();
        let list: Vec<ShoppingItem> = Catalog::grocery().items()[..items].to_vec();
        let mut waypoints = vec![layout.basket_waypoint(0).unwrap(), layout.entry];
        for (i, item) in list.iter().enumerate() {
            waypoints.push(layout.aisle_waypoint(item.aisle, i, list.len()));
        }
        waypoints.push(layout.lanes[lane].position);
        waypoints.push(layout.exit);

        let mut c = Customer::new(AgentId(id));
        c.begin_journey(JourneyPlan {
            journey:       Journey::new(waypoints, AISLE_START),
            shopping_list: list,
            lane:          LaneId(lane as u16),
            spawn:         layout.spawn,
            speed:         2.0,
            bounciness:    0.2,
        });
        c
    }

    /// Put `c` on waypoint `index`, standing on it.
    pub fn stand_on(c: &mut Customer, index: usize) {
        c.journey.set_current(index);
        c.position = c.journey.target().unwrap();
    }

    pub struct World {
        pub layout:  StoreLayout,
        pub lanes:   CheckoutLaneRegistry,
        pub baskets: BasketPool,
        pub events:  Vec<AgentEvent>,
    }

    impl World {
        pub fn new() -> Self {
            let layout = StoreLayout::grocery();
            Self {
                lanes:   CheckoutLaneRegistry::new(layout.lane_count()),
                baskets: BasketPool::new(layout.basket_positions.len()),
                layout,
                events:  Vec::new(),
            }
        }

        pub fn step<P: CollisionProbe, R: RandomSource>(
            &mut self,
            ctl:   &ShopperController,
            c:     &mut Customer,
            probe: &P,
            dt:    f32,
            rng:   &mut R,
        ) {
            let env = StepEnv::new(dt, &self.layout, probe);
            ctl.step(c, &mut self.lanes, &mut self.baskets, &env, rng, &mut self.events);
        }

        /// One full tick: rebuild lanes, then step everyone in order.
        pub fn tick<P: CollisionProbe, R: RandomSource>(
            &mut self,
            ctl:       &ShopperController,
            customers: &mut [Customer],
            probe:     &P,
            dt:        f32,
            rng:       &mut R,
        ) {
            self.lanes.rebuild(customers);
            for c in customers.iter_mut() {
                self.step(ctl, c, probe, dt, rng);
            }
        }

        pub fn count(&self, pred: impl Fn(&AgentEvent) -> bool) -> usize {
            self.events.iter().filter(|e| pred(e)).count()
        }
    }
}

// ── Tuning ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tuning {
    use gs_inventory::Catalog;
    use crate::{BehaviorError, BehaviorTuning, ShopperController};

    #[test]
    fn defaults_validate() {
        assert!(BehaviorTuning::default().validate().is_ok());
    }

    #[test]
    fn discovery_chance_saturates() {
        let t = BehaviorTuning::default();
        assert!((t.discovery_chance(0.0, 1.0) - 0.3).abs() < 1e-6);
        assert_eq!(t.discovery_chance(2.0, 1.0), 1.0);
        assert_eq!(t.discovery_chance(2.0, 0.5), 0.5);
    }

    #[test]
    fn rejects_negative_spacing() {
        let t = BehaviorTuning { queue_spacing: -1.0, ..BehaviorTuning::default() };
        match t.validate() {
            Err(BehaviorError::InvalidTuning { field, .. }) => assert_eq!(field, "queue_spacing"),
            other => panic!("expected InvalidTuning, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_ranges() {
        let t = BehaviorTuning { list_len: (0, 3), ..BehaviorTuning::default() };
        assert!(t.validate().is_err());
        let t = BehaviorTuning { speed_range: (3.0, 2.0), ..BehaviorTuning::default() };
        assert!(t.validate().is_err());
        let t = BehaviorTuning { speed_range: (0.0, 2.0), ..BehaviorTuning::default() };
        assert!(t.validate().is_err());
        let t = BehaviorTuning { arrive_radius: 0.0, ..BehaviorTuning::default() };
        assert!(t.validate().is_err());
    }

    #[test]
    fn controller_validates_tuning() {
        let t = BehaviorTuning { escape_after_secs: f32::NAN, ..BehaviorTuning::default() };
        assert!(ShopperController::new(t, Catalog::grocery()).is_err());
    }
}

// ── Lane registry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod lanes {
    use gs_agent::{Customer, CustomerState};
    use gs_core::{AgentId, LaneId};
    use crate::CheckoutLaneRegistry;

    fn at(id: u32, lane: u16, state: CustomerState) -> Customer {
        let mut c = Customer::new(AgentId(id));
        c.lane = LaneId(lane);
        c.state = state;
        c
    }

    #[test]
    fn rebuild_keeps_population_order() {
        let customers = vec![
            at(0, 1, CustomerState::Queueing),
            at(1, 1, CustomerState::Shopping),
            at(2, 0, CustomerState::CheckingOut),
            at(3, 1, CustomerState::CheckingOut),
            at(4, 0, CustomerState::Exiting),
            at(5, 9, CustomerState::Queueing),
        ];
        let mut reg = CheckoutLaneRegistry::new(2);
        reg.rebuild(&customers);
        assert_eq!(reg.queue_of(LaneId(0)), &[AgentId(2)]);
        assert_eq!(reg.queue_of(LaneId(1)), &[AgentId(0), AgentId(3)]);
        assert_eq!(reg.queued_count(), 3);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let customers = vec![at(0, 0, CustomerState::Queueing), at(1, 0, CustomerState::Queueing)];
        let mut reg = CheckoutLaneRegistry::new(1);
        reg.rebuild(&customers);
        let first = reg.clone();
        reg.rebuild(&customers);
        assert_eq!(reg, first);
    }

    #[test]
    fn join_appends_once() {
        let mut reg = CheckoutLaneRegistry::new(2);
        assert_eq!(reg.join(LaneId(1), AgentId(4)), Some(0));
        assert_eq!(reg.join(LaneId(1), AgentId(7)), Some(1));
        assert_eq!(reg.join(LaneId(1), AgentId(4)), Some(0));
        assert_eq!(reg.position_of(LaneId(1), AgentId(7)), Some(1));
        assert_eq!(reg.join(LaneId(5), AgentId(4)), None);
    }

    #[test]
    fn busy_flags_survive_rebuild() {
        let mut reg = CheckoutLaneRegistry::new(3);
        reg.set_busy(LaneId(2), true);
        reg.set_busy(LaneId(40), true);
        reg.rebuild(&[]);
        assert!(reg.is_busy(LaneId(2)));
        assert!(!reg.is_busy(LaneId(0)));
        assert!(!reg.is_busy(LaneId(40)));
        assert_eq!(reg.busy_count(), 1);
    }

    #[test]
    fn unknown_lane_has_empty_queue() {
        let reg = CheckoutLaneRegistry::new(1);
        assert!(reg.queue_of(LaneId::INVALID).is_empty());
        assert_eq!(reg.lane_count(), 1);
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use gs_agent::WaypointKind;
    use gs_core::{AgentId, AgentRng};
    use gs_spatial::StoreLayout;
    use super::helpers::controller;
    use crate::AISLE_START;

    #[test]
    fn journeys_follow_the_waypoint_layout() {
        let ctl = controller();
        let layout = StoreLayout::grocery();
        let mut rng = AgentRng::new(3, AgentId(0));

        for _ in 0..200 {
            let plan = ctl.planner().plan(&layout, &mut rng);
            let n = plan.shopping_list.len();
            assert!((2..=7).contains(&n));
            assert_eq!(plan.journey.len(), n + 4);

            let lane = plan.lane.index();
            assert!(lane < layout.lane_count());
            let wps = plan.journey.waypoints();
            assert_eq!(wps[1], layout.entry);
            assert_eq!(wps[n + 2], layout.lanes[lane].position);
            assert_eq!(wps[n + 3], layout.exit);
            assert!(layout.basket_positions.iter().any(|b| b.x == wps[0].x && b.z == wps[0].z));

            for (i, item) in plan.shopping_list.iter().enumerate() {
                let wp = wps[AISLE_START + i];
                assert_eq!(wp.x, layout.aisle_xs[item.aisle as usize - 1]);
                assert_eq!(plan.journey.kind_at(AISLE_START + i), WaypointKind::Aisle);
            }

            assert!((1.5..=2.5).contains(&plan.speed));
            assert!((0.15..=0.25).contains(&plan.bounciness));
            assert!(plan.spawn.z >= layout.spawn.z);
            assert!(plan.spawn.z <= layout.spawn.z + layout.spawn_jitter);
        }
    }

    #[test]
    fn lists_have_no_duplicates() {
        let ctl = controller();
        let layout = StoreLayout::grocery();
        let mut rng = AgentRng::new(11, AgentId(2));
        for _ in 0..100 {
            let plan = ctl.planner().plan(&layout, &mut rng);
            let mut names: Vec<&str> = plan.shopping_list.iter().map(|i| i.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), plan.shopping_list.len());
        }
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod controller {
    use gs_agent::{BasketPool, Customer, CustomerState, Dwell, Mood, WaypointKind};
    use gs_core::{AgentId, LaneId, Vec3};
    use gs_inventory::Catalog;
    use super::helpers::{controller, shopper, stand_on, Fixed, Open, Walled, World};
    use crate::{AgentEvent, BehaviorTuning, ShopperController, AISLE_START};

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn finished_journey_starts_over() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 3, 1);
        c.basket = w.baskets.take();
        c.mood = Mood::new(30.0);
        c.state = CustomerState::Exiting;
        let len = c.journey.len();
        c.journey.set_current(len);

        w.step(&ctl, &mut c, &Open, FRAME, &mut Fixed(0.5));

        assert_eq!(c.journey.current(), 0);
        assert_eq!(c.state, CustomerState::GetBasket);
        assert_eq!(c.mood, Mood::FULL);
        assert!(c.basket.is_none());
        assert_eq!(w.baskets.available(), w.baskets.capacity());
        assert_eq!(c.journeys_started, 2);
        assert_eq!(w.count(|e| matches!(e, AgentEvent::JourneyReset { journey: 2, .. })), 1);
    }

    #[test]
    fn unplanned_customer_gets_a_journey() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = Customer::new(AgentId(3));
        w.step(&ctl, &mut c, &Open, FRAME, &mut Fixed(0.25));
        assert!(!c.journey.is_empty());
        assert!(!c.shopping_list.is_empty());
        assert_eq!(c.state, CustomerState::GetBasket);
        assert!(c.lane.index() < w.layout.lane_count());
    }

    #[test]
    fn saturated_discovery_finds_exactly_one_item() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 3, 0);
        c.state = CustomerState::Shopping;
        c.basket = w.baskets.take();
        stand_on(&mut c, AISLE_START);
        c.dwell = Dwell { at: Some(AISLE_START), timer: 5.0 };
        c.clue_level = 2.0;

        w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.5));

        assert_eq!(c.items_collected.len(), 1);
        assert_eq!(c.items_collected[0], c.shopping_list[0]);
        assert_eq!(c.journey.current(), AISLE_START);
        assert_eq!(c.dwell.timer, 4.0);
    }

    #[test]
    fn discovery_is_always_a_list_prefix() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 5, 0);
        c.state = CustomerState::Shopping;
        stand_on(&mut c, AISLE_START);
        c.dwell = Dwell { at: Some(AISLE_START), timer: 100.0 };
        c.clue_level = 10.0;

        for _ in 0..10 {
            w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.0));
            let n = c.items_collected.len();
            assert_eq!(&c.items_collected[..], &c.shopping_list[..n]);
        }
        assert_eq!(c.items_collected.len(), 5);
    }

    #[test]
    fn browse_timeout_jumps_to_checkout_once_list_is_done() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 4, 0);
        c.state = CustomerState::Shopping;
        c.items_collected = c.shopping_list.clone();
        stand_on(&mut c, AISLE_START);
        c.dwell = Dwell { at: Some(AISLE_START), timer: 0.5 };

        w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.5));
        assert_eq!(c.journey.current(), c.journey.checkout_index());
        assert_eq!(c.dwell, Dwell::default());
    }

    #[test]
    fn browse_timeout_walks_on_when_skipping_is_off() {
        let tuning = BehaviorTuning { skip_remaining_aisles: false, ..BehaviorTuning::default() };
        let ctl = ShopperController::new(tuning, Catalog::grocery()).unwrap();
        let mut w = World::new();
        let mut c = shopper(0, 4, 0);
        c.state = CustomerState::Shopping;
        c.items_collected = c.shopping_list.clone();
        stand_on(&mut c, AISLE_START);
        c.dwell = Dwell { at: Some(AISLE_START), timer: 0.5 };

        w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.5));
        assert_eq!(c.journey.current(), AISLE_START + 1);
    }

    #[test]
    fn picks_up_a_basket() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 2, 0);
        stand_on(&mut c, 0);

        w.step(&ctl, &mut c, &Open, FRAME, &mut Fixed(0.5));

        assert!(c.basket.is_some());
        assert_eq!(c.state, CustomerState::Shopping);
        assert_eq!(c.journey.current(), 1);
        assert_eq!(w.baskets.available(), w.baskets.capacity() - 1);
        assert_eq!(w.count(|e| matches!(e, AgentEvent::BasketPickedUp { .. })), 1);
    }

    #[test]
    fn empty_stack_shops_without_a_basket() {
        let ctl = controller();
        let mut w = World::new();
        w.baskets = BasketPool::new(0);
        let mut c = shopper(0, 2, 0);
        stand_on(&mut c, 0);

        w.step(&ctl, &mut c, &Open, FRAME, &mut Fixed(0.5));

        assert!(c.basket.is_none());
        assert_eq!(c.state, CustomerState::Shopping);
        assert_eq!(c.journey.current(), 1);
        assert_eq!(w.count(|e| matches!(e, AgentEvent::BasketShortage { .. })), 1);
    }

    #[test]
    fn joins_the_queue_near_the_till() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 2, 2);
        c.state = CustomerState::Shopping;
        c.basket = w.baskets.take();
        let till = c.journey.checkout_index();
        stand_on(&mut c, till);
        c.position = c.position + Vec3::new(0.3, 0.0, 0.0);

        w.step(&ctl, &mut c, &Open, FRAME, &mut Fixed(0.5));

        assert_eq!(c.state, CustomerState::Queueing);
        assert_eq!(c.queue_index, Some(0));
        assert_eq!(w.lanes.queue_of(LaneId(2)), &[c.id]);
        assert_eq!(w.count(|e| matches!(e, AgentEvent::QueueJoined { .. })), 1);
    }

    #[test]
    fn basketless_shopper_queues_and_checks_out() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 2, 1);
        c.state = CustomerState::Shopping;
        c.items_collected = c.shopping_list.clone();
        let till = c.journey.checkout_index();
        stand_on(&mut c, till);

        w.step(&ctl, &mut c, &Open, 0.5, &mut Fixed(0.5));
        assert_eq!(c.state, CustomerState::CheckingOut);
        assert_eq!(w.lanes.queue_of(LaneId(1)), &[c.id]);
        assert!(w.lanes.is_busy(LaneId(1)));

        w.step(&ctl, &mut c, &Open, 2.5, &mut Fixed(0.5));
        assert_eq!(c.state, CustomerState::Exiting);
        assert!(c.items_collected.is_empty());
        assert!(c.basket.is_none());
        assert!(!w.lanes.is_busy(LaneId(1)));
        assert_eq!(c.journey.current(), c.journey.exit_index());
        assert_eq!(w.count(|e| matches!(e, AgentEvent::CheckoutFinished { items: 2, .. })), 1);
        assert_eq!(w.count(|e| matches!(e, AgentEvent::BasketReleased { .. })), 0);
    }

    #[test]
    fn long_walk_to_the_till_counts_towards_patience() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 2, 1);
        c.state = CustomerState::Shopping;
        c.basket = w.baskets.take();
        c.items_collected = c.shopping_list.clone();
        let till = c.journey.checkout_index();
        stand_on(&mut c, till);
        c.position = c.position + Vec3::new(10.0, 0.0, 0.0);

        let mut steps = 0;
        while c.state == CustomerState::Shopping {
            w.step(&ctl, &mut c, &Open, 0.1, &mut Fixed(0.5));
            steps += 1;
            assert!(steps < 100, "never reached the till");
        }
        assert_eq!(c.state, CustomerState::Queueing);
        assert!(c.patience > ctl.tuning().patience_secs);
        assert_eq!(c.mood, Mood::FULL);

        w.step(&ctl, &mut c, &Open, 0.1, &mut Fixed(0.5));
        assert!(c.mood.value() < Mood::MAX);
    }

    #[test]
    fn exit_pause_lasts_three_seconds() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 2, 1);
        c.state = CustomerState::Exiting;
        let exit = c.journey.exit_index();
        stand_on(&mut c, exit);

        for _ in 0..2 {
            w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.5));
            assert_eq!(c.journey.current(), exit);
        }
        w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.5));
        assert!(c.journey.is_finished());
    }

    #[test]
    fn only_the_front_of_the_queue_checks_out() {
        let ctl = controller();
        let mut w = World::new();
        let mut customers = vec![shopper(0, 2, 0), shopper(1, 2, 0)];
        for c in &mut customers {
            let till = c.journey.checkout_index();
            stand_on(c, till);
            c.state = CustomerState::Queueing;
            c.basket = w.baskets.take();
        }

        w.tick(&ctl, &mut customers, &Open, FRAME, &mut Fixed(0.5));

        assert_eq!(customers[0].state, CustomerState::CheckingOut);
        assert_eq!(customers[0].checkout_timer, 2.5);
        assert_eq!(customers[1].state, CustomerState::Queueing);
        assert_eq!(customers[1].queue_index, Some(1));
        assert!(w.lanes.is_busy(LaneId(0)));
        assert_eq!(w.count(|e| matches!(e, AgentEvent::CheckoutStarted { .. })), 1);

        // The second customer walks back to its slot.
        let slot = w.layout.lanes[0].slot(1, ctl.tuning().queue_spacing);
        assert!(customers[1].position.distance_xz(slot) < 1.2);
    }

    #[test]
    fn checkout_completes() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 2, 3);
        let till = c.journey.checkout_index();
        stand_on(&mut c, till);
        c.items_collected = c.shopping_list.clone();
        c.basket = w.baskets.take();
        c.state = CustomerState::CheckingOut;
        c.checkout_timer = 2.5;
        c.queue_index = Some(0);
        w.lanes.set_busy(LaneId(3), true);

        w.step(&ctl, &mut c, &Open, 2.5, &mut Fixed(0.5));

        assert_eq!(c.state, CustomerState::Exiting);
        assert!(c.items_collected.is_empty());
        assert!(c.basket.is_none());
        assert_eq!(c.queue_index, None);
        assert!(!w.lanes.is_busy(LaneId(3)));
        assert_eq!(c.journey.current(), c.journey.exit_index());
        assert_eq!(w.baskets.available(), w.baskets.capacity());
        assert_eq!(
            w.count(|e| matches!(e, AgentEvent::CheckoutFinished { items: 2, .. })),
            1
        );
    }

    #[test]
    fn released_baskets_stay_gone_without_replenishment() {
        let tuning = BehaviorTuning { replenish_baskets: false, ..BehaviorTuning::default() };
        let ctl = ShopperController::new(tuning, Catalog::grocery()).unwrap();
        let mut w = World::new();
        let mut c = shopper(0, 2, 0);
        c.basket = w.baskets.take();
        c.state = CustomerState::CheckingOut;
        c.checkout_timer = 0.1;

        w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.5));

        assert!(c.basket.is_none());
        assert_eq!(w.baskets.available(), w.baskets.capacity() - 1);
        assert_eq!(
            w.count(|e| matches!(e, AgentEvent::BasketReleased { returned: false, .. })),
            1
        );
    }

    #[test]
    fn blocked_customer_escapes_after_eight_seconds() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 3, 0);
        c.state = CustomerState::Shopping;
        c.journey.set_current(1);
        c.position = w.layout.spawn;

        for tick in 1..=9 {
            w.step(&ctl, &mut c, &Walled, 1.0, &mut Fixed(0.5));
            assert_eq!(c.journey.current(), 1, "advanced early on tick {tick}");
        }
        w.step(&ctl, &mut c, &Walled, 1.0, &mut Fixed(0.5));

        assert_eq!(c.journey.current(), 2);
        assert_eq!(c.mood.value(), 90.0);
        assert_eq!(c.position, w.layout.spawn);
        assert_eq!(
            w.count(|e| matches!(e, AgentEvent::StuckNudge { applied: false, .. })),
            1
        );
        assert_eq!(w.count(|e| matches!(e, AgentEvent::StuckEscape { waypoint: 1, .. })), 1);
    }

    #[test]
    fn long_clear_walk_still_escapes() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 3, 0);
        c.state = CustomerState::Shopping;
        c.speed = 1.5;
        c.journey.set_current(1);
        c.position = w.layout.entry + Vec3::new(20.0, 0.0, 0.0);

        for tick in 1..=9 {
            w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.5));
            assert_eq!(c.journey.current(), 1, "advanced early on tick {tick}");
        }
        w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.5));

        assert_eq!(c.journey.current(), 2);
        assert_eq!(c.mood.value(), 90.0);
        assert_eq!(w.count(|e| matches!(e, AgentEvent::StuckEscape { waypoint: 1, .. })), 1);
    }

    #[test]
    fn stuck_on_the_first_waypoint_still_escapes() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 3, 0);

        for _ in 0..10 {
            w.step(&ctl, &mut c, &Walled, 1.0, &mut Fixed(0.5));
        }

        assert_eq!(c.journey.current(), 1);
        assert_eq!(c.state, CustomerState::Shopping);
        assert!(c.basket.is_none());
        assert_eq!(c.mood.value(), 90.0);
    }

    #[test]
    fn nudge_sidesteps_when_clear() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 3, 0);
        c.state = CustomerState::Shopping;
        c.journey.set_current(1);
        c.speed = 0.0;
        let start = w.layout.spawn;
        c.position = start;

        for _ in 0..5 {
            w.step(&ctl, &mut c, &Open, 1.0, &mut Fixed(0.9));
        }

        assert_eq!(w.count(|e| matches!(e, AgentEvent::StuckNudge { applied: true, .. })), 1);
        assert!((c.position.distance_xz(start) - c.bounciness).abs() < 1e-5);
        assert_eq!(c.journey.current(), 1);
    }

    #[test]
    fn unreachable_slot_abandons_the_queue() {
        let ctl = controller();
        let mut w = World::new();
        let mut c = shopper(0, 2, 0);
        let till = c.journey.checkout_index();
        stand_on(&mut c, till);
        c.position = c.position + Vec3::new(3.0, 0.0, 0.0);
        c.items_collected = c.shopping_list.clone();
        c.basket = w.baskets.take();
        c.state = CustomerState::Queueing;

        let mut customers = vec![c];
        for _ in 0..10 {
            w.tick(&ctl, &mut customers, &Walled, 1.0, &mut Fixed(0.5));
        }
        let c = &customers[0];

        assert_eq!(c.state, CustomerState::Exiting);
        assert_eq!(c.journey.kind(), WaypointKind::Exit);
        // Five seconds of queue impatience, then the escape penalty.
        assert_eq!(c.mood.value(), 65.0);
        assert!(c.basket.is_none());
        assert!(c.items_collected.is_empty());
        assert_eq!(w.baskets.available(), w.baskets.capacity());
        assert_eq!(w.count(|e| matches!(e, AgentEvent::QueueAbandoned { .. })), 1);
    }

    #[test]
    fn queue_wait_wears_down_mood() {
        let ctl = controller();
        let mut w = World::new();
        let mut front = shopper(0, 2, 0);
        let mut back = shopper(1, 2, 0);
        for c in [&mut front, &mut back] {
            let till = c.journey.checkout_index();
            stand_on(c, till);
            c.basket = w.baskets.take();
        }
        front.state = CustomerState::CheckingOut;
        front.checkout_timer = 100.0;
        back.state = CustomerState::Queueing;
        back.position = w.layout.lanes[0].slot(1, ctl.tuning().queue_spacing);
        w.lanes.set_busy(LaneId(0), true);

        let mut customers = vec![front, back];
        for _ in 0..4 {
            w.tick(&ctl, &mut customers, &Open, 1.0, &mut Fixed(0.5));
        }
        assert_eq!(customers[1].mood, Mood::FULL);

        w.tick(&ctl, &mut customers, &Open, 1.0, &mut Fixed(0.5));
        assert_eq!(customers[1].mood.value(), 95.0);
        assert_eq!(customers[1].state, CustomerState::Queueing);
        assert_eq!(customers[1].queue_index, Some(1));
        assert_eq!(customers[1].stuck.timer, 0.0);
    }
}

// ── Whole-store runs ──────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use gs_agent::{Customer, CustomerState};
    use gs_core::{AgentId, AgentRng, LaneId};
    use gs_spatial::ObstacleIndex;
    use super::helpers::{controller, World};
    use crate::AgentEvent;

    #[test]
    fn long_run_keeps_every_invariant() {
        let ctl = controller();
        let mut w = World::new();
        let probe = ObstacleIndex::new(&w.layout.obstacles);
        let mut customers: Vec<Customer> = (0..8).map(|i| Customer::new(AgentId(i))).collect();
        let mut rngs: Vec<AgentRng> = (0..8).map(|i| AgentRng::new(7, AgentId(i))).collect();
        let lane_count = w.layout.lane_count();

        for _ in 0..18_000 {
            w.lanes.rebuild(&customers);
            for (c, rng) in customers.iter_mut().zip(rngs.iter_mut()) {
                w.step(&ctl, c, &probe, 1.0 / 30.0, rng);
            }

            for c in &customers {
                assert!(c.journey.current() <= c.journey.len());
                assert!((0.0..=100.0).contains(&c.mood.value()));
                let n = c.items_collected.len();
                assert!(n <= c.shopping_list.len());
                assert_eq!(&c.items_collected[..], &c.shopping_list[..n]);
            }
            for lane in 0..lane_count {
                let lane = LaneId(lane as u16);
                let serving = customers
                    .iter()
                    .filter(|c| c.lane == lane && c.state == CustomerState::CheckingOut)
                    .count();
                assert!(serving <= 1);
                assert_eq!(serving == 1, w.lanes.is_busy(lane));
            }
            let held = customers.iter().filter(|c| c.basket.is_some()).count();
            assert_eq!(held + w.baskets.available(), w.baskets.capacity());
        }

        assert!(w.count(|e| matches!(e, AgentEvent::CheckoutFinished { .. })) > 0);
        assert!(customers.iter().all(|c| c.journeys_started >= 2));
    }
}

// ── Workers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod worker {
    use gs_agent::Worker;
    use gs_core::{LaneId, WorkerId};
    use gs_spatial::StoreLayout;
    use super::helpers::Fixed;
    use crate::WorkerAnimator;

    fn placed(count: u32) -> (WorkerAnimator, Vec<Worker>) {
        let anim = WorkerAnimator::default();
        let mut workers: Vec<Worker> = (0..count).map(|i| Worker::new(WorkerId(i))).collect();
        anim.place(&mut workers, &StoreLayout::grocery(), &mut Fixed(0.25));
        (anim, workers)
    }

    #[test]
    fn lanes_assigned_round_robin() {
        let (_, workers) = placed(5);
        let lanes: Vec<LaneId> = workers.iter().map(|w| w.lane).collect();
        assert_eq!(lanes, vec![LaneId(0), LaneId(1), LaneId(2), LaneId(3), LaneId(0)]);
        assert_eq!(workers[0].base, workers[4].base);
    }

    #[test]
    fn hovers_on_a_circle() {
        let (anim, mut workers) = placed(3);
        for t in [0.0, 1.0, 7.5, 120.0] {
            anim.animate(&mut workers, t);
            for w in &workers {
                assert!((w.position.distance_xz(w.base) - anim.radius).abs() < 1e-4);
                assert_eq!(w.position.y, w.base.y);
            }
        }
    }

    #[test]
    fn angle_advances_with_time() {
        let (anim, workers) = placed(1);
        let w = &workers[0];
        let half_turn = std::f32::consts::PI / anim.angular_speed;
        let a = anim.position_at(w, 0.0);
        let b = anim.position_at(w, half_turn);
        assert!((a.distance_xz(b) - 2.0 * anim.radius).abs() < 1e-3);
    }
}
