//! The `Sim` struct and its tick loop.

use tracing::info;

use gs_agent::{AgentRngs, AgentStore, BasketPool};
use gs_behavior::{AgentEvent, CheckoutLaneRegistry, ShopperController, StepEnv, WorkerAnimator};
use gs_core::{SimClock, SimConfig};
use gs_spatial::{CollisionProbe, StoreLayout};

use crate::summary::{RunTotals, TickSummary};
use crate::SimObserver;

/// The main simulation runner.
///
/// `Sim<P>` holds all simulation state and drives the tick loop:
///
/// 1. **Lanes**: rebuild every checkout queue from customer states.
/// 2. **Customers**: [`ShopperController::step`] once per customer, in
///    population order, each with its own RNG.
/// 3. **Workers**: move every worker along its hover circle.
/// 4. **Report**: forward events, then the tick summary, then (at the
///    configured interval) a snapshot to the observer.
///
/// A tick cannot fail.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: CollisionProbe> {
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick and elapsed seconds.
    pub clock: SimClock,

    /// Static map.  Never changes during a run.
    pub layout: StoreLayout,

    /// Obstacle test used for every movement.
    pub probe: P,

    /// Customers and workers.
    pub agents: AgentStore,

    /// Per-customer deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    pub controller: ShopperController,
    pub animator:   WorkerAnimator,

    /// Lane queues (rebuilt every tick) and busy flags.
    pub lanes: CheckoutLaneRegistry,

    /// Shared basket stack.
    pub baskets: BasketPool,

    /// Event counts since the simulation was built.
    pub totals: RunTotals,

    /// Events of the most recent tick; reused between ticks.
    pub(crate) events: Vec<AgentEvent>,
}

impl<P: CollisionProbe> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(from = %self.clock, to = self.config.total_ticks, "run started");
        while self.clock.current_tick < self.config.end_tick() {
            self.tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);

        let t = &self.totals;
        info!(
            at = %self.clock,
            checkouts = t.checkouts,
            journeys = t.journeys_started,
            escapes = t.escapes,
            abandoned = t.abandoned_queues,
            shortages = t.basket_shortages,
            mean_mood = self.agents.mean_mood(),
            "run finished"
        );
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// Events emitted during the most recent tick, in emission order.
    pub fn last_events(&self) -> &[AgentEvent] {
        &self.events
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        self.step_population();

        for event in &self.events {
            observer.on_event(now, event);
        }
        self.totals.record(&self.events);

        let summary = TickSummary::collect(
            now,
            self.elapsed_after_tick(),
            &self.agents,
            &self.lanes,
            &self.baskets,
            &self.events,
        );
        observer.on_tick_end(&summary, &self.agents);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents, &self.lanes);
        }

        self.clock.advance();
    }

    fn step_population(&mut self) {
        self.events.clear();
        self.lanes.rebuild(&self.agents.customers);

        // Explicit field borrows so the borrow checker sees disjoint access.
        let env = StepEnv::new(self.clock.tick_secs, &self.layout, &self.probe);
        let controller = &self.controller;
        let rngs = &mut self.rngs;
        for c in &mut self.agents.customers {
            let rng = rngs.get_mut(c.id);
            controller.step(c, &mut self.lanes, &mut self.baskets, &env, rng, &mut self.events);
        }

        let t = self.elapsed_after_tick() as f32;
        self.animator.animate(&mut self.agents.workers, t);
    }

    fn elapsed_after_tick(&self) -> f64 {
        self.clock.elapsed_secs() + f64::from(self.clock.tick_secs)
    }
}
