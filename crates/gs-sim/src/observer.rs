//! Simulation observer trait for progress reporting and data collection.

use gs_agent::AgentStore;
use gs_behavior::{AgentEvent, CheckoutLaneRegistry};
use gs_core::Tick;

use crate::TickSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only ever see shared references:
/// nothing a presentation layer does can change the simulation.
///
/// # Example: checkout counter
///
/// ```rust,ignore
/// struct Checkouts(usize);
///
/// impl SimObserver for Checkouts {
///     fn on_event(&mut self, _tick: Tick, event: &AgentEvent) {
///         if matches!(event, AgentEvent::CheckoutFinished { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per event, in the order the controller emitted them.
    fn on_event(&mut self, _tick: Tick, _event: &AgentEvent) {}

    /// Called at the end of every tick with the aggregate summary and the
    /// updated population.
    fn on_tick_end(&mut self, _summary: &TickSummary, _agents: &AgentStore) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    fn on_snapshot(
        &mut self,
        _tick:   Tick,
        _agents: &AgentStore,
        _lanes:  &CheckoutLaneRegistry,
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<T: SimObserver + ?Sized> SimObserver for &mut T {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }
    fn on_event(&mut self, tick: Tick, event: &AgentEvent) {
        (**self).on_event(tick, event);
    }
    fn on_tick_end(&mut self, summary: &TickSummary, agents: &AgentStore) {
        (**self).on_tick_end(summary, agents);
    }
    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, lanes: &CheckoutLaneRegistry) {
        (**self).on_snapshot(tick, agents, lanes);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        (**self).on_sim_end(final_tick);
    }
}

/// Two observers side by side; `A` always hears about a hook before `B`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }
    fn on_event(&mut self, tick: Tick, event: &AgentEvent) {
        self.0.on_event(tick, event);
        self.1.on_event(tick, event);
    }
    fn on_tick_end(&mut self, summary: &TickSummary, agents: &AgentStore) {
        self.0.on_tick_end(summary, agents);
        self.1.on_tick_end(summary, agents);
    }
    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, lanes: &CheckoutLaneRegistry) {
        self.0.on_snapshot(tick, agents, lanes);
        self.1.on_snapshot(tick, agents, lanes);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
