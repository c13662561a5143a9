//! Per-tick aggregates handed to observers, and running totals.

use gs_agent::{AgentStore, BasketPool, CustomerState};
use gs_behavior::{AgentEvent, CheckoutLaneRegistry};
use gs_core::Tick;

/// What the store looked like at the end of one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSummary {
    pub tick:              Tick,
    /// Simulated seconds at the end of the tick.
    pub time_secs:         f64,

    // ── Population by state ───────────────────────────────────────────────
    pub get_basket:        usize,
    pub shopping:          usize,
    pub queueing:          usize,
    pub checking_out:      usize,
    pub exiting:           usize,

    // ── Shared resources ──────────────────────────────────────────────────
    pub busy_lanes:        usize,
    pub baskets_available: usize,
    pub mean_mood:         f32,

    // ── Events this tick ──────────────────────────────────────────────────
    pub items_found:       usize,
    pub checkouts:         usize,
    pub escapes:           usize,
    pub journeys_started:  usize,
}

impl TickSummary {
    pub fn collect(
        tick:      Tick,
        time_secs: f64,
        agents:    &AgentStore,
        lanes:     &CheckoutLaneRegistry,
        baskets:   &BasketPool,
        events:    &[AgentEvent],
    ) -> Self {
        let mut s = TickSummary {
            tick,
            time_secs,
            busy_lanes: lanes.busy_count(),
            baskets_available: baskets.available(),
            mean_mood: agents.mean_mood(),
            ..TickSummary::default()
        };
        for c in &agents.customers {
            match c.state {
                CustomerState::GetBasket   => s.get_basket += 1,
                CustomerState::Shopping    => s.shopping += 1,
                CustomerState::Queueing    => s.queueing += 1,
                CustomerState::CheckingOut => s.checking_out += 1,
                CustomerState::Exiting     => s.exiting += 1,
            }
        }
        for e in events {
            match e {
                AgentEvent::ItemFound { .. }        => s.items_found += 1,
                AgentEvent::CheckoutFinished { .. } => s.checkouts += 1,
                AgentEvent::StuckEscape { .. }      => s.escapes += 1,
                AgentEvent::JourneyReset { .. }     => s.journeys_started += 1,
                _ => {}
            }
        }
        s
    }

    /// Customers waiting in or being served at a lane.
    pub fn in_lanes(&self) -> usize {
        self.queueing + self.checking_out
    }
}

/// Event counts accumulated over a whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub ticks:            u64,
    pub items_found:      u64,
    pub checkouts:        u64,
    pub escapes:          u64,
    pub abandoned_queues: u64,
    pub basket_shortages: u64,
    pub journeys_started: u64,
}

impl RunTotals {
    pub fn record(&mut self, events: &[AgentEvent]) {
        self.ticks += 1;
        for e in events {
            match e {
                AgentEvent::ItemFound { .. }        => self.items_found += 1,
                AgentEvent::CheckoutFinished { .. } => self.checkouts += 1,
                AgentEvent::StuckEscape { .. }      => self.escapes += 1,
                AgentEvent::QueueAbandoned { .. }   => self.abandoned_queues += 1,
                AgentEvent::BasketShortage { .. }   => self.basket_shortages += 1,
                AgentEvent::JourneyReset { .. }     => self.journeys_started += 1,
                _ => {}
            }
        }
    }
}
