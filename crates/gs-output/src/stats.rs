//! Per-customer stats board.
//!
//! A read-only presentation layer: it samples every customer once per tick
//! and never touches simulation state.  Each visit (journey) gets a fresh
//! spending budget and a fresh in-store timer.
//!
//! ```text
//! Customer Stats
//!   #  time     money    items  mood          visits  served
//!   1   12.3s   $45.67   2/5     88 content        3       2
//! ```

use std::fmt;

use gs_agent::{AgentStore, CustomerState, MoodBand};
use gs_behavior::AgentEvent;
use gs_core::{AgentId, RandomSource, SimRng, Tick};
use gs_sim::{SimObserver, TickSummary};

/// Spending budget range per visit, in dollars.
pub const MONEY_RANGE: (f32, f32) = (20.0, 100.0);

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerStats {
    /// Seconds since the current visit began.
    pub time_in_store:   f64,
    pub money:           f32,
    pub items_needed:    usize,
    pub items_collected: usize,
    pub mood:            f32,
    /// Mood as of the previous tick.
    pub last_mood:       f32,
    pub state:           CustomerState,
    /// Visits begun, including the current one.
    pub visits:          u32,
    /// Visits that ended at a till.
    pub served:          u32,
}

impl CustomerStats {
    fn new(money: f32) -> Self {
        Self {
            time_in_store:   0.0,
            money,
            items_needed:    0,
            items_collected: 0,
            mood:            100.0,
            last_mood:       100.0,
            state:           CustomerState::GetBasket,
            visits:          1,
            served:          0,
        }
    }

    pub fn band(&self) -> MoodBand {
        MoodBand::of(self.mood)
    }
}

/// Collects [`CustomerStats`] for every customer as a [`SimObserver`].
pub struct StatsBoard {
    rows:             Vec<CustomerStats>,
    rng:              SimRng,
    last_time:        f64,
    served:           u64,
    finished_visits:  u64,
    finished_secs:    f64,
}

impl StatsBoard {
    /// `seed` drives the per-visit budgets only.
    pub fn new(seed: u64) -> Self {
        Self {
            rows:            Vec::new(),
            rng:             SimRng::new(seed),
            last_time:       0.0,
            served:          0,
            finished_visits: 0,
            finished_secs:   0.0,
        }
    }

    pub fn rows(&self) -> &[CustomerStats] {
        &self.rows
    }

    pub fn get(&self, agent: AgentId) -> Option<&CustomerStats> {
        self.rows.get(agent.index())
    }

    /// Checkouts completed across all customers.
    pub fn served(&self) -> u64 {
        self.served
    }

    /// Mean length of finished visits, or of the visits in progress if none
    /// has finished yet.
    pub fn average_visit_secs(&self) -> f64 {
        if self.finished_visits > 0 {
            return self.finished_secs / self.finished_visits as f64;
        }
        if self.rows.is_empty() {
            return 0.0;
        }
        self.rows.iter().map(|r| r.time_in_store).sum::<f64>() / self.rows.len() as f64
    }

    pub fn average_mood(&self) -> f32 {
        if self.rows.is_empty() {
            return 100.0;
        }
        self.rows.iter().map(|r| r.mood).sum::<f32>() / self.rows.len() as f32
    }

    /// Plain-text table, one line per customer.
    pub fn render(&self) -> String {
        let mut out = String::from("Customer Stats\n");
        out.push_str("    #      time     money  items  mood            visits  served\n");
        for (i, r) in self.rows.iter().enumerate() {
            out.push_str(&format!(
                "{:>5} {:>8.1}s {:>8} {:>3}/{:<3} {:>3} {:<10} {:>7} {:>7}\n",
                i + 1,
                r.time_in_store,
                format!("${:.2}", r.money),
                r.items_collected,
                r.items_needed,
                r.mood.round() as i32,
                r.band().label(),
                r.visits,
                r.served,
            ));
        }
        out
    }

    fn ensure_rows(&mut self, count: usize) {
        while self.rows.len() < count {
            let money = self.draw_money();
            self.rows.push(CustomerStats::new(money));
        }
    }

    fn draw_money(&mut self) -> f32 {
        self.rng.range_f32(MONEY_RANGE.0, MONEY_RANGE.1)
    }
}

impl SimObserver for StatsBoard {
    fn on_event(&mut self, _tick: Tick, event: &AgentEvent) {
        match *event {
            AgentEvent::JourneyReset { agent, .. } => {
                self.ensure_rows(agent.index() + 1);
                let money = self.draw_money();
                let row = &mut self.rows[agent.index()];
                self.finished_visits += 1;
                self.finished_secs += row.time_in_store;
                row.time_in_store = 0.0;
                row.money = money;
                row.visits += 1;
            }
            AgentEvent::CheckoutFinished { agent, .. } => {
                self.ensure_rows(agent.index() + 1);
                self.rows[agent.index()].served += 1;
                self.served += 1;
            }
            _ => {}
        }
    }

    fn on_tick_end(&mut self, summary: &TickSummary, agents: &AgentStore) {
        let dt = (summary.time_secs - self.last_time).max(0.0);
        self.last_time = summary.time_secs;

        self.ensure_rows(agents.customer_count());
        for (row, c) in self.rows.iter_mut().zip(&agents.customers) {
            row.time_in_store += dt;
            row.last_mood = row.mood;
            row.mood = c.mood.value();
            row.items_needed = c.shopping_list.len();
            row.items_collected = c.items_collected.len();
            row.state = c.state;
        }
    }
}

impl fmt::Display for StatsBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
