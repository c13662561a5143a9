//! Plain data row types written by output backends.

use gs_agent::Customer;
use gs_core::Tick;
use gs_sim::TickSummary;

/// One customer at one snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerSnapshotRow {
    pub agent_id:        u32,
    pub tick:            u64,
    pub x:               f32,
    pub z:               f32,
    pub state:           &'static str,
    pub mood:            f32,
    pub items_collected: u32,
    pub items_needed:    u32,
    /// `u16::MAX` before the first journey is planned.
    pub lane:            u16,
    /// Place in the lane queue; `None` outside the queue states.
    pub queue_index:     Option<u32>,
    pub has_basket:      bool,
}

impl CustomerSnapshotRow {
    pub fn new(tick: Tick, c: &Customer) -> Self {
        Self {
            agent_id:        c.id.0,
            tick:            tick.0,
            x:               c.position.x,
            z:               c.position.z,
            state:           c.state.as_str(),
            mood:            c.mood.value(),
            items_collected: c.items_collected.len() as u32,
            items_needed:    c.shopping_list.len() as u32,
            lane:            c.lane.0,
            queue_index:     c.queue_index.map(|i| i as u32),
            has_basket:      c.basket_attached(),
        }
    }
}

/// Aggregate statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub time_secs:         f64,
    pub get_basket:        u32,
    pub shopping:          u32,
    pub queueing:          u32,
    pub checking_out:      u32,
    pub exiting:           u32,
    pub busy_lanes:        u32,
    pub baskets_available: u32,
    pub mean_mood:         f32,
    pub items_found:       u32,
    pub checkouts:         u32,
    pub escapes:           u32,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:              s.tick.0,
            time_secs:         s.time_secs,
            get_basket:        s.get_basket as u32,
            shopping:          s.shopping as u32,
            queueing:          s.queueing as u32,
            checking_out:      s.checking_out as u32,
            exiting:           s.exiting as u32,
            busy_lanes:        s.busy_lanes as u32,
            baskets_available: s.baskets_available as u32,
            mean_mood:         s.mean_mood,
            items_found:       s.items_found as u32,
            checkouts:         s.checkouts as u32,
            escapes:           s.escapes as u32,
        }
    }
}
