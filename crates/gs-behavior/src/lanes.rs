//! Per-lane queues and busy flags.
//!
//! Queue membership is a derived view: [`CheckoutLaneRegistry::rebuild`]
//! recomputes it from customer states at the start of every tick, in
//! population order.  The busy flags are the only lane state that persists
//! between ticks; the customer at the front of a queue sets its lane's flag
//! when service starts and clears it when service ends.

use gs_agent::Customer;
use gs_core::{AgentId, LaneId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckoutLaneRegistry {
    queues: Vec<Vec<AgentId>>,
    busy:   Vec<bool>,
}

impl CheckoutLaneRegistry {
    /// `count` idle lanes with empty queues.
    pub fn new(count: usize) -> Self {
        Self {
            queues: vec![Vec::new(); count],
            busy:   vec![false; count],
        }
    }

    /// Replace every queue with the customers currently queueing or checking
    /// out there, in population order.
    ///
    /// Customers pointing at a lane outside the registry are ignored.
    pub fn rebuild(&mut self, customers: &[Customer]) {
        for q in &mut self.queues {
            q.clear();
        }
        for c in customers {
            if !c.state.is_in_queue() {
                continue;
            }
            if let Some(q) = self.queues.get_mut(c.lane.index()) {
                q.push(c.id);
            }
        }
    }

    /// Append `agent` to `lane` if it is not already queued there and return
    /// its position.  Used when a customer joins mid-tick, before the next
    /// rebuild would pick it up.
    pub fn join(&mut self, lane: LaneId, agent: AgentId) -> Option<usize> {
        let q = self.queues.get_mut(lane.index())?;
        if let Some(pos) = q.iter().position(|&a| a == agent) {
            return Some(pos);
        }
        q.push(agent);
        Some(q.len() - 1)
    }

    #[inline]
    pub fn is_busy(&self, lane: LaneId) -> bool {
        self.busy.get(lane.index()).copied().unwrap_or(false)
    }

    /// Set the busy flag.  Unknown lanes are ignored.
    #[inline]
    pub fn set_busy(&mut self, lane: LaneId, busy: bool) {
        if let Some(flag) = self.busy.get_mut(lane.index()) {
            *flag = busy;
        }
    }

    /// The queue at `lane`, front first.  Empty for unknown lanes.
    pub fn queue_of(&self, lane: LaneId) -> &[AgentId] {
        self.queues.get(lane.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Position of `agent` in `lane`'s queue.
    pub fn position_of(&self, lane: LaneId, agent: AgentId) -> Option<usize> {
        self.queue_of(lane).iter().position(|&a| a == agent)
    }

    pub fn lane_count(&self) -> usize {
        self.queues.len()
    }

    pub fn busy_count(&self) -> usize {
        self.busy.iter().filter(|&&b| b).count()
    }

    /// Total customers across all queues.
    pub fn queued_count(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }
}
