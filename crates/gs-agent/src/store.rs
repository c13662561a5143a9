//! Population storage: `AgentStore` (agent data) and `AgentRngs` (per-agent
//! RNG).
//!
//! # Why two structs?
//!
//! The tick loop steps one customer at a time and needs `&mut Customer` and
//! that customer's `&mut AgentRng` together, while the RNGs must never be
//! reachable through a snapshot handed to observers.  Keeping the RNGs in a
//! separate `AgentRngs` lets both borrows coexist:
//!
//! ```ignore
//! for customer in &mut store.customers {
//!     let rng = rngs.get_mut(customer.id);
//!     controller.step(customer, &mut lanes, &mut baskets, &env, rng, &mut events);
//! }
//! ```

use gs_core::{AgentId, AgentRng};

use crate::customer::{Customer, CustomerState};
use crate::worker::Worker;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-customer deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one customer's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// The whole population.
///
/// `customers[i].id == AgentId(i)` and `workers[i].id == WorkerId(i)` for
/// every `i`; the population size never changes after construction.
pub struct AgentStore {
    pub customers: Vec<Customer>,
    pub workers:   Vec<Worker>,
}

impl AgentStore {
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Iterator over all customer `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.customers.len() as u32).map(AgentId)
    }

    pub fn customer(&self, agent: AgentId) -> Option<&Customer> {
        self.customers.get(agent.index())
    }

    pub fn customer_mut(&mut self, agent: AgentId) -> Option<&mut Customer> {
        self.customers.get_mut(agent.index())
    }

    /// Number of customers currently in `state`.
    pub fn count_in(&self, state: CustomerState) -> usize {
        self.customers.iter().filter(|c| c.state == state).count()
    }

    /// Mean mood over all customers, 100 for an empty store.
    pub fn mean_mood(&self) -> f32 {
        if self.customers.is_empty() {
            return 100.0;
        }
        let sum: f32 = self.customers.iter().map(|c| c.mood.value()).sum();
        sum / self.customers.len() as f32
    }
}
