//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use gs_agent::AgentStoreBuilder;
//!
//! let (store, rngs) = AgentStoreBuilder::new(8, /*seed=*/ 42)
//!     .workers(3)
//!     .build();
//!
//! assert_eq!(store.customer_count(), 8);
//! assert_eq!(store.worker_count(), 3);
//! assert_eq!(rngs.len(), 8);
//! ```
//!
//! Customers start with an empty journey and workers unplaced; the
//! simulation builder plans journeys and positions workers afterwards.

use gs_core::{AgentId, WorkerId};

use crate::{AgentRngs, AgentStore, Customer, Worker};

pub struct AgentStoreBuilder {
    customers: usize,
    workers:   usize,
    seed:      u64,
}

impl AgentStoreBuilder {
    /// Create a builder for `customers` shoppers using `seed` as the global
    /// RNG seed.
    pub fn new(customers: usize, seed: u64) -> Self {
        Self { customers, workers: 0, seed }
    }

    /// Number of worker agents.  Default: none.
    pub fn workers(mut self, count: usize) -> Self {
        self.workers = count;
        self
    }

    pub fn build(self) -> (AgentStore, AgentRngs) {
        let customers = (0..self.customers as u32)
            .map(|i| Customer::new(AgentId(i)))
            .collect();
        let workers = (0..self.workers as u32)
            .map(|i| Worker::new(WorkerId(i)))
            .collect();

        let store = AgentStore { customers, workers };
        let rngs = AgentRngs::new(self.customers, self.seed);

        (store, rngs)
    }
}
