//! `gs-sim` — tick loop orchestrator for the grocery store simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Lanes      — CheckoutLaneRegistry::rebuild from customer states.
//!   ② Customers  — ShopperController::step for each customer in
//!                  ascending AgentId order, sharing the registry and the
//!                  basket stack.
//!   ③ Workers    — WorkerAnimator::animate at the end-of-tick time.
//!   ④ Report     — on_event × n, on_tick_end, on_snapshot (every
//!                  output_interval_ticks).
//! ```
//!
//! Everything is single-threaded and deterministic: the same config and
//! seed replay identically.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::SimConfig;
//! use gs_sim::{NoopObserver, SimBuilder};
//! use gs_spatial::{ObstacleIndex, StoreLayout};
//!
//! let layout = StoreLayout::grocery();
//! let probe = ObstacleIndex::new(&layout.obstacles);
//! let mut sim = SimBuilder::new(SimConfig::default(), layout, probe).build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use summary::{RunTotals, TickSummary};
