//! `gs-behavior` — what customers and workers do each tick.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`controller`] | `ShopperController`, the customer state machine             |
//! | [`lanes`]      | `CheckoutLaneRegistry` (per-lane queue + busy flag)         |
//! | [`planner`]    | `JourneyPlanner` (random list, lane, waypoints per lap)     |
//! | [`context`]    | `StepEnv<'a, P>` (delta + static world for one tick)        |
//! | [`event`]      | `AgentEvent`                                                |
//! | [`tuning`]     | `BehaviorTuning` (every behavior constant)                  |
//! | [`worker`]     | `WorkerAnimator` (hover circles)                            |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                        |
//!
//! # Design notes
//!
//! One tick runs strictly in sequence:
//!
//! 1. `CheckoutLaneRegistry::rebuild` derives every lane queue from the
//!    current customer states.
//! 2. `ShopperController::step` runs once per customer in population order.
//!    Customers share only the registry and the basket stack, both passed
//!    in explicitly.
//! 3. `WorkerAnimator::animate` moves the workers.
//!
//! Every random draw goes through `gs_core::RandomSource`, so a scripted
//! source can force any branch in tests.

pub mod context;
pub mod controller;
pub mod error;
pub mod event;
pub mod lanes;
pub mod planner;
pub mod tuning;
pub mod worker;

#[cfg(test)]
mod tests;

pub use context::StepEnv;
pub use controller::ShopperController;
pub use error::{BehaviorError, BehaviorResult};
pub use event::AgentEvent;
pub use lanes::CheckoutLaneRegistry;
pub use planner::{JourneyPlanner, AISLE_START};
pub use tuning::BehaviorTuning;
pub use worker::WorkerAnimator;
