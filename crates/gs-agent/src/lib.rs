//! `gs-agent` — per-agent state for the grocery simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`mood`]     | `Mood` (clamped 0–100), `MoodBand`                         |
//! | [`journey`]  | `Journey` waypoint list + cursor, `WaypointKind`           |
//! | [`basket`]   | `BasketPool`, the shared finite basket stack               |
//! | [`customer`] | `Customer`, `CustomerState`, `JourneyPlan`, timers         |
//! | [`worker`]   | `Worker`, a hovering staff member                          |
//! | [`store`]    | `AgentStore` (population), `AgentRngs` (per-customer RNG)  |
//! | [`builder`]  | `AgentStoreBuilder` (fluent construction)                  |
//!
//! This crate holds data only.  The state machine that drives it lives in
//! `gs-behavior`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod basket;
pub mod builder;
pub mod customer;
pub mod journey;
pub mod mood;
pub mod store;
pub mod worker;


pub use basket::BasketPool;
pub use builder::AgentStoreBuilder;
pub use customer::{Customer, CustomerState, Dwell, JourneyPlan, StuckTracker};
pub use journey::{Journey, WaypointKind};
pub use mood::{Mood, MoodBand};
pub use store::{AgentRngs, AgentStore};
pub use worker::Worker;
