//! `gs-core` — foundational types for the grocery store simulation.
//!
//! This crate is a dependency of every other `gs-*` crate.  It intentionally
//! has no `gs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `AgentId`, `WorkerId`, `LaneId`, `BasketId`             |
//! | [`geo`]   | `Vec3`, planar distance and direction helpers           |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`                         |
//! | [`rng`]   | `RandomSource`, `AgentRng` (per-agent), `SimRng`        |
//! | [`error`] | `GsError`, `GsResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required for loading `SimConfig` from a file.              |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GsError, GsResult};
pub use geo::Vec3;
pub use ids::{AgentId, BasketId, LaneId, WorkerId};
pub use rng::{AgentRng, RandomSource, SimRng};
pub use time::{SimClock, SimConfig, Tick};
