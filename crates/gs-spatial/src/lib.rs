//! `gs-spatial` — obstacle volumes, collision probing, and the store map.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`aabb`]   | `Aabb`, the free `collides` probe                            |
//! | [`probe`]  | `CollisionProbe` trait, `ObstacleList`, `ObstacleIndex`      |
//! | [`layout`] | `StoreLayout`, `LanePlacement`, the reference grocery map    |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod aabb;
pub mod error;
pub mod layout;
pub mod probe;


pub use aabb::{collides, Aabb};
pub use error::{SpatialError, SpatialResult};
pub use layout::{LanePlacement, StoreLayout, WALK_HEIGHT};
pub use probe::{CollisionProbe, ObstacleIndex, ObstacleList, DEFAULT_AGENT_RADIUS};
