//! `helm-core` — foundational types for the `helm` behavior engine.
//!
//! This crate is a dependency of every other `helm-*` crate.  It intentionally
//! has no `helm-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `AgentId`, `ObstacleId`                             |
//! | [`vec2`]     | `Vec2` — 2D vector math for steering forces         |
//! | [`time`]     | `Tick`, `SimClock`, `TimeSource`, `SimConfig`       |
//! | [`error`]    | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all plain-data types.  |

pub mod error;
pub mod ids;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, ObstacleId};
pub use time::{SimClock, SimConfig, Tick, TimeSource};
pub use vec2::Vec2;
