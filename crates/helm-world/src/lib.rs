//! `helm-world` — the world-query surfaces the behavior engine consumes.
//!
//! The engine core treats the surrounding game world as a set of narrow
//! collaborator contracts.  This crate provides the two that need real data
//! structures behind them:
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`obstacle`] | `ObstacleField` — R-tree point-overlap queries over circles |
//! | [`spawn`]    | `SpawnQueue`, `ProjectileSpawn` — the "spawn and register" sink |
//! | [`error`]    | `WorldError`, `WorldResult`                               |
//!
//! Everything else the engine consumes (kinematics, the force sink) lives in
//! `helm-agent`.

pub mod error;
pub mod obstacle;
pub mod spawn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WorldError, WorldResult};
pub use obstacle::{Obstacle, ObstacleField};
pub use spawn::{ProjectileKind, ProjectileSpawn, SpawnQueue};
