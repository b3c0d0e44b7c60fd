//! `helm-agent` — Structure-of-Arrays storage for agent state.
//!
//! Holds everything the behavior engine reads and writes about an agent:
//! kinematics (position, velocity, orientation, angular velocity), steering
//! limits (`max_speed`, `max_force`), health, and the per-agent force sink
//! that steering activities append to and the physics integrator drains.
//!
//! # Crate layout
//!
//! | Module      | Contents                                    |
//! |-------------|---------------------------------------------|
//! | [`store`]   | `AgentStore` — the SoA arrays + accessors   |
//! | [`builder`] | `AgentStoreBuilder`, `AgentInit`            |
//!
//! # Ownership model
//!
//! The store is owned by the simulation driver and lent into the behavior
//! engine through the per-tick context.  Velocity is conceptually owned by
//! the physics collaborator: activities only read it, and only the
//! integrator (or a state's documented velocity write, e.g. `Idle` zeroing
//! it on entry) mutates it.

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::{AgentInit, AgentStoreBuilder};
pub use store::AgentStore;
