//! `helm-sim` — drives a population of state machines through ticks.
//!
//! The behavior engine itself never loops: the host game loop calls each
//! machine once per tick and something must drain the force sinks the
//! machines fill.  This crate is that harness.  It is deliberately minimal —
//! real deployments replace [`integrator`] with an actual physics engine and
//! keep only the ordering contract:
//!
//! 1. **Behavior phase**: every live machine updates, in spawn order.
//!    Within one machine, activities strictly precede transitions.
//! 2. **Drain phase**: the integrator sums each sink, clamps the net to the
//!    agent's `max_force`, and steps the kinematics.
//!
//! Everything is single-threaded and cooperative; no call suspends or
//! blocks.  Peer reads during the behavior phase may observe agents that
//! have not yet updated this tick — stale-by-one-tick by design.
//!
//! # Crate layout
//!
//! | Module         | Contents                                     |
//! |----------------|----------------------------------------------|
//! | [`sim`]        | `Sim` — state + the tick loop                |
//! | [`builder`]    | `SimBuilder` — validate-then-assemble        |
//! | [`integrator`] | Reference physics stand-in                   |
//! | [`observer`]   | `SimObserver` trait, `NoopObserver`          |
//! | [`error`]      | `SimError`, `SimResult<T>`                   |

pub mod builder;
pub mod error;
pub mod integrator;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
