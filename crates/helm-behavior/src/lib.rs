//! `helm-behavior` — the reactive behavior core.
//!
//! Each agent's decision logic is a finite state machine whose states bundle
//! composable *activities* (continuous per-tick behaviors, mostly steering)
//! and *transitions* (guarded edges evaluated by boolean *decisions*).  Once
//! per simulation tick the machine decides what its agent is doing and
//! whether it should switch to doing something else.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`steering`]   | Pure desired-velocity → clamped-force math                     |
//! | [`target`]     | `Target` — a tracked agent or a fixed point                    |
//! | [`tuning`]     | `Tuning` — every named behavior constant in one struct         |
//! | [`ctx`]        | `BehaviorCtx<'_>` — the per-tick world view, `Signals`         |
//! | [`decision`]   | `Decision` enum — boolean predicates over the context          |
//! | [`activity`]   | `Activity` enum — per-tick behaviors with enter/execute/exit   |
//! | [`transition`] | `Transition` — decision + two optional next states             |
//! | [`state`]      | `State`, `StateKind` — activity/transition aggregates          |
//! | [`machine`]    | `StateMachine`, `Wiring` — one machine per agent               |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Per-tick control flow
//!
//! `StateMachine::update` → `State::execute` → every activity executes in
//! list order (appending forces to the agent's sink, or writing orientation
//! directly), then every transition is evaluated in list order **without
//! early exit**.  A firing transition immediately exits the current state,
//! installs its next state, and enters it — and the scan continues over the
//! *original* state's transition list, so a later transition can override an
//! earlier swap within the same tick.  Last applicable transition wins.
//! That ordering is part of the machine's observable contract; see
//! [`State::execute`] before "optimizing" it.
//!
//! The machine itself interprets nothing: it owns one state slot and the
//! wiring (target, peers, tuning) that states read when they rebuild their
//! lists on entry.

pub mod activity;
pub mod ctx;
pub mod decision;
pub mod error;
pub mod machine;
pub mod state;
pub mod steering;
pub mod target;
pub mod transition;
pub mod tuning;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::Activity;
pub use ctx::{BehaviorCtx, Signals};
pub use decision::Decision;
pub use error::{BehaviorError, BehaviorResult};
pub use machine::{StateMachine, Wiring};
pub use state::{State, StateKind};
pub use target::Target;
pub use transition::Transition;
pub use tuning::Tuning;
