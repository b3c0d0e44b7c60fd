//! `helm-trace` — records what every machine-driven agent was doing, when.
//!
//! The engine's only diagnostic surface is the active-state label plus the
//! agent kinematics; this crate persists both so a run can be inspected (or
//! plotted) after the fact.
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`row`]      | Plain-data row types                                |
//! | [`writer`]   | `TraceWriter` — backend abstraction                 |
//! | [`csv`]      | `CsvWriter` — two-file CSV backend                  |
//! | [`observer`] | `SimTraceObserver` — `SimObserver` → writer bridge  |
//! | [`error`]    | `TraceError`, `TraceResult<T>`                      |

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{TraceError, TraceResult};
pub use observer::SimTraceObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::TraceWriter;
