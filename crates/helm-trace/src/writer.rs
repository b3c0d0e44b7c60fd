//! Backend abstraction: anything that can persist trace rows.

use crate::{AgentSnapshotRow, TickSummaryRow, TraceResult};

/// A sink for trace rows.  Implemented by the CSV backend here; hosts with
/// their own telemetry pipelines implement it over whatever they have.
pub trait TraceWriter {
    /// Persist a batch of agent snapshots (one snapshot tick's worth).
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> TraceResult<()>;

    /// Persist one tick summary.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> TraceResult<()>;

    /// Flush and close.  Must be idempotent — the observer calls it from
    /// `on_sim_end`, and hosts may call it again defensively.
    fn finish(&mut self) -> TraceResult<()>;
}
