//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{AgentSnapshotRow, TickSummaryRow, TraceResult};

/// Writes simulation traces to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "x", "y", "vx", "vy", "health", "state"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "live_agents"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl TraceWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> TraceResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.health.to_string(),
                row.state.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> TraceResult<()> {
        self.summaries
            .write_record(&[row.tick.to_string(), row.live_agents.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
