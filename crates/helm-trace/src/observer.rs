//! `SimTraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use helm_agent::AgentStore;
use helm_behavior::StateMachine;
use helm_core::Tick;
use helm_sim::SimObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::TraceWriter;
use crate::TraceError;

/// A [`SimObserver`] that records tick summaries and per-machine snapshots
/// to any [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimTraceObserver<W: TraceWriter> {
    writer:     W,
    last_error: Option<TraceError>,
}

impl<W: TraceWriter> SimTraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect or finish it manually).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for SimTraceObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, live: usize) {
        let row = TickSummaryRow {
            tick:        tick.0,
            live_agents: live as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, machines: &[StateMachine]) {
        let rows: Vec<AgentSnapshotRow> = machines
            .iter()
            .map(|machine| {
                let agent = machine.agent();
                let i = agent.index();
                AgentSnapshotRow {
                    agent_id: agent.0,
                    tick:     tick.0,
                    x:        agents.position[i].x,
                    y:        agents.position[i].y,
                    vx:       agents.velocity[i].x,
                    vy:       agents.velocity[i].y,
                    health:   agents.health[i],
                    state:    machine.state_label(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
