//! Unit tests for helm-trace (CSV backend + observer bridge).

use helm_agent::{AgentInit, AgentStoreBuilder};
use helm_behavior::{StateMachine, Tuning};
use helm_core::{AgentId, Tick, Vec2};
use helm_sim::SimObserver;

use crate::{AgentSnapshotRow, CsvWriter, SimTraceObserver, TickSummaryRow, TraceWriter};

fn snapshot_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
    AgentSnapshotRow {
        agent_id,
        tick,
        x: 1.5,
        y: -2.5,
        vx: 0.0,
        vy: 10.0,
        health: 20,
        state: "seeking target",
    }
}

#[cfg(test)]
mod csv_writer {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        writer
            .write_snapshots(&[snapshot_row(0, 0), snapshot_row(1, 0)])
            .unwrap();
        writer
            .write_tick_summary(&TickSummaryRow {
                tick: 0,
                live_agents: 2,
            })
            .unwrap();
        writer.finish().unwrap();

        let snapshots =
            std::fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
        let mut lines = snapshots.lines();
        assert_eq!(
            lines.next().unwrap(),
            "agent_id,tick,x,y,vx,vy,health,state"
        );
        assert_eq!(snapshots.lines().count(), 3);
        assert!(snapshots.contains("seeking target"));

        let summaries =
            std::fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().next().unwrap(), "tick,live_agents");
        assert_eq!(summaries.lines().count(), 2);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_bridge {
    use super::*;

    #[test]
    fn snapshot_rows_follow_the_machines() {
        let mut builder = AgentStoreBuilder::new();
        let driven = builder.push(AgentInit {
            position: Vec2::new(3.0, 4.0),
            ..AgentInit::default()
        });
        // A second, machine-less agent must not appear in the trace.
        builder.push(AgentInit::default());
        let agents = builder.build();

        let machines = vec![StateMachine::fighter(
            driven,
            AgentId(1),
            vec![],
            Tuning::default(),
        )];

        let dir = tempfile::tempdir().unwrap();
        let mut observer = SimTraceObserver::new(CsvWriter::new(dir.path()).unwrap());

        observer.on_snapshot(Tick(7), &agents, &machines);
        observer.on_tick_end(Tick(7), 2);
        observer.on_sim_end(Tick(8));
        assert!(observer.take_error().is_none());

        let snapshots =
            std::fs::read_to_string(dir.path().join("agent_snapshots.csv")).unwrap();
        // Header + exactly one machine row.
        assert_eq!(snapshots.lines().count(), 2);
        let row = snapshots.lines().nth(1).unwrap();
        assert!(row.starts_with("0,7,3,4,"));
        // Machine never activated: the label says so.
        assert!(row.ends_with("inactive"));

        let summaries =
            std::fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().nth(1).unwrap(), "7,2");
    }
}
