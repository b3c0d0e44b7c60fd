//! Skirmish demo: three fighters hunt a drifting quarry through a rock
//! field while a bee swarm loiters, then gets pulled onto the same target
//! halfway through the run.
//!
//! Writes a CSV trace (`agent_snapshots.csv`, `tick_summaries.csv`) into
//! `./skirmish_trace/` and prints an end-of-run overlay to stdout.

use std::path::Path;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use helm_agent::{AgentInit, AgentStoreBuilder};
use helm_behavior::{StateMachine, Tuning};
use helm_core::{AgentId, SimConfig, Vec2};
use helm_sim::SimBuilder;
use helm_trace::{CsvWriter, SimTraceObserver, TraceWriter};
use helm_world::ObstacleField;

const FIGHTERS: usize = 3;
const SWARM_SIZE: usize = 8;
const ROCKS: usize = 40;

fn main() -> Result<()> {
    let config = SimConfig {
        tick_duration_secs: 1.0 / 60.0,
        total_ticks: 3600, // one minute of simulated combat
        seed: 7,
        snapshot_interval_ticks: 60,
    };
    let mut rng = SmallRng::seed_from_u64(config.seed);

    // ── Agents ────────────────────────────────────────────────────────────
    let mut agents = AgentStoreBuilder::new();

    // The quarry drifts on a fixed velocity; nothing steers it.
    let quarry = agents.push(AgentInit {
        position: Vec2::new(0.0, 0.0),
        velocity: Vec2::new(60.0, 25.0),
        health: 100,
        ..AgentInit::default()
    });

    let fighters: Vec<AgentId> = (0..FIGHTERS)
        .map(|_| {
            agents.push(AgentInit {
                position: Vec2::new(
                    rng.gen_range(-2500.0..-1500.0),
                    rng.gen_range(-1000.0..1000.0),
                ),
                ..AgentInit::default()
            })
        })
        .collect();

    // Bees spawn jittered around a hive point, faster but flimsier.
    let hive = Vec2::new(1800.0, -1200.0);
    let bees: Vec<AgentId> = (0..SWARM_SIZE)
        .map(|_| {
            agents.push(AgentInit {
                position: hive
                    + Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)),
                max_speed: 800.0,
                max_force: 60.0,
                health: 4,
                ..AgentInit::default()
            })
        })
        .collect();

    // ── Machines ──────────────────────────────────────────────────────────
    let mut machines = Vec::new();
    for &fighter in &fighters {
        // Every fighter keeps its distance from every other fighter.
        let hostiles = fighters.iter().copied().filter(|&o| o != fighter).collect();
        machines.push(StateMachine::fighter(
            fighter,
            quarry,
            hostiles,
            Tuning::default(),
        ));
    }
    let bee_tuning = Tuning {
        cohere_radius: 100.0,
        slow_radius: 200.0,
        ..Tuning::default()
    };
    for &bee in &bees {
        let peers = bees.iter().copied().filter(|&o| o != bee).collect();
        machines.push(StateMachine::swarm_member(
            bee,
            quarry,
            peers,
            bee_tuning.clone(),
        ));
    }

    // ── World ─────────────────────────────────────────────────────────────
    let rocks = ObstacleField::from_circles((0..ROCKS).map(|_| {
        (
            Vec2::new(rng.gen_range(-3000.0..3000.0), rng.gen_range(-2000.0..2000.0)),
            rng.gen_range(20.0..70.0),
        )
    }))?;

    let mut sim = SimBuilder::new(config, agents.build())
        .obstacles(rocks)
        .machines(machines)
        .build()?;

    // ── Run ───────────────────────────────────────────────────────────────
    let trace_dir = Path::new("skirmish_trace");
    std::fs::create_dir_all(trace_dir)?;
    let mut observer = SimTraceObserver::new(CsvWriter::new(trace_dir)?);

    let half = sim.config.total_ticks / 2;
    sim.run_ticks(half, &mut observer)?;
    println!("{}: raising swarm pull", sim.clock);
    sim.signals.swarm_pull = true;
    sim.run_ticks(half, &mut observer)?;

    if let Some(err) = observer.take_error() {
        return Err(err.into());
    }
    let mut writer = observer.into_writer();
    writer.finish()?;

    // ── Overlay ───────────────────────────────────────────────────────────
    println!("after {}:", sim.clock);
    for machine in &sim.machines {
        let agent = machine.agent();
        println!(
            "  {} {:<18} at {} hp {}",
            agent,
            machine.state_label(),
            sim.agents.pos(agent),
            sim.agents.health[agent.index()],
        );
    }
    println!(
        "  quarry at {}, {} projectiles queued, trace in {}/",
        sim.agents.pos(quarry),
        sim.spawns.pending().len(),
        trace_dir.display(),
    );

    Ok(())
}
