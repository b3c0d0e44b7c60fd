//! The `Sim` struct and its tick loop.

use helm_agent::AgentStore;
use helm_behavior::{BehaviorCtx, Signals, StateMachine};
use helm_core::{SimClock, SimConfig, TimeSource};
use helm_world::{ObstacleField, SpawnQueue};

use crate::{integrator, SimObserver, SimResult};

/// The main simulation runner.
///
/// Holds the world state and drives the two-phase tick loop:
///
/// 1. **Behavior phase**: for every machine whose agent is alive, build a
///    [`BehaviorCtx`] and call [`StateMachine::update`].  Machines run in
///    spawn order; each sees the current (possibly pre-update) kinematics
///    of its peers.
/// 2. **Drain phase**: [`integrator::integrate`] sums and clears every
///    force sink and steps positions.
///
/// The spawn queue is *not* drained here — projectile instantiation belongs
/// to the hosting game, which pulls from [`Sim::spawns`] whenever it likes.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Global configuration (total ticks, tick duration, snapshot cadence).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Which notion of "now" timed decisions observe.  Defaults to
    /// `Simulated` (deterministic); bind `TimeSource::wall_clock()` to
    /// reproduce real-time anchoring instead.
    pub time_source: TimeSource,

    /// All agent state (SoA arrays).
    pub agents: AgentStore,

    /// Obstacles for the avoidance detectors.
    pub obstacles: ObstacleField,

    /// Pending projectile spawns, appended by `Fire` activities.  Drained
    /// by the host.
    pub spawns: SpawnQueue,

    /// Shared world flags (swarm pull).  Written by the host at will.
    pub signals: Signals,

    /// One machine per driven agent, in spawn order.
    pub machines: Vec<StateMachine>,
}

impl Sim {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Perform the deferred first state entry on every machine that has not
    /// been activated yet.  Idempotent; called automatically by the run
    /// methods.
    pub fn awake(&mut self) -> SimResult<()> {
        let now_secs = self.time_source.now_secs(&self.clock);
        let Sim { agents, obstacles, spawns, signals, machines, .. } = self;
        for machine in machines.iter_mut() {
            if machine.is_active() {
                continue;
            }
            let mut ctx = BehaviorCtx::new(
                machine.agent(),
                now_secs,
                agents,
                obstacles,
                spawns,
                signals,
            );
            machine.activate(&mut ctx)?;
        }
        Ok(())
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.awake()?;
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            observer.on_tick_start(now);
            self.process_tick()?;
            observer.on_tick_end(now, self.live_agents());
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.agents, &self.machines);
            }
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`,
    /// never calls `on_sim_end`).  Useful for tests and incremental
    /// stepping with host intervention between chunks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.awake()?;
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.process_tick()?;
            observer.on_tick_end(now, self.live_agents());
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.agents, &self.machines);
            }
            self.clock.advance();
        }
        Ok(())
    }

    /// Number of agents currently alive.
    pub fn live_agents(&self) -> usize {
        self.agents.alive.iter().filter(|a| **a).count()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> SimResult<()> {
        let now_secs = self.time_source.now_secs(&self.clock);
        let dt = self.config.tick_duration_secs;
        let Sim { agents, obstacles, spawns, signals, machines, .. } = self;

        // ── Behavior phase: machines in spawn order ───────────────────────
        for machine in machines.iter_mut() {
            let agent = machine.agent();
            if !agents.is_alive(agent) {
                continue;
            }
            let mut ctx =
                BehaviorCtx::new(agent, now_secs, agents, obstacles, spawns, signals);
            machine.update(&mut ctx)?;
        }

        // ── Drain phase: forces become motion ─────────────────────────────
        integrator::integrate(agents, dt);
        Ok(())
    }
}
