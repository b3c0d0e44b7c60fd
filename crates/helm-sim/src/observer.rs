//! Simulation observer trait for progress reporting and trace collection.

use helm_agent::AgentStore;
use helm_behavior::StateMachine;
use helm_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, live: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {live} agents alive");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any machine updates.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `live` is the number of agents
    /// still alive after the tick.
    fn on_tick_end(&mut self, _tick: Tick, _live: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks).
    ///
    /// Provides read-only access to the agent state and the machines so
    /// trace writers can record positions and active-state labels without
    /// the sim knowing about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _machines: &[StateMachine]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
