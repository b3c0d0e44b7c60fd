//! Fluent builder for constructing a [`Sim`].

use helm_agent::AgentStore;
use helm_behavior::{Signals, StateMachine};
use helm_core::{SimConfig, TimeSource};
use helm_world::{ObstacleField, SpawnQueue};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, tick duration, snapshot cadence
/// - [`AgentStore`] — from [`helm_agent::AgentStoreBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                  |
/// |-------------------|--------------------------|
/// | `.machines(v)`    | No machines              |
/// | `.obstacles(f)`   | `ObstacleField::empty()` |
/// | `.time_source(t)` | `TimeSource::Simulated`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, store)
///     .obstacles(field)
///     .machines(machines)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:      SimConfig,
    agents:      AgentStore,
    machines:    Vec<StateMachine>,
    obstacles:   Option<ObstacleField>,
    time_source: TimeSource,
}

impl SimBuilder {
    /// Create a builder with the required inputs.
    pub fn new(config: SimConfig, agents: AgentStore) -> Self {
        Self {
            config,
            agents,
            machines:    Vec::new(),
            obstacles:   None,
            time_source: TimeSource::Simulated,
        }
    }

    /// Supply the state machines (at most one per agent; validated in
    /// [`build`][Self::build]).
    pub fn machines(mut self, machines: Vec<StateMachine>) -> Self {
        self.machines = machines;
        self
    }

    /// Supply the obstacle field the avoidance detectors query.
    pub fn obstacles(mut self, obstacles: ObstacleField) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    /// Bind the time source for timed decisions.  The default `Simulated`
    /// keeps runs reproducible; `TimeSource::wall_clock()` matches hosts
    /// that want cooldowns in real seconds.
    pub fn time_source(mut self, time_source: TimeSource) -> Self {
        self.time_source = time_source;
        self
    }

    /// Validate machine wiring and assemble a ready-to-run [`Sim`].
    ///
    /// Machines are left inactive; the first run call (or an explicit
    /// [`Sim::awake`]) performs their initial state entry.
    pub fn build(self) -> SimResult<Sim> {
        let agent_count = self.agents.count;

        let mut seen = vec![false; agent_count];
        for machine in &self.machines {
            let agent = machine.agent();
            if agent.index() >= agent_count {
                return Err(SimError::UnknownMachineAgent(agent));
            }
            if seen[agent.index()] {
                return Err(SimError::DuplicateMachine(agent));
            }
            seen[agent.index()] = true;
        }

        Ok(Sim {
            clock:       self.config.make_clock(),
            config:      self.config,
            time_source: self.time_source,
            agents:      self.agents,
            obstacles:   self.obstacles.unwrap_or_else(ObstacleField::empty),
            spawns:      SpawnQueue::new(),
            signals:     Signals::default(),
            machines:    self.machines,
        })
    }
}
