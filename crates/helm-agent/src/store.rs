//! Core agent storage: `AgentStore` (SoA data).

use helm_core::{AgentId, Vec2};

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Fields are `pub` for direct indexed access on hot paths; the accessor
/// methods exist for call sites where a name reads better than an index
/// expression.
#[derive(Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematic state ───────────────────────────────────────────────────
    /// World position.
    pub position: Vec<Vec2>,

    /// Current velocity.  Owned by the physics collaborator: behavior code
    /// reads it and steers by appending to `forces` instead of writing it.
    pub velocity: Vec<Vec2>,

    /// Facing angle in radians.  Orientation activities write this directly.
    pub orientation: Vec<f32>,

    /// Angular velocity in radians/second.
    pub angular_velocity: Vec<f32>,

    // ── Steering limits ───────────────────────────────────────────────────
    /// Top speed the integrator will allow.
    pub max_speed: Vec<f32>,

    /// Per-tick cap on the net steering force.
    pub max_force: Vec<f32>,

    // ── Health ────────────────────────────────────────────────────────────
    pub health: Vec<i32>,
    pub max_health: Vec<i32>,

    /// Cleared when health reaches zero.  Dead agents are skipped by the
    /// driver and excluded from peer queries.
    pub alive: Vec<bool>,

    // ── Force sink ────────────────────────────────────────────────────────
    /// Pending steering forces, appended by activities during the behavior
    /// phase and drained (summed + cleared) by the integrator each tick.
    pub forces: Vec<Vec<Vec2>>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Kinematic accessors ───────────────────────────────────────────────

    #[inline]
    pub fn pos(&self, agent: AgentId) -> Vec2 {
        self.position[agent.index()]
    }

    #[inline]
    pub fn vel(&self, agent: AgentId) -> Vec2 {
        self.velocity[agent.index()]
    }

    /// Current speed as a fraction of `max_speed`, in `[0, 1]`.
    ///
    /// Zero if `max_speed` is zero (a pinned agent has no "full speed").
    pub fn speed_fraction(&self, agent: AgentId) -> f32 {
        let max = self.max_speed[agent.index()];
        if max <= 0.0 {
            0.0
        } else {
            (self.velocity[agent.index()].length() / max).min(1.0)
        }
    }

    #[inline]
    pub fn is_alive(&self, agent: AgentId) -> bool {
        self.alive[agent.index()]
    }

    // ── Force sink ────────────────────────────────────────────────────────

    /// Append a steering force for the integrator to pick up this tick.
    #[inline]
    pub fn push_force(&mut self, agent: AgentId, force: Vec2) {
        self.forces[agent.index()].push(force);
    }

    /// Pending forces appended so far this tick.
    #[inline]
    pub fn pending_forces(&self, agent: AgentId) -> &[Vec2] {
        &self.forces[agent.index()]
    }

    /// Sum and clear the force sink.  The integrator calls this exactly once
    /// per agent per tick; the returned net force is still unclamped.
    pub fn drain_net_force(&mut self, agent: AgentId) -> Vec2 {
        let sink = &mut self.forces[agent.index()];
        let net: Vec2 = sink.drain(..).sum();
        net
    }

    // ── Health mutation (gameplay collaborator surface) ───────────────────

    /// Subtract `amount` from health, flooring at zero.  An agent whose
    /// health reaches zero is marked dead.
    pub fn apply_damage(&mut self, agent: AgentId, amount: i32) {
        let i = agent.index();
        self.health[i] = (self.health[i] - amount).max(0);
        if self.health[i] == 0 {
            self.alive[i] = false;
        }
    }

    /// Add `amount` to health, capped at `max_health`.
    pub fn heal_by(&mut self, agent: AgentId, amount: i32) {
        let i = agent.index();
        self.health[i] = (self.health[i] + amount).min(self.max_health[i]);
    }
}
