//! The per-tick world view passed to every decision and activity.

use helm_agent::AgentStore;
use helm_core::{AgentId, Vec2};
use helm_world::{ObstacleField, SpawnQueue};

use crate::Target;

// ── Signals ───────────────────────────────────────────────────────────────────

/// World-level flags shared by every machine, written by gameplay
/// collaborators and read by decisions.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signals {
    /// Raised when the swarm should abandon loitering and converge on its
    /// target; dropped to recall it.
    pub swarm_pull: bool,
}

// ── BehaviorCtx ───────────────────────────────────────────────────────────────

/// Everything one agent's machine may touch during one tick.
///
/// Built fresh by the driver for each machine update.  `agents` is mutable
/// because activities append to the force sink, write orientation, and (for
/// `Heal`) mutate health; all other world borrows are read-only except the
/// spawn queue.
///
/// Peer reads go through the same `agents` store the peers themselves are
/// updated in, so a machine that runs earlier in the tick is observed
/// pre-update by one that runs later.  Stale-by-one-tick peer kinematics are
/// expected and acceptable.
pub struct BehaviorCtx<'a> {
    /// The agent this machine drives.
    pub agent: AgentId,

    /// Current time in seconds under the integrator's chosen
    /// [`TimeSource`][helm_core::TimeSource].  Timed decisions capture and
    /// compare against this value and nothing else.
    pub now_secs: f64,

    /// All agent state, including this agent's own row.
    pub agents: &'a mut AgentStore,

    /// Obstacle overlap queries for the avoidance detectors.
    pub obstacles: &'a ObstacleField,

    /// The "spawn and register" sink for projectiles.
    pub spawns: &'a mut SpawnQueue,

    /// Shared world flags.
    pub signals: &'a Signals,
}

impl<'a> BehaviorCtx<'a> {
    pub fn new(
        agent:     AgentId,
        now_secs:  f64,
        agents:    &'a mut AgentStore,
        obstacles: &'a ObstacleField,
        spawns:    &'a mut SpawnQueue,
        signals:   &'a Signals,
    ) -> Self {
        Self { agent, now_secs, agents, obstacles, spawns, signals }
    }

    // ── Own-agent shorthands ──────────────────────────────────────────────

    #[inline]
    pub fn self_pos(&self) -> Vec2 {
        self.agents.pos(self.agent)
    }

    #[inline]
    pub fn self_vel(&self) -> Vec2 {
        self.agents.vel(self.agent)
    }

    #[inline]
    pub fn self_health(&self) -> i32 {
        self.agents.health[self.agent.index()]
    }

    #[inline]
    pub fn self_max_health(&self) -> i32 {
        self.agents.max_health[self.agent.index()]
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.agents.max_speed[self.agent.index()]
    }

    #[inline]
    pub fn max_force(&self) -> f32 {
        self.agents.max_force[self.agent.index()]
    }

    /// Append a steering force to this agent's sink.
    #[inline]
    pub fn push_force(&mut self, force: Vec2) {
        self.agents.push_force(self.agent, force);
    }

    // ── Target helpers ────────────────────────────────────────────────────

    /// Current position of `target`.
    #[inline]
    pub fn target_pos(&self, target: Target) -> Vec2 {
        target.position(self.agents)
    }

    /// Distance from this agent to `target`.
    #[inline]
    pub fn distance_to(&self, target: Target) -> f32 {
        self.self_pos().distance(self.target_pos(target))
    }
}
