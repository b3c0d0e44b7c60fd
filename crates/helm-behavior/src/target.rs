//! Steering targets: a tracked agent or a fixed point.

use helm_agent::AgentStore;
use helm_core::{AgentId, Vec2};

/// What an activity or decision steers relative to.
///
/// `Agent` targets are followed live — the position is re-read every tick,
/// so a moving quarry stays tracked.  `Point` targets are frozen coordinates,
/// used for rally points and flee destinations captured at state entry.
///
/// An `Agent` target stays readable for the life of the store even after
/// the agent dies (rows are never removed), so a machine whose quarry was
/// destroyed keeps steering at the corpse until the host rewires it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Agent(AgentId),
    Point(Vec2),
}

impl Target {
    /// Current world position of the target.
    #[inline]
    pub fn position(&self, agents: &AgentStore) -> Vec2 {
        match self {
            Target::Agent(id) => agents.pos(*id),
            Target::Point(p) => *p,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Agent(id) => write!(f, "{id}"),
            Target::Point(p) => write!(f, "{p}"),
        }
    }
}
