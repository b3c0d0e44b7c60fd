//! Incremental builder for `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use helm_agent::{AgentInit, AgentStoreBuilder};
//! use helm_core::Vec2;
//!
//! let mut builder = AgentStoreBuilder::new();
//! let hunter = builder.push(AgentInit {
//!     position: Vec2::new(100.0, 200.0),
//!     ..AgentInit::default()
//! });
//! let store = builder.build();
//!
//! assert_eq!(store.count, 1);
//! assert_eq!(store.pos(hunter), Vec2::new(100.0, 200.0));
//! ```

use helm_core::{AgentId, Vec2};

use crate::AgentStore;

/// Initial values for one agent.
///
/// The defaults are the fighter tuning of the reference scenario: a nimble
/// ship that caps its speed at 500 and its per-tick steering correction
/// at 50.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentInit {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing angle in radians.
    pub orientation: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub health: i32,
}

impl Default for AgentInit {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            orientation: 0.0,
            max_speed: 500.0,
            max_force: 50.0,
            health: 20,
        }
    }
}

/// Builder for [`AgentStore`].
///
/// Agents are pushed one at a time during world assembly; `build` produces
/// the SoA arrays in push order, so the `AgentId` returned by [`push`]
/// remains valid against the built store.
///
/// [`push`]: AgentStoreBuilder::push
#[derive(Default)]
pub struct AgentStoreBuilder {
    inits: Vec<AgentInit>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one agent and return the `AgentId` it will occupy.
    pub fn push(&mut self, init: AgentInit) -> AgentId {
        let id = AgentId(self.inits.len() as u32);
        self.inits.push(init);
        id
    }

    /// Number of agents queued so far.
    pub fn len(&self) -> usize {
        self.inits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inits.is_empty()
    }

    /// Construct the `AgentStore`.
    ///
    /// Each agent starts alive at full health (`max_health = health`), with
    /// an empty force sink.
    pub fn build(self) -> AgentStore {
        let count = self.inits.len();
        let mut store = AgentStore {
            count,
            position: Vec::with_capacity(count),
            velocity: Vec::with_capacity(count),
            orientation: Vec::with_capacity(count),
            angular_velocity: Vec::with_capacity(count),
            max_speed: Vec::with_capacity(count),
            max_force: Vec::with_capacity(count),
            health: Vec::with_capacity(count),
            max_health: Vec::with_capacity(count),
            alive: Vec::with_capacity(count),
            forces: Vec::with_capacity(count),
        };
        for init in self.inits {
            store.position.push(init.position);
            store.velocity.push(init.velocity);
            store.orientation.push(init.orientation);
            store.angular_velocity.push(0.0);
            store.max_speed.push(init.max_speed);
            store.max_force.push(init.max_force);
            store.health.push(init.health);
            store.max_health.push(init.health);
            store.alive.push(true);
            store.forces.push(Vec::new());
        }
        store
    }
}
