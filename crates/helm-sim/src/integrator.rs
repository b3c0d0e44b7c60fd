//! Reference physics stand-in.
//!
//! Production hosts integrate with a real physics engine; this module
//! exists so the engine is runnable and testable end-to-end without one.
//! It keeps exactly the contract the behavior core assumes of its physics
//! collaborator:
//!
//! - each agent's force sink is drained (summed and cleared) once per tick;
//! - the net force is clamped to the agent's `max_force` before it is
//!   applied — individual activities already clamp their own output, but
//!   several activities stack;
//! - speed is capped at `max_speed`;
//! - NaN never enters the kinematic state (guaranteed upstream by the
//!   zero-guarded vector math).
//!
//! Forces act as accelerations on a unit-mass body.  Angular velocity
//! decays geometrically each tick, matching how the reference scenario's
//! ships shed spin.

use helm_agent::AgentStore;
use helm_core::AgentId;

/// Per-tick angular velocity retention.
pub const ANGULAR_DAMPING: f32 = 0.7;

/// Advance all living agents by `dt` seconds, draining every force sink.
///
/// Dead agents are frozen in place; their sinks are cleared so stale forces
/// from the tick they died cannot fester.
pub fn integrate(agents: &mut AgentStore, dt: f32) {
    for i in 0..agents.count {
        let id = AgentId(i as u32);
        let net = agents.drain_net_force(id);
        if !agents.alive[i] {
            continue;
        }

        let accel = net.limit(agents.max_force[i]);
        let velocity = (agents.velocity[i] + accel * dt).limit(agents.max_speed[i]);
        agents.velocity[i] = velocity;
        agents.position[i] += velocity * dt;

        agents.angular_velocity[i] *= ANGULAR_DAMPING;
        agents.orientation[i] += agents.angular_velocity[i] * dt;
    }
}
