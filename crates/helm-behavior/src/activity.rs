//! Per-tick behaviors: the things an agent does while in a state.
//!
//! An activity's only side-effect channels are (a) appending a force to its
//! own agent's sink, (b) writing its own agent's orientation, and (c)
//! pushing spawn requests / mutating its own agent's health where the
//! variant documents it.  Activities are owned by-value by the state that
//! built them and never outlive it.
//!
//! `Fire` and `Heal` are one-shot triggers: they execute once and are then
//! removed from the owning state's activity list (see
//! [`State::execute`][crate::State::execute]).  A state that wants periodic
//! firing re-enters itself on a timed transition, which rebuilds the list
//! with a fresh trigger.

use std::f32::consts::FRAC_PI_2;

use helm_core::{AgentId, Vec2};
use helm_world::{ProjectileKind, ProjectileSpawn};

use crate::{steering, BehaviorCtx, Target, Tuning};

/// One composable per-tick behavior.
#[derive(Clone, Debug)]
pub enum Activity {
    /// Steer toward `target` at full speed, with linear arrival damping
    /// inside `slow_radius` when `arrive` is set.
    Seek {
        target:      Target,
        arrive:      bool,
        slow_radius: f32,
    },

    /// Steer directly away from `target`, but only while it is within
    /// `range` — distant threats are ignored entirely.
    Flee { target: Target, range: f32 },

    /// Project three detector probes ahead of the agent and push one
    /// repulsion force per obstacle overlapping each probe.  Forces are
    /// cumulative, not averaged: two overlaps push twice as hard.
    ///
    /// `detectors` is cached probe geometry from the last execute, exposed
    /// for debug overlays via [`Activity::detectors`].
    AvoidObstacles {
        base_offset: f32,
        spread:      f32,
        probe_angle: f32,
        avoid_speed: f32,
        detectors:   [Vec2; 3],
    },

    /// Snap orientation to face `target`.  Writes the angle directly, no
    /// easing, bypassing the force model.
    PointTowardsTarget { target: Target },

    /// Snap orientation to the direction of travel.  No-op while velocity
    /// is (near-)zero — a stationary agent keeps its last facing.
    PointInDirectionOfTravel,

    /// One-shot: queue a projectile spawn at the agent's current position
    /// and facing.
    Fire { kind: ProjectileKind },

    /// One-shot: restore `max(max_health / 12, 1)` health, capped at max.
    Heal,

    /// Steer toward the centroid of the living `peers`, with arrival
    /// damping inside `slow_radius` so the group loosely clusters instead
    /// of collapsing onto one point.
    Cohere {
        peers:       Vec<AgentId>,
        slow_radius: f32,
    },
}

impl Activity {
    // ── Constructors ──────────────────────────────────────────────────────

    /// `Seek` with arrival damping.
    pub fn seek(target: Target, slow_radius: f32) -> Activity {
        Activity::Seek {
            target,
            arrive: true,
            slow_radius,
        }
    }

    /// `Seek` at full speed all the way in.
    pub fn seek_direct(target: Target) -> Activity {
        Activity::Seek {
            target,
            arrive: false,
            slow_radius: 0.0,
        }
    }

    pub fn flee(target: Target, range: f32) -> Activity {
        Activity::Flee { target, range }
    }

    /// `AvoidObstacles` configured from `tuning`.
    pub fn avoid_obstacles(tuning: &Tuning) -> Activity {
        Activity::AvoidObstacles {
            base_offset: tuning.detector_base_offset,
            spread:      tuning.detector_spread,
            probe_angle: tuning.detector_angle,
            avoid_speed: tuning.avoid_speed,
            detectors:   [Vec2::ZERO; 3],
        }
    }

    pub fn cohere(peers: Vec<AgentId>, slow_radius: f32) -> Activity {
        Activity::Cohere { peers, slow_radius }
    }

    // ── Lifecycle hooks ───────────────────────────────────────────────────

    /// Called once when the owning state finishes building its lists.
    pub fn enter(&mut self, ctx: &mut BehaviorCtx<'_>) {
        if let Activity::AvoidObstacles { detectors, .. } = self {
            // Probes start on the agent until the first execute projects them.
            *detectors = [ctx.self_pos(); 3];
        }
    }

    /// Called once when the owning state is exited.
    pub fn exit(&mut self, _ctx: &mut BehaviorCtx<'_>) {}

    /// Run one tick of this behavior.
    pub fn execute(&mut self, ctx: &mut BehaviorCtx<'_>) {
        match self {
            Activity::Seek { target, arrive, slow_radius } => {
                let force = steering::seek(
                    ctx.self_pos(),
                    ctx.self_vel(),
                    ctx.target_pos(*target),
                    ctx.max_speed(),
                    ctx.max_force(),
                    arrive.then_some(*slow_radius),
                );
                ctx.push_force(force);
            }

            Activity::Flee { target, range } => {
                let threat = ctx.target_pos(*target);
                if ctx.self_pos().distance(threat) > *range {
                    return;
                }
                let force = steering::flee(
                    ctx.self_pos(),
                    ctx.self_vel(),
                    threat,
                    ctx.max_speed(),
                    ctx.max_force(),
                );
                ctx.push_force(force);
            }

            Activity::AvoidObstacles {
                base_offset,
                spread,
                probe_angle,
                avoid_speed,
                detectors,
            } => {
                let pos = ctx.self_pos();
                let vel = ctx.self_vel();
                let reach = *base_offset + *spread * ctx.agents.speed_fraction(ctx.agent);

                // Probe along the travel direction; a stationary agent
                // probes along its facing instead.
                let forward = match vel.heading() {
                    Some(_) => vel.normalized(),
                    None => Vec2::from_angle(
                        ctx.agents.orientation[ctx.agent.index()] + FRAC_PI_2,
                    ),
                };

                *detectors = [
                    pos + forward.rotated(*probe_angle) * reach,
                    pos + forward * reach,
                    pos + forward.rotated(-*probe_angle) * reach,
                ];

                let obstacles = ctx.obstacles;
                let max_force = ctx.max_force();
                for probe in *detectors {
                    for obstacle in obstacles.overlapping(probe) {
                        let force =
                            steering::flee(pos, vel, obstacle.center, *avoid_speed, max_force);
                        ctx.push_force(force);
                    }
                }
            }

            Activity::PointTowardsTarget { target } => {
                let to_target = ctx.target_pos(*target) - ctx.self_pos();
                if let Some(heading) = to_target.heading() {
                    ctx.agents.orientation[ctx.agent.index()] = heading + FRAC_PI_2;
                }
            }

            Activity::PointInDirectionOfTravel => {
                if let Some(heading) = ctx.self_vel().heading() {
                    ctx.agents.orientation[ctx.agent.index()] = heading - FRAC_PI_2;
                }
            }

            Activity::Fire { kind } => {
                let i = ctx.agent.index();
                ctx.spawns.push_projectile(ProjectileSpawn {
                    shooter:     ctx.agent,
                    origin:      ctx.agents.position[i],
                    orientation: ctx.agents.orientation[i],
                    kind:        *kind,
                });
            }

            Activity::Heal => {
                let pulse = (ctx.self_max_health() / 12).max(1);
                ctx.agents.heal_by(ctx.agent, pulse);
            }

            Activity::Cohere { peers, slow_radius } => {
                let mut sum = Vec2::ZERO;
                let mut living = 0u32;
                for &peer in peers.iter() {
                    if peer != ctx.agent && ctx.agents.is_alive(peer) {
                        sum += ctx.agents.pos(peer);
                        living += 1;
                    }
                }
                if living == 0 {
                    return;
                }
                let centroid = sum / living as f32;
                let force = steering::seek(
                    ctx.self_pos(),
                    ctx.self_vel(),
                    centroid,
                    ctx.max_speed(),
                    ctx.max_force(),
                    Some(*slow_radius),
                );
                ctx.push_force(force);
            }
        }
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// `true` for trigger activities that run once per state entry and are
    /// then removed from the owning state's list.
    pub fn is_one_shot(&self) -> bool {
        matches!(self, Activity::Fire { .. } | Activity::Heal)
    }

    /// Cached detector probe positions, for debug overlays.
    pub fn detectors(&self) -> Option<&[Vec2; 3]> {
        match self {
            Activity::AvoidObstacles { detectors, .. } => Some(detectors),
            _ => None,
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activity::Seek { .. } => write!(f, "seek"),
            Activity::Flee { .. } => write!(f, "flee"),
            Activity::AvoidObstacles { .. } => write!(f, "avoid obstacles"),
            Activity::PointTowardsTarget { .. } => write!(f, "point at target"),
            Activity::PointInDirectionOfTravel => write!(f, "point along travel"),
            Activity::Fire { kind } => write!(f, "fire {kind}"),
            Activity::Heal => write!(f, "heal"),
            Activity::Cohere { .. } => write!(f, "cohere"),
        }
    }
}
