//! Boolean predicates over the agent context.
//!
//! A decision reads the context (and its own captured snapshot) and answers
//! one question; it never mutates anything.  Snapshot-carrying decisions
//! (`TimeElapsed`, `TakenDamage`) are constructed fresh every time a state
//! is entered, so the snapshot always describes the moment of entry —
//! decisions are never shared or reused across state instances.

use crate::{BehaviorCtx, BehaviorError, BehaviorResult, Target};

/// A guard condition for a [`Transition`][crate::Transition].
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    /// Constant `true`.  The unconditional edge.
    Always,

    /// Health has dropped strictly below `threshold`.
    LowHealth { threshold: i32 },

    /// Health is back at (or somehow above) `max_health`.
    FullHealth,

    /// Distance to `target` lies strictly inside `(inner, outer)`.
    ///
    /// Construct via [`Decision::within_range`] or [`Decision::within_band`];
    /// the latter rejects `inner >= outer` at construction.
    WithinRange {
        target: Target,
        inner:  f32,
        outer:  f32,
    },

    /// At least `duration_secs` have passed since `start_secs`, the context
    /// time captured when the owning state was entered.
    TimeElapsed {
        start_secs:    f64,
        duration_secs: f64,
    },

    /// Health has dropped below `initial_health`, the value captured when
    /// the owning state was entered.
    TakenDamage { initial_health: i32 },

    /// The shared swarm-pull signal is raised.
    PullActive,

    /// Logical negation of the inner decision.
    ///
    /// Exists because a transition's lone false-branch fires
    /// unconditionally (see [`Transition`][crate::Transition]); "while NOT
    /// condition" edges wrap the condition here and use the true-branch.
    Not(Box<Decision>),
}

impl Decision {
    /// `WithinRange` with no inner bound: true anywhere closer than `outer`.
    pub fn within_range(target: Target, outer: f32) -> Decision {
        Decision::WithinRange {
            target,
            inner: 0.0,
            outer,
        }
    }

    /// `WithinRange` over the annulus `(inner, outer)`.
    ///
    /// An empty or inverted band is a configuration error, not a clamp:
    /// a decision that can never fire means the state graph is wrong.
    pub fn within_band(target: Target, inner: f32, outer: f32) -> BehaviorResult<Decision> {
        if !(inner < outer) {
            return Err(BehaviorError::Config(format!(
                "within_band requires inner < outer, got inner={inner}, outer={outer}"
            )));
        }
        Ok(Decision::WithinRange { target, inner, outer })
    }

    /// `TimeElapsed` anchored at `now_secs` (the context time at state entry).
    pub fn time_elapsed(now_secs: f64, duration_secs: f64) -> Decision {
        Decision::TimeElapsed {
            start_secs: now_secs,
            duration_secs,
        }
    }

    /// `TakenDamage` snapshotting `current_health` (the value at state entry).
    pub fn taken_damage(current_health: i32) -> Decision {
        Decision::TakenDamage {
            initial_health: current_health,
        }
    }

    /// Negate this decision.
    pub fn negated(self) -> Decision {
        Decision::Not(Box::new(self))
    }

    /// Evaluate against the current tick's context.
    pub fn decide(&self, ctx: &BehaviorCtx<'_>) -> bool {
        match self {
            Decision::Always => true,

            Decision::LowHealth { threshold } => ctx.self_health() < *threshold,

            Decision::FullHealth => ctx.self_health() >= ctx.self_max_health(),

            Decision::WithinRange { target, inner, outer } => {
                let distance = ctx.distance_to(*target);
                *inner < distance && distance < *outer
            }

            Decision::TimeElapsed { start_secs, duration_secs } => {
                ctx.now_secs - start_secs >= *duration_secs
            }

            Decision::TakenDamage { initial_health } => ctx.self_health() < *initial_health,

            Decision::PullActive => ctx.signals.swarm_pull,

            Decision::Not(inner) => !inner.decide(ctx),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Always => write!(f, "always"),
            Decision::LowHealth { threshold } => write!(f, "health < {threshold}"),
            Decision::FullHealth => write!(f, "health full"),
            Decision::WithinRange { inner, outer, .. } => {
                write!(f, "distance in ({inner}, {outer})")
            }
            Decision::TimeElapsed { duration_secs, .. } => {
                write!(f, "{duration_secs}s elapsed")
            }
            Decision::TakenDamage { initial_health } => {
                write!(f, "damaged below {initial_health}")
            }
            Decision::PullActive => write!(f, "swarm pull"),
            Decision::Not(inner) => write!(f, "not ({inner})"),
        }
    }
}
