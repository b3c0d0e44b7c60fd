//! States: activity/transition aggregates with enter/execute/exit.
//!
//! A `State` is a blueprint until it is entered: `State::new` records only
//! the kind, and `enter()` builds the activity and transition lists from the
//! machine wiring and the agent context *at entry time*.  That is what lets
//! the same kind compute a fresh rally point ("current position + offset")
//! on every entry, and it is also the re-entry invariant: both lists are
//! cleared and rebuilt, so entering a state twice never accumulates
//! duplicates.

use helm_core::Vec2;

use crate::machine::Wiring;
use crate::{Activity, BehaviorCtx, Decision, Target, Transition, Tuning};

// ── StateKind ─────────────────────────────────────────────────────────────────

/// Which behavior bundle a state represents.
///
/// Point-carrying kinds hold coordinates captured when the *referencing*
/// transition was built — i.e. when the previous state was entered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateKind {
    /// Parked: zero velocity, no activities, no way out.
    Idle,

    /// Default fighter behavior: hunt the target, dodge rocks, keep clear
    /// of hostile peers.
    SeekAndFlee,

    /// Head for a fixed point, then resume the hunt.
    NavigateToPoint { point: Vec2 },

    /// Run for a fixed rally point, then stop to heal.
    Retreat { point: Vec2 },

    /// Hold position, track the target, and shoot on a cooldown.
    PointAndShoot,

    /// Sit still and regenerate until healthy (or disturbed).
    Heal,

    /// Swarm loiter: drift with the group until the pull signal rises.
    WaitForPull,

    /// Swarm attack: converge on the target while keeping formation.
    PursueTarget,
}

impl StateKind {
    /// Human-readable label for diagnostic overlays.
    pub fn label(&self) -> &'static str {
        match self {
            StateKind::Idle => "idle",
            StateKind::SeekAndFlee => "seeking target",
            StateKind::NavigateToPoint { .. } => "navigating",
            StateKind::Retreat { .. } => "retreating",
            StateKind::PointAndShoot => "firing",
            StateKind::Heal => "healing",
            StateKind::WaitForPull => "waiting for pull",
            StateKind::PursueTarget => "pursuing",
        }
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

/// One live (or blueprint) state of a machine.
pub struct State {
    kind: StateKind,
    pub(crate) activities: Vec<Activity>,
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    /// A blueprint state: empty lists until `enter()` builds them.
    pub fn new(kind: StateKind) -> Self {
        Self {
            kind,
            activities: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn kind(&self) -> &StateKind {
        &self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Current activity list, in execution order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Current transition list, in evaluation order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    // ── enter / exit ──────────────────────────────────────────────────────

    /// Rebuild the activity and transition lists from the wiring and the
    /// context as of this moment.
    pub fn enter(&mut self, wiring: &Wiring, ctx: &mut BehaviorCtx<'_>) {
        self.activities.clear();
        self.transitions.clear();

        let t = &wiring.tuning;
        let here = ctx.self_pos();

        // Owned copy: the arms below mutate `self` while reading the kind.
        let kind = self.kind.clone();
        match kind {
            StateKind::Idle => {
                ctx.agents.velocity[ctx.agent.index()] = Vec2::ZERO;
            }

            StateKind::SeekAndFlee => {
                self.activities.push(Activity::seek(wiring.target, t.slow_radius));
                self.activities.push(Activity::PointInDirectionOfTravel);
                self.activities.push(Activity::avoid_obstacles(t));
                for &hostile in &wiring.hostiles {
                    self.activities
                        .push(Activity::flee(Target::Agent(hostile), t.flee_range));
                }

                self.transitions.push(Transition::on_true(
                    Decision::LowHealth {
                        threshold: t.low_health_threshold,
                    },
                    State::new(StateKind::Retreat {
                        point: here + Vec2::new(t.retreat_distance, 0.0),
                    }),
                ));
                self.transitions.push(Transition::on_true(
                    Decision::within_range(wiring.target, t.attack_range),
                    State::new(StateKind::PointAndShoot),
                ));
            }

            StateKind::NavigateToPoint { point } => {
                self.push_navigation_activities(Target::Point(point), t);
                self.transitions.push(Transition::on_true(
                    Decision::within_range(Target::Point(point), t.arrive_radius),
                    State::new(StateKind::SeekAndFlee),
                ));
            }

            StateKind::Retreat { point } => {
                self.push_navigation_activities(Target::Point(point), t);
                self.transitions.push(Transition::on_true(
                    Decision::within_range(Target::Point(point), t.arrive_radius),
                    State::new(StateKind::Heal),
                ));
            }

            StateKind::PointAndShoot => {
                self.activities.push(Activity::Fire { kind: t.projectile });
                self.activities.push(Activity::PointTowardsTarget {
                    target: wiring.target,
                });

                // Timed self-transition: re-entry rebuilds the list with a
                // fresh one-shot Fire, which is what makes firing periodic.
                self.transitions.push(Transition::on_true(
                    Decision::time_elapsed(ctx.now_secs, t.fire_cooldown_secs),
                    State::new(StateKind::PointAndShoot),
                ));
                self.transitions.push(Transition::on_true(
                    Decision::LowHealth {
                        threshold: t.low_health_threshold,
                    },
                    State::new(StateKind::Retreat {
                        point: here + Vec2::new(t.combat_retreat_distance, 0.0),
                    }),
                ));
                self.transitions.push(Transition::on_true(
                    Decision::taken_damage(ctx.self_health()),
                    State::new(StateKind::NavigateToPoint {
                        point: here + Vec2::new(t.sidestep_distance, 0.0),
                    }),
                ));
            }

            StateKind::Heal => {
                self.activities.push(Activity::Heal);

                self.transitions.push(Transition::on_true(
                    Decision::time_elapsed(ctx.now_secs, t.heal_cooldown_secs),
                    State::new(StateKind::Heal),
                ));
                self.transitions.push(Transition::on_true(
                    Decision::taken_damage(ctx.self_health()),
                    State::new(StateKind::NavigateToPoint {
                        point: here + Vec2::new(t.sidestep_distance, 0.0),
                    }),
                ));
                self.transitions.push(Transition::on_true(
                    Decision::FullHealth,
                    State::new(StateKind::SeekAndFlee),
                ));
            }

            StateKind::WaitForPull => {
                self.activities
                    .push(Activity::cohere(wiring.peers.clone(), t.cohere_radius));
                self.transitions.push(Transition::on_true(
                    Decision::PullActive,
                    State::new(StateKind::PursueTarget),
                ));
            }

            StateKind::PursueTarget => {
                self.activities.push(Activity::seek(wiring.target, t.slow_radius));
                self.activities
                    .push(Activity::cohere(wiring.peers.clone(), t.cohere_radius));
                self.activities.push(Activity::PointInDirectionOfTravel);
                self.transitions.push(Transition::on_true(
                    Decision::PullActive.negated(),
                    State::new(StateKind::WaitForPull),
                ));
            }
        }

        for activity in &mut self.activities {
            activity.enter(ctx);
        }
    }

    /// Give every activity its exit hook.  The lists themselves stay as
    /// they are — the next `enter()` rebuilds them anyway.
    pub fn exit(&mut self, ctx: &mut BehaviorCtx<'_>) {
        for activity in &mut self.activities {
            activity.exit(ctx);
        }
    }

    // ── execute ───────────────────────────────────────────────────────────

    /// Run one tick: all activities in order, then all transitions in order.
    ///
    /// Consumes the state and returns whichever state is live afterwards.
    /// The transition scan deliberately has **no early exit**: it walks the
    /// full list that belonged to the state current at the start of the
    /// tick, even after a swap, performing exit→swap→enter for every firing
    /// edge.  A later edge therefore overrides an earlier one — the last
    /// applicable transition in the list wins.  Do not "optimize" this into
    /// first-match; downstream state graphs order their lists around it.
    pub fn execute(mut self, wiring: &Wiring, ctx: &mut BehaviorCtx<'_>) -> State {
        self.run_activities(wiring, ctx);

        let mut transitions = std::mem::take(&mut self.transitions);
        let mut live = self;
        let mut swapped = false;

        for transition in &mut transitions {
            if let Some(next) = transition.fire(ctx) {
                live.exit(ctx);
                live = *next;
                live.enter(wiring, ctx);
                swapped = true;
            }
        }

        if !swapped {
            // Nothing fired (and no branch was consumed): hand the list
            // back to the still-live state.
            live.transitions = transitions;
        }
        live
    }

    fn run_activities(&mut self, wiring: &Wiring, ctx: &mut BehaviorCtx<'_>) {
        for activity in &mut self.activities {
            activity.execute(ctx);
        }
        // One-shots have now run exactly once since entry; compact them out
        // after the loop rather than removing mid-iteration.
        self.activities.retain(|a| !a.is_one_shot());

        // Shooting and healing agents settle instead of coasting.
        if matches!(self.kind, StateKind::PointAndShoot | StateKind::Heal) {
            let v = &mut ctx.agents.velocity[ctx.agent.index()];
            *v = *v * wiring.tuning.settle_damping;
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// The seek/orient/avoid triple shared by the navigation-shaped states.
    fn push_navigation_activities(&mut self, destination: Target, t: &Tuning) {
        self.activities.push(Activity::seek(destination, t.slow_radius));
        self.activities.push(Activity::PointInDirectionOfTravel);
        self.activities.push(Activity::avoid_obstacles(t));
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("kind", &self.kind)
            .field("activities", &self.activities.len())
            .field("transitions", &self.transitions.len())
            .finish()
    }
}
