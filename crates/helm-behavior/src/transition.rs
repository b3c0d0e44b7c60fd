//! Guarded edges between states.

use crate::{BehaviorCtx, Decision, State};

/// A guarded edge: one decision and up to two candidate next states.
///
/// A `None` branch means "no change".  Both branch states are owned by this
/// transition and were constructed when the owning state was entered, so a
/// branch like `NavigateToPoint` already carries the exact rally point
/// captured at that moment.
///
/// Branch selection has one wrinkle that is part of the engine's contract:
/// a true decision with no true-branch falls through to the false-branch.
/// A transition with *only* a false-branch therefore swaps unconditionally —
/// to guard on "NOT condition", wrap the decision in
/// [`Decision::negated`] and use the true-branch.
pub struct Transition {
    pub decision:   Decision,
    pub when_true:  Option<Box<State>>,
    pub when_false: Option<Box<State>>,
}

impl Transition {
    pub fn new(decision: Decision, when_true: Option<State>, when_false: Option<State>) -> Self {
        Self {
            decision,
            when_true:  when_true.map(Box::new),
            when_false: when_false.map(Box::new),
        }
    }

    /// Swap to `next` when the decision holds.
    pub fn on_true(decision: Decision, next: State) -> Self {
        Self::new(decision, Some(next), None)
    }

    /// Evaluate the decision and take the applicable branch state, if any.
    ///
    /// Taking consumes the branch — a transition fires at most once per
    /// state entry, which holds because the owning state's list is rebuilt
    /// on every entry.
    pub(crate) fn fire(&mut self, ctx: &BehaviorCtx<'_>) -> Option<Box<State>> {
        if self.decision.decide(ctx) && self.when_true.is_some() {
            self.when_true.take()
        } else {
            self.when_false.take()
        }
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("decision", &self.decision)
            .field("when_true", &self.when_true.as_ref().map(|s| s.label()))
            .field("when_false", &self.when_false.as_ref().map(|s| s.label()))
            .finish()
    }
}
