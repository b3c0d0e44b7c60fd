//! The per-agent state machine.

use helm_core::AgentId;

use crate::{BehaviorCtx, BehaviorError, BehaviorResult, State, StateKind, Target, Tuning};

// ── Wiring ────────────────────────────────────────────────────────────────────

/// The machine-lifetime context states read when rebuilding their lists:
/// who to hunt, who to avoid, who to flock with, and the tuning constants.
///
/// Machine presets differ only in which of these fields they populate —
/// there is no fighter subclass and bee subclass, just different wiring.
#[derive(Clone, Debug)]
pub struct Wiring {
    /// Primary pursuit target.
    pub target: Target,

    /// Peers to keep distance from (`SeekAndFlee` adds one `Flee` per entry).
    pub hostiles: Vec<AgentId>,

    /// Peers to flock with (`Cohere` reads these).
    pub peers: Vec<AgentId>,

    /// Behavior constants.
    pub tuning: Tuning,
}

impl Wiring {
    /// Wiring with just a target; peer lists start empty.
    pub fn new(target: Target, tuning: Tuning) -> Self {
        Self {
            target,
            hostiles: Vec::new(),
            peers: Vec::new(),
            tuning,
        }
    }
}

// ── StateMachine ──────────────────────────────────────────────────────────────

/// Owns the one live state of one agent.
///
/// Construction is two-phase: `new()` (or a preset constructor) produces an
/// inert machine, and [`activate`][StateMachine::activate] performs the
/// first state entry once the rest of the world — physics registration in
/// particular — exists.  Calling [`update`][StateMachine::update] before
/// `activate` is an error, not a no-op.
pub struct StateMachine {
    agent: AgentId,
    initial: StateKind,
    wiring: Wiring,
    state: Option<State>,
}

impl StateMachine {
    /// An inert machine that will start in `initial` when activated.
    pub fn new(agent: AgentId, initial: StateKind, wiring: Wiring) -> Self {
        Self {
            agent,
            initial,
            wiring,
            state: None,
        }
    }

    /// Fighter preset: hunt `target`, keep clear of `hostiles`, start in
    /// `SeekAndFlee`.
    pub fn fighter(
        agent:    AgentId,
        target:   AgentId,
        hostiles: Vec<AgentId>,
        tuning:   Tuning,
    ) -> Self {
        let mut wiring = Wiring::new(Target::Agent(target), tuning);
        wiring.hostiles = hostiles;
        Self::new(agent, StateKind::SeekAndFlee, wiring)
    }

    /// Swarm-member preset: flock with `peers`, converge on `target` when
    /// the pull signal rises, start in `WaitForPull`.
    pub fn swarm_member(
        agent:  AgentId,
        target: AgentId,
        peers:  Vec<AgentId>,
        tuning: Tuning,
    ) -> Self {
        let mut wiring = Wiring::new(Target::Agent(target), tuning);
        wiring.peers = peers;
        Self::new(agent, StateKind::WaitForPull, wiring)
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn agent(&self) -> AgentId {
        self.agent
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Mutable wiring access for post-construction assembly (e.g. filling
    /// hostile lists once every machine exists).  Changes take effect the
    /// next time a state is entered.
    pub fn wiring_mut(&mut self) -> &mut Wiring {
        &mut self.wiring
    }

    /// `true` once `activate` has run.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// The live state, if activated.
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    /// Display label of the live state, for diagnostic overlays.
    pub fn state_label(&self) -> &'static str {
        match &self.state {
            Some(state) => state.label(),
            None => "inactive",
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Perform the first state entry.
    ///
    /// Deferred from construction because entry reads the agent context,
    /// which may not be fully registered when the machine is built.
    pub fn activate(&mut self, ctx: &mut BehaviorCtx<'_>) -> BehaviorResult<()> {
        if self.state.is_some() {
            return Err(BehaviorError::AlreadyActivated);
        }
        debug_assert_eq!(ctx.agent, self.agent, "context built for a different agent");

        let mut state = State::new(self.initial.clone());
        state.enter(&self.wiring, ctx);
        self.state = Some(state);
        Ok(())
    }

    /// Advance one tick: run the live state's activities, then its
    /// transitions (which may replace the live state any number of times —
    /// see [`State::execute`]).
    pub fn update(&mut self, ctx: &mut BehaviorCtx<'_>) -> BehaviorResult<()> {
        debug_assert_eq!(ctx.agent, self.agent, "context built for a different agent");

        let state = self.state.take().ok_or(BehaviorError::NotActivated)?;
        self.state = Some(state.execute(&self.wiring, ctx));
        Ok(())
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("agent", &self.agent)
            .field("state", &self.state_label())
            .finish()
    }
}
