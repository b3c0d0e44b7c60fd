use helm_behavior::BehaviorError;
use helm_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("machine references agent {0}, but the store has no such agent")]
    UnknownMachineAgent(AgentId),

    #[error("agent {0} has more than one state machine")]
    DuplicateMachine(AgentId),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
