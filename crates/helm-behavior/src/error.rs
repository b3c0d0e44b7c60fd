use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("state machine updated before activate()")]
    NotActivated,

    #[error("state machine activated twice")]
    AlreadyActivated,
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
