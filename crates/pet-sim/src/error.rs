use pet_behavior::BehaviorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("pet configuration error: {0}")]
    Config(String),

    #[error("behavior tuning rejected: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
