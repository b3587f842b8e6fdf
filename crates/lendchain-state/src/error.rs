use thiserror::Error;

/// Errors produced by world-state operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("world state read failed: {0}")]
    Read(String),

    #[error("world state write failed: {0}")]
    Write(String),
}

pub type StateResult<T> = Result<T, StateError>;
