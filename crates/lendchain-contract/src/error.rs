use thiserror::Error;

use lendchain_state::StateError;
use lendchain_types::{CodecError, LoanStatus};

/// Errors produced by contract operations.
///
/// Every error is returned before any write is staged, so the ledger is
/// left exactly as it was when an operation fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("invalid argument: {0}")]
    Validation(String),

    #[error("loan {0} does not exist")]
    NotFound(String),

    #[error("loan {0} already exists")]
    Duplicate(String),

    #[error("loan {loan_id} is {status}; operation not permitted")]
    InvalidState {
        loan_id: String,
        status: LoanStatus,
    },

    #[error("world state failure: {0}")]
    Storage(#[from] StateError),

    #[error("corrupt loan record: {0}")]
    Codec(#[from] CodecError),
}

pub type ContractResult<T> = Result<T, ContractError>;
