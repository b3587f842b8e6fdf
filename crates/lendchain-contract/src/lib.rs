//! Loan lifecycle engine for the lendchain contract.
//!
//! This crate is the heart of lendchain. It provides:
//! - The four ledger operations: request, approve, repay, query
//! - Shared precondition checks
//! - The contract error taxonomy
//!
//! The engine is stateless and deterministic: it holds nothing between
//! invocations, never consults a clock or randomness, and derives every
//! new state purely from the arguments and the world state it reads.
//! Durable storage is owned entirely by the injected
//! [`WorldState`](lendchain_state::WorldState) capability; each
//! operation performs one read-then-write pair on the loan's key, and
//! every precondition is checked before any write is staged.

pub mod contract;
pub mod error;
pub mod validation;

pub use contract::LoanContract;
pub use error::{ContractError, ContractResult};
