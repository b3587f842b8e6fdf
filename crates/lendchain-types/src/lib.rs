//! Foundation types for the lendchain loan contract.
//!
//! This crate provides the persisted loan record, its lifecycle states,
//! and the wire codec used for ledger state. Every other lendchain crate
//! depends on `lendchain-types`.
//!
//! # Key Types
//!
//! - [`Loan`] — The single persisted entity, keyed by its loan ID
//! - [`LoanStatus`] — Lifecycle state of a loan record
//! - [`CodecError`] — Wire encode/decode failures

pub mod error;
pub mod loan;

pub use error::CodecError;
pub use loan::{scheduled_repayment, Loan, LoanStatus};
