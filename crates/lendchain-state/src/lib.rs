//! World-state boundary for the lendchain contract.
//!
//! The hosting ledger platform presents the replicated world state as a
//! key-value store with per-transaction atomic commit. This crate defines
//! that boundary and provides an in-memory rendition of it:
//! - [`WorldState`] — the `get`/`put` trait the contract engine is
//!   written against
//! - [`InMemoryWorldState`] — committed state for tests and embedding
//! - [`Transaction`] — staged writes with read-your-writes visibility
//!   and all-or-nothing commit
//!
//! The state layer never interprets values; encoding belongs to
//! `lendchain-types`.

pub mod error;
pub mod memory;
pub mod traits;
pub mod transaction;

pub use error::{StateError, StateResult};
pub use memory::InMemoryWorldState;
pub use traits::WorldState;
pub use transaction::Transaction;
