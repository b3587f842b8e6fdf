use crate::error::StateResult;

/// Key-value view of the replicated world state, scoped to one
/// transaction.
///
/// All implementations must satisfy these invariants:
/// - `get` reflects the latest state visible to the current transaction,
///   including writes staged earlier in the same transaction.
/// - `put` stages a write; it becomes durable and globally visible only
///   if the enclosing transaction commits, and is discarded entirely if
///   the transaction aborts.
/// - Storage failures are propagated, never silently ignored.
///
/// The contract engine needs nothing beyond `get` and `put`: no delete,
/// no range scans, no locking.
pub trait WorldState: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Stage a write of `value` under `key`.
    fn put(&self, key: &str, value: &[u8]) -> StateResult<()>;
}
