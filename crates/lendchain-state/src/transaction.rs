use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StateResult;
use crate::traits::WorldState;

/// Staged-write view over a base [`WorldState`].
///
/// Mirrors the hosting platform's transaction contract: writes are
/// buffered locally and reach the base store only on
/// [`commit`](Transaction::commit); reads see the transaction's own
/// staged writes first, then fall through to the base. Dropping the
/// transaction without committing discards every staged write.
pub struct Transaction<'a> {
    base: &'a dyn WorldState,
    staged: RwLock<HashMap<String, Vec<u8>>>,
}

impl<'a> Transaction<'a> {
    /// Begin a transaction over `base`.
    pub fn begin(base: &'a dyn WorldState) -> Self {
        Self {
            base,
            staged: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys with a staged write.
    pub fn staged_writes(&self) -> usize {
        self.staged.read().expect("lock poisoned").len()
    }

    /// Apply the staged write-set to the base store.
    ///
    /// Each key carries only its last staged value; earlier writes to
    /// the same key within the transaction are already collapsed.
    pub fn commit(self) -> StateResult<()> {
        let staged = self.staged.into_inner().expect("lock poisoned");
        for (key, value) in staged {
            self.base.put(&key, &value)?;
        }
        Ok(())
    }
}

impl WorldState for Transaction<'_> {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        if let Some(value) = self.staged.read().expect("lock poisoned").get(key) {
            return Ok(Some(value.clone()));
        }
        self.base.get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        self.staged
            .write()
            .expect("lock poisoned")
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryWorldState;

    #[test]
    fn reads_see_own_staged_writes() {
        let base = InMemoryWorldState::new();
        let tx = Transaction::begin(&base);

        tx.put("L1", b"staged").unwrap();
        assert_eq!(tx.get("L1").unwrap().as_deref(), Some(&b"staged"[..]));
        // Not visible outside the transaction yet.
        assert_eq!(base.get("L1").unwrap(), None);
    }

    #[test]
    fn reads_fall_through_to_base() {
        let base = InMemoryWorldState::new();
        base.put("L1", b"committed").unwrap();

        let tx = Transaction::begin(&base);
        assert_eq!(tx.get("L1").unwrap().as_deref(), Some(&b"committed"[..]));
    }

    #[test]
    fn commit_applies_the_write_set() {
        let base = InMemoryWorldState::new();
        let tx = Transaction::begin(&base);
        tx.put("L1", b"one").unwrap();
        tx.put("L2", b"two").unwrap();
        assert_eq!(tx.staged_writes(), 2);

        tx.commit().unwrap();
        assert_eq!(base.get("L1").unwrap().as_deref(), Some(&b"one"[..]));
        assert_eq!(base.get("L2").unwrap().as_deref(), Some(&b"two"[..]));
    }

    #[test]
    fn drop_without_commit_discards_writes() {
        let base = InMemoryWorldState::new();
        {
            let tx = Transaction::begin(&base);
            tx.put("L1", b"staged").unwrap();
        }
        assert_eq!(base.get("L1").unwrap(), None);
        assert!(base.is_empty());
    }

    #[test]
    fn later_write_to_same_key_wins() {
        let base = InMemoryWorldState::new();
        let tx = Transaction::begin(&base);
        tx.put("L1", b"first").unwrap();
        tx.put("L1", b"second").unwrap();
        assert_eq!(tx.staged_writes(), 1);

        tx.commit().unwrap();
        assert_eq!(base.get("L1").unwrap().as_deref(), Some(&b"second"[..]));
    }
}
