use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StateResult;
use crate::traits::WorldState;

/// In-memory, HashMap-based world state.
///
/// Intended for tests and embedding. Entries are held behind a `RwLock`
/// for safe concurrent access and cloned on read.
pub struct InMemoryWorldState {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryWorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no key has ever been written.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all keys.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for InMemoryWorldState {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWorldState")
            .field("key_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_missing_key() {
        let state = InMemoryWorldState::new();
        assert_eq!(state.get("L1").unwrap(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn put_then_get_round_trips() {
        let state = InMemoryWorldState::new();
        state.put("L1", b"record").unwrap();
        assert_eq!(state.get("L1").unwrap().as_deref(), Some(&b"record"[..]));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn put_overwrites_existing_value() {
        let state = InMemoryWorldState::new();
        state.put("L1", b"old").unwrap();
        state.put("L1", b"new").unwrap();
        assert_eq!(state.get("L1").unwrap().as_deref(), Some(&b"new"[..]));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn keys_are_sorted() {
        let state = InMemoryWorldState::new();
        state.put("L2", b"b").unwrap();
        state.put("L1", b"a").unwrap();
        assert_eq!(state.keys(), vec!["L1".to_string(), "L2".to_string()]);
    }
}
