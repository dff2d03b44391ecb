//! Shared duplicate tracking.

use std::collections::HashSet;
use std::sync::Mutex;

/// Thread-safe set of seen row keys.
///
/// `test_and_insert` is atomic: of any number of callers racing on the
/// same key, exactly one observes a fresh insertion. Keys are never
/// evicted; the set lives for one run and is then dropped.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    seen: Mutex<HashSet<String>>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, returning whether it was newly seen.
    pub fn test_and_insert(&self, key: &str) -> bool {
        let mut seen = self.seen.lock().expect("seen-set lock poisoned");
        if seen.contains(key) {
            false
        } else {
            seen.insert(key.to_string());
            true
        }
    }

    /// Number of distinct keys observed so far.
    pub fn len(&self) -> usize {
        self.seen.lock().expect("seen-set lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
