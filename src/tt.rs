//! Value cache for the search.
//!
//! Maps a board fingerprint to the depth it was searched at and the value
//! found. An entry answers any query at the same or a shallower depth.
//!
//! The alpha-beta window a value was produced under is not recorded, so a
//! stored value may be a pruned bound rather than an exact score. It is
//! still returned as-is. Entries are never evicted; the table grows for as
//! long as its owner keeps it.

use std::collections::HashMap;

/// A cached search result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: i32,
    pub value: i32,
}

/// Unbounded fingerprint -> (depth, value) map.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Value stored for `hash` if it was searched at least `depth` deep.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: i32) -> Option<i32> {
        self.entries
            .get(&hash)
            .filter(|entry| entry.depth >= depth)
            .map(|entry| entry.value)
    }

    /// Raw entry for `hash`, regardless of depth.
    #[must_use]
    pub fn entry(&self, hash: u64) -> Option<TTEntry> {
        self.entries.get(&hash).copied()
    }

    /// Record `value` for `hash` at `depth`, replacing any previous entry.
    pub fn store(&mut self, hash: u64, depth: i32, value: i32) {
        self.entries.insert(hash, TTEntry { depth, value });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
