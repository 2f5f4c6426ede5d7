//! Linear-scan selection backend.
//!
//! Entries are kept in a plain vector in insertion order. Selection walks the
//! whole vector and only replaces the current best on a strictly greater
//! priority, so the earliest entry wins among ties. O(1) push, O(n) pop.

use crate::core::{PriorityEntry, SelectionQueue};

/// Vector-backed selection queue.
pub struct LinearScanQueue<T> {
    entries: Vec<PriorityEntry<T>>,
}

impl<T> LinearScanQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn highest_index(&self) -> Option<usize> {
        let (first, rest) = self.entries.split_first()?;
        let mut best_index = 0;
        let mut best_priority = first.priority;
        for (offset, entry) in rest.iter().enumerate() {
            // Strict `>`: an equal priority never displaces an earlier entry.
            if entry.priority > best_priority {
                best_priority = entry.priority;
                best_index = offset + 1;
            }
        }
        Some(best_index)
    }
}

impl<T> Default for LinearScanQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectionQueue<T> for LinearScanQueue<T> {
    fn push(&mut self, entry: PriorityEntry<T>) {
        self.entries.push(entry);
    }

    fn pop_highest(&mut self) -> Option<PriorityEntry<T>> {
        let index = self.highest_index()?;
        Some(self.entries.remove(index))
    }

    fn peek_highest(&self) -> Option<&PriorityEntry<T>> {
        self.highest_index().map(|index| &self.entries[index])
    }

    fn entries(&self) -> Vec<&PriorityEntry<T>> {
        self.entries.iter().collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
