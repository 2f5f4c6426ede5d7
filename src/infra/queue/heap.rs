//! Binary-heap selection backend with an insertion-sequence tie-break.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{PriorityEntry, SelectionQueue};

/// Wrapper making an entry orderable by priority (highest first) and FIFO within priority.
struct SequencedEntry<T> {
    seq: u64,
    entry: PriorityEntry<T>,
}

impl<T> PartialEq for SequencedEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for SequencedEntry<T> {}

impl<T> PartialOrd for SequencedEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for SequencedEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.entry.priority.cmp(&other.entry.priority) {
            // Earlier sequence wins (reversed for max-heap)
            Ordering::Equal => other.seq.cmp(&self.seq),
            other => other,
        }
    }
}

/// Heap-backed selection queue.
/// This provides O(log n) push and O(log n) pop.
pub struct HeapQueue<T> {
    next_seq: u64,
    entries: BinaryHeap<SequencedEntry<T>>,
}

impl<T> HeapQueue<T> {
    /// Create an empty heap queue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty heap queue with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_seq: 0,
            entries: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl<T> Default for HeapQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectionQueue<T> for HeapQueue<T> {
    fn push(&mut self, entry: PriorityEntry<T>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(SequencedEntry { seq, entry });
    }

    fn pop_highest(&mut self) -> Option<PriorityEntry<T>> {
        self.entries.pop().map(|se| se.entry)
    }

    fn peek_highest(&self) -> Option<&PriorityEntry<T>> {
        self.entries.peek().map(|se| &se.entry)
    }

    fn entries(&self) -> Vec<&PriorityEntry<T>> {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_unstable_by_key(|se| se.seq);
        ordered.into_iter().map(|se| &se.entry).collect()
    }

    fn clear(&mut self) {
        // Sequence keeps counting so ordering stays monotonic across clears.
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
