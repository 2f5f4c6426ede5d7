//! Priority selection queue.
//!
//! Entries are appended in arrival order regardless of priority. Each
//! selection removes the entry with the greatest priority; among entries that
//! share it, the earliest still-present one wins.
//!
//! ```
//! use prometheus_turnstile::core::PrioritySelectionQueue;
//!
//! let mut q = PrioritySelectionQueue::new();
//! q.enqueue("First".to_string(), 10);
//! q.enqueue("Mid".to_string(), 5);
//! q.enqueue("Second".to_string(), 10);
//!
//! assert_eq!(q.dequeue_highest()?, "First");
//! assert_eq!(q.dequeue_highest()?, "Second");
//! assert_eq!(q.dequeue_highest()?, "Mid");
//! assert!(q.dequeue_highest().is_err());
//! # Ok::<(), prometheus_turnstile::core::SchedulerError>(())
//! ```

use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::config::SelectionStrategy;
use crate::core::{PriorityEntry, QueueKind, SchedulerError, SelectionQueue};
use crate::infra::queue::{HeapQueue, LinearScanQueue};

enum Backend<T> {
    Scan(LinearScanQueue<T>),
    Heap(HeapQueue<T>),
}

/// Queue that always hands out its highest-priority value, FIFO among ties.
pub struct PrioritySelectionQueue<T = String> {
    backend: Backend<T>,
}

impl<T> PrioritySelectionQueue<T> {
    /// Create an empty queue using the linear-scan backend.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(SelectionStrategy::LinearScan)
    }

    /// Create an empty queue using the given backend.
    #[must_use]
    pub fn with_strategy(strategy: SelectionStrategy) -> Self {
        Self::with_capacity(strategy, 0)
    }

    /// Create an empty queue using the given backend, preallocating `capacity` entries.
    #[must_use]
    pub fn with_capacity(strategy: SelectionStrategy, capacity: usize) -> Self {
        let backend = match strategy {
            SelectionStrategy::LinearScan => Backend::Scan(LinearScanQueue::with_capacity(capacity)),
            SelectionStrategy::Heap => Backend::Heap(HeapQueue::with_capacity(capacity)),
        };
        Self { backend }
    }

    /// Backend in use.
    #[must_use]
    pub const fn strategy(&self) -> SelectionStrategy {
        match self.backend {
            Backend::Scan(_) => SelectionStrategy::LinearScan,
            Backend::Heap(_) => SelectionStrategy::Heap,
        }
    }

    fn queue(&self) -> &dyn SelectionQueue<T> {
        match &self.backend {
            Backend::Scan(q) => q,
            Backend::Heap(q) => q,
        }
    }

    fn queue_mut(&mut self) -> &mut dyn SelectionQueue<T> {
        match &mut self.backend {
            Backend::Scan(q) => q,
            Backend::Heap(q) => q,
        }
    }

    /// Append `value` at the back of the queue. Never fails.
    pub fn enqueue(&mut self, value: T, priority: i32) {
        self.queue_mut().push(PriorityEntry::new(value, priority));
        tracing::debug!(priority, depth = self.len(), "entry enqueued");
    }

    /// Remove the highest-priority value and return it.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::EmptyQueue`] if the queue holds nothing; the queue is unchanged.
    pub fn dequeue_highest(&mut self) -> Result<T, SchedulerError> {
        self.dequeue_entry().map(|entry| entry.value)
    }

    /// Like [`dequeue_highest`](Self::dequeue_highest) but keeps the priority alongside the value.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::EmptyQueue`] if the queue holds nothing; the queue is unchanged.
    pub fn dequeue_entry(&mut self) -> Result<PriorityEntry<T>, SchedulerError> {
        let Some(entry) = self.queue_mut().pop_highest() else {
            tracing::debug!("dequeue requested on empty priority queue");
            return Err(SchedulerError::EmptyQueue(QueueKind::Priority));
        };
        tracing::debug!(priority = entry.priority, depth = self.len(), "entry dequeued");
        Ok(entry)
    }

    /// The entry the next dequeue will return, without removing it.
    #[must_use]
    pub fn peek_highest(&self) -> Option<&PriorityEntry<T>> {
        self.queue().peek_highest()
    }

    /// Dequeue everything, highest priority first.
    pub fn drain_by_priority(&mut self) -> Vec<PriorityEntry<T>> {
        let mut drained = Vec::with_capacity(self.len());
        while let Some(entry) = self.queue_mut().pop_highest() {
            drained.push(entry);
        }
        drained
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<&PriorityEntry<T>> {
        self.queue().entries()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.queue_mut().clear();
    }

    /// Current number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue().len()
    }

    /// Whether the queue holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue().is_empty()
    }
}

impl<T> Default for PrioritySelectionQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PrioritySelectionQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrioritySelectionQueue")
            .field("strategy", &self.strategy())
            .field("entries", &self.entries())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for PrioritySelectionQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}

impl<T: Serialize> Serialize for PrioritySelectionQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}
