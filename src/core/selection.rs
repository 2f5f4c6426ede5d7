//! Selection backend abstraction and the entry type it stores.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A payload tagged with a priority. Higher values are selected first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityEntry<T> {
    /// Caller-supplied payload.
    pub value: T,
    /// Selection priority.
    pub priority: i32,
}

impl<T> PriorityEntry<T> {
    /// Tag `value` with `priority`.
    pub const fn new(value: T, priority: i32) -> Self {
        Self { value, priority }
    }
}

impl<T: fmt::Display> fmt::Display for PriorityEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Pri:{})", self.value, self.priority)
    }
}

/// Abstraction for priority selection backends.
///
/// Every backend must select the entry with the greatest priority and, among
/// entries sharing that priority, the one pushed earliest.
pub trait SelectionQueue<T> {
    /// Append an entry. Never fails.
    fn push(&mut self, entry: PriorityEntry<T>);
    /// Remove and return the highest-priority entry, if any.
    fn pop_highest(&mut self) -> Option<PriorityEntry<T>>;
    /// The entry `pop_highest` would return, without removing it.
    fn peek_highest(&self) -> Option<&PriorityEntry<T>>;
    /// All entries in insertion order.
    fn entries(&self) -> Vec<&PriorityEntry<T>>;
    /// Drop every entry.
    fn clear(&mut self);
    /// Current depth.
    fn len(&self) -> usize;
    /// Whether the backend holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
