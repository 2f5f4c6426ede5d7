//! Error types for queue operations.

use std::fmt;

use thiserror::Error;

/// Which structure a selection was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// The priority selection queue.
    Priority,
    /// The round-robin turn queue.
    Turns,
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority => write!(f, "the queue is empty"),
            Self::Turns => write!(f, "no one in the queue"),
        }
    }
}

/// Errors produced by scheduler components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// Selection was invoked on a structure with zero entries.
    /// The structure is left untouched.
    #[error("{0}")]
    EmptyQueue(QueueKind),
    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl SchedulerError {
    /// Whether this error is the empty-queue kind, regardless of structure.
    #[must_use]
    pub const fn is_empty_queue(&self) -> bool {
        matches!(self, Self::EmptyQueue(_))
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
