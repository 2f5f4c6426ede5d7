//! Audit trail for turn queue activity.
//!
//! Every add and every service outcome of a [`RoundRobinTurnQueue`] can be
//! recorded to an [`AuditSink`]. The in-memory sink keeps a bounded window of
//! the most recent events.
//!
//! [`RoundRobinTurnQueue`]: crate::core::RoundRobinTurnQueue

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::util::clock::now_ms;

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Entity joined the back of the queue.
    Added,
    /// Entity was served and went back to the end of the line.
    Requeued,
    /// Entity was served for the last time and left the queue.
    Evicted,
}

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Per-queue monotonically increasing event number.
    pub sequence: u64,
    /// Name of the entity concerned.
    pub subject: String,
    /// Action taken.
    pub action: AuditAction,
    /// Turn count after the action.
    pub turns: i32,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// A sink behind a shared lock, so the caller can inspect what a queue recorded.
impl<S: AuditSink> AuditSink for Arc<Mutex<S>> {
    fn record(&mut self, event: AuditEvent) {
        self.lock().record(event);
    }
}

/// In-memory audit sink for testing and dev.
#[derive(Debug)]
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an audit event stamped with the current time.
pub fn build_audit_event(
    sequence: u64,
    subject: impl Into<String>,
    action: AuditAction,
    turns: i32,
) -> AuditEvent {
    AuditEvent {
        sequence,
        subject: subject.into(),
        action,
        turns,
        created_at_ms: now_ms(),
    }
}
