//! Builders to construct queues from configuration.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::{PriorityQueueConfig, SchedulerConfig, TurnQueueConfig};
use crate::core::{InMemoryAuditSink, PrioritySelectionQueue, RoundRobinTurnQueue, SchedulerError};

/// Caller-side handle on the audit sink attached to a built turn queue.
pub type AuditHandle = Arc<Mutex<InMemoryAuditSink>>;

/// Both queues built from one [`SchedulerConfig`].
#[derive(Debug)]
pub struct BuiltQueues<T> {
    /// Priority selection queue.
    pub priority: PrioritySelectionQueue<T>,
    /// Round-robin turn queue.
    pub turns: RoundRobinTurnQueue,
    /// Audit sink attached to `turns`, when auditing is configured.
    pub audit: Option<AuditHandle>,
}

/// Build a priority selection queue using the configured backend.
#[must_use]
pub fn build_priority_queue<T>(cfg: &PriorityQueueConfig) -> PrioritySelectionQueue<T> {
    PrioritySelectionQueue::with_capacity(cfg.strategy, cfg.initial_capacity)
}

/// Build a turn queue, attaching a bounded in-memory audit sink when configured.
#[must_use]
pub fn build_turn_queue(cfg: &TurnQueueConfig) -> (RoundRobinTurnQueue, Option<AuditHandle>) {
    let queue = RoundRobinTurnQueue::with_capacity(cfg.initial_capacity);
    match cfg.audit_capacity {
        Some(capacity) => {
            let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(capacity)));
            (queue.with_audit(Box::new(Arc::clone(&sink))), Some(sink))
        }
        None => (queue, None),
    }
}

/// Validate `cfg` and build both queues from it.
///
/// # Errors
///
/// [`SchedulerError::InvalidConfig`] if validation fails.
pub fn build_queues<T>(cfg: &SchedulerConfig) -> Result<BuiltQueues<T>, SchedulerError> {
    cfg.validate().map_err(SchedulerError::InvalidConfig)?;

    let priority = build_priority_queue(&cfg.priority);
    let (turns, audit) = build_turn_queue(&cfg.turns);
    tracing::info!(
        strategy = %cfg.priority.strategy,
        audited = audit.is_some(),
        "queues built"
    );
    Ok(BuiltQueues {
        priority,
        turns,
        audit,
    })
}
