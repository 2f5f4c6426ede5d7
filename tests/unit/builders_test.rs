//! Tests for builder modules

use prometheus_turnstile::builders::{build_priority_queue, build_queues, build_turn_queue};
use prometheus_turnstile::config::{
    PriorityQueueConfig, SchedulerConfig, SelectionStrategy, TurnQueueConfig,
};
use prometheus_turnstile::core::{AuditAction, SchedulerError};

#[test]
fn test_build_priority_queue_uses_strategy() {
    let config = PriorityQueueConfig {
        strategy: SelectionStrategy::Heap,
        initial_capacity: 8,
    };
    let queue = build_priority_queue::<String>(&config);
    assert_eq!(queue.strategy(), SelectionStrategy::Heap);
    assert!(queue.is_empty());
}

#[test]
fn test_build_turn_queue_without_audit() {
    let (queue, audit) = build_turn_queue(&TurnQueueConfig::default());
    assert!(queue.is_empty());
    assert!(audit.is_none());
}

#[test]
fn test_build_turn_queue_with_audit() {
    let config = TurnQueueConfig {
        initial_capacity: 4,
        audit_capacity: Some(2),
    };
    let (mut queue, audit) = build_turn_queue(&config);
    let audit = audit.unwrap();

    queue.add_person("Bob", 1);
    queue.get_next_person().unwrap();
    queue.add_person("Sue", 0);

    // Bounded to the two most recent events.
    let events = audit.lock().events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, AuditAction::Evicted);
    assert_eq!(events[1].subject, "Sue");
}

#[test]
fn test_build_queues() {
    let built = build_queues::<String>(&SchedulerConfig::default()).unwrap();
    assert_eq!(built.priority.strategy(), SelectionStrategy::LinearScan);
    assert!(built.turns.is_empty());
    assert!(built.audit.is_none());
}

#[test]
fn test_build_queues_rejects_invalid_config() {
    let mut config = SchedulerConfig::default();
    config.turns.audit_capacity = Some(0);

    let err = build_queues::<String>(&config).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidConfig(_)));
}
