//! Tests for audit sink

use std::sync::Arc;

use parking_lot::Mutex;
use prometheus_turnstile::core::{
    build_audit_event, AuditAction, AuditSink, InMemoryAuditSink, RoundRobinTurnQueue,
};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(0, "Bob", AuditAction::Added, 2);

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0], event);
    assert_eq!(events[0].subject, "Bob");
    assert_eq!(events[0].action, AuditAction::Added);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(0, "Bob", AuditAction::Added, 1));
    sink.record(build_audit_event(1, "Tim", AuditAction::Added, 1));
    sink.record(build_audit_event(2, "Bob", AuditAction::Evicted, 0));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].sequence, 1); // First one popped
    assert_eq!(events[1].sequence, 2);
}

#[test]
fn test_zero_capacity_sink_keeps_nothing() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event(0, "Bob", AuditAction::Added, 1));
    assert!(sink.is_empty());
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(7, "Sue", AuditAction::Requeued, 0);

    assert_eq!(event.sequence, 7);
    assert_eq!(event.subject, "Sue");
    assert_eq!(event.action, AuditAction::Requeued);
    assert_eq!(event.turns, 0);
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_audit_event_serializes_action_snake_case() {
    let event = build_audit_event(0, "Bob", AuditAction::Evicted, 0);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["action"], "evicted");
    assert_eq!(value["subject"], "Bob");
}

#[test]
fn test_queue_records_post_service_turns() {
    let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(10)));
    let mut queue = RoundRobinTurnQueue::new().with_audit(Box::new(Arc::clone(&sink)));
    queue.add_person("Bob", 2);
    queue.get_next_person().unwrap();
    queue.get_next_person().unwrap();

    let turns: Vec<_> = sink.lock().events().iter().map(|e| (e.action, e.turns)).collect();
    assert_eq!(
        turns,
        [
            (AuditAction::Added, 2),
            (AuditAction::Requeued, 1),
            (AuditAction::Evicted, 0),
        ]
    );
}
