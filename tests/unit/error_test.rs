//! Tests for error types

use prometheus_turnstile::core::{QueueKind, SchedulerError};

#[test]
fn test_priority_empty_error() {
    let err = SchedulerError::EmptyQueue(QueueKind::Priority);
    assert_eq!(format!("{}", err), "the queue is empty");
    assert!(err.is_empty_queue());
}

#[test]
fn test_turns_empty_error() {
    let err = SchedulerError::EmptyQueue(QueueKind::Turns);
    assert_eq!(format!("{}", err), "no one in the queue");
    assert!(err.is_empty_queue());
}

#[test]
fn test_invalid_config_error() {
    let err = SchedulerError::InvalidConfig("audit_capacity must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: audit_capacity must be greater than 0"
    );
    assert!(!err.is_empty_queue());
}

#[test]
fn test_error_converts_to_anyhow() {
    let result: prometheus_turnstile::core::AppResult<()> =
        Err(SchedulerError::EmptyQueue(QueueKind::Turns).into());
    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<SchedulerError>(),
        Some(&SchedulerError::EmptyQueue(QueueKind::Turns))
    );
}
