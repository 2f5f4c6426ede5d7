//! Tests for configuration validation

use prometheus_turnstile::config::queues::MAX_INITIAL_CAPACITY;
use prometheus_turnstile::config::{
    PriorityQueueConfig, SchedulerConfig, SelectionStrategy, TurnQueueConfig,
};

#[test]
fn test_default_config_is_valid() {
    let config = SchedulerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.priority.strategy, SelectionStrategy::LinearScan);
    assert_eq!(config.turns.audit_capacity, None);
}

#[test]
fn test_priority_config_invalid_capacity() {
    let invalid = PriorityQueueConfig {
        strategy: SelectionStrategy::Heap,
        initial_capacity: MAX_INITIAL_CAPACITY + 1,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_turn_config_invalid_audit_capacity() {
    let invalid = TurnQueueConfig {
        initial_capacity: 4,
        audit_capacity: Some(0),
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_scheduler_config_names_failing_section() {
    let config = SchedulerConfig {
        priority: PriorityQueueConfig::default(),
        turns: TurnQueueConfig {
            initial_capacity: 4,
            audit_capacity: Some(0),
        },
    };
    let err = config.validate().unwrap_err();
    assert!(err.starts_with("turn queue invalid"), "{err}");
}

#[test]
fn test_scheduler_config_from_json() {
    let json = r#"{
        "priority": {
            "strategy": "heap",
            "initial_capacity": 128
        },
        "turns": {
            "initial_capacity": 32,
            "audit_capacity": 256
        }
    }"#;

    let config = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(config.priority.strategy, SelectionStrategy::Heap);
    assert_eq!(config.priority.initial_capacity, 128);
    assert_eq!(config.turns.initial_capacity, 32);
    assert_eq!(config.turns.audit_capacity, Some(256));
}

#[test]
fn test_scheduler_config_from_partial_json() {
    let config = SchedulerConfig::from_json_str(r#"{ "priority": { "strategy": "heap" } }"#).unwrap();
    assert_eq!(config.priority.strategy, SelectionStrategy::Heap);
    assert_eq!(config.turns, TurnQueueConfig::default());
}

#[test]
fn test_scheduler_config_from_json_rejects_invalid() {
    assert!(SchedulerConfig::from_json_str(r#"{ "turns": { "audit_capacity": 0 } }"#).is_err());
    assert!(SchedulerConfig::from_json_str(r#"{ "priority": { "strategy": "fastest" } }"#).is_err());
    assert!(SchedulerConfig::from_json_str("not json").is_err());
}

#[test]
fn test_config_json_roundtrip_names() {
    let value = serde_json::to_value(SchedulerConfig::default()).unwrap();
    assert_eq!(value["priority"]["strategy"], "linear_scan");
}

fn temp_env_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("turnstile-{}-{name}.env", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_from_env_file_rejects_malformed_file() {
    let path = temp_env_file(
        "malformed",
        "NOT A VALID LINE'\nTURNSTILE_SELECTION_STRATEGY=heap\n",
    );

    let result = SchedulerConfig::from_env_file(&path);
    std::fs::remove_file(&path).unwrap();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("loading"), "{err:#}");
}

#[test]
fn test_from_env_file_missing_file_is_fine() {
    let path = std::env::temp_dir().join(format!(
        "turnstile-{}-does-not-exist.env",
        std::process::id()
    ));
    assert!(SchedulerConfig::from_env_file(&path).is_ok());
}
