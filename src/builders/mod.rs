//! Builders to construct queues from configuration.

pub mod queue_builder;

pub use queue_builder::{build_priority_queue, build_queues, build_turn_queue, AuditHandle, BuiltQueues};
