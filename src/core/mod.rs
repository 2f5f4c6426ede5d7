//! Core queue abstractions: priority selection and round-robin turns.

pub mod audit;
pub mod error;
pub mod priority_queue;
pub mod selection;
pub mod shared;
pub mod turn_queue;

pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use error::{AppResult, QueueKind, SchedulerError};
pub use priority_queue::PrioritySelectionQueue;
pub use selection::{PriorityEntry, SelectionQueue};
pub use shared::SharedQueue;
pub use turn_queue::{RoundRobinTurnQueue, Service, ServiceOutcome, TurnEntity, TurnState};
