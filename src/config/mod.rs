//! Configuration models for queue backends and capacities.

pub mod queues;

pub use queues::{PriorityQueueConfig, SchedulerConfig, SelectionStrategy, TurnQueueConfig};
