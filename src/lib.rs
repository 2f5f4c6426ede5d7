//! # Prometheus Turnstile
//!
//! Queue-based scheduling primitives for deciding who goes next.
//!
//! ## Components
//!
//! - **`PrioritySelectionQueue`**: hands out the highest-priority pending value.
//!   Entries with equal priority leave in the order they arrived.
//! - **`RoundRobinTurnQueue`**: cycles named entities through service turns.
//!   Each entity carries a turn quota and leaves the rotation once it is used
//!   up. A quota of zero or less never runs out.
//!
//! Both structures are synchronous and single-caller. Wrap one in
//! [`core::SharedQueue`] to share it across threads behind a single lock.
//!
//! ## Priority selection
//!
//! ```
//! use prometheus_turnstile::config::SelectionStrategy;
//! use prometheus_turnstile::core::PrioritySelectionQueue;
//!
//! // Linear scan is the default; the heap backend trades O(n) selection
//! // for O(log n) with the same tie-break.
//! let mut q = PrioritySelectionQueue::with_strategy(SelectionStrategy::Heap);
//! q.enqueue("Low", 1);
//! q.enqueue("High", 10);
//! q.enqueue("Also high", 10);
//!
//! assert_eq!(q.dequeue_highest()?, "High");
//! assert_eq!(q.dequeue_highest()?, "Also high");
//! assert_eq!(q.dequeue_highest()?, "Low");
//! # Ok::<(), prometheus_turnstile::core::SchedulerError>(())
//! ```
//!
//! ## Round-robin turns
//!
//! ```
//! use prometheus_turnstile::core::RoundRobinTurnQueue;
//!
//! let mut q = RoundRobinTurnQueue::new();
//! q.add_person("Bob", 2);
//! q.add_person("Tim", 1);
//! q.add_person("Sue", 0); // unlimited
//!
//! let served: Vec<String> = (0..6)
//!     .map(|_| q.get_next_person().map(|p| p.name))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(served, ["Bob", "Tim", "Sue", "Bob", "Sue", "Sue"]);
//! assert_eq!(q.len(), 1);
//! # Ok::<(), prometheus_turnstile::core::SchedulerError>(())
//! ```
//!
//! ## Configuration
//!
//! Queues can be built from a [`config::SchedulerConfig`] loaded from JSON or
//! from `TURNSTILE_*` environment variables; see [`builders::build_queues`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core queue abstractions, errors and the audit trail.
pub mod core;
/// Configuration models for queue backends and capacities.
pub mod config;
/// Builders to construct queues from configuration.
pub mod builders;
/// Selection backends behind the priority queue.
pub mod infra;
/// Shared utilities.
pub mod util;
