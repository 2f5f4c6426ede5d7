//! Round-robin turn queue.
//!
//! Entities are served strictly in FIFO rotation: the front entity is popped,
//! charged one turn and pushed to the back unless that was its last turn. An
//! entity added with zero or negative turns has unlimited turns and is never
//! charged or evicted.
//!
//! ```
//! use prometheus_turnstile::core::RoundRobinTurnQueue;
//!
//! let mut q = RoundRobinTurnQueue::new();
//! q.add_person("Bob", 2);
//! q.add_person("Sue", 0);
//!
//! assert_eq!(q.get_next_person()?.name, "Bob");
//! assert_eq!(q.get_next_person()?.name, "Sue");
//! assert_eq!(q.get_next_person()?.turns, 0); // Bob's last turn
//! assert_eq!(q.len(), 1);
//! # Ok::<(), prometheus_turnstile::core::SchedulerError>(())
//! ```

use std::collections::VecDeque;
use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

use crate::core::audit::{build_audit_event, AuditAction, AuditSink};
use crate::core::{QueueKind, SchedulerError};

/// A named participant and the turns it has left.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct TurnEntity {
    /// Display name.
    pub name: String,
    /// Remaining turns; zero or less means unlimited.
    pub turns: i32,
}

/// Service state of an entity still in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Never charged, never evicted.
    Infinite,
    /// This many turns left before eviction.
    Active(u32),
}

impl TurnEntity {
    /// Create an entity with `turns` remaining.
    #[must_use]
    pub fn new(name: impl Into<String>, turns: i32) -> Self {
        Self {
            name: name.into(),
            turns,
        }
    }

    /// Whether this entity has unlimited turns.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        self.turns <= 0
    }

    /// Current service state.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        if self.is_infinite() {
            TurnState::Infinite
        } else {
            TurnState::Active(self.turns.unsigned_abs())
        }
    }
}

impl fmt::Display for TurnEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.turns)
    }
}

/// What the queue did with a served entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOutcome {
    /// Back at the end of the line.
    Requeued,
    /// Used its last turn and left the queue.
    Evicted,
}

/// Result of one service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// The served entity, with its post-service turn count.
    pub person: TurnEntity,
    /// Whether it was requeued or evicted.
    pub outcome: ServiceOutcome,
}

/// Circular FIFO of entities with per-entity turn quotas.
pub struct RoundRobinTurnQueue {
    people: VecDeque<TurnEntity>,
    audit: Option<Box<dyn AuditSink>>,
    audit_seq: u64,
}

impl RoundRobinTurnQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` entities.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            people: VecDeque::with_capacity(capacity),
            audit: None,
            audit_seq: 0,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Add an entity to the back of the queue. `turns <= 0` means unlimited.
    pub fn add_person(&mut self, name: impl Into<String>, turns: i32) {
        let person = TurnEntity::new(name, turns);
        tracing::debug!(name = %person.name, turns, "person added");
        self.record(&person, AuditAction::Added);
        self.people.push_back(person);
    }

    /// Serve the entity at the front and return it with its post-service turn count.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::EmptyQueue`] if nobody is queued; the queue is unchanged.
    pub fn get_next_person(&mut self) -> Result<TurnEntity, SchedulerError> {
        self.serve().map(|service| service.person)
    }

    /// Serve the entity at the front, reporting whether it was requeued or evicted.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::EmptyQueue`] if nobody is queued; the queue is unchanged.
    pub fn serve(&mut self) -> Result<Service, SchedulerError> {
        let Some(mut person) = self.people.pop_front() else {
            tracing::debug!("service requested on empty turn queue");
            return Err(SchedulerError::EmptyQueue(QueueKind::Turns));
        };

        // Decide on the pre-charge state: a count charged down to 0 is exhausted, not infinite.
        let outcome = if person.is_infinite() {
            ServiceOutcome::Requeued
        } else {
            person.turns -= 1;
            if person.turns > 0 {
                ServiceOutcome::Requeued
            } else {
                ServiceOutcome::Evicted
            }
        };

        match outcome {
            ServiceOutcome::Requeued => {
                tracing::debug!(name = %person.name, turns = person.turns, "person requeued");
                self.record(&person, AuditAction::Requeued);
                self.people.push_back(person.clone());
            }
            ServiceOutcome::Evicted => {
                tracing::info!(name = %person.name, "person out of turns, evicted");
                self.record(&person, AuditAction::Evicted);
            }
        }

        Ok(Service { person, outcome })
    }

    /// The entity the next service call will return, without serving it.
    #[must_use]
    pub fn peek_next(&self) -> Option<&TurnEntity> {
        self.people.front()
    }

    /// Entities in service order.
    pub fn iter(&self) -> impl Iterator<Item = &TurnEntity> {
        self.people.iter()
    }

    /// Number of entities still queued. Reflects evictions, not decrements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether nobody is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    fn record(&mut self, person: &TurnEntity, action: AuditAction) {
        if let Some(audit) = self.audit.as_mut() {
            let event = build_audit_event(self.audit_seq, person.name.clone(), action, person.turns);
            self.audit_seq += 1;
            audit.record(event);
        }
    }
}

impl Default for RoundRobinTurnQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundRobinTurnQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundRobinTurnQueue")
            .field("people", &self.people)
            .field("audited", &self.audit.is_some())
            .finish()
    }
}

impl fmt::Display for RoundRobinTurnQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, person) in self.people.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{person}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for RoundRobinTurnQueue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.people)
    }
}
