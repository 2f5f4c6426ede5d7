//! Shared handle for hosts that use one queue from several threads.
//!
//! The queues themselves are single-caller structures. `SharedQueue` puts one
//! behind a single exclusive `parking_lot::Mutex` that guards reads and
//! mutations alike, so every call observes a consistent queue.
//!
//! ```
//! use prometheus_turnstile::core::{RoundRobinTurnQueue, SharedQueue};
//!
//! let shared = SharedQueue::new(RoundRobinTurnQueue::new());
//! let other = shared.clone();
//! other.with(|q| q.add_person("Bob", 1));
//!
//! let bob = shared.with(|q| q.get_next_person())?;
//! assert_eq!(bob.turns, 0);
//! # Ok::<(), prometheus_turnstile::core::SchedulerError>(())
//! ```

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// Cloneable, lock-guarded handle to a queue.
#[derive(Debug, Default)]
pub struct SharedQueue<Q> {
    inner: Arc<Mutex<Q>>,
}

impl<Q> Clone for SharedQueue<Q> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Q> SharedQueue<Q> {
    /// Wrap `queue` for shared use.
    pub fn new(queue: Q) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    /// Run `f` with exclusive access and return its result.
    pub fn with<R>(&self, f: impl FnOnce(&mut Q) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Hold the lock across several calls.
    pub fn lock(&self) -> MutexGuard<'_, Q> {
        self.inner.lock()
    }

    /// Recover the queue if this is the last handle, otherwise hand the handle back.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged while other clones are alive.
    pub fn try_unwrap(self) -> Result<Q, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
