//! resource - Three-state async values
//!
//! Wraps an asynchronous fetch in a pending / resolved / rejected value
//! that stateless consumers can render. Each resource is keyed by a
//! [`DependencyKey`] fingerprint of the operation's inputs; a changed
//! key restarts the lifecycle from pending, and completions from an
//! operation whose key has since been superseded are discarded without
//! an observable transition.
//!
//! # Concurrency
//!
//! Each resource is logically single-writer. Stale-result suppression
//! uses a generation counter: [`AsyncResource::begin`] hands out a
//! ticket for the current generation and [`AsyncResource::complete`]
//! applies a result only if that generation is still current. True
//! cancellation of the underlying transport is not attempted; late
//! completions are simply ignored.

mod key;

pub use key::DependencyKey;

use std::future::Future;
use std::sync::{Arc, RwLock};

use crate::api::InsightsError;

/// Lifecycle state of an async resource.
#[derive(Debug, Clone)]
pub enum ResourceState<T> {
    /// The operation for the current dependency key has not settled.
    Pending,
    /// The operation resolved with a value.
    Resolved(T),
    /// The operation rejected with an error.
    Rejected(InsightsError),
}

impl<T> ResourceState<T> {
    /// Whether the state is pending.
    pub fn is_pending(&self) -> bool {
        matches!(self, ResourceState::Pending)
    }
}

/// Flattened view of a resource for stateless consumers.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// True while the current operation has not settled.
    pub loading: bool,
    /// The rejection, if the current operation failed.
    pub error: Option<InsightsError>,
    /// The resolved value, if the current operation succeeded.
    pub value: Option<T>,
}

/// Permission to settle one generation of a resource.
///
/// Returned by [`AsyncResource::begin`]; a ticket whose generation has
/// been superseded can no longer affect the resource.
#[derive(Debug)]
#[must_use = "a begun operation should be completed"]
pub struct Ticket {
    generation: u64,
}

struct Slot<T> {
    key: Option<DependencyKey>,
    generation: u64,
    state: ResourceState<T>,
}

/// A re-keyable async value with stale-result suppression.
///
/// # Example
///
/// ```
/// use repolens::resource::{AsyncResource, DependencyKey};
///
/// # tokio_test::block_on(async {
/// let resource: AsyncResource<Vec<u64>> = AsyncResource::new();
/// let key = DependencyKey::from_parts(&["acme", "widgets", "releases"]);
///
/// resource.load(key, async { Ok(vec![1, 2]) }).await;
///
/// let snapshot = resource.snapshot();
/// assert!(!snapshot.loading);
/// assert_eq!(snapshot.value.unwrap(), vec![1, 2]);
/// # });
/// ```
pub struct AsyncResource<T> {
    inner: Arc<RwLock<Slot<T>>>,
}

impl<T> Clone for AsyncResource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Default for AsyncResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> AsyncResource<T> {
    /// Create a resource with no dependency key yet.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Slot {
                key: None,
                generation: 0,
                state: ResourceState::Pending,
            })),
        }
    }

    /// Current state for the current dependency key.
    pub fn state(&self) -> ResourceState<T> {
        self.read().state.clone()
    }

    /// Flattened `{loading, error, value}` view.
    pub fn snapshot(&self) -> Snapshot<T> {
        match self.state() {
            ResourceState::Pending => Snapshot {
                loading: true,
                error: None,
                value: None,
            },
            ResourceState::Resolved(value) => Snapshot {
                loading: false,
                error: None,
                value: Some(value),
            },
            ResourceState::Rejected(error) => Snapshot {
                loading: false,
                error: Some(error),
                value: None,
            },
        }
    }

    /// Start a fresh lifecycle for `key`.
    ///
    /// If `key` already matches the current key, the operation in
    /// flight (or already settled) remains current and `None` is
    /// returned; exactly one operation exists per dependency key. A
    /// different key resets the state to pending, supersedes any
    /// in-flight operation, and returns a ticket for the new
    /// generation.
    pub fn begin(&self, key: DependencyKey) -> Option<Ticket> {
        let mut slot = self.write();
        if slot.key.as_ref() == Some(&key) {
            return None;
        }
        slot.key = Some(key);
        slot.generation += 1;
        slot.state = ResourceState::Pending;
        Some(Ticket {
            generation: slot.generation,
        })
    }

    /// Settle the generation named by `ticket`.
    ///
    /// Returns `true` if the result was applied. A stale ticket (its
    /// key was superseded before the operation settled) is discarded
    /// and the current state is left untouched.
    pub fn complete(&self, ticket: Ticket, result: Result<T, InsightsError>) -> bool {
        let mut slot = self.write();
        if ticket.generation != slot.generation {
            return false;
        }
        slot.state = match result {
            Ok(value) => ResourceState::Resolved(value),
            Err(error) => ResourceState::Rejected(error),
        };
        true
    }

    /// Run `op` as the current operation for `key`.
    ///
    /// No-op if `key` is already current (re-entrancy protection).
    pub async fn load<F>(&self, key: DependencyKey, op: F)
    where
        F: Future<Output = Result<T, InsightsError>>,
    {
        if let Some(ticket) = self.begin(key) {
            let result = op.await;
            self.complete(ticket, result);
        }
    }

    /// Forget the current key so the same inputs can be fetched again.
    ///
    /// The explicit re-trigger path; state returns to pending and any
    /// in-flight operation is superseded.
    pub fn invalidate(&self) {
        let mut slot = self.write();
        slot.key = None;
        slot.generation += 1;
        slot.state = ResourceState::Pending;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Slot<T>> {
        // Lock is never held across await points, so poisoning can only
        // come from a panicking reader/writer; propagate it.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Slot<T>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
