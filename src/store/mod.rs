//! Reactive in-memory stores.
//!
//! Each store owns a [`StateCell`]: screens read snapshots and subscribe for
//! change notifications, mutators update state synchronously and then fire
//! off a persistence write without awaiting it. [`PendingWrites`] keeps the
//! spawned write handles so tests (and shutdown paths) can wait for them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use futures::future::join_all;
use tokio::task::JoinHandle;

pub mod movies;
pub mod theme;

pub use movies::MovieStore;
pub use theme::ThemeStore;

type Listener<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`StateCell::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Shared state holder with synchronous mutation and synchronous listener
/// fan-out.
///
/// `mutate` runs the closure under the write lock, so the closure's return
/// value (typically the serialized payload for the follow-up persistence
/// write) is always computed from the state the mutation just produced, even
/// when mutations interleave. Listeners run after the lock is released, with
/// a snapshot of the new state. Subscribing or mutating from inside a
/// listener is not supported.
pub struct StateCell<S> {
    inner: Arc<CellInner<S>>,
}

struct CellInner<S> {
    state: RwLock<S>,
    listeners: Mutex<Vec<(SubscriptionId, Listener<S>)>>,
    next_id: AtomicU64,
}

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Clone> StateCell<S> {
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(CellInner {
                state: RwLock::new(initial),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> S {
        self.with(Clone::clone)
    }

    /// Run a closure against the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = self
            .inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Apply a mutation and notify listeners with the new state.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut state);
            (result, state.clone())
        };

        let listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in listeners.iter() {
            listener(&snapshot);
        }

        result
    }

    pub fn subscribe(&self, listener: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(listener)));
        id
    }

    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }
}

/// Tracks in-flight fire-and-forget persistence writes.
///
/// Mutators never await their writes; `flush` exists so tests and shutdown
/// paths can make persistence deterministic.
#[derive(Default)]
pub struct PendingWrites {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl PendingWrites {
    pub fn track(&self, handle: JoinHandle<()>) {
        let mut handles = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    /// Wait for every write issued so far to complete or fail.
    pub async fn flush(&self) {
        let drained: Vec<JoinHandle<()>> = {
            let mut handles = self
                .handles
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *handles)
        };
        let _ = join_all(drained).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn mutate_returns_value_computed_under_the_lock() {
        let cell = StateCell::new(vec![1, 2]);
        let len = cell.mutate(|v| {
            v.push(3);
            v.len()
        });
        assert_eq!(len, 3);
        assert_eq!(cell.get(), vec![1, 2, 3]);
    }

    #[test]
    fn listeners_fire_synchronously_and_stop_after_unsubscribe() {
        let cell = StateCell::new(0u32);
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        let id = cell.subscribe(move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        cell.mutate(|n| *n += 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        assert!(cell.unsubscribe(id));
        cell.mutate(|n| *n += 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert!(!cell.unsubscribe(id));
    }
}
