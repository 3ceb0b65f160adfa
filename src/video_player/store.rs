// SPDX-License-Identifier: MPL-2.0
//! Publish-subscribe holder for [`PlaybackState`].
//!
//! Only the controller writes. Every write produces one snapshot that is
//! handed to each subscriber in the order the writes happened. A new
//! subscriber receives the current snapshot first, so late observers never
//! miss the state they attach to.

use super::state::PlaybackState;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug)]
struct Inner {
    current: PlaybackState,
    subscribers: Vec<mpsc::UnboundedSender<PlaybackState>>,
}

/// Shared handle on the latest playback snapshot.
///
/// Cloning is cheap; all clones observe the same state.
#[derive(Debug, Clone)]
pub struct StateStore {
    inner: Arc<Mutex<Inner>>,
}

impl StateStore {
    #[must_use]
    pub fn new(initial: PlaybackState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                current: initial,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Returns a copy of the latest snapshot.
    #[must_use]
    pub fn current(&self) -> PlaybackState {
        self.inner.lock().current.clone()
    }

    /// Reads one value out of the latest snapshot without cloning it.
    pub fn read<T>(&self, f: impl FnOnce(&PlaybackState) -> T) -> T {
        f(&self.inner.lock().current)
    }

    /// Registers an observer. The current snapshot is queued immediately.
    #[must_use]
    pub fn subscribe(&self) -> StateSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // Receiver is alive in this scope, send cannot fail.
        let _ = tx.send(inner.current.clone());
        inner.subscribers.push(tx);
        StateSubscription { rx }
    }

    /// Number of live subscriptions. Dropped ones are pruned on the next publish.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let mut inner = self.inner.lock();
        inner.subscribers.retain(|tx| !tx.is_closed());
        inner.subscribers.len()
    }

    /// Applies `mutate` to the current snapshot and publishes the result.
    ///
    /// Returns `false` when the mutation left the state unchanged; nothing is
    /// published in that case.
    pub(crate) fn update(&self, mutate: impl FnOnce(&mut PlaybackState)) -> bool {
        let mut inner = self.inner.lock();
        let mut next = inner.current.clone();
        mutate(&mut next);
        if next == inner.current {
            return false;
        }
        inner.subscribers.retain(|tx| tx.send(next.clone()).is_ok());
        inner.current = next;
        true
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(PlaybackState::default())
    }
}

/// Ordered stream of snapshots for one observer.
#[derive(Debug)]
pub struct StateSubscription {
    rx: mpsc::UnboundedReceiver<PlaybackState>,
}

impl StateSubscription {
    /// Waits for the next snapshot. `None` once the store is gone.
    pub async fn next(&mut self) -> Option<PlaybackState> {
        self.rx.recv().await
    }

    /// Returns the next queued snapshot without waiting.
    pub fn try_next(&mut self) -> Option<PlaybackState> {
        self.rx.try_recv().ok()
    }

    /// Takes every queued snapshot.
    pub fn drain(&mut self) -> Vec<PlaybackState> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    /// Skips queued snapshots and returns the most recent one, if any.
    pub fn latest(&mut self) -> Option<PlaybackState> {
        self.drain().pop()
    }

    /// Waits until a snapshot satisfies `predicate` and returns it.
    pub async fn wait_for(
        &mut self,
        mut predicate: impl FnMut(&PlaybackState) -> bool,
    ) -> Option<PlaybackState> {
        while let Some(state) = self.next().await {
            if predicate(&state) {
                return Some(state);
            }
        }
        None
    }
}
