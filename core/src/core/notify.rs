// stylestore/src/core/notify.rs

//! Subscriber bookkeeping shared by the state managers.
//!
//! Each manager owns one `Subscribers<E>` for its event type. Registration
//! hands back a `SubscriberId` for later removal. Delivery snapshots the
//! listener list and releases the registry lock before the first callback
//! runs, so a listener may subscribe, unsubscribe, or re-read manager state
//! without deadlocking.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{event, Level};

/// Opaque handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Listener callback, invoked synchronously after a state change commits.
pub type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct SubscriberList<E> {
  next_id: u64,
  entries: Vec<(SubscriberId, Listener<E>)>,
}

/// Registry of listeners for one event type.
///
/// Cloning yields another handle onto the same registry.
pub struct Subscribers<E>(Arc<Mutex<SubscriberList<E>>>);

impl<E> Subscribers<E> {
  pub fn new() -> Self {
    Subscribers(Arc::new(Mutex::new(SubscriberList {
      next_id: 0,
      entries: Vec::new(),
    })))
  }

  /// Registers a listener and returns the id to unsubscribe with.
  pub fn subscribe(&self, listener: impl Fn(&E) + Send + Sync + 'static) -> SubscriberId {
    let mut list = self.0.lock();
    let id = SubscriberId(list.next_id);
    list.next_id += 1;
    list.entries.push((id, Arc::new(listener)));
    event!(Level::TRACE, subscriber_id = id.0, "Listener registered.");
    id
  }

  /// Removes a listener. Returns `false` when the id was already gone.
  pub fn unsubscribe(&self, id: SubscriberId) -> bool {
    let mut list = self.0.lock();
    let before = list.entries.len();
    list.entries.retain(|(entry_id, _)| *entry_id != id);
    let removed = list.entries.len() != before;
    if removed {
      event!(Level::TRACE, subscriber_id = id.0, "Listener removed.");
    }
    removed
  }

  pub fn len(&self) -> usize {
    self.0.lock().entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.lock().entries.is_empty()
  }

  /// Delivers `payload` to every listener registered at the time of the call.
  ///
  /// The registry lock is released before the first callback runs; callers
  /// must likewise have released their state locks, so listeners can call
  /// back into the owning manager.
  pub fn emit(&self, payload: &E) {
    let listeners: Vec<Listener<E>> = {
      let list = self.0.lock();
      list.entries.iter().map(|(_, listener)| Arc::clone(listener)).collect()
    };
    if listeners.is_empty() {
      return;
    }
    event!(Level::TRACE, listener_count = listeners.len(), "Delivering state change.");
    for listener in listeners {
      listener(payload);
    }
  }
}

impl<E> Clone for Subscribers<E> {
  fn clone(&self) -> Self {
    Subscribers(Arc::clone(&self.0))
  }
}

impl<E> Default for Subscribers<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> fmt::Debug for Subscribers<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Subscribers").field("len", &self.len()).finish()
  }
}
