// stylestore/src/core/shared.rs

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// A wrapper for manager state providing shared ownership and interior
/// mutability using parking_lot::RwLock.
///
/// Cloning a `Shared<T>` clones the handle, not the data: every view holding
/// a clone observes the same cell, and the owning manager funnels all
/// mutation through it.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points in asynchronous code. Prefer the
/// scoped `with` / `update` helpers, which make it impossible to leak a guard.
#[derive(Debug)]
pub struct Shared<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> Shared<T> {
  pub fn new(data: T) -> Self {
    Shared(Arc::new(RwLock::new(data)))
  }

  /// Acquires a read lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Acquires a write lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Runs `f` under a read lock and returns its result.
  /// The guard never escapes the closure.
  pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
    f(&self.read())
  }

  /// Runs `f` under a write lock and returns its result.
  /// The guard never escapes the closure.
  pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    f(&mut self.write())
  }
}

impl<T: Send + Sync + 'static + Clone> Shared<T> {
  /// Returns an owned copy of the current value.
  pub fn snapshot(&self) -> T {
    self.read().clone()
  }
}

impl<T: Send + Sync + 'static> Clone for Shared<T> {
  fn clone(&self) -> Self {
    Shared(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for Shared<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
