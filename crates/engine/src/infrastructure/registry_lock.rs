//! Mutual exclusion over the room and person registries.
//!
//! Room creation, registration, allocation and reallocation all read
//! occupancy and then write it. Each of them holds the registry guard from
//! the first read to the last write so no two sequences interleave.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Shared handle to the registry mutex.
#[derive(Clone, Default)]
pub struct RegistryLock {
    inner: Arc<Mutex<()>>,
}

/// Proof that the caller holds the registry lock.
///
/// Use cases that run inside another use case's critical section take
/// `&RegistryGuard` instead of locking again.
pub struct RegistryGuard<'a> {
    lock: &'a RegistryLock,
    _guard: MutexGuard<'a, ()>,
}

impl RegistryLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self) -> RegistryGuard<'_> {
        RegistryGuard {
            lock: self,
            _guard: self.inner.lock().await,
        }
    }
}

impl RegistryGuard<'_> {
    /// True if this guard was issued by `lock` or one of its clones.
    pub fn is_held_on(&self, lock: &RegistryLock) -> bool {
        Arc::ptr_eq(&self.lock.inner, &lock.inner)
    }
}
