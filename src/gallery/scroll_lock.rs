// SPDX-License-Identifier: MPL-2.0
//! Scoped scroll lock for the page behind the lightbox.
//!
//! [`ScrollLock`] is a shared counter owned by the application shell and
//! read by the view. Holders acquire a [`ScrollLockGuard`]; the page stays
//! locked while at least one guard is alive and unlocks when the last one
//! is dropped, whatever the exit path.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared scroll lock state.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock until the returned guard is dropped.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Whether any guard is currently alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::SeqCst)
    }
}

/// Proof of a held scroll lock. Releases on drop.
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lock_is_unlocked() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn guard_holds_lock_until_dropped() {
        let lock = ScrollLock::new();
        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn clones_observe_the_same_lock() {
        let lock = ScrollLock::new();
        let observer = lock.clone();
        let _guard = lock.acquire();
        assert!(observer.is_locked());
    }

    #[test]
    fn lock_stays_held_while_any_guard_lives() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);
        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }
}
