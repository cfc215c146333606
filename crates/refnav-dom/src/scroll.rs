//! Scoped scroll lock
//!
//! Page scrolling is suppressed while at least one [`ScrollLockGuard`] is
//! alive. Release happens in `Drop`, so every exit path of the owner
//! (explicit close, replacement, teardown, unwinding) restores scrolling.

use crate::document::Document;
use std::fmt;

/// Held scroll lock; dropping it releases the lock
#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    document: Document,
}

impl Document {
    /// Suppress page scrolling until the returned guard is dropped
    pub fn lock_scroll(&self) -> ScrollLockGuard {
        let mut depth = self.inner.scroll_locks.lock();
        *depth += 1;
        if *depth == 1 {
            tracing::debug!("Scroll locked");
        }
        ScrollLockGuard {
            document: self.clone(),
        }
    }

    /// Check whether page scrolling is suppressed
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        *self.inner.scroll_locks.lock() > 0
    }

    /// Number of live guards
    #[must_use]
    pub fn scroll_lock_depth(&self) -> usize {
        *self.inner.scroll_locks.lock()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut depth = self.document.inner.scroll_locks.lock();
        *depth = depth.saturating_sub(1);
        if *depth == 0 {
            tracing::debug!("Scroll restored");
        }
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}
