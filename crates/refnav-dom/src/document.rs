//! Host document handle
//!
//! Provides [`Document`], the page-level owner of the scroll lock, the
//! keydown listener registry and input focus.

use crate::keyboard::Listener;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

static GLOBAL: Lazy<Document> = Lazy::new(Document::new);

/// Handle to a host page
///
/// Cheap to clone; clones share state. [`Document::global`] is the
/// process-wide page. Embedders and tests that need isolation create
/// their own with [`Document::new`].
#[derive(Clone, Default)]
pub struct Document {
    pub(crate) inner: Arc<DocumentInner>,
}

#[derive(Default)]
pub(crate) struct DocumentInner {
    /// Number of live scroll lock guards
    pub(crate) scroll_locks: Mutex<usize>,
    pub(crate) listeners: Mutex<Vec<Listener>>,
    pub(crate) next_listener: AtomicU64,
    /// Id of the element holding input focus
    pub(crate) focused: Mutex<Option<String>>,
}

impl Document {
    /// Create an isolated document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide document
    #[inline]
    #[must_use]
    pub fn global() -> &'static Document {
        &GLOBAL
    }

    /// Check whether two handles refer to the same page
    #[inline]
    #[must_use]
    pub fn same_as(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Move input focus to `target`, taking it from whoever holds it
    pub fn focus(&self, target: impl Into<String>) {
        let target = target.into();
        let mut focused = self.inner.focused.lock();
        if focused.as_deref() != Some(target.as_str()) {
            tracing::trace!("Focus {:?} -> {}", *focused, target);
            *focused = Some(target);
        }
    }

    /// Remove focus from `target`
    ///
    /// Returns `false` when `target` did not hold focus; focus elsewhere is
    /// left alone.
    pub fn blur(&self, target: &str) -> bool {
        let mut focused = self.inner.focused.lock();
        if focused.as_deref() == Some(target) {
            *focused = None;
            true
        } else {
            false
        }
    }

    /// Id of the focused element, if any
    #[must_use]
    pub fn focused(&self) -> Option<String> {
        self.inner.focused.lock().clone()
    }

    /// Check whether `target` holds focus
    #[must_use]
    pub fn has_focus(&self, target: &str) -> bool {
        self.inner.focused.lock().as_deref() == Some(target)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("scroll_locks", &*self.inner.scroll_locks.lock())
            .field("listeners", &self.inner.listeners.lock().len())
            .field("focused", &*self.inner.focused.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_moves_between_targets() {
        let doc = Document::new();
        doc.focus("comment-box");
        assert!(doc.has_focus("comment-box"));

        doc.focus("search");
        assert_eq!(doc.focused().as_deref(), Some("search"));
        assert!(!doc.has_focus("comment-box"));
    }

    #[test]
    fn blur_only_affects_holder() {
        let doc = Document::new();
        doc.focus("search");
        assert!(!doc.blur("other"));
        assert!(doc.has_focus("search"));
        assert!(doc.blur("search"));
        assert_eq!(doc.focused(), None);
    }

    #[test]
    fn clones_share_state() {
        let doc = Document::new();
        let clone = doc.clone();
        clone.focus("x");
        assert!(doc.has_focus("x"));
        assert!(doc.same_as(&clone));
        assert!(!doc.same_as(&Document::new()));
    }

    #[test]
    fn global_is_singleton() {
        assert!(Document::global().same_as(Document::global()));
    }
}
