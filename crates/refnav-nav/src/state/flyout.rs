//! Collapsed-rail flyout slice
//!
//! At most one flyout is open. The open flyout owns a scroll lock guard,
//! so scrolling comes back whenever the flyout goes away, however that
//! happens.

use crate::keys::FlyoutKey;
use indexmap::IndexSet;
use refnav_dom::{Document, ScrollLockGuard};

#[derive(Debug)]
struct OpenFlyout {
    category: String,
    _scroll: ScrollLockGuard,
}

/// Flyout panel state: the open category and its own expansion set
#[derive(Debug, Default)]
pub struct FlyoutPanel {
    open: Option<OpenFlyout>,
    expanded: IndexSet<FlyoutKey>,
}

impl FlyoutPanel {
    /// No flyout open
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `category`, replacing any open flyout
    ///
    /// The expansion set starts empty. The new scroll lock is taken before
    /// the old one is released, so scrolling stays suppressed across the
    /// switch. Reopening the open category is a no-op.
    pub fn open(&mut self, category: &str, document: &Document) {
        if self.open_category() == Some(category) {
            return;
        }
        let scroll = document.lock_scroll();
        if let Some(previous) = self.open_category() {
            tracing::debug!("Flyout {} replaced by {}", previous, category);
        } else {
            tracing::debug!("Flyout {} opened", category);
        }
        self.expanded.clear();
        self.open = Some(OpenFlyout {
            category: category.to_string(),
            _scroll: scroll,
        });
    }

    /// Close the flyout and clear its expansion set
    ///
    /// Returns `true` if a flyout was open.
    pub fn close(&mut self) -> bool {
        self.expanded.clear();
        match self.open.take() {
            Some(flyout) => {
                tracing::debug!("Flyout {} closed", flyout.category);
                true
            }
            None => false,
        }
    }

    /// Flip a subcategory of the open flyout
    ///
    /// Ignored (returns `false`) unless `category` is the open flyout.
    pub fn toggle_subcategory(&mut self, category: &str, subcategory: &str) -> bool {
        if self.open_category() != Some(category) {
            return false;
        }
        let key = FlyoutKey::new(category, subcategory);
        if self.expanded.shift_remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    /// Open category id
    #[must_use]
    pub fn open_category(&self) -> Option<&str> {
        self.open.as_ref().map(|f| f.category.as_str())
    }

    /// Check whether any flyout is open
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Check whether a subcategory is expanded inside the flyout
    #[must_use]
    pub fn is_subcategory_expanded(&self, category: &str, subcategory: &str) -> bool {
        self.expanded.contains(&FlyoutKey::new(category, subcategory))
    }

    /// Expanded flyout keys
    pub fn expanded(&self) -> impl Iterator<Item = &FlyoutKey> {
        self.expanded.iter()
    }

    /// Number of expanded flyout subcategories
    #[inline]
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_open_flyout() {
        let doc = Document::new();
        let mut panel = FlyoutPanel::new();
        panel.open("react", &doc);
        panel.toggle_subcategory("react", "hooks");
        panel.open("css", &doc);

        assert_eq!(panel.open_category(), Some("css"));
        assert_eq!(panel.expanded_count(), 0);
        assert_eq!(doc.scroll_lock_depth(), 1);
    }

    #[test]
    fn reopen_same_category_keeps_expansion() {
        let doc = Document::new();
        let mut panel = FlyoutPanel::new();
        panel.open("react", &doc);
        panel.toggle_subcategory("react", "hooks");
        panel.open("react", &doc);

        assert_eq!(panel.open_category(), Some("react"));
        assert!(panel.is_subcategory_expanded("react", "hooks"));
        assert_eq!(doc.scroll_lock_depth(), 1);
    }

    #[test]
    fn close_releases_scroll() {
        let doc = Document::new();
        let mut panel = FlyoutPanel::new();
        panel.open("react", &doc);
        assert!(doc.is_scroll_locked());
        assert!(panel.close());
        assert!(!doc.is_scroll_locked());
        assert!(!panel.close());
    }

    #[test]
    fn drop_releases_scroll() {
        let doc = Document::new();
        {
            let mut panel = FlyoutPanel::new();
            panel.open("react", &doc);
        }
        assert!(!doc.is_scroll_locked());
    }

    #[test]
    fn toggle_ignored_for_other_category() {
        let doc = Document::new();
        let mut panel = FlyoutPanel::new();
        assert!(!panel.toggle_subcategory("react", "hooks"));

        panel.open("react", &doc);
        assert!(!panel.toggle_subcategory("css", "layout"));
        assert!(panel.toggle_subcategory("react", "hooks"));
        assert!(panel.is_subcategory_expanded("react", "hooks"));
        assert!(!panel.toggle_subcategory("react", "hooks"));
    }
}
