//! Search box state machine
//!
//! States: query text, panel open/closed, and focus (held on the
//! [`Document`]). Transitions:
//!
//! | Event | Effect |
//! |---|---|
//! | input | re-evaluate; panel open iff query is non-blank |
//! | Ctrl/Cmd+K | take focus from whoever holds it |
//! | Escape | close panel, drop focus, keep query |
//! | select | clear query, close panel, drop focus, request navigation |

use crate::index::{SearchIndex, SearchResults};
use parking_lot::Mutex;
use refnav_dom::{Document, KeyChord, KeyListenerGuard, NavigationRequest};
use std::sync::Arc;

/// Focus target id of the search field
pub const SEARCH_FIELD: &str = "search";

/// What a key press did to the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Ctrl/Cmd+K moved focus to the field
    Focused,
    /// Escape closed the panel and dropped focus
    Dismissed,
    /// Not a search key, or nothing to do
    Ignored,
}

#[derive(Debug, Default)]
struct SearchState {
    query: String,
    panel_open: bool,
    results: SearchResults,
}

/// Search field with its result panel
#[derive(Debug, Clone)]
pub struct SearchBox {
    index: Arc<SearchIndex>,
    document: Document,
    state: Arc<Mutex<SearchState>>,
}

impl SearchBox {
    /// Create a search box on `document`
    #[must_use]
    pub fn new(index: Arc<SearchIndex>, document: Document) -> Self {
        Self {
            index,
            document,
            state: Arc::new(Mutex::new(SearchState::default())),
        }
    }

    /// Register the global keydown listener
    ///
    /// Keyboard shortcuts work for as long as the returned guard lives.
    pub fn mount(&self) -> KeyListenerGuard {
        let state = Arc::clone(&self.state);
        let document = self.document.clone();
        self.document.add_keydown_listener(move |chord| {
            handle_key(&state, &document, chord) != KeyOutcome::Ignored
        })
    }

    /// Replace the query text (one keystroke)
    pub fn input(&self, text: &str) {
        let results = self.index.search(text);
        let mut state = self.state.lock();
        state.query = text.to_string();
        state.panel_open = results.panel_open;
        state.results = results;
    }

    /// Handle a key press delivered to the field directly
    pub fn key(&self, chord: &KeyChord) -> KeyOutcome {
        handle_key(&self.state, &self.document, chord)
    }

    /// Field received focus (click or tab)
    pub fn focus(&self) {
        focus_field(&self.state, &self.document);
    }

    /// Field lost focus; the panel closes, the query stays
    pub fn blur(&self) {
        self.document.blur(SEARCH_FIELD);
        self.state.lock().panel_open = false;
    }

    /// Choose the hit at `index`
    ///
    /// Returns `None` when the panel is closed or `index` is out of range;
    /// state is left untouched in that case.
    pub fn select(&self, index: usize) -> Option<NavigationRequest> {
        let mut state = self.state.lock();
        if !state.panel_open {
            return None;
        }
        let route = state.results.hits.get(index)?.route.clone();

        state.query.clear();
        state.results = SearchResults::default();
        state.panel_open = false;
        drop(state);

        self.document.blur(SEARCH_FIELD);
        tracing::debug!("Search selected {}", route);
        Some(NavigationRequest::to(route))
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> String {
        self.state.lock().query.clone()
    }

    /// Check whether the result panel is shown
    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.state.lock().panel_open
    }

    /// Check whether the field holds focus
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.document.has_focus(SEARCH_FIELD)
    }

    /// Results for the current query
    #[must_use]
    pub fn results(&self) -> SearchResults {
        self.state.lock().results.clone()
    }
}

fn focus_field(state: &Mutex<SearchState>, document: &Document) {
    document.focus(SEARCH_FIELD);
    let mut state = state.lock();
    if !state.query.trim().is_empty() {
        state.panel_open = true;
    }
}

fn handle_key(state: &Mutex<SearchState>, document: &Document, chord: &KeyChord) -> KeyOutcome {
    if chord.is_command_k() {
        focus_field(state, document);
        return KeyOutcome::Focused;
    }

    if chord.is_escape() {
        let mut state = state.lock();
        let focused = document.has_focus(SEARCH_FIELD);
        if !state.panel_open && !focused {
            return KeyOutcome::Ignored;
        }
        state.panel_open = false;
        drop(state);
        document.blur(SEARCH_FIELD);
        return KeyOutcome::Dismissed;
    }

    KeyOutcome::Ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use refnav_taxonomy::Taxonomy;

    fn search_box() -> (SearchBox, Document) {
        let doc = Document::new();
        let index = Arc::new(SearchIndex::new(&Taxonomy::builtin()));
        (SearchBox::new(index, doc.clone()), doc)
    }

    #[test]
    fn typing_opens_panel() {
        let (search, _) = search_box();
        search.input("flex");
        assert!(search.is_panel_open());
        assert_eq!(search.results().len(), 1);

        search.input("   ");
        assert!(!search.is_panel_open());
        assert!(search.results().is_empty());
    }

    #[test]
    fn command_k_steals_focus() {
        let (search, doc) = search_box();
        doc.focus("comment-editor");
        assert_eq!(search.key(&KeyChord::key("k").with_meta()), KeyOutcome::Focused);
        assert!(search.is_focused());
    }

    #[test]
    fn escape_keeps_query() {
        let (search, _) = search_box();
        search.focus();
        search.input("grid");
        assert_eq!(search.key(&KeyChord::escape()), KeyOutcome::Dismissed);
        assert!(!search.is_panel_open());
        assert!(!search.is_focused());
        assert_eq!(search.query(), "grid");
    }

    #[test]
    fn escape_without_focus_or_panel_is_ignored() {
        let (search, doc) = search_box();
        doc.focus("elsewhere");
        assert_eq!(search.key(&KeyChord::escape()), KeyOutcome::Ignored);
        assert!(doc.has_focus("elsewhere"));
    }

    #[test]
    fn refocus_reopens_panel_for_kept_query() {
        let (search, _) = search_box();
        search.input("grid");
        search.key(&KeyChord::escape());
        search.focus();
        assert!(search.is_panel_open());
    }

    #[test]
    fn blur_closes_panel_keeps_query() {
        let (search, _) = search_box();
        search.focus();
        search.input("hook");
        search.blur();
        assert!(!search.is_panel_open());
        assert!(!search.is_focused());
        assert_eq!(search.query(), "hook");
    }

    #[test]
    fn select_clears_and_navigates() {
        let (search, _) = search_box();
        search.focus();
        search.input("flex");
        let request = search.select(0).unwrap();
        assert_eq!(request.route, "/css/layout/flexbox");
        assert_eq!(search.query(), "");
        assert!(!search.is_panel_open());
        assert!(!search.is_focused());
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let (search, _) = search_box();
        search.input("flex");
        assert!(search.select(5).is_none());
        assert_eq!(search.query(), "flex");
        assert!(search.is_panel_open());
    }

    #[test]
    fn select_with_closed_panel_is_noop() {
        let (search, _) = search_box();
        search.input("flex");
        search.key(&KeyChord::escape());
        assert!(search.select(0).is_none());
    }

    #[test]
    fn mount_routes_global_keys() {
        let (search, doc) = search_box();
        let guard = search.mount();
        assert!(doc.dispatch_keydown(&KeyChord::key("k").with_ctrl()));
        assert!(search.is_focused());

        drop(guard);
        doc.blur(SEARCH_FIELD);
        assert!(!doc.dispatch_keydown(&KeyChord::key("k").with_ctrl()));
        assert!(!search.is_focused());
    }
}
