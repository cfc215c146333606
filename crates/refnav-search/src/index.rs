//! Search index over topic titles
//!
//! Matching is a case-insensitive substring test against titles only.
//! Results keep flatten order and are truncated to the limit; there is no
//! relevance scoring.

use refnav_taxonomy::{Difficulty, Taxonomy, Topic};
use serde::Serialize;

/// Default maximum number of results
pub const MAX_RESULTS: usize = 8;

/// One matching topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Topic title
    pub title: String,
    /// Topic route, the navigation target
    pub route: String,
    /// Owning category id
    pub category: String,
    /// Difficulty badge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Position in flatten order
    pub position: usize,
}

/// Outcome of evaluating one query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchResults {
    /// At most `limit` hits in flatten order
    pub hits: Vec<SearchHit>,
    /// Number of matches before truncation
    pub total_matches: usize,
    /// Whether the result panel should be shown
    pub panel_open: bool,
}

impl SearchResults {
    /// Check for zero hits
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of hits shown
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Check whether matches were dropped by the limit
    #[inline]
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.hits.len()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    topic: Topic,
    /// Lowercased title
    folded: String,
}

/// Flattened, pre-folded view of a taxonomy
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<Entry>,
    limit: usize,
}

impl SearchIndex {
    /// Index every topic of `taxonomy` in flatten order
    #[must_use]
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let entries: Vec<Entry> = taxonomy
            .flatten()
            .iter()
            .map(|topic| Entry {
                folded: topic.title.to_lowercase(),
                topic: topic.clone(),
            })
            .collect();
        tracing::debug!("Search index built over {} topics", entries.len());
        Self {
            entries,
            limit: MAX_RESULTS,
        }
    }

    /// With a different result limit (at least one)
    #[inline]
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Result limit
    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of indexed topics
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for an empty index
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluate a query
    ///
    /// Empty or whitespace-only queries yield no hits and a closed panel.
    /// Surrounding whitespace is ignored when matching.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResults {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }

        let mut hits = Vec::new();
        let mut total_matches = 0;
        for (position, entry) in self.entries.iter().enumerate() {
            if !entry.folded.contains(&needle) {
                continue;
            }
            total_matches += 1;
            if hits.len() < self.limit {
                hits.push(SearchHit {
                    title: entry.topic.title.clone(),
                    route: entry.topic.route.clone(),
                    category: entry.topic.category.clone(),
                    difficulty: entry.topic.difficulty,
                    position,
                });
            }
        }

        tracing::trace!("Query {:?}: {} of {} matches", needle, hits.len(), total_matches);
        SearchResults {
            hits,
            total_matches,
            panel_open: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn builtin() -> SearchIndex {
        SearchIndex::new(&Taxonomy::builtin())
    }

    #[test]
    fn empty_query_closes_panel() {
        let index = builtin();
        for query in ["", "   ", "\t\n"] {
            let results = index.search(query);
            assert!(results.is_empty());
            assert!(!results.panel_open);
        }
    }

    #[test]
    fn flex_finds_flexbox_only() {
        let results = builtin().search("flex");
        assert_eq!(results.len(), 1);
        assert_eq!(results.hits[0].title, "Flexbox");
        assert_eq!(results.hits[0].route, "/css/layout/flexbox");
        assert!(results.panel_open);
    }

    #[test]
    fn match_is_case_insensitive() {
        let index = builtin();
        assert_eq!(index.search("FLEXBOX"), index.search("flexbox"));
        assert_eq!(index.search("  flexbox  ").len(), 1);
    }

    #[test]
    fn usestate_exact_entry() {
        let results = builtin().search("useState");
        let exact: Vec<_> = results.hits.iter().filter(|h| h.title == "useState").collect();
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].route, "/react/hooks/useState");
    }

    #[test]
    fn titles_only() {
        // category title, subcategory title, category description
        assert!(builtin().search("React").is_empty());
        assert!(builtin().search("React Hooks").is_empty());
        assert!(builtin().search("component-based").is_empty());
    }

    #[test]
    fn no_match_keeps_panel_open() {
        let results = builtin().search("zzzz");
        assert!(results.is_empty());
        assert!(results.panel_open);
    }

    #[test]
    fn limit_is_clamped() {
        let index = builtin().with_limit(0);
        assert_eq!(index.limit(), 1);
        assert_eq!(index.search("use").len(), 1);
    }
}
