//! Fallback for paths the taxonomy does not contain
//!
//! Looks only at the first path segment. This is deliberately simpler than
//! breadcrumb resolution: a category hit offers that category's lessons,
//! anything else offers the category list.

use refnav_taxonomy::{RoutePath, Taxonomy};
use serde::Serialize;

/// Lessons offered when the first segment names a category
pub const MAX_SUGGESTIONS: usize = 6;

/// A link offered on the not-found page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Link text
    pub title: String,
    /// Link target
    pub route: String,
}

/// Not-found page contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    /// Path that was requested
    pub path: String,
    /// Title of the category named by the first segment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Lessons of that category, or one entry per category
    pub suggestions: Vec<Suggestion>,
}

impl NotFoundView {
    /// Build the view for `path`
    #[must_use]
    pub fn for_path(path: &str, taxonomy: &Taxonomy) -> Self {
        let route = RoutePath::parse(path);
        match route.first().and_then(|id| taxonomy.category(id)) {
            Some(category) => Self {
                path: path.to_string(),
                category: Some(category.title.clone()),
                suggestions: category
                    .topics()
                    .take(MAX_SUGGESTIONS)
                    .map(|t| Suggestion {
                        title: t.title.clone(),
                        route: t.route.clone(),
                    })
                    .collect(),
            },
            None => Self {
                path: path.to_string(),
                category: None,
                // categories have no page of their own; link the first lesson
                suggestions: taxonomy
                    .categories()
                    .iter()
                    .filter_map(|c| {
                        c.topics().next().map(|first| Suggestion {
                            title: c.title.clone(),
                            route: first.route.clone(),
                        })
                    })
                    .collect(),
            },
        }
    }

    /// Check whether the suggestions are scoped to one category
    #[inline]
    #[must_use]
    pub fn is_category_scoped(&self) -> bool {
        self.category.is_some()
    }
}
