//! The read-only taxonomy store
//!
//! Provides [`Taxonomy`]: the category tree, its cached flattening and a
//! radix trie from route to flatten position.

use crate::builder::TaxonomyBuilder;
use crate::error::TaxonomyError;
use crate::model::{flatten, Category, Subcategory, Topic};
use crate::style::{color_for_category, StyleToken};
use radix_trie::Trie;
use std::fmt;
use std::path::Path;

/// Immutable category → subcategory → topic tree
///
/// Built once and never mutated. Every lookup is total: a miss is `None`
/// (or zero, or the default token), never an error.
pub struct Taxonomy {
    categories: Vec<Category>,
    /// Cached depth-first flattening
    flat: Vec<Topic>,
    /// route -> index into `flat`
    routes: Trie<String, usize>,
}

/// Neighbours of a topic in flatten order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjacent<'a> {
    /// Topic before, if any
    pub previous: Option<&'a Topic>,
    /// Topic after, if any
    pub next: Option<&'a Topic>,
}

/// Where a lesson page's self-reported `{route, category}` lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonLocation<'a> {
    /// Route and category both match a taxonomy entry
    Aligned(&'a Topic),
    /// Route matches, category does not
    CategoryMismatch {
        /// Entry owning the route
        topic: &'a Topic,
        /// Category the page claimed
        reported: String,
    },
    /// Route is not in the taxonomy
    Unlisted,
}

impl LessonLocation<'_> {
    /// Check for a full match
    #[inline]
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        matches!(self, Self::Aligned(_))
    }
}

/// A topic whose route is not `/{category}/{subcategory}/{topic}`
///
/// Breadcrumb resolution walks ids, so such routes only resolve as far as
/// their segments happen to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteShapeIssue {
    /// Declared route
    pub route: String,
    /// Route the ids would produce
    pub expected: String,
    /// Topic title
    pub title: String,
}

impl fmt::Display for RouteShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): expected {}", self.route, self.title, self.expected)
    }
}

impl Taxonomy {
    /// Index an already validated tree
    pub(crate) fn index(categories: Vec<Category>) -> Self {
        let flat = flatten(&categories);
        let mut routes = Trie::new();
        for (position, topic) in flat.iter().enumerate() {
            routes.insert(topic.route.clone(), position);
        }
        Self {
            categories,
            flat,
            routes,
        }
    }

    /// Start a builder
    #[inline]
    #[must_use]
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::new()
    }

    /// Validate and index a list of categories
    ///
    /// # Errors
    /// See [`TaxonomyBuilder::build`].
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, TaxonomyError> {
        TaxonomyBuilder::from(categories).build()
    }

    /// Parse a JSON document (a list of categories)
    ///
    /// # Errors
    /// Returns error if the document is malformed or fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::from_categories(categories)
    }

    /// Parse a YAML document (a list of categories)
    ///
    /// # Errors
    /// Returns error if the document is malformed or fails validation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TaxonomyError> {
        let categories: Vec<Category> = serde_yaml::from_str(yaml)?;
        Self::from_categories(categories)
    }

    /// Load a `.json`, `.yaml` or `.yml` document
    ///
    /// # Errors
    /// Returns error if the file cannot be read, has another extension,
    /// is malformed, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("yaml" | "yml") => Self::from_yaml_str(&text),
            _ => Err(TaxonomyError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Categories in declaration order
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Lookup category by id
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Lookup subcategory by id within a category
    #[must_use]
    pub fn subcategory(&self, category: &str, id: &str) -> Option<&Subcategory> {
        self.category(category)?.find_subcategory(id)
    }

    /// Lookup topic by ids
    #[must_use]
    pub fn topic(&self, category: &str, subcategory: &str, id: &str) -> Option<&Topic> {
        self.subcategory(category, subcategory)?.find_topic(id)
    }

    /// Depth-first flattening
    ///
    /// Computed once at build time; every call returns the same slice.
    #[inline]
    #[must_use]
    pub fn flatten(&self) -> &[Topic] {
        &self.flat
    }

    /// Position of a route in flatten order
    #[must_use]
    pub fn position(&self, route: &str) -> Option<usize> {
        self.routes.get(route).copied()
    }

    /// Lookup topic by exact route
    #[must_use]
    pub fn topic_by_route(&self, route: &str) -> Option<&Topic> {
        self.position(route).and_then(|i| self.flat.get(i))
    }

    /// Total number of topics
    #[inline]
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.flat.len()
    }

    /// Number of topics in a category, zero when unknown
    #[must_use]
    pub fn category_topic_count(&self, id: &str) -> usize {
        self.category(id).map_or(0, Category::topic_count)
    }

    /// Style token for a category
    #[inline]
    #[must_use]
    pub fn color_for_category(&self, id: &str) -> StyleToken {
        color_for_category(id)
    }

    /// Previous and next topic in flatten order
    #[must_use]
    pub fn adjacent(&self, route: &str) -> Adjacent<'_> {
        let Some(position) = self.position(route) else {
            return Adjacent::default();
        };
        Adjacent {
            previous: position.checked_sub(1).and_then(|i| self.flat.get(i)),
            next: self.flat.get(position + 1),
        }
    }

    /// Match a lesson page's self-reported location
    #[must_use]
    pub fn locate(&self, route: &str, category: &str) -> LessonLocation<'_> {
        match self.topic_by_route(route) {
            Some(topic) if topic.category == category => LessonLocation::Aligned(topic),
            Some(topic) => LessonLocation::CategoryMismatch {
                topic,
                reported: category.to_string(),
            },
            None => LessonLocation::Unlisted,
        }
    }

    /// Topics whose route does not follow `/{category}/{subcategory}/{topic}`
    #[must_use]
    pub fn route_shape_lint(&self) -> Vec<RouteShapeIssue> {
        let mut issues = Vec::new();
        for category in &self.categories {
            for subcategory in &category.subcategories {
                for topic in &subcategory.topics {
                    let expected = format!("/{}/{}/{}", category.id, subcategory.id, topic.id);
                    if topic.route != expected {
                        issues.push(RouteShapeIssue {
                            route: topic.route.clone(),
                            expected,
                            title: topic.title.clone(),
                        });
                    }
                }
            }
        }
        issues
    }
}

impl fmt::Debug for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Taxonomy")
            .field("categories", &self.categories.len())
            .field("topics", &self.flat.len())
            .finish_non_exhaustive()
    }
}
