//! Taxonomy Builder
//!
//! The construction phase for a [`Taxonomy`]: collect categories, then
//! validate them once in [`TaxonomyBuilder::build`].

use crate::error::{Level, TaxonomyError};
use crate::model::Category;
use crate::route::is_valid_route;
use crate::taxonomy::Taxonomy;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Builder for validated taxonomies
///
/// Usage:
/// ```rust
/// use refnav_taxonomy::{Category, Subcategory, Topic, TaxonomyBuilder};
///
/// let taxonomy = TaxonomyBuilder::new()
///     .category(
///         Category::new("css", "CSS").subcategory(
///             Subcategory::new("layout", "Layout")
///                 .topic(Topic::new("flexbox", "Flexbox", "/css/layout/flexbox")),
///         ),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(taxonomy.topic_count(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TaxonomyBuilder {
    categories: Vec<Category>,
}

impl TaxonomyBuilder {
    /// Create an empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category
    #[inline]
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Number of categories collected so far
    #[inline]
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Validate and index the collected tree
    ///
    /// # Errors
    /// - [`TaxonomyError::EmptyId`] for a node without id
    /// - [`TaxonomyError::DuplicateId`] for siblings sharing an id
    /// - [`TaxonomyError::InvalidRoute`] for a route that is not an absolute path
    /// - [`TaxonomyError::DuplicateRoute`] for two topics sharing a route
    pub fn build(mut self) -> Result<Taxonomy, TaxonomyError> {
        validate(&mut self.categories)?;
        let taxonomy = Taxonomy::index(self.categories);
        tracing::debug!(
            "Built taxonomy: {} categories, {} topics",
            taxonomy.categories().len(),
            taxonomy.topic_count()
        );
        Ok(taxonomy)
    }
}

impl From<Vec<Category>> for TaxonomyBuilder {
    fn from(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

fn check_id(
    seen: &mut IndexSet<String>,
    level: Level,
    id: &str,
    parent: &str,
) -> Result<(), TaxonomyError> {
    if id.is_empty() {
        return Err(TaxonomyError::EmptyId {
            level,
            parent: parent.to_string(),
        });
    }
    if !seen.insert(id.to_string()) {
        return Err(TaxonomyError::DuplicateId {
            level,
            id: id.to_string(),
            parent: parent.to_string(),
        });
    }
    Ok(())
}

/// Check scoped id uniqueness and global route uniqueness.
///
/// Topics declared without a category inherit their parent's id.
fn validate(categories: &mut [Category]) -> Result<(), TaxonomyError> {
    let mut category_ids = IndexSet::new();
    let mut routes = HashSet::new();

    for category in categories.iter_mut() {
        check_id(&mut category_ids, Level::Category, &category.id, "/")?;

        let mut subcategory_ids = IndexSet::new();
        for subcategory in &mut category.subcategories {
            check_id(&mut subcategory_ids, Level::Subcategory, &subcategory.id, &category.id)?;

            let scope = format!("{}/{}", category.id, subcategory.id);
            let mut topic_ids = IndexSet::new();
            for topic in &mut subcategory.topics {
                check_id(&mut topic_ids, Level::Topic, &topic.id, &scope)?;

                if !is_valid_route(&topic.route) {
                    return Err(TaxonomyError::InvalidRoute {
                        route: topic.route.clone(),
                        topic: topic.id.clone(),
                    });
                }
                if !routes.insert(topic.route.clone()) {
                    return Err(TaxonomyError::DuplicateRoute {
                        route: topic.route.clone(),
                    });
                }

                if topic.category.is_empty() {
                    topic.category.clone_from(&category.id);
                } else if topic.category != category.id {
                    tracing::warn!(
                        "Topic '{}' declares category '{}' but is filed under '{}'",
                        topic.route,
                        topic.category,
                        category.id
                    );
                }
            }
        }
    }

    Ok(())
}
