//! Desktop expansion slice
//!
//! Two independent sets. Collapsing a category leaves its subcategory
//! entries alone, so they reappear as they were on re-expand.

use crate::keys::SubcategoryKey;
use indexmap::IndexSet;
use refnav_taxonomy::Taxonomy;

/// Expanded categories and subcategories of the full sidebar
///
/// The mobile drawer reads the same sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopTree {
    categories: IndexSet<String>,
    subcategories: IndexSet<SubcategoryKey>,
}

impl DesktopTree {
    /// Everything collapsed
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a category; returns the new expanded state
    pub fn toggle_category(&mut self, id: &str) -> bool {
        if self.categories.shift_remove(id) {
            false
        } else {
            self.categories.insert(id.to_string());
            true
        }
    }

    /// Flip a subcategory; returns the new expanded state
    pub fn toggle_subcategory(&mut self, key: SubcategoryKey) -> bool {
        if self.subcategories.shift_remove(&key) {
            false
        } else {
            self.subcategories.insert(key);
            true
        }
    }

    /// Expand a category
    pub fn expand_category(&mut self, id: impl Into<String>) {
        self.categories.insert(id.into());
    }

    /// Expand every category and subcategory of `taxonomy`
    pub fn expand_all(&mut self, taxonomy: &Taxonomy) {
        for category in taxonomy.categories() {
            self.categories.insert(category.id.clone());
            for sub in &category.subcategories {
                self.subcategories
                    .insert(SubcategoryKey::new(category.id.as_str(), sub.id.as_str()));
            }
        }
    }

    /// Check whether a category is expanded
    #[must_use]
    pub fn is_category_expanded(&self, id: &str) -> bool {
        self.categories.contains(id)
    }

    /// Check whether a subcategory is expanded
    #[must_use]
    pub fn is_subcategory_expanded(&self, category: &str, subcategory: &str) -> bool {
        self.subcategories
            .contains(&SubcategoryKey::new(category, subcategory))
    }

    /// Expanded category ids in expansion order
    pub fn expanded_categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Expanded subcategory keys in expansion order
    pub fn expanded_subcategories(&self) -> impl Iterator<Item = &SubcategoryKey> {
        self.subcategories.iter()
    }
}
