//! Expansion keys
//!
//! Desktop and flyout expansion sets use distinct key types so an entry in
//! one can never be looked up in the other.

use serde::Serialize;
use std::fmt;

/// Desktop/mobile expansion key: category id + subcategory id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SubcategoryKey {
    /// Owning category id
    pub category: String,
    /// Subcategory id, unique within the category
    pub subcategory: String,
}

impl SubcategoryKey {
    /// Key for `subcategory` within `category`
    #[must_use]
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }
}

impl fmt::Display for SubcategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.subcategory)
    }
}

/// Flyout expansion key, namespaced apart from [`SubcategoryKey`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FlyoutKey(SubcategoryKey);

impl FlyoutKey {
    /// Flyout key for `subcategory` within `category`
    #[must_use]
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self(SubcategoryKey::new(category, subcategory))
    }

    /// Category the key belongs to
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.0.category
    }

    /// Subcategory the key belongs to
    #[inline]
    #[must_use]
    pub fn subcategory(&self) -> &str {
        &self.0.subcategory
    }
}

impl fmt::Display for FlyoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flyout-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed() {
        assert_eq!(SubcategoryKey::new("react", "hooks").to_string(), "react-hooks");
        assert_eq!(FlyoutKey::new("react", "hooks").to_string(), "flyout-react-hooks");
    }

    #[test]
    fn composite_keys_do_not_collide() {
        // both would render as "a-b-c"
        assert_ne!(SubcategoryKey::new("a-b", "c"), SubcategoryKey::new("a", "b-c"));
    }
}
