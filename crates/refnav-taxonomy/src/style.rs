//! Category style tokens

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque style class handed to the renderer
///
/// The empty token means "use the default styling".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleToken(String);

impl StyleToken {
    /// Create token from a style class
    #[inline]
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self(class.into())
    }

    /// Style class string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check for the default (empty) token
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("html", "text-orange-500"),
    ("css", "text-sky-500"),
    ("javascript", "text-yellow-500"),
    ("typescript", "text-blue-600"),
    ("react", "text-cyan-400"),
    ("nodejs", "text-green-600"),
];

/// Style token for a category id
///
/// Unknown ids get [`StyleToken::default`].
#[must_use]
pub fn color_for_category(category_id: &str) -> StyleToken {
    CATEGORY_COLORS
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, class)| StyleToken::new(*class))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_has_token() {
        assert_eq!(color_for_category("react").as_str(), "text-cyan-400");
    }

    #[test]
    fn unknown_category_gets_default() {
        let token = color_for_category("cobol");
        assert!(token.is_default());
        assert_eq!(token, StyleToken::default());
        assert!(color_for_category("").is_default());
    }
}
