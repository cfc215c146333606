//! Route paths for addressing within the taxonomy
//!
//! Provides [`RoutePath`], the parsed form of a URL path such as
//! `/react/hooks/useState`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Parsed URL path
///
/// Segments are the non-empty pieces between `/` separators. Query strings
/// and fragments are dropped during parsing.
///
/// # Examples
/// - `/react/hooks/useState` → `["react", "hooks", "useState"]`
/// - `//css///layout/` → `["css", "layout"]`
/// - `/` → `[]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoutePath(Vec<String>);

impl RoutePath {
    /// Create new path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Root path (`/`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse any URL path
    ///
    /// Never fails: anything that is not a separator becomes a segment.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        Self(
            path.split('/')
                .filter(|seg| !seg.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get segment at `index`
    #[inline]
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Get first segment (if not root)
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.segment(0)
    }

    /// Get last segment (if not root)
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path is root
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// First `n` segments as a new path
    #[must_use]
    pub fn prefix(&self, n: usize) -> Self {
        Self(self.0.iter().take(n).cloned().collect())
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Check if this path is a prefix of another
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        self.0.len() <= other.0.len() && self.0 == other.0[..self.0.len()]
    }
}

impl Display for RoutePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for seg in &self.0 {
            write!(f, "/{seg}")?;
        }
        Ok(())
    }
}

impl FromStr for RoutePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Check that a topic route is an absolute path without query or fragment
pub(crate) fn is_valid_route(route: &str) -> bool {
    route.starts_with('/') && !route.contains(['?', '#', ' ']) && !RoutePath::parse(route).is_root()
}
