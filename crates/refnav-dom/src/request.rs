//! Navigation requests issued to the host router

use std::fmt;

/// Ask the host to navigate to `route`
///
/// Components never change the current location themselves; the host
/// performs the navigation and reports it back as a route change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationRequest {
    /// Target route
    pub route: String,
}

impl NavigationRequest {
    /// Request navigation to `route`
    #[inline]
    #[must_use]
    pub fn to(route: impl Into<String>) -> Self {
        Self { route: route.into() }
    }
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "navigate {}", self.route)
    }
}
