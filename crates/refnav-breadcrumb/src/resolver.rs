//! Breadcrumb Resolver
//!
//! Maps a URL path to its ancestry inside the taxonomy. Segment 0 is a
//! category id, segment 1 a subcategory id within it, segment 2 a topic id
//! within that. The first miss ends the chain; resolution never fails.

use refnav_taxonomy::{RoutePath, Taxonomy};
use serde::Serialize;

/// Label of the leading crumb
pub const HOME_LABEL: &str = "Home";

/// Landing routes that show no breadcrumb
pub const LANDING_ROUTES: [&str; 2] = ["/", "/roadmap"];

/// One entry of the chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Crumb {
    /// Display text
    pub label: String,
    /// Link target
    pub path: String,
}

impl Crumb {
    fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Ordered ancestry of the current page
///
/// Empty when suppressed. Otherwise starts with the home crumb; every entry
/// but the last is a link, the last is the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BreadcrumbTrail {
    crumbs: Vec<Crumb>,
}

impl BreadcrumbTrail {
    /// All crumbs in order
    #[inline]
    #[must_use]
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Check for a suppressed trail
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Number of crumbs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Crumbs rendered as links
    #[must_use]
    pub fn links(&self) -> &[Crumb] {
        match self.crumbs.split_last() {
            Some((_, links)) => links,
            None => &[],
        }
    }

    /// Crumb rendered as plain text
    #[must_use]
    pub fn current(&self) -> Option<&Crumb> {
        self.crumbs.last()
    }

    /// Check whether the crumb at `index` is a link
    #[must_use]
    pub fn is_link(&self, index: usize) -> bool {
        index < self.crumbs.len().saturating_sub(1)
    }

    /// Labels in order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    /// Check whether this trail is a strict prefix of `other`
    #[must_use]
    pub fn is_strict_prefix_of(&self, other: &Self) -> bool {
        self.crumbs.len() < other.crumbs.len() && other.crumbs.starts_with(&self.crumbs)
    }
}

impl IntoIterator for BreadcrumbTrail {
    type Item = Crumb;
    type IntoIter = std::vec::IntoIter<Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.into_iter()
    }
}

/// Resolver with its landing routes and home label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbResolver {
    home_label: String,
    landing_routes: Vec<String>,
}

impl Default for BreadcrumbResolver {
    fn default() -> Self {
        Self {
            home_label: HOME_LABEL.to_string(),
            landing_routes: LANDING_ROUTES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl BreadcrumbResolver {
    /// Resolver with the default home label and landing routes
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a different home label
    #[inline]
    #[must_use]
    pub fn with_home_label(mut self, label: impl Into<String>) -> Self {
        self.home_label = label.into();
        self
    }

    /// With a different set of landing routes
    #[must_use]
    pub fn with_landing_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.landing_routes = routes
            .into_iter()
            .map(|r| RoutePath::parse(r.as_ref()).to_string())
            .collect();
        self
    }

    /// Check whether `path` is a landing route
    #[must_use]
    pub fn is_landing(&self, path: &RoutePath) -> bool {
        let normalized = path.to_string();
        self.landing_routes.iter().any(|r| *r == normalized)
    }

    /// Resolve `path` against `taxonomy`
    #[must_use]
    pub fn resolve(&self, taxonomy: &Taxonomy, path: &str) -> BreadcrumbTrail {
        let route = RoutePath::parse(path);
        if self.is_landing(&route) {
            return BreadcrumbTrail::default();
        }

        let mut crumbs = vec![Crumb::new(self.home_label.as_str(), "/")];

        let Some(category) = route.first().and_then(|id| taxonomy.category(id)) else {
            return BreadcrumbTrail { crumbs };
        };
        crumbs.push(Crumb::new(category.title.as_str(), format!("/{}", category.id)));

        let Some(subcategory) = route.segment(1).and_then(|id| category.find_subcategory(id)) else {
            return BreadcrumbTrail { crumbs };
        };
        crumbs.push(Crumb::new(
            subcategory.title.as_str(),
            format!("/{}/{}", category.id, subcategory.id),
        ));

        if let Some(topic) = route.segment(2).and_then(|id| subcategory.find_topic(id)) {
            crumbs.push(Crumb::new(topic.title.as_str(), topic.route.as_str()));
        }

        tracing::trace!("Resolved {} to {} crumbs", path, crumbs.len());
        BreadcrumbTrail { crumbs }
    }
}

/// Resolve with the default resolver
#[must_use]
pub fn resolve_breadcrumbs(taxonomy: &Taxonomy, path: &str) -> BreadcrumbTrail {
    BreadcrumbResolver::default().resolve(taxonomy, path)
}
