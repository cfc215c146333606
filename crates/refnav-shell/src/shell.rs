//! Navigation shell
//!
//! Composition root. A mounted [`NavigationShell`] owns the navigation
//! state, the search box and its global key listener; dropping it unmounts
//! all of them.

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::not_found::NotFoundView;
use refnav_breadcrumb::{BreadcrumbResolver, BreadcrumbTrail};
use refnav_dom::{Document, KeyListenerGuard, NavigationRequest};
use refnav_nav::{DesktopView, MobileView, NavEvent, NavigationState, RailView};
use refnav_search::{SearchBox, SearchIndex};
use refnav_taxonomy::{RoutePath, Taxonomy, Topic};
use std::sync::Arc;

/// What the content area shows for the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Landing page, no breadcrumb
    Landing,
    /// A lesson from the taxonomy
    Lesson {
        /// The lesson
        topic: Topic,
        /// Lesson before it in catalog order
        previous: Option<Topic>,
        /// Lesson after it in catalog order
        next: Option<Topic>,
    },
    /// Fallback page
    NotFound(NotFoundView),
}

/// Load the taxonomy named by `config`, or the built-in catalog
pub fn load_taxonomy(config: &ShellConfig) -> Result<Arc<Taxonomy>, ShellError> {
    match &config.taxonomy {
        Some(path) => {
            let taxonomy = Taxonomy::load(path)?;
            tracing::info!("Loaded taxonomy from {}", path.display());
            Ok(Arc::new(taxonomy))
        }
        None => Ok(Taxonomy::builtin()),
    }
}

/// A mounted navigation shell
///
/// Field order is drop order: the key listener goes first, then the state
/// releases any scroll lock its flyout holds.
#[derive(Debug)]
pub struct NavigationShell {
    _keys: KeyListenerGuard,
    search: SearchBox,
    nav: NavigationState,
    resolver: BreadcrumbResolver,
    config: ShellConfig,
}

impl NavigationShell {
    /// Mount a shell on `document`
    pub fn mount(
        taxonomy: Arc<Taxonomy>,
        config: ShellConfig,
        document: Document,
    ) -> Result<Self, ShellError> {
        config.validate()?;

        for issue in taxonomy.route_shape_lint() {
            tracing::warn!("{}", issue);
        }

        let mut nav = NavigationState::new(Arc::clone(&taxonomy), document.clone())
            .with_rail_collapsed(config.rail_collapsed);
        for id in &config.expanded_categories {
            if taxonomy.category(id).is_some() {
                nav.desktop_mut().expand_category(id.as_str());
            } else {
                tracing::warn!("Ignoring unknown expanded category '{}'", id);
            }
        }

        let index = SearchIndex::new(&taxonomy).with_limit(config.search_limit);
        let search = SearchBox::new(Arc::new(index), document);
        let keys = search.mount();

        let resolver = BreadcrumbResolver::new()
            .with_home_label(config.home_label.as_str())
            .with_landing_routes(&config.landing_routes);

        tracing::info!(
            "Navigation shell mounted ({} topics)",
            taxonomy.topic_count()
        );
        Ok(Self {
            _keys: keys,
            search,
            nav,
            resolver,
            config,
        })
    }

    /// Mount with the default configuration on the global document
    pub fn mount_default(taxonomy: Arc<Taxonomy>) -> Result<Self, ShellError> {
        Self::mount(taxonomy, ShellConfig::default(), Document::global().clone())
    }

    /// Forward a navigation event
    pub fn dispatch(&mut self, event: NavEvent) -> Option<NavigationRequest> {
        self.nav.apply(event)
    }

    /// Host reports that the location changed
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.nav.apply(NavEvent::RouteChanged(path.into()));
    }

    /// Perform a navigation request the way a host router would
    pub fn follow(&mut self, request: NavigationRequest) {
        self.navigate(request.route);
    }

    /// Choose a search hit
    pub fn select_search(&mut self, index: usize) -> Option<NavigationRequest> {
        let request = self.search.select(index)?;
        self.nav.apply(NavEvent::select(
            request.route.as_str(),
            refnav_nav::SelectOrigin::Search,
        ));
        Some(request)
    }

    /// Breadcrumbs for the current path
    #[must_use]
    pub fn breadcrumbs(&self) -> BreadcrumbTrail {
        self.resolver
            .resolve(self.nav.taxonomy(), self.nav.current_path())
    }

    /// Content for the current path
    #[must_use]
    pub fn page(&self) -> Page {
        let path = self.nav.current_path();
        if self.resolver.is_landing(&RoutePath::parse(path)) {
            return Page::Landing;
        }
        let taxonomy = self.nav.taxonomy();
        match taxonomy.topic_by_route(path) {
            Some(topic) => {
                let adjacent = taxonomy.adjacent(path);
                Page::Lesson {
                    topic: topic.clone(),
                    previous: adjacent.previous.cloned(),
                    next: adjacent.next.cloned(),
                }
            }
            None => {
                tracing::debug!("No lesson at {}", path);
                Page::NotFound(NotFoundView::for_path(path, taxonomy))
            }
        }
    }

    /// Full sidebar
    #[must_use]
    pub fn desktop_view(&self) -> DesktopView {
        self.nav.desktop_view()
    }

    /// Collapsed rail
    #[must_use]
    pub fn rail_view(&self) -> RailView {
        self.nav.rail_view()
    }

    /// Mobile drawer
    #[must_use]
    pub fn mobile_view(&self) -> MobileView {
        self.nav.mobile_view()
    }

    /// Search box
    #[inline]
    #[must_use]
    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    /// Navigation state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.nav
    }

    /// Mutable navigation state
    #[inline]
    pub fn state_mut(&mut self) -> &mut NavigationState {
        &mut self.nav
    }

    /// Configuration the shell was mounted with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}

impl Drop for NavigationShell {
    fn drop(&mut self) {
        tracing::debug!("Navigation shell unmounted");
    }
}
