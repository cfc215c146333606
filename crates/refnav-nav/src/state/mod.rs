//! Navigation state owner
//!
//! [`NavigationState`] composes the three presentation slices and applies
//! every [`NavEvent`] as a single transition. One instance belongs to one
//! mounted shell; dropping it releases whatever document resources the
//! slices hold.

mod desktop;
mod drawer;
mod flyout;

pub use desktop::DesktopTree;
pub use drawer::MobileDrawer;
pub use flyout::FlyoutPanel;

use crate::event::{NavEvent, SelectOrigin};
use crate::keys::SubcategoryKey;
use refnav_dom::{Document, NavigationRequest};
use refnav_taxonomy::{RoutePath, Taxonomy, Topic};
use std::sync::Arc;

/// Location as every consumer compares it: `/a/b/c`, or `/` for root
fn normalize(path: &str) -> String {
    RoutePath::parse(path).to_string()
}

/// Transient UI state for one navigation shell
#[derive(Debug)]
pub struct NavigationState {
    taxonomy: Arc<Taxonomy>,
    document: Document,
    current_path: String,
    rail_collapsed: bool,
    desktop: DesktopTree,
    flyout: FlyoutPanel,
    drawer: MobileDrawer,
}

impl NavigationState {
    /// Fresh state: everything collapsed, rail expanded, path `/`
    #[must_use]
    pub fn new(taxonomy: Arc<Taxonomy>, document: Document) -> Self {
        Self {
            taxonomy,
            document,
            current_path: "/".to_string(),
            rail_collapsed: false,
            desktop: DesktopTree::new(),
            flyout: FlyoutPanel::new(),
            drawer: MobileDrawer::default(),
        }
    }

    /// Start at `path`
    ///
    /// The path is normalized the same way as a route change.
    #[must_use]
    pub fn with_path(mut self, path: impl AsRef<str>) -> Self {
        self.current_path = normalize(path.as_ref());
        self
    }

    /// Start with the rail collapsed (or not)
    #[inline]
    #[must_use]
    pub fn with_rail_collapsed(mut self, collapsed: bool) -> Self {
        self.rail_collapsed = collapsed;
        self
    }

    /// Apply one event
    ///
    /// Returns a navigation request when the event is a topic selection;
    /// the host performs it and reports back with [`NavEvent::RouteChanged`].
    pub fn apply(&mut self, event: NavEvent) -> Option<NavigationRequest> {
        tracing::trace!("Applying {:?}", event);
        match event {
            NavEvent::ToggleCategory(id) => {
                if self.taxonomy.category(&id).is_some() {
                    let expanded = self.desktop.toggle_category(&id);
                    tracing::debug!("Category {} expanded={}", id, expanded);
                }
            }
            NavEvent::ToggleSubcategory {
                category,
                subcategory,
            } => {
                if self.taxonomy.subcategory(&category, &subcategory).is_some() {
                    self.desktop
                        .toggle_subcategory(SubcategoryKey::new(category, subcategory));
                }
            }
            NavEvent::ToggleRail => {
                self.rail_collapsed = !self.rail_collapsed;
                self.flyout.close();
                tracing::debug!("Rail collapsed={}", self.rail_collapsed);
            }
            NavEvent::OpenFlyout(id) => self.open_flyout(&id),
            NavEvent::ToggleFlyout(id) => {
                if self.flyout.open_category() == Some(id.as_str()) {
                    self.flyout.close();
                } else {
                    self.open_flyout(&id);
                }
            }
            NavEvent::CloseFlyout | NavEvent::OutsideClick => {
                self.flyout.close();
            }
            NavEvent::ToggleFlyoutSubcategory {
                category,
                subcategory,
            } => {
                if self.taxonomy.subcategory(&category, &subcategory).is_some() {
                    self.flyout.toggle_subcategory(&category, &subcategory);
                }
            }
            NavEvent::ToggleDrawer => {
                self.drawer.toggle();
            }
            NavEvent::CloseDrawer => self.drawer.close(),
            NavEvent::SelectTopic { route, origin } => {
                return Some(self.select(route, origin));
            }
            NavEvent::RouteChanged(path) => {
                self.current_path = normalize(&path);
                tracing::debug!("Route changed to {} ({})", self.current_path, path);
                self.flyout.close();
                self.drawer.close();
            }
        }
        None
    }

    fn open_flyout(&mut self, id: &str) {
        if !self.rail_collapsed {
            tracing::debug!("Flyout {} ignored, rail is expanded", id);
            return;
        }
        if self.taxonomy.category(id).is_none() {
            tracing::debug!("Flyout {} ignored, unknown category", id);
            return;
        }
        self.flyout.open(id, &self.document);
    }

    fn select(&mut self, route: String, origin: SelectOrigin) -> NavigationRequest {
        tracing::debug!("Topic {} selected from {:?}", route, origin);
        self.drawer.close();
        self.flyout.close();
        NavigationRequest::to(route)
    }

    /// Check whether `topic` is the page being shown
    #[inline]
    #[must_use]
    pub fn is_active(&self, topic: &Topic) -> bool {
        self.is_active_route(&topic.route)
    }

    /// Exact route comparison against the current path
    #[inline]
    #[must_use]
    pub fn is_active_route(&self, route: &str) -> bool {
        route == self.current_path
    }

    /// Topic for the current path, if it is a lesson page
    #[must_use]
    pub fn active_topic(&self) -> Option<&Topic> {
        self.taxonomy.topic_by_route(&self.current_path)
    }

    /// Current path parsed into segments
    #[must_use]
    pub fn current_route(&self) -> RoutePath {
        RoutePath::parse(&self.current_path)
    }

    /// Current path, without query, fragment or empty segments
    #[inline]
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Taxonomy being navigated
    #[inline]
    #[must_use]
    pub fn taxonomy(&self) -> &Arc<Taxonomy> {
        &self.taxonomy
    }

    /// Document the flyout locks scrolling on
    #[inline]
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Check whether the rail is collapsed
    #[inline]
    #[must_use]
    pub fn is_rail_collapsed(&self) -> bool {
        self.rail_collapsed
    }

    /// Desktop (and drawer) expansion sets
    #[inline]
    #[must_use]
    pub fn desktop(&self) -> &DesktopTree {
        &self.desktop
    }

    /// Mutable desktop expansion sets, for seeding initial state
    #[inline]
    pub fn desktop_mut(&mut self) -> &mut DesktopTree {
        &mut self.desktop
    }

    /// Flyout slice
    #[inline]
    #[must_use]
    pub fn flyout(&self) -> &FlyoutPanel {
        &self.flyout
    }

    /// Mobile drawer slice
    #[inline]
    #[must_use]
    pub fn drawer(&self) -> MobileDrawer {
        self.drawer
    }
}
