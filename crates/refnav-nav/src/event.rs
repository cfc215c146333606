//! Discrete input events

/// Which presentation a topic link was clicked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectOrigin {
    /// Full desktop sidebar
    Desktop,
    /// Flyout panel of the collapsed rail
    Flyout,
    /// Mobile overlay drawer
    Drawer,
    /// Search result panel
    Search,
}

/// Every input the navigation state machine reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Category header clicked (desktop or drawer)
    ToggleCategory(String),
    /// Subcategory header clicked (desktop or drawer)
    ToggleSubcategory {
        /// Owning category id
        category: String,
        /// Subcategory id
        subcategory: String,
    },
    /// Rail collapse button clicked
    ToggleRail,
    /// Open a category's flyout, closing any other
    OpenFlyout(String),
    /// Rail icon clicked: open its flyout, or close it if already open
    ToggleFlyout(String),
    /// Flyout close button
    CloseFlyout,
    /// Subcategory header clicked inside the open flyout
    ToggleFlyoutSubcategory {
        /// Owning category id
        category: String,
        /// Subcategory id
        subcategory: String,
    },
    /// Pointer down outside the flyout panel
    OutsideClick,
    /// Mobile menu button
    ToggleDrawer,
    /// Drawer backdrop or close button
    CloseDrawer,
    /// Topic link clicked
    SelectTopic {
        /// Topic route
        route: String,
        /// Presentation the click came from
        origin: SelectOrigin,
    },
    /// The host router moved to a new location
    RouteChanged(String),
}

impl NavEvent {
    /// Subcategory toggle for the desktop/drawer tree
    #[must_use]
    pub fn toggle_subcategory(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self::ToggleSubcategory {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }

    /// Subcategory toggle inside the flyout
    #[must_use]
    pub fn toggle_flyout_subcategory(
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self::ToggleFlyoutSubcategory {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }

    /// Topic selection
    #[must_use]
    pub fn select(route: impl Into<String>, origin: SelectOrigin) -> Self {
        Self::SelectTopic {
            route: route.into(),
            origin,
        }
    }
}
