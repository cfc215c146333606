//! refnav Navigation
//!
//! State machine behind the sidebar in its three forms: the full desktop
//! tree, the collapsed icon rail with a flyout, and the mobile drawer.
//!
//! # Overview
//!
//! - [`NavigationState`]: owner of all transient navigation state
//! - [`NavEvent`]: every input it reacts to
//! - [`DesktopView`], [`RailView`], [`MobileView`]: render-ready snapshots
//!
//! # Example
//!
//! ```rust
//! use refnav_dom::Document;
//! use refnav_nav::{NavEvent, NavigationState};
//! use refnav_taxonomy::Taxonomy;
//!
//! let document = Document::new();
//! let mut nav = NavigationState::new(Taxonomy::builtin(), document.clone())
//!     .with_rail_collapsed(true);
//!
//! nav.apply(NavEvent::OpenFlyout("react".into()));
//! assert!(document.is_scroll_locked());
//!
//! nav.apply(NavEvent::OutsideClick);
//! assert!(!document.is_scroll_locked());
//! ```

#![warn(missing_docs)]

mod event;
mod keys;
mod state;
mod view;

// Re-exports
pub use event::{NavEvent, SelectOrigin};
pub use keys::{FlyoutKey, SubcategoryKey};
pub use state::{DesktopTree, FlyoutPanel, MobileDrawer, NavigationState};
pub use view::{CategoryNode, DesktopView, MobileView, RailIcon, RailView, SubcategoryNode, TopicNode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
