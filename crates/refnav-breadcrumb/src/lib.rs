//! refnav Breadcrumb Resolver
//!
//! Derives the breadcrumb chain purely from the current URL path.
//!
//! # Example
//!
//! ```rust
//! use refnav_breadcrumb::resolve_breadcrumbs;
//! use refnav_taxonomy::Taxonomy;
//!
//! let trail = resolve_breadcrumbs(&Taxonomy::builtin(), "/react/hooks/useState");
//! assert_eq!(trail.labels(), vec!["Home", "React", "React Hooks", "useState"]);
//! assert!(resolve_breadcrumbs(&Taxonomy::builtin(), "/roadmap").is_empty());
//! ```

#![warn(missing_docs)]

mod resolver;

pub use resolver::{
    resolve_breadcrumbs, BreadcrumbResolver, BreadcrumbTrail, Crumb, HOME_LABEL, LANDING_ROUTES,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
