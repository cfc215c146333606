//! refnav Taxonomy Store
//!
//! The static category → subcategory → topic catalog every other refnav
//! component reads from.
//!
//! # Overview
//!
//! - [`Taxonomy`]: immutable tree with cached flattening and a route index
//! - [`TaxonomyBuilder`]: validating construction (scoped ids, unique routes)
//! - [`RoutePath`]: lenient URL path parsing
//! - [`color_for_category`]: category → [`StyleToken`] lookup
//!
//! # Example
//!
//! ```rust
//! use refnav_taxonomy::Taxonomy;
//!
//! let taxonomy = Taxonomy::builtin();
//! let topic = taxonomy.topic_by_route("/css/layout/flexbox").unwrap();
//! assert_eq!(topic.title, "Flexbox");
//! assert_eq!(taxonomy.flatten(), taxonomy.flatten());
//! ```

#![warn(missing_docs)]

mod builder;
mod catalog;
mod error;
mod model;
mod route;
mod style;
mod taxonomy;

// Re-exports
pub use builder::TaxonomyBuilder;
pub use catalog::builtin_categories;
pub use error::{Level, TaxonomyError};
pub use model::{flatten, Category, Difficulty, Subcategory, Topic};
pub use route::RoutePath;
pub use style::{color_for_category, StyleToken};
pub use taxonomy::{Adjacent, LessonLocation, RouteShapeIssue, Taxonomy};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for taxonomy consumers
    pub use crate::{Category, RoutePath, StyleToken, Subcategory, Taxonomy, Topic};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
