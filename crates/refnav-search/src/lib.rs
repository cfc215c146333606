//! refnav Search
//!
//! Substring search over topic titles plus the search box that drives it.
//!
//! # Example
//!
//! ```rust
//! use refnav_search::SearchIndex;
//! use refnav_taxonomy::Taxonomy;
//!
//! let index = SearchIndex::new(&Taxonomy::builtin());
//! let results = index.search("flex");
//! assert_eq!(results.hits[0].route, "/css/layout/flexbox");
//! assert!(index.search("").hits.is_empty());
//! ```

#![warn(missing_docs)]

mod index;
mod search_box;

// Re-exports
pub use index::{SearchHit, SearchIndex, SearchResults, MAX_RESULTS};
pub use search_box::{KeyOutcome, SearchBox, SEARCH_FIELD};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
