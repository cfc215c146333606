//! refnav Shell
//!
//! Composition root for the navigation components: mounts the state
//! machine and the search box on one document, resolves pages and
//! breadcrumbs for the current path, and renders everything as text for
//! the `refnav` CLI.
//!
//! # Example
//!
//! ```rust
//! use refnav_dom::Document;
//! use refnav_shell::{NavigationShell, Page, ShellConfig};
//! use refnav_taxonomy::Taxonomy;
//!
//! let mut shell =
//!     NavigationShell::mount(Taxonomy::builtin(), ShellConfig::default(), Document::new())?;
//! shell.navigate("/react/hooks/useState");
//! assert_eq!(shell.breadcrumbs().labels(), ["Home", "React", "React Hooks", "useState"]);
//! assert!(matches!(shell.page(), Page::Lesson { .. }));
//! # Ok::<(), refnav_shell::ShellError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod not_found;
pub mod render;
mod shell;

// Re-exports
pub use config::ShellConfig;
pub use error::{ConfigError, ShellError};
pub use not_found::{NotFoundView, Suggestion, MAX_SUGGESTIONS};
pub use shell::{load_taxonomy, NavigationShell, Page};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
