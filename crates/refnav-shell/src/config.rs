//! Shell configuration
//!
//! Read from TOML. Every field is optional in the file; missing fields
//! take their defaults.
//!
//! ```toml
//! search_limit = 8
//! landing_routes = ["/", "/roadmap"]
//! home_label = "Home"
//! rail_collapsed = false
//! expanded_categories = ["react"]
//! taxonomy = "catalog.yaml"
//! ```

use crate::error::ConfigError;
use refnav_breadcrumb::{HOME_LABEL, LANDING_ROUTES};
use refnav_search::MAX_RESULTS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Navigation shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Maximum number of search hits shown
    pub search_limit: usize,
    /// Paths that show no breadcrumb
    pub landing_routes: Vec<String>,
    /// Label of the leading crumb
    pub home_label: String,
    /// Start with the rail collapsed
    pub rail_collapsed: bool,
    /// Categories expanded at mount
    pub expanded_categories: Vec<String>,
    /// Taxonomy document to load instead of the built-in catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            search_limit: MAX_RESULTS,
            landing_routes: LANDING_ROUTES.iter().map(ToString::to_string).collect(),
            home_label: HOME_LABEL.to_string(),
            rail_collapsed: false,
            expanded_categories: Vec::new(),
            taxonomy: None,
        }
    }
}

impl ShellConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With search limit
    #[inline]
    #[must_use]
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// With landing routes
    #[must_use]
    pub fn with_landing_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.landing_routes = routes.into_iter().map(Into::into).collect();
        self
    }

    /// With home label
    #[inline]
    #[must_use]
    pub fn with_home_label(mut self, label: impl Into<String>) -> Self {
        self.home_label = label.into();
        self
    }

    /// With initial rail state
    #[inline]
    #[must_use]
    pub fn with_rail_collapsed(mut self, collapsed: bool) -> Self {
        self.rail_collapsed = collapsed;
        self
    }

    /// With a category expanded at mount
    #[must_use]
    pub fn with_expanded_category(mut self, id: impl Into<String>) -> Self {
        self.expanded_categories.push(id.into());
        self
    }

    /// With a taxonomy document
    #[inline]
    #[must_use]
    pub fn with_taxonomy(mut self, path: impl Into<PathBuf>) -> Self {
        self.taxonomy = Some(path.into());
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// A relative `taxonomy` path is resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(taxonomy), Some(dir)) = (config.taxonomy.as_mut(), path.parent()) {
            if taxonomy.is_relative() {
                *taxonomy = dir.join(&*taxonomy);
            }
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the shell cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "search_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.home_label.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "home_label",
                reason: "must not be blank".to_string(),
            });
        }
        if let Some(route) = self.landing_routes.iter().find(|r| !r.starts_with('/')) {
            return Err(ConfigError::Invalid {
                field: "landing_routes",
                reason: format!("'{route}' is not an absolute path"),
            });
        }
        Ok(())
    }
}
