//! Error types for the navigation shell

use refnav_taxonomy::TaxonomyError;
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid TOML or has the wrong shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the shell cannot work with
    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        /// Field name as written in the file
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Shell construction errors
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Taxonomy document rejected
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
}
