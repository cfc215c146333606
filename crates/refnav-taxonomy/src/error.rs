//! Error types for taxonomy construction
//!
//! Only building or loading a taxonomy can fail. Lookups on a built
//! [`Taxonomy`](crate::Taxonomy) are total and never return these.

/// Taxonomy construction errors
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    /// A node was declared without an id
    #[error("empty {level} id under '{parent}'")]
    EmptyId {
        /// Level of the offending node
        level: Level,
        /// Parent scope, `/` for categories
        parent: String,
    },

    /// Two siblings share an id
    #[error("duplicate {level} id '{id}' under '{parent}'")]
    DuplicateId {
        /// Level of the offending node
        level: Level,
        /// Repeated id
        id: String,
        /// Parent scope, `/` for categories
        parent: String,
    },

    /// Two topics share a route
    #[error("duplicate route '{route}'")]
    DuplicateRoute {
        /// Repeated route
        route: String,
    },

    /// Route is not an absolute path
    #[error("invalid route '{route}' for topic '{topic}'")]
    InvalidRoute {
        /// Offending route
        route: String,
        /// Topic id declaring it
        topic: String,
    },

    /// JSON document could not be parsed
    #[error("invalid JSON taxonomy: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML document could not be parsed
    #[error("invalid YAML taxonomy: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document could not be read
    #[error("failed to read taxonomy: {0}")]
    Io(#[from] std::io::Error),

    /// Document extension is not `.json`, `.yaml` or `.yml`
    #[error("unsupported taxonomy format: {0}")]
    UnsupportedFormat(String),
}

/// Taxonomy level, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// First level
    Category,
    /// Second level
    Subcategory,
    /// Third level
    Topic,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Topic => "topic",
        })
    }
}
