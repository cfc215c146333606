//! Taxonomy entities
//!
//! Three fixed levels: [`Category`] → [`Subcategory`] → [`Topic`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic difficulty badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Introductory material
    Beginner,
    /// Assumes the basics
    Intermediate,
    /// Deep dives
    Advanced,
}

impl Difficulty {
    /// Lowercase label used in badges
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lesson page entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique within its subcategory
    pub id: String,
    /// Display title, the only field search matches against
    pub title: String,
    /// Globally unique address of the lesson page
    pub route: String,
    /// Owning category id, filled in by the builder when omitted
    #[serde(default)]
    pub category: String,
    /// Optional difficulty badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Topic {
    /// Create a topic; `category` is assigned when it is added to a tree
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            route: route.into(),
            category: String::new(),
            difficulty: None,
        }
    }

    /// With difficulty badge
    #[inline]
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// Second level grouping of topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Unique within its category
    pub id: String,
    /// Display title
    pub title: String,
    /// Topics in declaration order
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Subcategory {
    /// Create an empty subcategory
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            topics: Vec::new(),
        }
    }

    /// Append a topic
    #[inline]
    #[must_use]
    pub fn topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Find topic by id
    #[must_use]
    pub fn find_topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }
}

/// Top level of the taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Globally unique at this level
    pub id: String,
    /// Display title
    pub title: String,
    /// Icon name shown in the collapsed rail
    #[serde(default)]
    pub icon: String,
    /// One-line summary
    #[serde(default)]
    pub description: String,
    /// Subcategories in declaration order
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Create an empty category
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: String::new(),
            description: String::new(),
            subcategories: Vec::new(),
        }
    }

    /// With icon name
    #[inline]
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a subcategory
    #[inline]
    #[must_use]
    pub fn subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategories.push(subcategory);
        self
    }

    /// Find subcategory by id
    #[must_use]
    pub fn find_subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }

    /// All topics of this category in declaration order
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.subcategories.iter().flat_map(|s| s.topics.iter())
    }

    /// Number of topics across all subcategories
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.subcategories.iter().map(|s| s.topics.len()).sum()
    }
}

/// Depth-first flattening in declaration order
///
/// Category order, then subcategory order, then topic order.
#[must_use]
pub fn flatten(categories: &[Category]) -> Vec<Topic> {
    categories.iter().flat_map(Category::topics).cloned().collect()
}
