//! Per-mode view models
//!
//! Plain data the shell renders. Each view is computed from the current
//! [`NavigationState`]; nothing here holds state of its own.

use crate::state::NavigationState;
use refnav_taxonomy::{Category, Difficulty, StyleToken, Subcategory, Topic};
use serde::Serialize;

/// A topic link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicNode {
    /// Link text
    pub title: String,
    /// Link target
    pub route: String,
    /// Optional badge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Route equals the current path
    pub active: bool,
}

/// A subcategory header and its topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategoryNode {
    /// Subcategory id
    pub id: String,
    /// Header text
    pub title: String,
    /// Expansion key in the set that drives this node
    pub key: String,
    /// Topics are shown
    pub expanded: bool,
    /// Topics in declaration order
    pub topics: Vec<TopicNode>,
}

/// A category header and its subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    /// Category id
    pub id: String,
    /// Header text
    pub title: String,
    /// Icon name
    pub icon: String,
    /// Style class for the icon
    pub color: StyleToken,
    /// Number of topics under the category
    pub topic_count: usize,
    /// Subcategories are shown
    pub expanded: bool,
    /// The active topic lives under this category
    pub active: bool,
    /// Subcategories in declaration order
    pub subcategories: Vec<SubcategoryNode>,
}

/// One icon of the collapsed rail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RailIcon {
    /// Category id
    pub category: String,
    /// Tooltip text
    pub title: String,
    /// Icon name
    pub icon: String,
    /// Style class
    pub color: StyleToken,
    /// This icon's flyout is open
    pub open: bool,
    /// The active topic lives under this category
    pub active: bool,
}

/// Full sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesktopView {
    /// Category tree
    pub categories: Vec<CategoryNode>,
}

/// Collapsed icon rail plus the open flyout, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RailView {
    /// Icons in category order
    pub icons: Vec<RailIcon>,
    /// Contents of the open flyout
    pub flyout: Option<CategoryNode>,
}

/// Mobile overlay drawer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileView {
    /// Drawer is shown
    pub open: bool,
    /// Same tree as the desktop sidebar
    pub categories: Vec<CategoryNode>,
}

#[derive(Clone, Copy)]
enum Slice {
    Desktop,
    Flyout,
}

impl NavigationState {
    /// Full sidebar view
    #[must_use]
    pub fn desktop_view(&self) -> DesktopView {
        DesktopView {
            categories: self.category_nodes(),
        }
    }

    /// Collapsed rail view
    #[must_use]
    pub fn rail_view(&self) -> RailView {
        let taxonomy = self.taxonomy();
        let open = self.flyout().open_category();
        let icons = taxonomy
            .categories()
            .iter()
            .map(|category| RailIcon {
                category: category.id.clone(),
                title: category.title.clone(),
                icon: category.icon.clone(),
                color: taxonomy.color_for_category(&category.id),
                open: open == Some(category.id.as_str()),
                active: self.contains_active(category),
            })
            .collect();
        let flyout = open
            .and_then(|id| taxonomy.category(id))
            .map(|category| self.category_node(category, Slice::Flyout));
        RailView { icons, flyout }
    }

    /// Mobile drawer view
    #[must_use]
    pub fn mobile_view(&self) -> MobileView {
        MobileView {
            open: self.drawer().is_open(),
            categories: self.category_nodes(),
        }
    }

    fn category_nodes(&self) -> Vec<CategoryNode> {
        self.taxonomy()
            .categories()
            .iter()
            .map(|category| self.category_node(category, Slice::Desktop))
            .collect()
    }

    fn category_node(&self, category: &Category, slice: Slice) -> CategoryNode {
        let expanded = match slice {
            Slice::Desktop => self.desktop().is_category_expanded(&category.id),
            Slice::Flyout => true,
        };
        CategoryNode {
            id: category.id.clone(),
            title: category.title.clone(),
            icon: category.icon.clone(),
            color: self.taxonomy().color_for_category(&category.id),
            topic_count: category.topic_count(),
            expanded,
            active: self.contains_active(category),
            subcategories: category
                .subcategories
                .iter()
                .map(|sub| self.subcategory_node(&category.id, sub, slice))
                .collect(),
        }
    }

    fn subcategory_node(&self, category: &str, sub: &Subcategory, slice: Slice) -> SubcategoryNode {
        let (key, expanded) = match slice {
            Slice::Desktop => (
                crate::SubcategoryKey::new(category, sub.id.as_str()).to_string(),
                self.desktop().is_subcategory_expanded(category, &sub.id),
            ),
            Slice::Flyout => (
                crate::FlyoutKey::new(category, sub.id.as_str()).to_string(),
                self.flyout().is_subcategory_expanded(category, &sub.id),
            ),
        };
        SubcategoryNode {
            id: sub.id.clone(),
            title: sub.title.clone(),
            key,
            expanded,
            topics: sub.topics.iter().map(|t| self.topic_node(t)).collect(),
        }
    }

    fn topic_node(&self, topic: &Topic) -> TopicNode {
        TopicNode {
            title: topic.title.clone(),
            route: topic.route.clone(),
            difficulty: topic.difficulty,
            active: self.is_active(topic),
        }
    }

    fn contains_active(&self, category: &Category) -> bool {
        category.topics().any(|t| self.is_active(t))
    }
}
