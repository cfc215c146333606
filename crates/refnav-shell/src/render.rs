//! Plain-text rendering for the CLI
//!
//! Collapsed branches are omitted. The active lesson is marked with `*`.

use crate::not_found::NotFoundView;
use refnav_breadcrumb::BreadcrumbTrail;
use refnav_nav::{CategoryNode, DesktopView, MobileView, RailView};
use refnav_search::SearchResults;

const EXPANDED: &str = "▾";
const COLLAPSED: &str = "▸";

fn marker(expanded: bool) -> &'static str {
    if expanded {
        EXPANDED
    } else {
        COLLAPSED
    }
}

fn category_lines(node: &CategoryNode, indent: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(indent);
    lines.push(format!(
        "{pad}{} {} ({})",
        marker(node.expanded),
        node.title,
        node.topic_count
    ));
    if !node.expanded {
        return;
    }
    for sub in &node.subcategories {
        lines.push(format!("{pad}  {} {}", marker(sub.expanded), sub.title));
        if !sub.expanded {
            continue;
        }
        for topic in &sub.topics {
            let active = if topic.active { "*" } else { " " };
            let badge = topic
                .difficulty
                .map(|d| format!(" [{d}]"))
                .unwrap_or_default();
            lines.push(format!("{pad}   {active}  {}  {}{badge}", topic.title, topic.route));
        }
    }
}

/// Full sidebar
#[must_use]
pub fn render_desktop(view: &DesktopView) -> String {
    let mut lines = Vec::new();
    for category in &view.categories {
        category_lines(category, 0, &mut lines);
    }
    lines.join("\n")
}

/// Icon rail, followed by the open flyout
#[must_use]
pub fn render_rail(view: &RailView) -> String {
    let mut lines: Vec<String> = view
        .icons
        .iter()
        .map(|icon| {
            let open = if icon.open { ">" } else { " " };
            let active = if icon.active { "*" } else { " " };
            format!("{open}{active} [{}] {}", icon.icon, icon.title)
        })
        .collect();
    if let Some(flyout) = &view.flyout {
        lines.push(String::new());
        category_lines(flyout, 1, &mut lines);
    }
    lines.join("\n")
}

/// Mobile drawer
#[must_use]
pub fn render_mobile(view: &MobileView) -> String {
    if !view.open {
        return "(menu closed)".to_string();
    }
    let mut lines = Vec::new();
    for category in &view.categories {
        category_lines(category, 0, &mut lines);
    }
    lines.join("\n")
}

/// Breadcrumb bar; links show their target, the current page does not
#[must_use]
pub fn render_breadcrumbs(trail: &BreadcrumbTrail) -> String {
    let parts: Vec<String> = trail
        .crumbs()
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            if trail.is_link(i) {
                format!("{} <{}>", crumb.label, crumb.path)
            } else {
                crumb.label.clone()
            }
        })
        .collect();
    parts.join(" > ")
}

/// Search result panel
#[must_use]
pub fn render_search(results: &SearchResults) -> String {
    if !results.panel_open {
        return String::new();
    }
    if results.is_empty() {
        return "No results".to_string();
    }
    let mut lines: Vec<String> = results
        .hits
        .iter()
        .map(|hit| format!("{:<28} {}", hit.title, hit.route))
        .collect();
    if results.is_truncated() {
        lines.push(format!(
            "... {} more",
            results.total_matches - results.len()
        ));
    }
    lines.join("\n")
}

/// Not-found page
#[must_use]
pub fn render_not_found(view: &NotFoundView) -> String {
    let mut lines = vec![format!("Page not found: {}", view.path)];
    match &view.category {
        Some(title) => lines.push(format!("Lessons in {title}:")),
        None => lines.push("Browse a category:".to_string()),
    }
    for suggestion in &view.suggestions {
        lines.push(format!("  {}  {}", suggestion.title, suggestion.route));
    }
    lines.join("\n")
}
