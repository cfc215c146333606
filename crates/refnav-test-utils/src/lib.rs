//! Testing utilities for refnav workspace
//!
//! Shared fixtures for taxonomies, documents and key chords.

#![allow(missing_docs)]

use refnav_dom::{Document, KeyChord};
use refnav_taxonomy::{Category, Difficulty, Subcategory, Taxonomy, Topic};
use std::sync::Arc;

/// Two categories, one with a route that does not follow its ids.
pub fn small_taxonomy() -> Arc<Taxonomy> {
    let taxonomy = Taxonomy::builder()
        .category(
            Category::new("react", "React")
                .with_icon("atom")
                .subcategory(
                    Subcategory::new("hooks", "React Hooks")
                        .topic(Topic::new("useState", "useState", "/react/hooks/useState"))
                        .topic(
                            Topic::new("useEffect", "useEffect", "/react/hooks/useEffect")
                                .with_difficulty(Difficulty::Intermediate),
                        ),
                )
                .subcategory(
                    Subcategory::new("patterns", "Patterns")
                        .topic(Topic::new("hoc", "Higher-Order Components", "/react/patterns/hoc")),
                ),
        )
        .category(
            Category::new("css", "CSS")
                .with_icon("palette")
                .subcategory(
                    Subcategory::new("layout", "Layout")
                        .topic(Topic::new("flexbox", "Flexbox", "/css/layout/flexbox"))
                        .topic(Topic::new("grid", "CSS Grid", "/css/layout/grid")),
                )
                .subcategory(
                    Subcategory::new("interactive", "Interactive Features")
                        .topic(Topic::new("modal", "Modal", "/css/interactive-features/modal")),
                ),
        )
        .build()
        .unwrap();
    Arc::new(taxonomy)
}

/// One category, one subcategory, `n` topics titled `Lesson {i}`.
pub fn wide_taxonomy(n: usize) -> Arc<Taxonomy> {
    let sub = (0..n).fold(Subcategory::new("all", "All"), |sub, i| {
        sub.topic(Topic::new(
            format!("lesson-{i}"),
            format!("Lesson {i}"),
            format!("/course/all/lesson-{i}"),
        ))
    });
    let taxonomy = Taxonomy::builder()
        .category(Category::new("course", "Course").subcategory(sub))
        .build()
        .unwrap();
    Arc::new(taxonomy)
}

/// Every route whose segments resolve back to the topic.
pub fn conforming_routes(taxonomy: &Taxonomy) -> Vec<String> {
    let nonconforming: Vec<String> = taxonomy
        .route_shape_lint()
        .into_iter()
        .map(|issue| issue.route)
        .collect();
    taxonomy
        .flatten()
        .iter()
        .map(|t| t.route.clone())
        .filter(|r| !nonconforming.contains(r))
        .collect()
}

pub fn isolated_document() -> Document {
    Document::new()
}

pub fn command_k() -> KeyChord {
    KeyChord::key("k").with_ctrl()
}

pub fn escape() -> KeyChord {
    KeyChord::escape()
}
