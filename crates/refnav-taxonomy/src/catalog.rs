//! Built-in reference site catalog

use crate::builder::TaxonomyBuilder;
use crate::model::{Category, Difficulty, Subcategory, Topic};
use crate::taxonomy::Taxonomy;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::model::Difficulty::{Advanced, Beginner, Intermediate};

static BUILTIN: Lazy<Arc<Taxonomy>> = Lazy::new(|| {
    let taxonomy = TaxonomyBuilder::from(builtin_categories())
        .build()
        .unwrap_or_else(|err| {
            tracing::error!("Built-in catalog rejected: {}", err);
            Taxonomy::index(Vec::new())
        });
    tracing::debug!("Indexed built-in catalog: {} topics", taxonomy.topic_count());
    Arc::new(taxonomy)
});

impl Taxonomy {
    /// The built-in catalog, built once per process
    #[must_use]
    pub fn builtin() -> Arc<Taxonomy> {
        Arc::clone(&BUILTIN)
    }
}

fn topic(cat: &str, sub: &str, id: &str, title: &str, level: Difficulty) -> Topic {
    Topic::new(id, title, format!("/{cat}/{sub}/{id}")).with_difficulty(level)
}

fn subcategory(cat: &str, id: &str, title: &str, topics: &[(&str, &str, Difficulty)]) -> Subcategory {
    topics
        .iter()
        .fold(Subcategory::new(id, title), |sub, &(topic_id, topic_title, level)| {
            sub.topic(topic(cat, id, topic_id, topic_title, level))
        })
}

/// Raw catalog tree, before validation
#[must_use]
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new("html", "HTML")
            .with_icon("file-code")
            .with_description("Structure and semantics of web documents")
            .subcategory(subcategory(
                "html",
                "basics",
                "HTML Basics",
                &[
                    ("document-structure", "Document Structure", Beginner),
                    ("elements", "Elements & Attributes", Beginner),
                    ("links", "Links & Navigation", Beginner),
                    ("media", "Images & Media", Beginner),
                ],
            ))
            .subcategory(subcategory(
                "html",
                "forms",
                "Forms",
                &[
                    ("form-basics", "Form Basics", Beginner),
                    ("input-types", "Input Types", Beginner),
                    ("validation", "Form Validation", Intermediate),
                ],
            ))
            .subcategory(subcategory(
                "html",
                "semantic",
                "Semantic HTML",
                &[
                    ("landmarks", "Landmark Elements", Intermediate),
                    ("accessibility", "Accessibility Basics", Intermediate),
                ],
            )),
        Category::new("css", "CSS")
            .with_icon("palette")
            .with_description("Styling, layout and motion")
            .subcategory(subcategory(
                "css",
                "selectors",
                "Selectors",
                &[
                    ("basic-selectors", "Basic Selectors", Beginner),
                    ("specificity", "Specificity", Intermediate),
                    ("pseudo-classes", "Pseudo-classes", Intermediate),
                ],
            ))
            .subcategory(subcategory(
                "css",
                "layout",
                "Layout",
                &[
                    ("box-model", "Box Model", Beginner),
                    ("flexbox", "Flexbox", Beginner),
                    ("grid", "CSS Grid", Intermediate),
                    ("positioning", "Positioning", Intermediate),
                ],
            ))
            .subcategory(subcategory(
                "css",
                "effects",
                "Effects",
                &[
                    ("transitions", "Transitions", Intermediate),
                    ("animations", "Keyframe Animations", Advanced),
                    ("transforms", "Transforms", Intermediate),
                ],
            )),
        Category::new("javascript", "JavaScript")
            .with_icon("braces")
            .with_description("The language of the web")
            .subcategory(subcategory(
                "javascript",
                "fundamentals",
                "Fundamentals",
                &[
                    ("variables", "Variables & Scope", Beginner),
                    ("functions", "Functions", Beginner),
                    ("closures", "Closures", Intermediate),
                    ("arrays", "Array Methods", Beginner),
                ],
            ))
            .subcategory(subcategory(
                "javascript",
                "async",
                "Asynchronous JavaScript",
                &[
                    ("promises", "Promises", Intermediate),
                    ("async-await", "Async / Await", Intermediate),
                    ("event-loop", "Event Loop", Advanced),
                    ("fetch", "Fetch API", Intermediate),
                ],
            ))
            .subcategory(subcategory(
                "javascript",
                "dom",
                "DOM Manipulation",
                &[
                    ("selecting", "Selecting Elements", Beginner),
                    ("events", "Event Handling", Beginner),
                    ("delegation", "Event Delegation", Intermediate),
                ],
            ))
            // These routes predate the subcategory id and keep the old
            // `interactive-features` segment.
            .subcategory(
                Subcategory::new("interactive", "Interactive Features")
                    .topic(
                        Topic::new("drag-and-drop", "Drag and Drop", "/javascript/interactive-features/drag-and-drop")
                            .with_difficulty(Intermediate),
                    )
                    .topic(
                        Topic::new("infinite-scroll", "Infinite Scroll", "/javascript/interactive-features/infinite-scroll")
                            .with_difficulty(Advanced),
                    )
                    .topic(
                        Topic::new("modal", "Modal Dialogs", "/javascript/interactive-features/modal")
                            .with_difficulty(Intermediate),
                    ),
            ),
        Category::new("typescript", "TypeScript")
            .with_icon("shield-check")
            .with_description("Static types for JavaScript")
            .subcategory(subcategory(
                "typescript",
                "types",
                "Type System",
                &[
                    ("basic-types", "Basic Types", Beginner),
                    ("interfaces", "Interfaces", Beginner),
                    ("unions", "Union Types", Intermediate),
                    ("generics", "Generics", Intermediate),
                ],
            ))
            .subcategory(subcategory(
                "typescript",
                "advanced",
                "Advanced Types",
                &[
                    ("utility-types", "Utility Types", Intermediate),
                    ("mapped-types", "Mapped Types", Advanced),
                    ("conditional-types", "Conditional Types", Advanced),
                    ("type-guards", "Type Guards", Intermediate),
                ],
            )),
        Category::new("react", "React")
            .with_icon("atom")
            .with_description("Component-based user interfaces")
            .subcategory(subcategory(
                "react",
                "fundamentals",
                "React Fundamentals",
                &[
                    ("jsx", "JSX", Beginner),
                    ("components", "Components", Beginner),
                    ("props", "Props", Beginner),
                    ("conditional-rendering", "Conditional Rendering", Beginner),
                    ("lists", "Lists & Keys", Beginner),
                ],
            ))
            .subcategory(subcategory(
                "react",
                "hooks",
                "React Hooks",
                &[
                    ("useState", "useState", Beginner),
                    ("useEffect", "useEffect", Intermediate),
                    ("useContext", "useContext", Intermediate),
                    ("useReducer", "useReducer", Intermediate),
                    ("useRef", "useRef", Intermediate),
                    ("useMemo", "useMemo", Advanced),
                    ("useCallback", "useCallback", Advanced),
                    ("useLayoutEffect", "useLayoutEffect", Advanced),
                    ("useTransition", "useTransition", Advanced),
                    ("custom-hooks", "Custom Hooks", Advanced),
                ],
            ))
            .subcategory(subcategory(
                "react",
                "patterns",
                "Patterns",
                &[
                    ("composition", "Composition", Intermediate),
                    ("render-props", "Render Props", Advanced),
                    ("hoc", "Higher-Order Components", Advanced),
                    ("error-boundaries", "Error Boundaries", Intermediate),
                ],
            )),
        Category::new("nodejs", "Node.js")
            .with_icon("server")
            .with_description("JavaScript on the server")
            .subcategory(subcategory(
                "nodejs",
                "core",
                "Core Modules",
                &[
                    ("fs", "File System", Beginner),
                    ("path", "Path Module", Beginner),
                    ("event-emitter", "EventEmitter", Intermediate),
                    ("streams", "Streams", Advanced),
                ],
            ))
            .subcategory(subcategory(
                "nodejs",
                "http",
                "HTTP Servers",
                &[
                    ("http-server", "HTTP Server Basics", Beginner),
                    ("routing", "Routing", Intermediate),
                    ("middleware", "Middleware", Intermediate),
                ],
            ))
            .subcategory(subcategory(
                "nodejs",
                "npm",
                "Package Management",
                &[
                    ("npm-basics", "npm Basics", Beginner),
                    ("package-json", "package.json", Beginner),
                    ("semver", "Semantic Versioning", Intermediate),
                ],
            )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_validation() {
        let validated = TaxonomyBuilder::from(builtin_categories()).build().unwrap();
        assert!(validated.topic_count() > 0);
        assert_eq!(validated.flatten(), Taxonomy::builtin().flatten());
    }

    #[test]
    fn raw_catalog_leaves_category_to_builder() {
        let raw = builtin_categories();
        assert!(raw.iter().flat_map(Category::topics).all(|t| t.category.is_empty()));
        assert!(Taxonomy::builtin().flatten().iter().all(|t| !t.category.is_empty()));
    }

    #[test]
    fn builtin_is_shared() {
        assert!(Arc::ptr_eq(&Taxonomy::builtin(), &Taxonomy::builtin()));
    }

    #[test]
    fn builtin_topics_know_their_category() {
        let taxonomy = Taxonomy::builtin();
        let topic = taxonomy.topic_by_route("/react/hooks/useState").unwrap();
        assert_eq!(topic.category, "react");
        assert_eq!(topic.title, "useState");
    }

    #[test]
    fn only_interactive_features_deviate() {
        let issues = Taxonomy::builtin().route_shape_lint();
        assert_eq!(issues.len(), 3);
        assert!(issues
            .iter()
            .all(|i| i.route.starts_with("/javascript/interactive-features/")));
    }
}
