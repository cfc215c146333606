use proptest::prelude::*;
use refnav_breadcrumb::{resolve_breadcrumbs, BreadcrumbTrail};
use refnav_taxonomy::Taxonomy;
use refnav_test_utils::{conforming_routes, small_taxonomy};

fn assert_chain_property(taxonomy: &Taxonomy, route: &str) {
    let trail = resolve_breadcrumbs(taxonomy, route);
    let last = trail.current().expect("topic routes are never suppressed");
    let topic = taxonomy.topic_by_route(route).unwrap();
    assert_eq!(last.path, topic.route);
    assert_eq!(last.label, topic.title);

    for crumb in trail.links() {
        let fed_back = resolve_breadcrumbs(taxonomy, &crumb.path);
        assert!(
            fed_back.is_strict_prefix_of(&trail),
            "{} -> {:?} is not a strict prefix of {:?}",
            crumb.path,
            fed_back.labels(),
            trail.labels()
        );
    }
}

#[test]
fn every_builtin_route_ends_in_its_topic() {
    let taxonomy = Taxonomy::builtin();
    let routes = conforming_routes(&taxonomy);
    assert!(!routes.is_empty());
    for route in routes {
        assert_chain_property(&taxonomy, &route);
    }
}

#[test]
fn fixture_routes_end_in_their_topic() {
    let taxonomy = small_taxonomy();
    for route in conforming_routes(&taxonomy) {
        assert_chain_property(&taxonomy, &route);
    }
}

#[test]
fn nonconforming_route_resolves_partially() {
    // `interactive-features` is not the subcategory id `interactive`
    let trail = resolve_breadcrumbs(&Taxonomy::builtin(), "/javascript/interactive-features/modal");
    assert_eq!(trail.labels(), vec!["Home", "JavaScript"]);
}

#[test]
fn suppressed_trail_is_empty() {
    let taxonomy = Taxonomy::builtin();
    assert_eq!(resolve_breadcrumbs(&taxonomy, "/"), BreadcrumbTrail::default());
    assert_eq!(resolve_breadcrumbs(&taxonomy, "/roadmap"), BreadcrumbTrail::default());
}

proptest! {
    #[test]
    fn prop_never_fails_and_starts_at_home(path in "(/[a-zA-Z-]{0,12}){0,5}") {
        let taxonomy = Taxonomy::builtin();
        let trail = resolve_breadcrumbs(&taxonomy, &path);
        if !trail.is_empty() {
            prop_assert_eq!(trail.crumbs()[0].label.as_str(), "Home");
            prop_assert!(trail.len() <= 4);
        }
    }

    #[test]
    fn prop_topic_routes_resolve(index in 0usize..200) {
        let taxonomy = Taxonomy::builtin();
        let routes = conforming_routes(&taxonomy);
        let route = &routes[index % routes.len()];
        prop_assert_eq!(resolve_breadcrumbs(&taxonomy, route).len(), 4);
    }
}
