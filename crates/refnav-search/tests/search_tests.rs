use pretty_assertions::assert_eq;
use proptest::prelude::*;
use refnav_search::{SearchBox, SearchIndex, MAX_RESULTS};
use refnav_taxonomy::Taxonomy;
use refnav_test_utils::{command_k, escape, isolated_document, wide_taxonomy};
use std::sync::Arc;

fn brute_force(taxonomy: &Taxonomy, query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    taxonomy
        .flatten()
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&needle))
        .map(|t| t.route.clone())
        .collect()
}

#[test]
fn overflowing_query_returns_first_eight_in_flatten_order() {
    let taxonomy = Taxonomy::builtin();
    let index = SearchIndex::new(&taxonomy);
    let all = brute_force(&taxonomy, "use");
    assert!(all.len() > MAX_RESULTS);

    let results = index.search("use");
    let routes: Vec<_> = results.hits.iter().map(|h| h.route.clone()).collect();
    assert_eq!(routes, all[..MAX_RESULTS].to_vec());
    assert_eq!(results.total_matches, all.len());
    assert!(results.is_truncated());
}

#[test]
fn wide_catalog_is_capped() {
    let taxonomy = wide_taxonomy(30);
    let results = SearchIndex::new(&taxonomy).search("lesson");
    assert_eq!(results.len(), 8);
    let titles: Vec<_> = results.hits.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, (0..8).map(|i| format!("Lesson {i}")).collect::<Vec<_>>());
}

#[test]
fn full_keyboard_flow() {
    let doc = isolated_document();
    let search = SearchBox::new(Arc::new(SearchIndex::new(&Taxonomy::builtin())), doc.clone());
    let _keys = search.mount();

    doc.focus("somewhere-else");
    assert!(doc.dispatch_keydown(&command_k()));
    assert!(search.is_focused());

    search.input("flex");
    assert!(search.is_panel_open());

    assert!(doc.dispatch_keydown(&escape()));
    assert!(!search.is_panel_open());
    assert_eq!(search.query(), "flex");

    doc.dispatch_keydown(&command_k());
    let request = search.select(0).unwrap();
    assert_eq!(request.route, "/css/layout/flexbox");
    assert_eq!(search.query(), "");
}

#[test]
fn remounting_does_not_leak_listeners() {
    let doc = isolated_document();
    let search = SearchBox::new(Arc::new(SearchIndex::new(&Taxonomy::builtin())), doc.clone());
    for _ in 0..10 {
        let _keys = search.mount();
        assert_eq!(doc.listener_count(), 1);
    }
    assert_eq!(doc.listener_count(), 0);
}

proptest! {
    #[test]
    fn prop_hits_are_bounded_prefix_of_matches(query in "[a-zA-Z ]{0,6}") {
        let taxonomy = Taxonomy::builtin();
        let results = SearchIndex::new(&taxonomy).search(&query);
        let expected = brute_force(&taxonomy, &query);

        prop_assert!(results.len() <= MAX_RESULTS);
        let routes: Vec<_> = results.hits.iter().map(|h| h.route.clone()).collect();
        let take = expected.len().min(MAX_RESULTS);
        prop_assert_eq!(routes, expected[..take].to_vec());
        prop_assert!(results.hits.windows(2).all(|w| w[0].position < w[1].position));
        prop_assert_eq!(results.panel_open, !query.trim().is_empty());
    }
}
