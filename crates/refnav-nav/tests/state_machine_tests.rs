use pretty_assertions::assert_eq;
use proptest::prelude::*;
use refnav_dom::Document;
use refnav_nav::{DesktopTree, NavEvent, NavigationState, SelectOrigin};
use refnav_taxonomy::Taxonomy;
use refnav_test_utils::{isolated_document, small_taxonomy};

fn builtin_state() -> (NavigationState, Document) {
    let doc = isolated_document();
    (NavigationState::new(Taxonomy::builtin(), doc.clone()), doc)
}

#[test]
fn test_second_flyout_replaces_first() {
    let (mut nav, doc) = builtin_state();
    nav.apply(NavEvent::ToggleRail);
    nav.apply(NavEvent::OpenFlyout("react".into()));
    nav.apply(NavEvent::toggle_flyout_subcategory("react", "hooks"));
    assert_eq!(nav.flyout().expanded_count(), 1);

    nav.apply(NavEvent::OpenFlyout("css".into()));
    assert_eq!(nav.flyout().open_category(), Some("css"));
    assert_eq!(nav.flyout().expanded_count(), 0);
    assert_eq!(doc.scroll_lock_depth(), 1);
}

#[test]
fn test_repeated_open_keeps_flyout_expansion() {
    let (mut nav, doc) = builtin_state();
    nav.apply(NavEvent::ToggleRail);
    nav.apply(NavEvent::OpenFlyout("react".into()));
    nav.apply(NavEvent::toggle_flyout_subcategory("react", "hooks"));

    nav.apply(NavEvent::OpenFlyout("react".into()));
    assert!(nav.flyout().is_subcategory_expanded("react", "hooks"));
    assert_eq!(doc.scroll_lock_depth(), 1);
}

#[test]
fn test_rail_toggle_closes_flyout_and_restores_scroll() {
    let (mut nav, doc) = builtin_state();
    nav.apply(NavEvent::ToggleRail);
    nav.apply(NavEvent::OpenFlyout("javascript".into()));
    nav.apply(NavEvent::toggle_flyout_subcategory("javascript", "async"));
    assert!(doc.is_scroll_locked());

    nav.apply(NavEvent::ToggleRail);
    assert!(!nav.is_rail_collapsed());
    assert!(!nav.flyout().is_open());
    assert_eq!(nav.flyout().expanded_count(), 0);
    assert!(!doc.is_scroll_locked());

    // re-collapsing must not bring the old panel back
    nav.apply(NavEvent::ToggleRail);
    assert!(!nav.flyout().is_open());
}

#[test]
fn test_drawer_select_closes_drawer_keeps_desktop_sets() {
    let (mut nav, _) = builtin_state();
    nav.apply(NavEvent::ToggleCategory("react".into()));
    nav.apply(NavEvent::toggle_subcategory("react", "hooks"));
    let before = nav.desktop().clone();

    for initially_open in [true, false] {
        if nav.drawer().is_open() != initially_open {
            nav.apply(NavEvent::ToggleDrawer);
        }
        let request = nav.apply(NavEvent::select("/react/hooks/useState", SelectOrigin::Drawer));
        assert_eq!(request.map(|r| r.route), Some("/react/hooks/useState".to_string()));
        assert!(!nav.drawer().is_open());
        assert_eq!(nav.desktop(), &before);
    }
}

#[test]
fn test_flyout_select_closes_flyout() {
    let (mut nav, doc) = builtin_state();
    nav.apply(NavEvent::ToggleRail);
    nav.apply(NavEvent::ToggleFlyout("css".into()));
    let request = nav.apply(NavEvent::select("/css/layout/grid", SelectOrigin::Flyout));
    assert!(request.is_some());
    assert!(!nav.flyout().is_open());
    assert!(!doc.is_scroll_locked());
}

#[test]
fn test_select_does_not_move_current_path() {
    let (mut nav, _) = builtin_state();
    nav.apply(NavEvent::select("/css/layout/grid", SelectOrigin::Desktop));
    assert_eq!(nav.current_path(), "/");

    nav.apply(NavEvent::RouteChanged("/css/layout/grid".into()));
    assert!(nav.is_active_route("/css/layout/grid"));
}

#[test]
fn test_outside_click_and_close_button() {
    let (mut nav, doc) = builtin_state();
    nav.apply(NavEvent::ToggleRail);

    nav.apply(NavEvent::OpenFlyout("html".into()));
    nav.apply(NavEvent::OutsideClick);
    assert!(!nav.flyout().is_open());

    nav.apply(NavEvent::OpenFlyout("html".into()));
    nav.apply(NavEvent::CloseFlyout);
    assert!(!nav.flyout().is_open());
    assert!(!doc.is_scroll_locked());
}

#[test]
fn test_route_change_closes_overlays() {
    let (mut nav, doc) = builtin_state();
    nav.apply(NavEvent::ToggleRail);
    nav.apply(NavEvent::OpenFlyout("react".into()));
    nav.apply(NavEvent::ToggleDrawer);

    nav.apply(NavEvent::RouteChanged("/react/hooks/useEffect".into()));
    assert!(!nav.flyout().is_open());
    assert!(!nav.drawer().is_open());
    assert!(!doc.is_scroll_locked());
}

#[test]
fn test_desktop_and_flyout_sets_are_separate() {
    let (mut nav, _) = builtin_state();
    nav.apply(NavEvent::toggle_subcategory("react", "hooks"));
    nav.apply(NavEvent::ToggleRail);
    nav.apply(NavEvent::OpenFlyout("react".into()));
    assert!(!nav.flyout().is_subcategory_expanded("react", "hooks"));

    nav.apply(NavEvent::toggle_flyout_subcategory("react", "patterns"));
    nav.apply(NavEvent::ToggleRail);
    assert!(nav.desktop().is_subcategory_expanded("react", "hooks"));
    assert!(!nav.desktop().is_subcategory_expanded("react", "patterns"));
}

#[test]
fn test_drop_releases_scroll_lock() {
    let doc = isolated_document();
    {
        let mut nav = NavigationState::new(small_taxonomy(), doc.clone()).with_rail_collapsed(true);
        nav.apply(NavEvent::OpenFlyout("css".into()));
        assert!(doc.is_scroll_locked());
    }
    assert!(!doc.is_scroll_locked());
}

#[test]
fn test_unwind_releases_scroll_lock() {
    let doc = isolated_document();
    let inner = doc.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let mut nav = NavigationState::new(small_taxonomy(), inner).with_rail_collapsed(true);
        nav.apply(NavEvent::OpenFlyout("react".into()));
        panic!("view torn down mid-interaction");
    }));
    assert!(result.is_err());
    assert!(!doc.is_scroll_locked());
}

fn event_strategy() -> impl Strategy<Value = NavEvent> {
    let category = prop_oneof![Just("react"), Just("css"), Just("missing")];
    let subcategory = prop_oneof![Just("hooks"), Just("patterns"), Just("layout"), Just("interactive")];
    let route = prop_oneof![
        Just("/react/hooks/useState"),
        Just("/css/layout/grid"),
        Just("/css/interactive-features/modal"),
        Just("/nowhere"),
    ];
    let origin = prop_oneof![
        Just(SelectOrigin::Desktop),
        Just(SelectOrigin::Flyout),
        Just(SelectOrigin::Drawer),
        Just(SelectOrigin::Search),
    ];
    prop_oneof![
        category.clone().prop_map(|c| NavEvent::ToggleCategory(c.into())),
        (category.clone(), subcategory.clone()).prop_map(|(c, s)| NavEvent::toggle_subcategory(c, s)),
        Just(NavEvent::ToggleRail),
        category.clone().prop_map(|c| NavEvent::OpenFlyout(c.into())),
        category.clone().prop_map(|c| NavEvent::ToggleFlyout(c.into())),
        Just(NavEvent::CloseFlyout),
        (category, subcategory).prop_map(|(c, s)| NavEvent::toggle_flyout_subcategory(c, s)),
        Just(NavEvent::OutsideClick),
        Just(NavEvent::ToggleDrawer),
        Just(NavEvent::CloseDrawer),
        (route.clone(), origin).prop_map(|(r, o)| NavEvent::select(r, o)),
        route.prop_map(|r| NavEvent::RouteChanged(r.into())),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold_under_random_events(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let doc = Document::new();
        let mut nav = NavigationState::new(small_taxonomy(), doc.clone());

        for event in events {
            let desktop_before: DesktopTree = nav.desktop().clone();
            let is_select = matches!(event, NavEvent::SelectTopic { .. });

            let request = nav.apply(event);

            prop_assert_eq!(request.is_some(), is_select);
            if is_select {
                prop_assert_eq!(nav.desktop(), &desktop_before);
                prop_assert!(!nav.drawer().is_open());
                prop_assert!(!nav.flyout().is_open());
            }
            if nav.flyout().is_open() {
                prop_assert!(nav.is_rail_collapsed());
            } else {
                prop_assert_eq!(nav.flyout().expanded_count(), 0);
            }
            prop_assert_eq!(doc.is_scroll_locked(), nav.flyout().is_open());
            prop_assert!(doc.scroll_lock_depth() <= 1);
            for key in nav.flyout().expanded() {
                prop_assert_eq!(Some(key.category()), nav.flyout().open_category());
            }
        }

        drop(nav);
        prop_assert!(!doc.is_scroll_locked());
    }
}
