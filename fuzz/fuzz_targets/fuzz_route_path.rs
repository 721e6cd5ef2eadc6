#![no_main]

use libfuzzer_sys::fuzz_target;

use crmnav::{MenuDeclaration, MenuEntry, NavigationState, NavigationTree, RoutePath};

fuzz_target!(|data: &[u8]| {
    let Ok(location) = std::str::from_utf8(data) else {
        return;
    };

    // Normalization must be stable and strictly parseable
    if let Some(route) = RoutePath::from_location(location) {
        assert_eq!(RoutePath::from_location(route.as_str()).as_ref(), Some(&route));
        assert!(RoutePath::parse(route.as_str()).is_ok());
    }
    let _ = RoutePath::parse(location);

    let declaration = MenuDeclaration {
        home: None,
        entries: vec![
            MenuEntry::leaf("Dashboard", "/dashboard"),
            MenuEntry::group(
                "Policies",
                "/dashboard/policies",
                vec![MenuEntry::leaf("Renewals", "/dashboard/policies/renewals")],
            ),
        ],
    };
    let Ok(tree) = NavigationTree::from_declaration(&declaration, "fuzz") else {
        return;
    };
    let state = NavigationState::new().toggle_expansion("Policies");

    // The resolved entry is always part of the breadcrumb trail
    let trail = tree.breadcrumbs(location);
    if let Some(active) = tree.resolve_active(location) {
        assert_eq!(trail.last().copied(), Some(active));
    }
    let _ = tree.render(&state, location).count();
});
