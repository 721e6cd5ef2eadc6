//! Scenario: An agent opens a policy renewal
//!
//! Journey: The shell mounts on the dashboard, the agent follows a link to a
//! renewal, then opens the Policies menu to see where they are.
//!
//! Steps:
//! 1. Mount with nothing expanded at `/dashboard`
//! 2. Navigate to `/dashboard/policies/renewals`
//! 3. Toggle Policies open
//! 4. Toggle Policies closed again
//!
//! Success Criteria:
//! - Dashboard is active only on its own route
//! - Navigation alone never expands a menu
//! - Both Policies and Renewals highlight once the menu is open

use crmnav::domain::services::Depth;
use crmnav::{MenuDeclaration, MenuEntry, NavigationShell, NavigationTree};

use crate::common::*;

fn policies_tree() -> NavigationTree {
    let declaration: MenuDeclaration = toml::from_str(POLICIES_MENU_TOML).unwrap();
    NavigationTree::from_declaration(&declaration, "fixture").unwrap()
}

/// SCENARIO: Dashboard → renewal → expand → collapse
#[test]
fn scenario_policy_renewal_journey() {
    // Step 1: mount at home
    let mut shell = NavigationShell::mount(policies_tree());
    shell.navigate("/dashboard");

    let view: Vec<_> = shell.view().map(|n| (n.label, n.active)).collect();
    assert_eq!(
        view,
        [("Dashboard", true), ("Policies", false), ("Claims", false)],
        "Step 1: only Dashboard is active at home"
    );

    // Step 2: follow a link; Dashboard is no longer active because home matches exactly
    shell.navigate("/dashboard/policies/renewals");
    let view: Vec<_> = shell.view().map(|n| (n.label, n.active)).collect();
    assert_eq!(
        view,
        [("Dashboard", false), ("Policies", true), ("Claims", false)],
        "Step 2: Policies is active but still collapsed"
    );
    assert!(!shell.is_expanded("Policies"));

    // Step 3: open the menu
    shell.toggle("Policies");
    let view: Vec<_> = shell.view().collect();
    let children: Vec<_> = view
        .iter()
        .filter(|n| n.depth == Depth::Child)
        .map(|n| (n.label, n.active, n.parent))
        .collect();
    assert_eq!(
        children,
        [
            ("New", false, Some("Policies")),
            ("Renewals", true, Some("Policies")),
        ],
        "Step 3: children appear under Policies with Renewals active"
    );
    assert_eq!(shell.active_entry().map(|n| n.label()), Some("Renewals"));

    // Step 4: close it again; active flags are unchanged
    shell.toggle("Policies");
    assert!(shell.state().is_empty());
    let view: Vec<_> = shell.view().map(|n| (n.label, n.active)).collect();
    assert_eq!(
        view,
        [("Dashboard", false), ("Policies", true), ("Claims", false)],
        "Step 4: collapsing keeps Policies active"
    );
}

/// SCENARIO: An archive page next to Policies must not light it up
#[test]
fn scenario_sibling_archive_route() {
    let declaration = MenuDeclaration {
        home: None,
        entries: vec![
            MenuEntry::leaf("Dashboard", "/dashboard"),
            MenuEntry::leaf("Policies", "/dashboard/policies"),
            MenuEntry::leaf("Archive", "/dashboard/policies-archive"),
        ],
    };
    let tree = NavigationTree::from_declaration(&declaration, "inline").unwrap();
    let mut shell = NavigationShell::mount(tree);

    shell.navigate("/dashboard/policies-archive/2023");

    let active: Vec<_> = shell.view().filter(|n| n.active).map(|n| n.label).collect();
    assert_eq!(active, ["Archive"]);
}
