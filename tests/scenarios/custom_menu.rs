//! Scenario: A team ships its own menu
//!
//! Journey: A team keeps a YAML menu next to their project config, checks it,
//! renders it, and then fixes a mistake the checker found.
//!
//! Steps:
//! 1. Write `.crmnav/config.toml` pointing at `menu.yaml`
//! 2. `crmnav check` reports the menu OK
//! 3. `crmnav` renders the custom menu at its own home
//! 4. Break the menu; `check` lists the issue and fails
//! 5. `--menu` on the command line wins over the config file
//!
//! Success Criteria:
//! - Config discovery finds the project config from the working directory
//! - Every issue is reported, not just the first
//! - CLI flags beat config files

use crate::common::*;
use crate::{assert_line, assert_output_contains, assert_success};

#[test]
fn scenario_custom_menu_lifecycle() {
    let env = TestEnv::new();

    // Step 1: project config with a relative menu file
    env.write_project_file(".crmnav/menu.yaml", POLICIES_MENU_YAML);
    env.write_project_file(
        ".crmnav/config.toml",
        "[menu]\nfile = \"menu.yaml\"\n\n[output]\nascii = true\n",
    );

    // Step 2: check
    let result = env.run(&["check"]);
    assert_success!(result);
    assert_output_contains!(result, "[OK] Menu OK: 4 entries (2 top-level) from");
    assert_output_contains!(result, "menu.yaml");
    assert_line!(result, "  Home: /app");

    // Step 3: default render at the custom home
    let result = env.run(&[]);
    assert_success!(result);
    assert_line!(result, "(*)   Home      /app");
    assert_line!(result, "( ) > Policies  /app/policies");

    // Step 4: an expandable entry without children
    env.write_project_file(
        ".crmnav/menu.yaml",
        concat!(
            "entries:\n",
            "  - label: Home\n",
            "    path: /app\n",
            "  - label: Policies\n",
            "    path: /app/policies\n",
            "    expandable: true\n",
            "  - label: ''\n",
            "    path: /app/empty\n",
        ),
    );
    let result = env.run(&["check"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "'Policies' is expandable but has no children");
    assert_output_contains!(result, "entry with path '/app/empty' has an empty label");
    assert_line!(result, "Result: 2 issue(s)");

    // Step 5: the command line overrides the broken config entry
    env.write_project_file("fallback.toml", POLICIES_MENU_TOML);
    let result = env.run(&["--menu", "fallback.toml", "check"]);
    assert_success!(result);
    assert_output_contains!(result, "Menu OK: 5 entries (3 top-level)");
}
