//! Reusable test content.

/// Small menu: one leaf, one expandable with two children, one leaf
pub const POLICIES_MENU_TOML: &str = r#"
home = "/dashboard"

[[entries]]
label = "Dashboard"
path = "/dashboard"

[[entries]]
label = "Policies"
path = "/dashboard/policies"
children = [
  { label = "New", path = "/dashboard/policies/new" },
  { label = "Renewals", path = "/dashboard/policies/renewals" },
]

[[entries]]
label = "Claims"
path = "/dashboard/claims"
"#;

/// Same menu in YAML, rooted at `/app`
pub const POLICIES_MENU_YAML: &str = r#"
home: /app
entries:
  - label: Home
    path: /app
  - label: Policies
    path: /app/policies
    children:
      - label: New
        path: /app/policies/new
      - label: Renewals
        path: /app/policies/renewals
"#;

/// Declaration with several problems at once
pub const BROKEN_MENU_TOML: &str = r#"
[[entries]]
label = "Policies"
path = "/dashboard/policies"

[[entries]]
label = "Policies"
path = "/dashboard/policies"

[[entries]]
label = "Reports"
path = "/dashboard/reports"
expandable = true

[[entries]]
label = "Bad"
path = "dashboard/bad"
"#;
