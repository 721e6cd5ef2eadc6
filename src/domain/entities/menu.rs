//! Menu entity
//!
//! Two shapes of the same menu live here:
//!
//! - [`MenuDeclaration`] / [`MenuEntry`]: the nested form as written in a menu
//!   file. Nothing is validated yet.
//! - [`Menu`]: the validated, immutable form. Nodes are stored in a flat arena;
//!   top-level entries occupy the first slots and each expandable entry owns a
//!   contiguous index range of children.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RoutePath;
use crate::error::MenuIssue;

/// Route of the distinguished home entry when the declaration doesn't name one
pub const DEFAULT_HOME: &str = "/dashboard";

/// A menu as declared in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuDeclaration {
    /// Route of the home entry, matched exactly rather than by prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    /// Top-level entries in display order
    #[serde(default)]
    pub entries: Vec<MenuEntry>,
}

/// One declared entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub path: String,

    /// Inferred from `children` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    /// A plain entry without a submenu
    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            expandable: None,
            children: Vec::new(),
        }
    }

    /// An expandable entry owning `children`
    pub fn group(
        label: impl Into<String>,
        path: impl Into<String>,
        children: Vec<MenuEntry>,
    ) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            expandable: Some(true),
            children,
        }
    }

    /// Whether this entry owns a submenu
    pub fn is_expandable(&self) -> bool {
        self.expandable.unwrap_or(!self.children.is_empty())
    }
}

/// A validated node in the menu arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    label: String,
    path: RoutePath,
    expandable: bool,
    parent: Option<usize>,
    children: Range<usize>,
}

impl MenuNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

/// A validated, immutable menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    nodes: Vec<MenuNode>,
    top_count: usize,
    home: RoutePath,
}

impl Menu {
    /// Validate a declaration and lay it out in the arena.
    ///
    /// Every violated invariant is collected; the menu is built only when
    /// there are none.
    pub fn from_declaration(declaration: &MenuDeclaration) -> Result<Self, Vec<MenuIssue>> {
        let mut issues = Vec::new();

        let home_raw = declaration.home.as_deref().unwrap_or(DEFAULT_HOME);
        let home = match RoutePath::parse(home_raw) {
            Ok(home) => Some(home),
            Err(e) => {
                issues.push(MenuIssue::InvalidPath {
                    label: "home".to_string(),
                    path: home_raw.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        };

        if declaration.entries.is_empty() {
            issues.push(MenuIssue::EmptyMenu);
        }

        let mut seen_paths: HashMap<RoutePath, &str> = HashMap::new();
        check_siblings(&declaration.entries, "the top level", &mut issues);
        for entry in &declaration.entries {
            check_entry(entry, &mut seen_paths, &mut issues);

            match (entry.is_expandable(), entry.children.len()) {
                (true, 0) => issues.push(MenuIssue::EmptyExpandable {
                    label: entry.label.clone(),
                }),
                (false, count) if count > 0 => issues.push(MenuIssue::ChildrenOnLeaf {
                    label: entry.label.clone(),
                    count,
                }),
                _ => {}
            }

            let parent = format!("'{}'", entry.label);
            check_siblings(&entry.children, &parent, &mut issues);
            for child in &entry.children {
                check_entry(child, &mut seen_paths, &mut issues);
                if child.is_expandable() || !child.children.is_empty() {
                    issues.push(MenuIssue::NestingTooDeep {
                        label: child.label.clone(),
                        parent: entry.label.clone(),
                    });
                }
            }
        }

        let home = match home {
            Some(home) if issues.is_empty() => home,
            _ => return Err(issues),
        };

        Ok(Self::layout(declaration, home))
    }

    fn layout(declaration: &MenuDeclaration, home: RoutePath) -> Self {
        let top_count = declaration.entries.len();
        let mut nodes: Vec<MenuNode> = declaration
            .entries
            .iter()
            .map(|entry| node_for(entry, None))
            .collect();

        for (index, entry) in declaration.entries.iter().enumerate() {
            let start = nodes.len();
            nodes.extend(entry.children.iter().map(|c| node_for(c, Some(index))));
            nodes[index].children = start..nodes.len();
        }

        Self {
            nodes,
            top_count,
            home,
        }
    }

    /// Top-level entries in declaration order
    pub fn top_level(&self) -> &[MenuNode] {
        &self.nodes[..self.top_count]
    }

    /// Children of `node` in declaration order (empty for leaves and children)
    pub fn children(&self, node: &MenuNode) -> &[MenuNode] {
        &self.nodes[node.children.clone()]
    }

    /// Parent of `node`, if it is a child entry
    pub fn parent(&self, node: &MenuNode) -> Option<&MenuNode> {
        node.parent.map(|index| &self.nodes[index])
    }

    /// Every node, top-level entries first
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Look up a top-level entry by label
    pub fn find_top_level(&self, label: &str) -> Option<&MenuNode> {
        self.top_level().iter().find(|node| node.label == label)
    }

    /// Route of the home entry
    pub fn home(&self) -> &RoutePath {
        &self.home
    }

    /// Whether `node` is the home entry
    pub fn is_home(&self, node: &MenuNode) -> bool {
        node.path == self.home
    }
}

fn node_for(entry: &MenuEntry, parent: Option<usize>) -> MenuNode {
    MenuNode {
        label: entry.label.clone(),
        // Validated by `check_entry` before layout
        path: RoutePath::parse(&entry.path).unwrap_or_else(|_| RoutePath::root()),
        expandable: entry.is_expandable(),
        parent,
        children: 0..0,
    }
}

fn check_entry<'a>(
    entry: &'a MenuEntry,
    seen_paths: &mut HashMap<RoutePath, &'a str>,
    issues: &mut Vec<MenuIssue>,
) {
    if entry.label.trim().is_empty() {
        issues.push(MenuIssue::EmptyLabel {
            path: entry.path.clone(),
        });
    }

    match RoutePath::parse(&entry.path) {
        Ok(path) => {
            if let Some(first) = seen_paths.get(&path) {
                issues.push(MenuIssue::DuplicatePath {
                    path: path.to_string(),
                    first: first.to_string(),
                    second: entry.label.clone(),
                });
            } else {
                seen_paths.insert(path, &entry.label);
            }
        }
        Err(e) => issues.push(MenuIssue::InvalidPath {
            label: entry.label.clone(),
            path: entry.path.clone(),
            reason: e.to_string(),
        }),
    }
}

fn check_siblings(entries: &[MenuEntry], parent: &str, issues: &mut Vec<MenuIssue>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.label.as_str()) && reported.insert(entry.label.as_str()) {
            issues.push(MenuIssue::DuplicateLabel {
                label: entry.label.clone(),
                parent: parent.to_string(),
            });
        }
    }
}
