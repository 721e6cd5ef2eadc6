//! Navigation tree service
//!
//! Answers three questions for the shell, all as pure functions of the menu,
//! the current route and the expansion state:
//!
//! 1. Is a given entry active for the current route?
//! 2. Which single entry is the most specific match?
//! 3. What should be drawn right now? (see [`NavigationTree::render`])
//!
//! Activity rules: the home entry is active only on an exact match. Every other
//! entry is active on an exact match or when the current route lies beneath it
//! on a segment boundary.

use std::iter::FusedIterator;

use serde::Serialize;

use crate::domain::entities::{Menu, MenuDeclaration, MenuNode, NavigationState};
use crate::domain::value_objects::RoutePath;
use crate::error::{NavError, NavResult};

/// Nesting level of a rendered node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Top,
    Child,
}

/// One line of the rendered navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode<'a> {
    pub label: &'a str,
    pub path: &'a RoutePath,
    pub depth: Depth,
    pub active: bool,
    pub expandable: bool,
    /// Only ever true for expandable top-level entries
    pub expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<&'a str>,
}

/// Navigation over a validated menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTree {
    menu: Menu,
}

impl NavigationTree {
    pub fn new(menu: Menu) -> Self {
        Self { menu }
    }

    /// Validate `declaration` and build a tree from it.
    ///
    /// `source_name` identifies the declaration in the error report.
    pub fn from_declaration(declaration: &MenuDeclaration, source_name: &str) -> NavResult<Self> {
        let menu = Menu::from_declaration(declaration).map_err(|issues| NavError::InvalidMenu {
            source_name: source_name.to_string(),
            issues,
        })?;
        tracing::debug!(
            source = source_name,
            entries = menu.nodes().len(),
            home = %menu.home(),
            "menu validated"
        );
        Ok(Self::new(menu))
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Whether an entry declared at `entry_path` is active for `current_path`.
    ///
    /// An empty or unusable `current_path` activates nothing.
    pub fn is_active(&self, entry_path: &RoutePath, current_path: &str) -> bool {
        RoutePath::from_location(current_path)
            .is_some_and(|current| self.matches(entry_path, &current))
    }

    /// Whether `node` is active for `current_path`
    pub fn is_node_active(&self, node: &MenuNode, current_path: &str) -> bool {
        self.is_active(node.path(), current_path)
    }

    fn matches(&self, entry_path: &RoutePath, current: &RoutePath) -> bool {
        if entry_path == self.menu.home() {
            current == entry_path
        } else {
            current.is_within(entry_path)
        }
    }

    /// The single most specific entry active for `current_path`.
    ///
    /// When several entries match (a section and one of its pages), the one
    /// with the longest route wins.
    pub fn resolve_active(&self, current_path: &str) -> Option<&MenuNode> {
        let current = RoutePath::from_location(current_path)?;
        let resolved = self
            .menu
            .nodes()
            .iter()
            .filter(|node| self.matches(node.path(), &current))
            .max_by_key(|node| node.path().depth());
        tracing::debug!(
            current = %current,
            resolved = ?resolved.map(|n| n.label()),
            "resolved active entry"
        );
        resolved
    }

    /// Every active entry in tree order (a section, then its active page).
    pub fn breadcrumbs(&self, current_path: &str) -> Vec<&MenuNode> {
        let Some(current) = RoutePath::from_location(current_path) else {
            return Vec::new();
        };

        let mut trail = Vec::new();
        for top in self.menu.top_level() {
            if self.matches(top.path(), &current) {
                trail.push(top);
            }
            trail.extend(
                self.menu
                    .children(top)
                    .iter()
                    .filter(|child| self.matches(child.path(), &current)),
            );
        }
        trail
    }

    /// Flip expansion of `label`. Never looks at the current route and never
    /// collapses other menus.
    #[must_use]
    pub fn toggle_expansion(&self, state: &NavigationState, label: &str) -> NavigationState {
        state.toggle_expansion(label)
    }

    pub fn is_expanded(&self, state: &NavigationState, label: &str) -> bool {
        state.is_expanded(label)
    }

    /// Project the menu into render nodes.
    ///
    /// Top-level entries come out in declaration order; an expandable entry's
    /// children follow it only while it is expanded. The sequence is lazy and
    /// holds no state beyond its inputs, so calling this again with the same
    /// arguments yields the same nodes.
    pub fn render<'a>(&'a self, state: &'a NavigationState, current_path: &str) -> RenderNodes<'a> {
        RenderNodes {
            tree: self,
            state,
            current: RoutePath::from_location(current_path),
            next_top: 0,
            parent: None,
            pending: &[],
        }
    }

    fn node<'a>(
        &self,
        node: &'a MenuNode,
        current: Option<&RoutePath>,
        expanded: bool,
        parent: Option<&'a MenuNode>,
    ) -> RenderNode<'a> {
        RenderNode {
            label: node.label(),
            path: node.path(),
            depth: if parent.is_some() {
                Depth::Child
            } else {
                Depth::Top
            },
            active: current.is_some_and(|current| self.matches(node.path(), current)),
            expandable: node.is_expandable(),
            expanded,
            parent: parent.map(MenuNode::label),
        }
    }
}

/// Lazy sequence returned by [`NavigationTree::render`]
#[derive(Debug, Clone)]
pub struct RenderNodes<'a> {
    tree: &'a NavigationTree,
    state: &'a NavigationState,
    current: Option<RoutePath>,
    next_top: usize,
    parent: Option<&'a MenuNode>,
    pending: &'a [MenuNode],
}

impl<'a> Iterator for RenderNodes<'a> {
    type Item = RenderNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let pending = self.pending;
        if let Some((child, rest)) = pending.split_first() {
            self.pending = rest;
            return Some(tree.node(child, self.current.as_ref(), false, self.parent));
        }

        let menu = &tree.menu;
        let top = menu.top_level().get(self.next_top)?;
        self.next_top += 1;

        let expanded = top.is_expandable() && self.state.is_expanded(top.label());
        if expanded {
            self.parent = Some(top);
            self.pending = menu.children(top);
        }
        Some(tree.node(top, self.current.as_ref(), expanded, None))
    }
}

impl FusedIterator for RenderNodes<'_> {}
