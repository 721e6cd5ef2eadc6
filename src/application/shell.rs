//! Navigation Shell
//!
//! One mounted application shell: the tree, the expansion state and the last
//! route reported by the router. The state starts empty at mount and is
//! dropped at unmount; nothing is persisted.

use crate::domain::entities::{MenuNode, NavigationState};
use crate::domain::services::{NavigationTree, RenderNodes};
use crate::domain::value_objects::RoutePath;

/// A mounted shell session
#[derive(Debug, Clone)]
pub struct NavigationShell {
    tree: NavigationTree,
    state: NavigationState,
    current: Option<RoutePath>,
}

impl NavigationShell {
    /// Mount a shell with nothing expanded and no current route
    pub fn mount(tree: NavigationTree) -> Self {
        Self {
            tree,
            state: NavigationState::new(),
            current: None,
        }
    }

    /// Record a navigation event. Expansion is left alone.
    pub fn navigate(&mut self, location: &str) {
        self.current = RoutePath::from_location(location);
        tracing::debug!(
            location,
            current = ?self.current.as_ref().map(RoutePath::as_str),
            "navigated"
        );
    }

    /// Handle a click on a menu header
    pub fn toggle(&mut self, label: &str) {
        self.state = self.tree.toggle_expansion(&self.state, label);
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.tree.is_expanded(&self.state, label)
    }

    pub fn current_path(&self) -> Option<&RoutePath> {
        self.current.as_ref()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    /// What the sidebar should draw right now
    pub fn view(&self) -> RenderNodes<'_> {
        self.tree.render(&self.state, self.current_str())
    }

    /// The most specific entry for the current route
    pub fn active_entry(&self) -> Option<&MenuNode> {
        self.tree.resolve_active(self.current_str())
    }

    /// Tear the shell down, handing back the tree
    pub fn unmount(self) -> NavigationTree {
        tracing::debug!(
            expanded = self.state.expanded_labels().count(),
            "shell unmounted"
        );
        self.tree
    }

    fn current_str(&self) -> &str {
        self.current.as_ref().map_or("", RoutePath::as_str)
    }
}
