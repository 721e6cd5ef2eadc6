//! Navigation state - which top-level menus are expanded.
//!
//! The state is a plain value. Toggling returns a new state and leaves the
//! old one untouched, so a shell simply replaces its copy on every click.

use std::collections::BTreeSet;

use serde::Serialize;

/// Set of expanded top-level labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    expanded: BTreeSet<String>,
}

impl NavigationState {
    /// Empty state, as at shell mount
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `label`.
    ///
    /// Labels are not validated: an unknown label is added like any other and
    /// simply never matches an entry.
    #[must_use]
    pub fn toggle_expansion(&self, label: &str) -> Self {
        let mut expanded = self.expanded.clone();
        if !expanded.remove(label) {
            expanded.insert(label.to_string());
        }
        tracing::debug!(label, expanded = expanded.contains(label), "toggled menu");
        Self { expanded }
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded.contains(label)
    }

    /// Expanded labels in sorted order
    pub fn expanded_labels(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for NavigationState {
    /// Apply toggles in order, starting from an empty state
    fn from_iter<I: IntoIterator<Item = &'a str>>(labels: I) -> Self {
        labels
            .into_iter()
            .fold(Self::new(), |state, label| state.toggle_expansion(label))
    }
}
