//! crmnav - navigation tree for a broker back-office shell
//!
//! A menu declaration (sections, optional one-level children) is validated into
//! a [`NavigationTree`]. Given the router's current location the tree decides
//! which entries are active, which entry is the most specific match, and what
//! the sidebar should draw for a given [`NavigationState`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{load_tree, LoadedTree, NavigationShell};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Menu, MenuDeclaration, MenuEntry, MenuNode, NavigationState};
pub use domain::services::{NavigationTree, RenderNode};
pub use domain::value_objects::RoutePath;
pub use error::{MenuIssue, NavError, NavResult};
