//! Application Layer
//!
//! Use cases that orchestrate the flow between infrastructure and domain.
//!
//! ## Use Cases
//!
//! - `load_tree` - Resolve the configured menu source and validate it
//! - `NavigationShell` - A mounted shell session (navigate, toggle, view)

pub mod load_menu;
pub mod shell;

pub use load_menu::{load_tree, LoadedTree};
pub use shell::NavigationShell;
