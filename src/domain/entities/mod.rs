//! Domain Entities
//!
//! - `Menu` - The validated navigation menu (and its declared form)
//! - `NavigationState` - Which top-level menus are expanded

mod menu;
mod navigation_state;

pub use menu::{Menu, MenuDeclaration, MenuEntry, MenuNode, DEFAULT_HOME};
pub use navigation_state::NavigationState;
