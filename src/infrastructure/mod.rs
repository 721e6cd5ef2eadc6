//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `menu/` - Menu sources (built-in, TOML/YAML files)

pub mod menu;

// Re-export for convenience
pub use menu::{BuiltinMenuSource, FileMenuSource, MenuFormat};
