//! Menu sources
//!
//! Concrete `MenuSource` implementations:
//! - `BuiltinMenuSource` - the back-office menu compiled into the binary
//! - `FileMenuSource` - a TOML or YAML declaration on disk

mod builtin;
mod file;

pub use builtin::BuiltinMenuSource;
pub use file::{FileMenuSource, MenuFormat};

/// Keys a menu declaration may contain, for unknown-key suggestions
pub(crate) const MENU_KEYS: &[&str] = &[
    "home",
    "entries",
    "label",
    "path",
    "expandable",
    "children",
];
