//! Load Menu Use Case
//!
//! Picks the menu source named by the configuration, applies the home
//! override and validates the result into a `NavigationTree`.

use crate::config::{Config, ConfigWarning};
use crate::domain::ports::MenuSource;
use crate::domain::services::NavigationTree;
use crate::error::NavResult;
use crate::infrastructure::{BuiltinMenuSource, FileMenuSource};

/// A validated tree plus what was learned while loading it
#[derive(Debug, Clone)]
pub struct LoadedTree {
    pub tree: NavigationTree,
    /// Where the declaration came from
    pub source: String,
    /// Unknown keys found in the menu file
    pub warnings: Vec<ConfigWarning>,
}

/// Load and validate the menu described by `config`.
///
/// Fails on unreadable files, parse errors and any violated menu invariant.
pub fn load_tree(config: &Config) -> NavResult<LoadedTree> {
    let (mut declaration, source, warnings) = match &config.menu.file {
        Some(path) => {
            let file = FileMenuSource::new(path);
            let (declaration, warnings) = file.load_with_warnings()?;
            (declaration, file.describe(), warnings)
        }
        None => {
            let builtin = BuiltinMenuSource::new();
            (builtin.load()?, builtin.describe(), Vec::new())
        }
    };

    if let Some(home) = &config.menu.home {
        declaration.home = Some(home.clone());
    }

    for warning in &warnings {
        tracing::debug!(%warning, "menu warning");
    }

    let tree = NavigationTree::from_declaration(&declaration, &source)?;
    Ok(LoadedTree {
        tree,
        source,
        warnings,
    })
}
