//! Built-in back-office menu, embedded at compile time.

use crate::domain::entities::MenuDeclaration;
use crate::domain::ports::MenuSource;
use crate::error::{NavError, NavResult};

const DEFAULT_MENU: &str = include_str!("../../../assets/default_menu.toml");

/// The menu shipped with crmnav
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMenuSource;

impl BuiltinMenuSource {
    pub fn new() -> Self {
        Self
    }

    /// Raw TOML of the built-in menu
    pub fn raw() -> &'static str {
        DEFAULT_MENU
    }
}

impl MenuSource for BuiltinMenuSource {
    fn load(&self) -> NavResult<MenuDeclaration> {
        toml::from_str(DEFAULT_MENU).map_err(|e| NavError::MenuParse {
            file: "<builtin>".into(),
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        "built-in menu".to_string()
    }
}
