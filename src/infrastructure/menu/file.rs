//! File-backed menu source
//!
//! Reads a declaration from TOML (`.toml`) or YAML (`.yaml`, `.yml`). Any
//! other extension is read as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{unknown_key_warnings, ConfigWarning};
use crate::domain::entities::MenuDeclaration;
use crate::domain::ports::MenuSource;
use crate::error::{NavError, NavResult};

use super::MENU_KEYS;

/// Declaration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Toml,
    Yaml,
}

impl MenuFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => MenuFormat::Yaml,
            _ => MenuFormat::Toml,
        }
    }
}

/// Menu declaration stored in a file
#[derive(Debug, Clone)]
pub struct FileMenuSource {
    path: PathBuf,
}

impl FileMenuSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> MenuFormat {
        MenuFormat::from_path(&self.path)
    }

    /// Load the declaration and collect warnings for unknown keys.
    pub fn load_with_warnings(&self) -> NavResult<(MenuDeclaration, Vec<ConfigWarning>)> {
        if !self.path.is_file() {
            return Err(NavError::MenuNotFound {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path)?;
        let mut unknown_paths: Vec<String> = Vec::new();

        let declaration: MenuDeclaration = match self.format() {
            MenuFormat::Toml => {
                let deserializer = toml::de::Deserializer::new(&content);
                serde_ignored::deserialize(deserializer, |path| {
                    unknown_paths.push(path.to_string());
                })
                .map_err(|e| self.parse_error(e))?
            }
            MenuFormat::Yaml => {
                let deserializer = serde_yaml_ng::Deserializer::from_str(&content);
                serde_ignored::deserialize(deserializer, |path| {
                    unknown_paths.push(path.to_string());
                })
                .map_err(|e| self.parse_error(e))?
            }
        };

        let warnings = unknown_key_warnings(unknown_paths, &self.path, &content, MENU_KEYS);
        tracing::debug!(
            path = %self.path.display(),
            format = ?self.format(),
            warnings = warnings.len(),
            "loaded menu file"
        );
        Ok((declaration, warnings))
    }

    fn parse_error(&self, e: impl std::fmt::Display) -> NavError {
        NavError::MenuParse {
            file: self.path.clone(),
            message: e.to_string(),
        }
    }
}

impl MenuSource for FileMenuSource {
    fn load(&self) -> NavResult<MenuDeclaration> {
        let (declaration, _warnings) = self.load_with_warnings()?;
        Ok(declaration)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
