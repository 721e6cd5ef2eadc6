//! Configuration module for crmnav
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CRMNAV_*)
//! 3. Project config (.crmnav/config.toml)
//! 4. User config (~/.config/crmnav/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only one config file is read: the project file when it exists, otherwise
//! the user file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Project config location, relative to the working directory
pub const PROJECT_CONFIG: &str = ".crmnav/config.toml";

/// Menu configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MenuConfig {
    /// Menu declaration file; the built-in menu is used when unset
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Overrides the declaration's home route
    #[serde(default)]
    pub home: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Use ASCII markers instead of unicode glyphs
    #[serde(default)]
    pub ascii: bool,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name, falling back to `Normal`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Log filter directive for this verbosity
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A config together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

const CONFIG_KEYS: &[&str] = &["menu", "file", "home", "output", "verbosity", "ascii"];

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NavResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    ///
    /// A relative `menu.file` is resolved against the config file's directory.
    pub fn load_with_warnings(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let mut config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| NavError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let (Some(file), Some(dir)) = (&config.menu.file, path.parent()) {
            if file.is_relative() {
                config.menu.file = Some(dir.join(file));
            }
        }

        let warnings = unknown_key_warnings(unknown_paths, path, &content, CONFIG_KEYS);
        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults.
    ///
    /// A config file that exists but fails to parse is an error.
    pub fn discover(project_root: &Path) -> NavResult<LoadedConfig> {
        let candidates = [
            Some(project_root.join(PROJECT_CONFIG)),
            user_config_dir().map(|dir| dir.join("crmnav/config.toml")),
        ];

        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading config");
                let (config, warnings) = Self::load_with_warnings(&path)?;
                return Ok(LoadedConfig {
                    config,
                    path: Some(path),
                    warnings,
                });
            }
        }

        Ok(LoadedConfig::default())
    }

    /// Apply environment variable overrides (CRMNAV_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // CRMNAV_MENU
        if let Some(file) = lookup("CRMNAV_MENU").filter(|v| !v.is_empty()) {
            self.menu.file = Some(PathBuf::from(file));
        }

        // CRMNAV_HOME
        if let Some(home) = lookup("CRMNAV_HOME").filter(|v| !v.is_empty()) {
            self.menu.home = Some(home);
        }

        // CRMNAV_VERBOSITY
        if let Some(verbosity) = lookup("CRMNAV_VERBOSITY") {
            self.output.verbosity = Verbosity::from_name(&verbosity);
        }

        // CRMNAV_ASCII
        if let Some(val) = lookup("CRMNAV_ASCII") {
            self.output.ascii = val.to_lowercase() != "false" && val != "0";
        }

        self
    }
}

/// User config directory; `XDG_CONFIG_HOME` wins over the platform default
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Turn `serde_ignored` paths into warnings with line numbers and suggestions.
pub(crate) fn unknown_key_warnings(
    unknown_paths: Vec<String>,
    file: &Path,
    content: &str,
    candidates: &[&str],
) -> Vec<ConfigWarning> {
    unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .find(|segment| segment.parse::<usize>().is_err())
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key, candidates),
                file: file.to_path_buf(),
                key,
            }
        })
        .collect()
}

/// Line (1-based) where `key` is declared, skipping mentions inside values.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| declares_key(line, key))
        .map(|i| i + 1)
}

/// True for `key = ..` / `key: ..` (also inside inline tables and YAML lists)
/// and for a `[table]` header ending in `key`.
fn declares_key(line: &str, key: &str) -> bool {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return false;
    }
    if let Some(header) = trimmed.strip_prefix('[') {
        let name = header.trim_start_matches('[').split(']').next().unwrap_or("");
        if name.trim().rsplit('.').next() == Some(key) {
            return true;
        }
    }

    line.match_indices(key).any(|(start, _)| {
        let before = line[..start].trim_end_matches(['"', '\'']).chars().next_back();
        let after = line[start + key.len()..]
            .trim_start_matches(['"', '\''])
            .trim_start();
        matches!(before, None | Some(' ' | '\t' | '{' | ',' | '-'))
            && (after.starts_with('=') || after.starts_with(':'))
    })
}

fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
