//! Error types for crmnav
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for crmnav operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for crmnav operations
#[derive(Error, Debug)]
pub enum NavError {
    /// Menu declaration violates one or more structural invariants
    #[error("invalid menu declaration in {source_name}: {}", IssueList(.issues))]
    InvalidMenu {
        source_name: String,
        issues: Vec<MenuIssue>,
    },

    /// Menu declaration could not be parsed
    #[error("invalid menu file {file}: {message}")]
    MenuParse { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config file {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Menu file not found
    #[error("menu file not found: {path}")]
    MenuNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NavError {
    /// Validation issues carried by this error, if any
    pub fn issues(&self) -> &[MenuIssue] {
        match self {
            NavError::InvalidMenu { issues, .. } => issues,
            _ => &[],
        }
    }
}

/// A single violated menu invariant.
///
/// Issues are collected during construction so a broken declaration is
/// reported once, in full, at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuIssue {
    /// The declaration has no top-level entries
    #[error("menu has no entries")]
    EmptyMenu,

    /// Two entries anywhere in the tree share a path
    #[error("path '{path}' is declared by both '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// Two siblings share a label
    #[error("label '{label}' appears more than once under {parent}")]
    DuplicateLabel { label: String, parent: String },

    /// Expandable entry without children
    #[error("'{label}' is expandable but has no children")]
    EmptyExpandable { label: String },

    /// Leaf entry that declares children
    #[error("'{label}' is not expandable but declares {count} children")]
    ChildrenOnLeaf { label: String, count: usize },

    /// Child entry that declares its own children
    #[error("'{label}' under '{parent}' nests children; only one level is supported")]
    NestingTooDeep { label: String, parent: String },

    /// Label is empty or whitespace
    #[error("entry with path '{path}' has an empty label")]
    EmptyLabel { path: String },

    /// Path is not a well-formed route
    #[error("'{label}' has invalid path '{path}': {reason}")]
    InvalidPath {
        label: String,
        path: String,
        reason: String,
    },
}

struct IssueList<'a>(&'a [MenuIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}
