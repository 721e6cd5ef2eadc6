//! Common test utilities for crmnav CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_output_contains!`, `assert_line!`
//! - Fixtures: Reusable menu and config content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
