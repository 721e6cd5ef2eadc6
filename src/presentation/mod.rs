//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `output` - text and JSON rendering of a navigation frame

pub mod cli;
pub mod output;
