//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --ascii, --verbose, --menu, --home) are inherited by
//! all subcommands. Running without a subcommand renders the menu at home.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// crmnav - navigation tree for the broker back-office shell
#[derive(Parser, Debug)]
#[command(name = "crmnav")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'crmnav' without arguments to render the menu at the home route.")]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Use ASCII markers instead of unicode glyphs
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Menu declaration file (TOML or YAML); defaults to the built-in menu
    #[arg(long, global = true, value_name = "PATH")]
    pub menu: Option<PathBuf>,

    /// Route of the home entry (matched exactly)
    #[arg(long, global = true, value_name = "ROUTE")]
    pub home: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the menu for a route
    Render {
        /// Current route, as reported by the router
        #[arg(short, long)]
        path: Option<String>,

        /// Toggle a top-level menu (repeatable; applied in order)
        #[arg(short, long = "expand", value_name = "LABEL")]
        expand: Vec<String>,
    },

    /// Show the most specific entry for a route and its breadcrumb trail
    Active {
        /// Current route, as reported by the router
        #[arg(short, long)]
        path: String,
    },

    /// Validate the menu declaration and configuration
    Check,

    /// Interactive session reading commands from stdin
    Shell,
}
