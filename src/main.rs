//! crmnav CLI - navigation tree for the broker back-office shell
//!
//! Usage: crmnav [OPTIONS] [COMMAND]
//!
//! Commands:
//!   render  Render the menu for a route
//!   active  Show the most specific entry for a route
//!   check   Validate the menu declaration and configuration
//!   shell   Interactive session reading commands from stdin

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crmnav::config::{Config, LoadedConfig};
use crmnav::presentation::cli::{Cli, Commands};

mod commands;

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let LoadedConfig {
        config,
        path,
        warnings,
    } = Config::discover(&cwd)?;
    let config = apply_cli_overrides(config.with_env_overrides(), &cli);

    init_tracing(&config, cli.verbose);

    let ctx = CommandContext {
        config,
        config_path: path,
        config_warnings: warnings,
        json: cli.json,
    };

    match cli.command {
        None => commands::cmd_render(&ctx, None, &[]),
        Some(Commands::Render { path, expand }) => commands::cmd_render(&ctx, path, &expand),
        Some(Commands::Active { path }) => commands::cmd_active(&ctx, &path),
        Some(Commands::Check) => commands::cmd_check(&ctx),
        Some(Commands::Shell) => commands::cmd_shell(&ctx),
    }
}

/// CLI flags sit on top of files and environment
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(menu) = &cli.menu {
        config.menu.file = Some(menu.clone());
    }
    if let Some(home) = &cli.home {
        config.menu.home = Some(home.clone());
    }
    if cli.ascii {
        config.output.ascii = true;
    }
    config
}

fn init_tracing(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.output.verbosity.log_filter(),
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
