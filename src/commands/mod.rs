//! Subcommand implementations for the `crmnav` binary.

mod active;
mod check;
mod render;
mod shell;

pub use active::cmd_active;
pub use check::cmd_check;
pub use render::cmd_render;
pub use shell::cmd_shell;

use std::path::PathBuf;

use crmnav::config::{Config, ConfigWarning};
use crmnav::presentation::output::{Icons, OutputFormat};

/// Resolved settings shared by every subcommand
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    /// Config file that was read, if any
    pub config_path: Option<PathBuf>,
    pub config_warnings: Vec<ConfigWarning>,
    pub json: bool,
}

impl CommandContext {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn unicode(&self) -> bool {
        !self.config.output.ascii
    }

    pub fn icons(&self) -> Icons {
        Icons::for_unicode(self.unicode())
    }
}

/// Print non-fatal warnings to stderr
pub(crate) fn report_warnings<'a>(warnings: impl IntoIterator<Item = &'a ConfigWarning>) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}
