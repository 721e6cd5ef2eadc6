//! `crmnav shell` - drive a navigation shell from stdin.
//!
//! Commands, one per line:
//!   go <path>        navigate to a route
//!   toggle <label>   expand or collapse a top-level menu
//!   show             print the current view
//!   active           print the most specific active entry
//!   help             list commands
//!   quit | exit      end the session

use std::io::{self, BufRead, Write};

use anyhow::Result;
use is_terminal::IsTerminal;

use crmnav::application::{load_tree, NavigationShell};
use crmnav::presentation::output::{TextRenderer, TreeRenderer, TreeView};

use super::{report_warnings, CommandContext};

const HELP: &str = "commands: go <path> | toggle <label> | show | active | help | quit";

pub fn cmd_shell(ctx: &CommandContext) -> Result<()> {
    let loaded = load_tree(&ctx.config)?;
    report_warnings(ctx.config_warnings.iter().chain(&loaded.warnings));

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut shell = NavigationShell::mount(loaded.tree);

    let options = SessionOptions {
        json: ctx.json,
        unicode: ctx.unicode(),
        prompt: interactive && !ctx.json,
    };
    run_session(&mut shell, stdin.lock(), io::stdout().lock(), &options)?;
    shell.unmount();
    Ok(())
}

struct SessionOptions {
    json: bool,
    unicode: bool,
    prompt: bool,
}

fn run_session<R: BufRead, W: Write>(
    shell: &mut NavigationShell,
    input: R,
    mut out: W,
    options: &SessionOptions,
) -> Result<()> {
    if options.prompt {
        writeln!(out, "{}", HELP)?;
        write!(out, "crmnav> ")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let (command, arg) = match line.trim().split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "go" => {
                shell.navigate(arg);
                print_view(shell, &mut out, options)?;
            }
            "toggle" => {
                shell.toggle(arg);
                print_view(shell, &mut out, options)?;
            }
            "show" => print_view(shell, &mut out, options)?,
            "active" => print_active(shell, &mut out, options)?,
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => break,
            other => {
                if options.json {
                    let event = serde_json::json!({
                        "event": "error",
                        "message": format!("unknown command '{}'", other),
                    });
                    writeln!(out, "{}", serde_json::to_string(&event)?)?;
                } else {
                    writeln!(out, "unknown command '{}'; {}", other, HELP)?;
                }
            }
        }

        if options.prompt {
            write!(out, "crmnav> ")?;
            out.flush()?;
        }
    }

    Ok(())
}

fn print_view<W: Write>(
    shell: &NavigationShell,
    out: &mut W,
    options: &SessionOptions,
) -> Result<()> {
    let view = TreeView::new(shell.view(), shell.state(), shell.current_path());
    if options.json {
        writeln!(out, "{}", serde_json::to_string(&view)?)?;
    } else {
        writeln!(
            out,
            "{}",
            TextRenderer {
                unicode: options.unicode
            }
            .render(&view)
        )?;
    }
    Ok(())
}

fn print_active<W: Write>(
    shell: &NavigationShell,
    out: &mut W,
    options: &SessionOptions,
) -> Result<()> {
    let active = shell.active_entry();
    if options.json {
        let event = serde_json::json!({
            "event": "active",
            "label": active.map(|node| node.label()),
            "path": active.map(|node| node.path()),
        });
        writeln!(out, "{}", serde_json::to_string(&event)?)?;
    } else {
        match active {
            Some(node) => writeln!(out, "{}  {}", node.label(), node.path())?,
            None => writeln!(out, "(none)")?,
        }
    }
    Ok(())
}
