use anyhow::Result;

use crmnav::application::load_tree;
use crmnav::config::ConfigWarning;
use crmnav::error::NavError;

use super::CommandContext;

pub fn cmd_check(ctx: &CommandContext) -> Result<()> {
    let icons = ctx.icons();
    let loaded = match load_tree(&ctx.config) {
        Ok(loaded) => loaded,
        Err(NavError::InvalidMenu {
            source_name,
            issues,
        }) => {
            if ctx.json {
                let output = serde_json::json!({
                    "event": "check",
                    "valid": false,
                    "source": source_name,
                    "warnings": warning_strings(&ctx.config_warnings),
                    "issues": issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string(&output)?);
            } else {
                print_warnings(&ctx.config_warnings, icons.warning);
                println!("{} Menu invalid: {}", icons.cross, source_name);
                for issue in &issues {
                    println!("  {} {}", icons.cross, issue);
                }
                println!();
                println!("Result: {} issue(s)", issues.len());
            }
            std::process::exit(1);
        }
        Err(other) => return Err(other.into()),
    };

    let menu = loaded.tree.menu();
    let warnings: Vec<ConfigWarning> = ctx
        .config_warnings
        .iter()
        .chain(&loaded.warnings)
        .cloned()
        .collect();

    if ctx.json {
        let output = serde_json::json!({
            "event": "check",
            "valid": true,
            "source": loaded.source,
            "config": ctx.config_path.as_ref().map(|p| p.display().to_string()),
            "home": menu.home(),
            "entries": menu.nodes().len(),
            "top_level": menu.top_level().len(),
            "warnings": warning_strings(&warnings),
            "issues": Vec::<String>::new(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if let Some(path) = &ctx.config_path {
        println!("Config: {}", path.display());
    }
    print_warnings(&warnings, icons.warning);
    println!(
        "{} Menu OK: {} entries ({} top-level) from {}",
        icons.check,
        menu.nodes().len(),
        menu.top_level().len(),
        loaded.source
    );
    println!("  Home: {}", menu.home());

    Ok(())
}

fn warning_strings(warnings: &[ConfigWarning]) -> Vec<String> {
    warnings.iter().map(ToString::to_string).collect()
}

fn print_warnings(warnings: &[ConfigWarning], icon: &str) {
    for warning in warnings {
        println!("{} {}", icon, warning);
    }
}
