use anyhow::Result;

use crmnav::application::load_tree;
use crmnav::domain::entities::MenuNode;
use crmnav::presentation::output::breadcrumb_line;

use super::{report_warnings, CommandContext};

pub fn cmd_active(ctx: &CommandContext, path: &str) -> Result<()> {
    let loaded = load_tree(&ctx.config)?;
    report_warnings(ctx.config_warnings.iter().chain(&loaded.warnings));

    let tree = &loaded.tree;
    let active = tree.resolve_active(path);
    let trail: Vec<&str> = tree
        .breadcrumbs(path)
        .into_iter()
        .map(MenuNode::label)
        .collect();

    if ctx.json {
        let output = serde_json::json!({
            "path": path,
            "active": active.map(|node| serde_json::json!({
                "label": node.label(),
                "path": node.path(),
                "top_level": node.is_top_level(),
            })),
            "trail": trail,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match active {
        Some(node) => {
            println!("Active: {}  {}", node.label(), node.path());
            println!("Trail:  {}", breadcrumb_line(&trail, &ctx.icons()));
        }
        None => println!("No entry is active for '{}'", path),
    }

    Ok(())
}
