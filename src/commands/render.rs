use anyhow::Result;

use crmnav::application::load_tree;
use crmnav::domain::entities::NavigationState;
use crmnav::domain::value_objects::RoutePath;
use crmnav::presentation::output::{create_renderer, TreeView};

use super::{report_warnings, CommandContext};

pub fn cmd_render(ctx: &CommandContext, path: Option<String>, expand: &[String]) -> Result<()> {
    let loaded = load_tree(&ctx.config)?;
    report_warnings(ctx.config_warnings.iter().chain(&loaded.warnings));

    let tree = &loaded.tree;
    let path = path.unwrap_or_else(|| tree.menu().home().to_string());

    let state: NavigationState = expand.iter().map(String::as_str).collect();
    for label in state.expanded_labels() {
        if tree.menu().find_top_level(label).is_none() {
            tracing::info!(label, "expanded label matches no top-level entry");
        }
    }

    let current = RoutePath::from_location(&path);
    let view = TreeView::new(tree.render(&state, &path), &state, current.as_ref());
    println!("{}", create_renderer(ctx.format(), ctx.unicode()).render(&view));

    Ok(())
}
