//! Output Rendering
//!
//! Turns render nodes into text for a terminal or JSON for scripting.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::NavigationState;
use crate::domain::services::{Depth, RenderNode};
use crate::domain::value_objects::RoutePath;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
pub struct Icons {
    pub active: &'static str,
    pub inactive: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub warning: &'static str,
    pub separator: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            active: "●",
            inactive: "○",
            expanded: "▼",
            collapsed: "▶",
            check: "✓",
            cross: "✗",
            warning: "⚠",
            separator: "›",
        }
    }

    pub fn ascii() -> Self {
        Self {
            active: "(*)",
            inactive: "( )",
            expanded: "v",
            collapsed: ">",
            check: "[OK]",
            cross: "[FAIL]",
            warning: "[WARN]",
            separator: ">",
        }
    }

    pub fn for_unicode(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Everything a renderer needs to draw one frame of the sidebar
#[derive(Debug, Clone, Serialize)]
pub struct TreeView<'a> {
    pub current: Option<&'a RoutePath>,
    pub expanded: Vec<&'a str>,
    pub nodes: Vec<RenderNode<'a>>,
}

impl<'a> TreeView<'a> {
    pub fn new(
        nodes: impl IntoIterator<Item = RenderNode<'a>>,
        state: &'a NavigationState,
        current: Option<&'a RoutePath>,
    ) -> Self {
        Self {
            current,
            expanded: state.expanded_labels().collect(),
            nodes: nodes.into_iter().collect(),
        }
    }
}

/// Trait for rendering a navigation frame
pub trait TreeRenderer {
    fn render(&self, view: &TreeView<'_>) -> String;
}

/// Text renderer: one line per node, paths aligned in a column
pub struct TextRenderer {
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    fn body(&self, icons: &Icons, node: &RenderNode<'_>) -> String {
        match node.depth {
            Depth::Child => format!("    {}", node.label),
            Depth::Top if !node.expandable => format!("  {}", node.label),
            Depth::Top => {
                let arrow = if node.expanded {
                    icons.expanded
                } else {
                    icons.collapsed
                };
                format!("{} {}", arrow, node.label)
            }
        }
    }
}

impl TreeRenderer for TextRenderer {
    fn render(&self, view: &TreeView<'_>) -> String {
        let icons = Icons::for_unicode(self.unicode);
        let bodies: Vec<String> = view.nodes.iter().map(|n| self.body(&icons, n)).collect();
        let width = bodies.iter().map(|b| b.width()).max().unwrap_or(0);

        view.nodes
            .iter()
            .zip(&bodies)
            .map(|(node, body)| {
                let marker = if node.active {
                    icons.active
                } else {
                    icons.inactive
                };
                let pad = " ".repeat(width - body.width());
                format!("{} {}{}  {}", marker, body, pad, node.path)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// JSON renderer
pub struct JsonRenderer;

impl TreeRenderer for JsonRenderer {
    fn render(&self, view: &TreeView<'_>) -> String {
        serde_json::to_string_pretty(view).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn TreeRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Join labels into a breadcrumb trail
pub fn breadcrumb_line(labels: &[&str], icons: &Icons) -> String {
    labels.join(&format!(" {} ", icons.separator))
}
