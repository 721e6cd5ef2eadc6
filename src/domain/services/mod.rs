//! Domain Services
//!
//! Pure logic over domain entities. No I/O.

mod navigation_tree;

pub use navigation_tree::{Depth, NavigationTree, RenderNode, RenderNodes};
