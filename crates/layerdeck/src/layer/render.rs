//! Text rendering of a layer tree.
//!
//! ## Example Output
//!
//! ```text
//! /
//! ├── [x] background
//! │   ├── [x] sky
//! │   └── [ ] stars
//! └── [ ] title
//!
//! Total: 4 layers, 2 visible
//! ```

use std::fmt;

use super::node::LayerId;
use super::tree::LayerTree;

/// Render the tree with one line per layer and a summary line
#[must_use]
pub fn render_tree(tree: &LayerTree) -> String {
    let mut output = String::from("/\n");

    // (node, prefix of its line, last among its siblings)
    let mut pending: Vec<(LayerId, String, bool)> = Vec::new();
    push_children(&mut pending, tree.top_level(), "");

    while let Some((id, prefix, is_last)) = pending.pop() {
        let node = tree.node(id);
        let connector = if is_last { "└── " } else { "├── " };
        let marker = if node.is_visible() { "[x]" } else { "[ ]" };

        output.push_str(&prefix);
        output.push_str(connector);
        output.push_str(marker);
        output.push(' ');
        output.push_str(node.name().unwrap_or_default());
        output.push('\n');

        let child_prefix = if is_last { "    " } else { "│   " };
        push_children(&mut pending, node.children(), &format!("{prefix}{child_prefix}"));
    }

    let visible = tree.nodes().filter(|id| tree.is_visible(*id)).count();
    output.push('\n');
    output.push_str(&format!("Total: {} layers, {} visible\n", tree.len(), visible));
    output
}

/// Queue `children` so the first one is popped first
fn push_children(pending: &mut Vec<(LayerId, String, bool)>, children: &[LayerId], prefix: &str) {
    let last = children.len().saturating_sub(1);
    for (i, id) in children.iter().enumerate().rev() {
        pending.push((*id, prefix.to_string(), i == last));
    }
}

impl fmt::Display for LayerTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_tree(self))
    }
}
