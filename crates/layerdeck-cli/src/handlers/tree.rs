//! Tree command handler

use layerdeck::render_tree;

use super::load_source;
use crate::commands::TreeArgs;
use crate::error::CliResult;

/// Render the layer tree of an image as loaded
pub fn execute_tree(args: &TreeArgs) -> CliResult<String> {
    let loaded = load_source(&args.image, None)?;
    Ok(render_tree(loaded.ctx.tree()))
}
