//! Check command handler: interpret without rendering

use layerdeck::{parse, reveal_in_order};
use serde::Serialize;

use super::load_source;
use crate::commands::CheckArgs;
use crate::error::CliResult;

/// Blocks and slide counts an animation would produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Source name
    pub source: String,
    /// `(suffix, slides)` per block, in file order
    pub blocks: Vec<(String, usize)>,
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slides: usize = self.blocks.iter().map(|(_, n)| n).sum();
        write!(
            f,
            "{}: {} blocks, {} slides",
            self.source,
            self.blocks.len(),
            slides
        )
    }
}

/// Interpret an image's animation and report its shape
pub fn execute_check(args: &CheckArgs) -> CliResult<CheckReport> {
    let mut loaded = load_source(&args.image, args.anim.as_deref())?;
    let blocks = match loaded.animation.as_deref() {
        Some(text) => parse(&mut loaded.ctx, text).map_err(|e| loaded.in_animation(e))?,
        None => vec![reveal_in_order(&mut loaded.ctx)],
    };
    Ok(CheckReport {
        source: loaded.ctx.name().to_string(),
        blocks: blocks.into_iter().map(|b| (b.suffix, b.slides.len())).collect(),
    })
}
