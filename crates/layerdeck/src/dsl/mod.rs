//! Animation description language.
//!
//! # Example
//!
//! ```text
//! intro: first animation       # starts the block "intro"
//! title                        # only the title (and its ancestors)
//! + diagram/{boxes arrows}     # add both diagram parts
//! - title
//! *                            # blank slide
//! ```
//!
//! Text goes through [`preprocess`] (comments, brace factorization) and then
//! [`interpret`], which drives the layer tree of a [`SourceContext`].

pub mod interpreter;
pub mod preprocess;

pub use interpreter::{
    interpret, AnimationBlock, Interpreter, LineMode, SourceContext, CLEAR_MARKER,
    HEADER_MARKER, HIDE_OPERATOR, SHOW_OPERATOR,
};
pub use preprocess::{expand_braces, preprocess, strip_comments, COMMENT};

use crate::result::{SlidesError, SlidesResult};

/// Preprocess and interpret raw animation text in one go.
///
/// Preprocessing failures are reported against the source of `ctx`, like
/// interpretation failures.
pub fn parse(ctx: &mut SourceContext, source: &str) -> SlidesResult<Vec<AnimationBlock>> {
    let text = preprocess(source).map_err(|e| match e {
        SlidesError::MalformedDsl { line, .. } => e.located(ctx.name(), line),
        other => other,
    })?;
    interpret(ctx, &text)
}
