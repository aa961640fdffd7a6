//! Expand command handler

use layerdeck::{preprocess, SlidesError};

use super::read_text;
use crate::commands::ExpandArgs;
use crate::error::CliResult;

/// Preprocess an animation file and return the result
pub fn execute_expand(args: &ExpandArgs) -> CliResult<String> {
    let source = read_text(&args.anim)?;
    let name = args.anim.display().to_string();
    let expanded = preprocess(&source).map_err(|e| match e {
        SlidesError::MalformedDsl { line, .. } => e.located(name.as_str(), line),
        other => other,
    })?;
    Ok(expanded)
}
