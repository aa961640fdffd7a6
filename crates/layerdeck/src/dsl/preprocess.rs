//! DSL preprocessing: comment stripping and brace factorization.
//!
//! Both passes keep every newline of the input, so line numbers in the
//! preprocessed text match the source file.

use regex::{Captures, Regex};

use crate::result::{SlidesError, SlidesResult};

use super::interpreter::{HIDE_OPERATOR, SHOW_OPERATOR};

/// Comment marker; `\#` stands for a literal `#`
pub const COMMENT: char = '#';

/// A prefix ending in '/' followed by a brace group holding no braces.
/// The prefix is the whole run of non-blank, non-brace characters.
const BRACE_GROUP: &str = r"([^\s{}]+/)\{([^{}]+)\}";
/// One whitespace-separated token inside a group
const GROUP_TOKEN: &str = r"\S+";

/// Run both preprocessing passes.
pub fn preprocess(source: &str) -> SlidesResult<String> {
    expand_braces(&strip_comments(source))
}

/// Remove everything from an unescaped `#` to the end of its line, along
/// with the blanks right before it.
#[must_use]
pub fn strip_comments(source: &str) -> String {
    source
        .split('\n')
        .map(strip_line_comment)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_line_comment(line: &str) -> String {
    let mut kept = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&COMMENT) => {
                kept.push(COMMENT);
                chars.next();
            }
            COMMENT => {
                let end = kept.trim_end_matches([' ', '\t']).len();
                kept.truncate(end);
                break;
            }
            _ => kept.push(c),
        }
    }

    kept
}

/// Distribute every `prefix/{a b}` group into `prefix/a prefix/b`.
///
/// Groups are rewritten innermost first until none remain. Operators and
/// newlines inside a group are kept in place, so a group may span several
/// slide lines. A brace left over once no group matches is reported as
/// [`SlidesError::MalformedDsl`].
pub fn expand_braces(text: &str) -> SlidesResult<String> {
    let group = Regex::new(BRACE_GROUP)?;
    let token = Regex::new(GROUP_TOKEN)?;
    let mut content = text.to_string();

    while let Some(caps) = group.captures(&content) {
        let (Some(whole), Some(head), Some(inside)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            break;
        };
        let is_path = |t: &str| t != SHOW_OPERATOR && t != HIDE_OPERATOR;
        if !inside.as_str().split_whitespace().any(is_path) {
            let line = content[..whole.start()].matches('\n').count() + 1;
            return Err(SlidesError::malformed(line, "brace group holds no path"));
        }

        let head = head.as_str();
        let range = whole.range();
        let distributed = token
            .replace_all(inside.as_str(), |t: &Captures<'_>| {
                if is_path(&t[0]) {
                    format!("{head}{}", &t[0])
                } else {
                    t[0].to_string()
                }
            })
            .into_owned();
        content.replace_range(range, &distributed);
    }

    if let Some(pos) = content.find(['{', '}']) {
        let line = content[..pos].matches('\n').count() + 1;
        let found = &content[pos..=pos];
        let message = if found == "{" {
            "'{' must follow a path ending in '/' and enclose at least one path"
        } else {
            "'}' has no matching '{'"
        };
        return Err(SlidesError::malformed(line, message));
    }

    Ok(content)
}
