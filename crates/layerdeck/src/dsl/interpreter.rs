//! Line-by-line interpretation of preprocessed animation text.
//!
//! Each non-blank line either opens a new animation block (`suffix: notes`)
//! or describes one slide. A slide line mutates the tree of the current
//! [`SourceContext`] and the resulting [`Snapshot`] is appended to the open
//! block:
//!
//! - `*` first clears every layer; on its own it is a blank slide
//! - without `+`/`-` tokens the line is absolute: exactly the listed layers
//!   (and their ancestors) are shown
//! - otherwise the line is relative to the previous slide: `+` shows the
//!   following layers, `-` hides them

use serde::Serialize;
use tracing::{debug, info};

use crate::layer::{LayerId, LayerTree, Snapshot};
use crate::result::{SlidesError, SlidesResult};

/// Separates a block suffix from its free-text notes
pub const HEADER_MARKER: char = ':';
/// Clears every layer when it is the first token of a line
pub const CLEAR_MARKER: &str = "*";
/// Switches following layers on in a relative line
pub const SHOW_OPERATOR: &str = "+";
/// Switches following layers off in a relative line
pub const HIDE_OPERATOR: &str = "-";

/// Everything tied to processing one image: its identifier and its tree.
#[derive(Debug, Clone)]
pub struct SourceContext {
    name: String,
    tree: LayerTree,
}

impl SourceContext {
    /// Create a context for the source `name` over its layer tree
    #[must_use]
    pub fn new(name: impl Into<String>, tree: LayerTree) -> Self {
        Self {
            name: name.into(),
            tree,
        }
    }

    /// Identifier reported in errors and logs
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layer tree
    #[must_use]
    pub const fn tree(&self) -> &LayerTree {
        &self.tree
    }

    /// The layer tree, mutably
    pub fn tree_mut(&mut self) -> &mut LayerTree {
        &mut self.tree
    }

    /// Give the tree back
    #[must_use]
    pub fn into_tree(self) -> LayerTree {
        self.tree
    }
}

/// A named, ordered list of slides; order is render order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationBlock {
    /// Suffix naming the block, empty for an unnamed block
    pub suffix: String,
    /// Captured slides
    pub slides: Vec<Snapshot>,
}

impl AnimationBlock {
    /// Create an empty block
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            slides: Vec::new(),
        }
    }

    /// Number of slides
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the block holds no slide
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// How a slide line was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// `*` alone: every layer hidden
    Clear,
    /// Exactly the listed layers shown
    Absolute,
    /// Changes applied on top of the previous slide
    Relative,
}

/// Direction of a relative change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Show,
    Hide,
}

impl Polarity {
    fn parse(token: &str) -> Option<Self> {
        match token {
            SHOW_OPERATOR => Some(Self::Show),
            HIDE_OPERATOR => Some(Self::Hide),
            _ => None,
        }
    }
}

/// Sequential state machine turning slide lines into animation blocks.
///
/// Blocks are only handed out by [`finish`](Self::finish); when a line fails
/// the caller drops the interpreter and nothing from that source is kept.
#[derive(Debug)]
pub struct Interpreter<'a> {
    ctx: &'a mut SourceContext,
    blocks: Vec<AnimationBlock>,
    current: AnimationBlock,
    named: bool,
}

impl<'a> Interpreter<'a> {
    /// Start interpreting against the tree of `ctx`.
    ///
    /// Slides before the first header go to an unnamed block, which is only
    /// kept if it receives at least one slide.
    pub fn new(ctx: &'a mut SourceContext) -> Self {
        Self {
            ctx,
            blocks: Vec::new(),
            current: AnimationBlock::new(""),
            named: false,
        }
    }

    /// Process one preprocessed line. `line_no` is 1-based.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> SlidesResult<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        if let Some((suffix, _notes)) = line.split_once(HEADER_MARKER) {
            self.flush();
            let suffix = suffix.trim();
            if self.blocks.iter().any(|b| b.suffix == suffix) {
                return Err(SlidesError::DuplicateBlock {
                    suffix: suffix.to_string(),
                }
                .located(self.ctx.name(), line_no));
            }
            self.current = AnimationBlock::new(suffix);
            self.named = true;
            return Ok(());
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mode = apply_slide(self.ctx.tree_mut(), &tokens)
            .map_err(|e| e.located(self.ctx.name(), line_no))?;

        let snapshot = self.ctx.tree().snapshot();
        debug!(
            source = self.ctx.name(),
            block = %self.current.suffix,
            slide = self.current.len() + 1,
            line = line_no,
            ?mode,
            visible = snapshot.visible_count(),
            "captured slide"
        );
        self.current.slides.push(snapshot);
        Ok(())
    }

    /// Close the open block and return all blocks in file order
    #[must_use]
    pub fn finish(mut self) -> Vec<AnimationBlock> {
        self.flush();
        self.blocks
    }

    fn flush(&mut self) {
        if !self.named && self.current.is_empty() {
            return;
        }
        let block = std::mem::replace(&mut self.current, AnimationBlock::new(""));
        info!(
            source = self.ctx.name(),
            block = %block.suffix,
            slides = block.len(),
            "animation block closed"
        );
        self.blocks.push(block);
        self.named = false;
    }
}

/// Interpret already preprocessed text against the tree of `ctx`.
pub fn interpret(ctx: &mut SourceContext, text: &str) -> SlidesResult<Vec<AnimationBlock>> {
    let mut interpreter = Interpreter::new(ctx);
    for (index, line) in text.split('\n').enumerate() {
        interpreter.feed_line(index + 1, line)?;
    }
    Ok(interpreter.finish())
}

/// Apply one slide line to the tree.
fn apply_slide(tree: &mut LayerTree, tokens: &[&str]) -> SlidesResult<LineMode> {
    let mut rest = tokens;
    if let Some((&CLEAR_MARKER, tail)) = rest.split_first() {
        tree.clear();
        if tail.is_empty() {
            return Ok(LineMode::Clear);
        }
        rest = tail;
    }

    if rest.iter().any(|token| Polarity::parse(token).is_some()) {
        apply_relative(tree, rest)?;
        Ok(LineMode::Relative)
    } else {
        apply_absolute(tree, rest)?;
        Ok(LineMode::Absolute)
    }
}

fn apply_absolute(tree: &mut LayerTree, paths: &[&str]) -> SlidesResult<()> {
    let ids = paths
        .iter()
        .map(|path| tree.resolve(path))
        .collect::<SlidesResult<Vec<LayerId>>>()?;

    tree.clear();
    for id in ids {
        tree.switch_on_id(id);
    }
    Ok(())
}

fn apply_relative(tree: &mut LayerTree, tokens: &[&str]) -> SlidesResult<()> {
    let Some((first, rest)) = tokens.split_first() else {
        return Ok(());
    };
    let mut polarity = Polarity::parse(first).ok_or_else(|| SlidesError::BadOperator {
        token: (*first).to_string(),
    })?;

    for token in rest {
        if let Some(next) = Polarity::parse(token) {
            polarity = next;
            continue;
        }
        let id = tree.resolve(token)?;
        match polarity {
            Polarity::Show => tree.switch_on_id(id),
            Polarity::Hide => tree.switch_off_id(id),
        }
    }
    Ok(())
}
