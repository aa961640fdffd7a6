//! Hands animation blocks to a render collaborator, in order.
//!
//! The sequencer does no rendering itself. It calls [`Renderer::render`]
//! once per block, in file order, and collects whatever the renderer
//! produces for each block.

use tracing::{info, warn};

use crate::dsl::{self, AnimationBlock, SourceContext};
use crate::layer::Snapshot;
use crate::result::SlidesResult;

/// Produces one artifact per animation block.
///
/// Implementations get the source context so they can restore each
/// snapshot onto the tree before exporting it.
pub trait Renderer {
    /// What rendering a block produces
    type Artifact;

    /// Render the slides of the block named `suffix`
    fn render(
        &mut self,
        ctx: &mut SourceContext,
        suffix: &str,
        slides: &[Snapshot],
    ) -> SlidesResult<Self::Artifact>;
}

/// Batches blocks to a [`Renderer`]
#[derive(Debug)]
pub struct Sequencer<R> {
    renderer: R,
}

impl<R: Renderer> Sequencer<R> {
    /// Create a sequencer around a renderer
    #[must_use]
    pub const fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Render every block in order, stopping at the first failure.
    pub fn run(
        &mut self,
        ctx: &mut SourceContext,
        blocks: &[AnimationBlock],
    ) -> SlidesResult<Vec<R::Artifact>> {
        let mut artifacts = Vec::with_capacity(blocks.len());
        for block in blocks {
            info!(
                source = ctx.name(),
                block = %block.suffix,
                slides = block.len(),
                "rendering block"
            );
            artifacts.push(self.renderer.render(ctx, &block.suffix, &block.slides)?);
        }
        Ok(artifacts)
    }

    /// The renderer
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Give the renderer back
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Animation used when an image has no animation text.
///
/// Starting from the tree as loaded, every top-level layer is hidden and
/// then revealed one at a time in discovery order, each reveal adding a
/// slide. Layers below the top level keep their loaded visibility.
pub fn reveal_in_order(ctx: &mut SourceContext) -> AnimationBlock {
    warn!(
        source = ctx.name(),
        "no animation text, revealing top-level layers in order"
    );
    let tree = ctx.tree_mut();
    let top_level = tree.top_level().to_vec();
    for id in &top_level {
        tree.switch_off_id(*id);
    }

    let mut block = AnimationBlock::new("");
    for id in top_level {
        tree.switch_on_id(id);
        block.slides.push(tree.snapshot());
    }
    block
}

/// Run the whole pipeline for one source.
///
/// With `source` present it is preprocessed and interpreted; without it the
/// [`reveal_in_order`] animation is used. Rendering only starts once every
/// block has been built, so a parse failure never reaches the renderer.
pub fn animate<R: Renderer>(
    ctx: &mut SourceContext,
    source: Option<&str>,
    renderer: R,
) -> SlidesResult<Vec<R::Artifact>> {
    let blocks = match source {
        Some(text) => dsl::parse(ctx, text)?,
        None => vec![reveal_in_order(ctx)],
    };
    Sequencer::new(renderer).run(ctx, &blocks)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::hierarchy::{LayerDocument, LayerSpec};
    use crate::result::SlidesError;

    /// Records (suffix, visible paths per slide) for every call
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<(String, Vec<Vec<String>>)>,
    }

    impl Renderer for &mut Recorder {
        type Artifact = usize;

        fn render(
            &mut self,
            ctx: &mut SourceContext,
            suffix: &str,
            slides: &[Snapshot],
        ) -> SlidesResult<usize> {
            let visible = slides
                .iter()
                .map(|s| s.visible_paths(ctx.tree()))
                .collect();
            self.calls.push((suffix.to_string(), visible));
            Ok(self.calls.len())
        }
    }

    fn context() -> SourceContext {
        let tree = LayerDocument::new(vec![
            LayerSpec::new("A").with_visible(true),
            LayerSpec::new("B")
                .with_visible(true)
                .with_child(LayerSpec::new("b").with_visible(true)),
            LayerSpec::new("C"),
        ])
        .build_tree()
        .unwrap();
        SourceContext::new("image.svg", tree)
    }

    #[test]
    fn test_blocks_rendered_in_order() {
        let mut ctx = context();
        let mut recorder = Recorder::default();
        let artifacts = animate(
            &mut ctx,
            Some("one:\nA\ntwo:\nC\n+ A\nthree:\n"),
            &mut recorder,
        )
        .unwrap();

        assert_eq!(artifacts, [1, 2, 3]);
        let suffixes: Vec<&str> = recorder.calls.iter().map(|c| c.0.as_str()).collect();
        assert_eq!(suffixes, ["one", "two", "three"]);
        assert_eq!(recorder.calls[1].1, [vec!["C"], vec!["A", "C"]]);
        assert!(recorder.calls[2].1.is_empty());
    }

    #[test]
    fn test_failed_source_renders_nothing() {
        let mut ctx = context();
        let mut recorder = Recorder::default();
        let err = animate(&mut ctx, Some("one:\nA\ntwo:\nZ\n"), &mut recorder).unwrap_err();
        assert!(matches!(err.root_cause(), SlidesError::UnknownLayer { .. }));
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_malformed_source_is_located() {
        let mut ctx = context();
        let mut recorder = Recorder::default();
        let err = animate(&mut ctx, Some("A\n\nB/{b"), &mut recorder).unwrap_err();
        assert!(matches!(
            &err,
            SlidesError::Located { file, line: 3, .. } if file == "image.svg"
        ));
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_fallback_reveals_top_level_cumulatively() {
        let mut ctx = context();
        let mut recorder = Recorder::default();
        animate(&mut ctx, None, &mut recorder).unwrap();

        let (suffix, slides) = &recorder.calls[0];
        assert_eq!(suffix, "");
        assert_eq!(
            slides,
            &[
                vec!["A", "B/b"],
                vec!["A", "B", "B/b"],
                vec!["A", "B", "B/b", "C"]
            ]
        );
    }

    #[test]
    fn test_fallback_on_empty_tree() {
        let mut ctx = SourceContext::new("empty", crate::layer::LayerTree::new());
        assert!(reveal_in_order(&mut ctx).is_empty());
    }
}
