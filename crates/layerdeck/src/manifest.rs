//! Slide manifests: a description of what each exported page shows.
//!
//! [`ManifestRenderer`] restores every snapshot of a block onto the tree
//! and records the visible layer paths, along with the file names an
//! exporter would write: one page file per slide and one merged document
//! per block.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dsl::SourceContext;
use crate::layer::Snapshot;
use crate::result::SlidesResult;
use crate::sequencer::Renderer;

/// Default extension of the merged document
pub const DEFAULT_EXTENSION: &str = "pdf";
/// Extension of the per-slide page files
pub const PART_EXTENSION: &str = "svg";

/// One exported page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideManifest {
    /// Page file name
    pub part: String,
    /// Paths of the visible layers, in tree order
    pub visible: Vec<String>,
}

/// One merged document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockManifest {
    /// Source the block comes from
    pub source: String,
    /// Block suffix, empty for an unnamed block
    pub suffix: String,
    /// Merged document file name
    pub output: String,
    /// Pages in order
    pub slides: Vec<SlideManifest>,
}

/// Strip the extension off the last component of a source name
#[must_use]
pub fn base_name(source: &str) -> String {
    Path::new(source)
        .with_extension("")
        .to_string_lossy()
        .into_owned()
}

/// `base`, then `-suffix` when the suffix is not empty
#[must_use]
pub fn suffixed(base: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        base.to_string()
    } else {
        format!("{base}-{suffix}")
    }
}

/// Name of the merged document for a block
#[must_use]
pub fn output_name(base: &str, suffix: &str, extension: &str) -> String {
    format!("{}.{extension}", suffixed(base, suffix))
}

/// Name of the page file for the slide at `index` (0-based)
#[must_use]
pub fn part_name(base: &str, suffix: &str, index: usize) -> String {
    format!(
        "{}-part-{:02}.{PART_EXTENSION}",
        suffixed(base, suffix),
        index + 1
    )
}

/// Renderer producing a [`BlockManifest`] per block
#[derive(Debug, Clone)]
pub struct ManifestRenderer {
    extension: String,
}

impl Default for ManifestRenderer {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ManifestRenderer {
    /// Create a renderer naming merged documents `.pdf`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the merged document extension
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The merged document extension
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Renderer for ManifestRenderer {
    type Artifact = BlockManifest;

    fn render(
        &mut self,
        ctx: &mut SourceContext,
        suffix: &str,
        slides: &[Snapshot],
    ) -> SlidesResult<BlockManifest> {
        let base = base_name(ctx.name());
        let mut pages = Vec::with_capacity(slides.len());

        for (index, snapshot) in slides.iter().enumerate() {
            ctx.tree_mut().restore(snapshot)?;
            let tree = ctx.tree();
            let visible = tree
                .nodes()
                .filter(|id| tree.is_visible(*id))
                .map(|id| tree.path_of(id))
                .collect();
            pages.push(SlideManifest {
                part: part_name(&base, suffix, index),
                visible,
            });
        }

        Ok(BlockManifest {
            source: ctx.name().to_string(),
            suffix: suffix.to_string(),
            output: output_name(&base, suffix, &self.extension),
            slides: pages,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::hierarchy::{LayerDocument, LayerSpec};
    use crate::sequencer::animate;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("uml.svg"), "uml");
        assert_eq!(base_name("talks/uml.svg"), "talks/uml");
        assert_eq!(base_name("plain"), "plain");
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name("uml", "", "pdf"), "uml.pdf");
        assert_eq!(output_name("uml", "intro", "pdf"), "uml-intro.pdf");
    }

    #[test]
    fn test_part_name() {
        assert_eq!(part_name("uml", "", 0), "uml-part-01.svg");
        assert_eq!(part_name("uml", "intro", 11), "uml-intro-part-12.svg");
    }

    #[test]
    fn test_manifest_for_each_block() {
        let tree = LayerDocument::new(vec![
            LayerSpec::new("A").with_visible(true),
            LayerSpec::new("B"),
        ])
        .build_tree()
        .unwrap();
        let mut ctx = SourceContext::new("deck.svg", tree);

        let manifests =
            animate(&mut ctx, Some("intro:\nA\n+ B\nend:\n*"), ManifestRenderer::new()).unwrap();

        assert_eq!(manifests.len(), 2);
        assert_eq!(manifests[0].output, "deck-intro.pdf");
        assert_eq!(manifests[0].slides[0].part, "deck-intro-part-01.svg");
        assert_eq!(manifests[0].slides[0].visible, ["A"]);
        assert_eq!(manifests[0].slides[1].visible, ["A", "B"]);
        assert_eq!(manifests[1].output, "deck-end.pdf");
        assert!(manifests[1].slides[0].visible.is_empty());
    }

    #[test]
    fn test_custom_extension() {
        let tree = LayerDocument::new(vec![LayerSpec::new("A")])
            .build_tree()
            .unwrap();
        let mut ctx = SourceContext::new("deck.svg", tree);
        let manifests =
            animate(&mut ctx, Some("A"), ManifestRenderer::new().with_extension("png")).unwrap();
        assert_eq!(manifests[0].output, "deck.png");
    }
}
