//! Command handlers - extracted from main.rs for testability
//!
//! Handlers return what they produce; printing is left to `main`.

pub mod build;
pub mod check;
pub mod expand;
pub mod tree;

use std::path::{Path, PathBuf};

use layerdeck::{LayerDocument, SlidesError, SourceContext};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

pub use build::{execute_build, format_build_summary, manifest_file_name, BuildSummary};
pub use check::{execute_check, CheckReport};
pub use expand::execute_expand;
pub use tree::execute_tree;

/// Extension of animation files sitting next to their image
pub const ANIM_EXTENSION: &str = "anim";

/// An image loaded into a context, plus its animation text if any
#[derive(Debug)]
pub struct LoadedSource {
    /// Context named after the image file
    pub ctx: SourceContext,
    /// Animation text, `None` when the image has none
    pub animation: Option<String>,
    /// Where the animation text came from
    pub anim_path: Option<PathBuf>,
}

impl LoadedSource {
    /// Point a located animation error at the animation file.
    ///
    /// The context is named after the image, so interpreter errors carry the
    /// image name until they are moved here.
    #[must_use]
    pub fn in_animation(&self, err: SlidesError) -> CliError {
        match &self.anim_path {
            Some(path) => err.relocated(path.display().to_string()).into(),
            None => err.into(),
        }
    }
}

/// Default animation path: the image path with an `.anim` extension
#[must_use]
pub fn default_anim_path(image: &Path) -> PathBuf {
    image.with_extension(ANIM_EXTENSION)
}

/// Name under which an image's context is known
#[must_use]
pub fn source_name(image: &Path) -> String {
    image
        .file_name()
        .map_or_else(|| image.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Read a text file, mapping failures to [`CliError::Read`]
pub fn read_text(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Load an image hierarchy and locate its animation.
///
/// An explicit `anim` path must exist. Without one, a sibling `.anim` file
/// is used when present; otherwise the animation is `None`.
pub fn load_source(image: &Path, anim: Option<&Path>) -> CliResult<LoadedSource> {
    if !image.exists() {
        return Err(CliError::invalid_argument(format!(
            "image not found: {}",
            image.display()
        )));
    }
    let document = LayerDocument::load(image)?;
    let tree = document.build_tree()?;
    info!(image = %image.display(), layers = tree.len(), "loaded layer tree");

    let anim_path = match anim {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = default_anim_path(image);
            candidate.exists().then_some(candidate)
        }
    };
    let animation = anim_path.as_deref().map(read_text).transpose()?;
    debug!(anim = ?anim_path, "animation source");

    Ok(LoadedSource {
        ctx: SourceContext::new(source_name(image), tree),
        animation,
        anim_path,
    })
}
