//! Build command handler: animate an image and write its manifests

use std::path::{Path, PathBuf};

use layerdeck::manifest::{base_name, suffixed};
use layerdeck::{animate, BlockManifest, ManifestRenderer};
use serde::Serialize;
use tracing::info;

use super::load_source;
use crate::commands::{BuildArgs, OutputFormat};
use crate::error::{CliError, CliResult};

/// What a build wrote
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    /// Image the build started from
    pub image: String,
    /// Animation file, absent when the fallback animation ran
    pub animation: Option<String>,
    /// Manifest files written, in block order
    pub written: Vec<String>,
    /// The manifests themselves
    pub blocks: Vec<BlockManifest>,
}

impl BuildSummary {
    /// Total pages across all blocks
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.blocks.iter().map(|b| b.slides.len()).sum()
    }
}

/// Manifest file name for a block of `image`
#[must_use]
pub fn manifest_file_name(image: &Path, suffix: &str) -> String {
    let stem = image
        .file_name()
        .map_or_else(String::new, |n| base_name(&n.to_string_lossy()));
    format!("{}.json", suffixed(&stem, suffix))
}

/// Run the pipeline for one image and write a manifest per block
pub fn execute_build(args: &BuildArgs) -> CliResult<BuildSummary> {
    let mut loaded = load_source(&args.image, args.anim.as_deref())?;
    let renderer = ManifestRenderer::new().with_extension(args.extension.as_str());
    let blocks = animate(&mut loaded.ctx, loaded.animation.as_deref(), renderer)
        .map_err(|e| loaded.in_animation(e))?;

    std::fs::create_dir_all(&args.output).map_err(|source| CliError::Write {
        path: args.output.display().to_string(),
        source,
    })?;

    let mut written = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let path: PathBuf = args
            .output
            .join(manifest_file_name(&args.image, &block.suffix));
        let json = serde_json::to_string_pretty(block)?;
        std::fs::write(&path, json).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        })?;
        info!(manifest = %path.display(), slides = block.slides.len(), "wrote manifest");
        written.push(path.display().to_string());
    }

    Ok(BuildSummary {
        image: args.image.display().to_string(),
        animation: loaded.anim_path.map(|p| p.display().to_string()),
        written,
        blocks,
    })
}

/// Render a summary in the requested format
pub fn format_build_summary(summary: &BuildSummary, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for (block, path) in summary.blocks.iter().zip(&summary.written) {
                let name = if block.suffix.is_empty() {
                    "(unnamed)"
                } else {
                    block.suffix.as_str()
                };
                out.push_str(&format!(
                    "{name}: {} slides -> {} ({path})\n",
                    block.slides.len(),
                    block.output
                ));
            }
            out.push_str(&format!(
                "Built {} blocks, {} slides from {}\n",
                summary.blocks.len(),
                summary.slide_count(),
                summary.image
            ));
            Ok(out)
        }
    }
}
