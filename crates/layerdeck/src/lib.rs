//! Layerdeck: layer-driven slide animation
//!
//! Turns an image made of nested, named, toggleable layers into an ordered
//! list of per-page visibility states ("slides"), driven by a small
//! animation language.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    LAYERDECK Pipeline                            │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌─────────────┐   ┌────────────┐   ┌─────────┐ │
//! │  │ .anim text │──►│ Preprocess  │──►│ Interpret  │──►│Sequencer│ │
//! │  │            │   │ # and {..}  │   │ LayerTree  │   │Renderer │ │
//! │  └────────────┘   └─────────────┘   └────────────┘   └─────────┘ │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use layerdeck::{animate, LayerDocument, LayerSpec, ManifestRenderer, SourceContext};
//!
//! let tree = LayerDocument::new(vec![
//!     LayerSpec::new("A").with_visible(true),
//!     LayerSpec::new("B"),
//! ])
//! .build_tree()?;
//! let mut ctx = SourceContext::new("deck.svg", tree);
//!
//! let manifests = animate(&mut ctx, Some("A\n+ B\n- A\n*"), ManifestRenderer::new())?;
//! let pages: Vec<_> = manifests[0].slides.iter().map(|s| s.visible.clone()).collect();
//! assert_eq!(pages, [vec!["A"], vec!["A", "B"], vec!["B"], vec![]]);
//! # Ok::<(), layerdeck::SlidesError>(())
//! ```

#![warn(missing_docs)]

pub mod dsl;
pub mod hierarchy;
pub mod layer;
pub mod manifest;
mod result;
pub mod sequencer;

pub use dsl::{interpret, parse, preprocess, AnimationBlock, Interpreter, LineMode, SourceContext};
pub use hierarchy::{LayerDocument, LayerSpec};
pub use layer::{render_tree, LayerId, LayerNode, LayerTree, NodeKind, Snapshot};
pub use manifest::{BlockManifest, ManifestRenderer, SlideManifest};
pub use result::{SlidesError, SlidesResult};
pub use sequencer::{animate, reveal_in_order, Renderer, Sequencer};
