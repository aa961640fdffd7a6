//! Layer tree model.
//!
//! A [`LayerTree`] holds the named layers of one image under a virtual root.
//! Layers are addressed by '/'-joined paths, switched on together with their
//! ancestors, switched off individually, and captured as [`Snapshot`]s.

mod node;
mod render;
mod snapshot;
mod traverse;
mod tree;

pub use node::{LayerId, LayerNode, NodeKind};
pub use render::render_tree;
pub use snapshot::Snapshot;
pub use traverse::{Descendants, Lineage};
pub use tree::{LayerTree, PATH_SEPARATOR};
