//! Layer identity and node types.

use std::fmt;

/// A handle to a node in a [`LayerTree`](super::LayerTree).
///
/// Handles are arena slot indices. The root always occupies slot 0; layers
/// are numbered in the order they were added to the tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub(crate) usize);

impl LayerId {
    /// The virtual root of every tree
    pub const ROOT: Self = Self(0);

    /// Returns the raw slot index (for diagnostics only)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Whether this handle refers to the virtual root
    #[inline]
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "LayerId(root)")
        } else {
            write!(f, "LayerId({})", self.0)
        }
    }
}

/// What a node in the tree is.
///
/// The root bundles the top-level layers of one image. It has no name, no
/// parent and no visibility toggle: it is always visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The virtual root
    Root,
    /// A named, toggleable layer
    Layer {
        /// Name, unique across the tree
        name: String,
        /// Explicit visibility of this layer
        visible: bool,
    },
}

/// A node in the layer tree
#[derive(Debug, Clone)]
pub struct LayerNode {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<LayerId>,
    pub(crate) children: Vec<LayerId>,
}

impl LayerNode {
    pub(crate) const fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn layer(name: String, visible: bool, parent: LayerId) -> Self {
        Self {
            kind: NodeKind::Layer { name, visible },
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// What this node is
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Name of the layer, `None` for the root
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Root => None,
            NodeKind::Layer { name, .. } => Some(name),
        }
    }

    /// Current visibility; the root is always visible
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        match self.kind {
            NodeKind::Root => true,
            NodeKind::Layer { visible, .. } => visible,
        }
    }

    /// Whether this is the virtual root
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self.kind, NodeKind::Root)
    }

    /// The parent node, `None` for the root
    #[must_use]
    pub const fn parent(&self) -> Option<LayerId> {
        self.parent
    }

    /// Direct children in construction order
    #[must_use]
    pub fn children(&self) -> &[LayerId] {
        &self.children
    }

    /// Whether this node has no children
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Sets the visibility flag. No-op on the root.
    pub(crate) fn set_visible(&mut self, value: bool) {
        if let NodeKind::Layer { visible, .. } = &mut self.kind {
            *visible = value;
        }
    }
}
