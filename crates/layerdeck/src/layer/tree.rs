//! Arena-backed layer tree with path addressing and visibility switching.

use std::collections::HashMap;

use super::node::{LayerId, LayerNode};
use super::snapshot::Snapshot;
use super::traverse::{Descendants, Lineage};
use crate::result::{SlidesError, SlidesResult};

/// Separator between layer names in a path
pub const PATH_SEPARATOR: char = '/';

/// Characters a path token cannot carry besides the separator and blanks:
/// the header marker and the brace group delimiters.
const RESERVED_CHARS: [char; 3] = [':', '{', '}'];
/// Whole tokens that animation lines read as operators
const RESERVED_NAMES: [&str; 3] = ["+", "-", "*"];

/// Why `name` could not appear as a path token, if it could not
fn unaddressable(name: &str) -> Option<String> {
    if name.contains(PATH_SEPARATOR) {
        return Some(format!("contains the path separator '{PATH_SEPARATOR}'"));
    }
    if name.chars().any(char::is_whitespace) {
        return Some("contains whitespace".to_string());
    }
    if let Some(c) = name.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Some(format!("contains '{c}'"));
    }
    RESERVED_NAMES
        .contains(&name)
        .then(|| "is an operator".to_string())
}

/// Hierarchy of named layers for one image.
///
/// Nodes live in a flat arena addressed by [`LayerId`]. Slot 0 holds the
/// virtual root; every other slot holds a layer whose name is unique across
/// the whole tree.
#[derive(Debug, Clone)]
pub struct LayerTree {
    nodes: Vec<LayerNode>,
    by_name: HashMap<String, LayerId>,
}

impl Default for LayerTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerTree {
    /// Creates a tree holding only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![LayerNode::root()],
            by_name: HashMap::new(),
        }
    }

    /// Adds a layer as the last child of `parent`.
    ///
    /// A missing initial visibility defaults to invisible. Names must be
    /// usable as path tokens: no separator, blanks, `:` or braces, and not
    /// a bare operator.
    pub fn add_layer(
        &mut self,
        parent: LayerId,
        name: impl Into<String>,
        visible: Option<bool>,
    ) -> SlidesResult<LayerId> {
        let name = name.into();
        if name.is_empty() {
            return Err(SlidesError::EmptyLayerName);
        }
        if let Some(reason) = unaddressable(&name) {
            return Err(SlidesError::InvalidLayerName { name, reason });
        }
        if self.by_name.contains_key(&name) {
            return Err(SlidesError::DuplicateLayer { name });
        }

        let id = LayerId(self.nodes.len());
        self.nodes
            .push(LayerNode::layer(name.clone(), visible.unwrap_or(false), parent));
        self.nodes[parent.0].children.push(id);
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Number of layers, not counting the root
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the tree holds no layers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was produced by a different tree.
    #[must_use]
    pub fn node(&self, id: LayerId) -> &LayerNode {
        &self.nodes[id.0]
    }

    /// The virtual root
    #[must_use]
    pub fn root(&self) -> &LayerNode {
        &self.nodes[0]
    }

    /// Top-level layers in construction order
    #[must_use]
    pub fn top_level(&self) -> &[LayerId] {
        self.root().children()
    }

    /// Looks a layer up by its bare name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<LayerId> {
        self.by_name.get(name).copied()
    }

    /// Resolves a '/'-separated path from just below the root.
    ///
    /// Fails with [`SlidesError::UnknownLayer`] naming the first segment
    /// that is not a child of the node reached so far.
    pub fn resolve(&self, path: &str) -> SlidesResult<LayerId> {
        let mut current = LayerId::ROOT;
        for segment in path.split(PATH_SEPARATOR) {
            current = self
                .find(segment)
                .filter(|id| self.node(*id).parent() == Some(current))
                .ok_or_else(|| SlidesError::UnknownLayer {
                    segment: segment.to_string(),
                    path: path.to_string(),
                })?;
        }
        Ok(current)
    }

    /// Resolves a path to its node
    pub fn get(&self, path: &str) -> SlidesResult<&LayerNode> {
        self.resolve(path).map(|id| self.node(id))
    }

    /// Current visibility of a node
    #[must_use]
    pub fn is_visible(&self, id: LayerId) -> bool {
        self.node(id).is_visible()
    }

    /// Makes the node at `path` and every ancestor up to the root visible.
    pub fn switch_on(&mut self, path: &str) -> SlidesResult<()> {
        let id = self.resolve(path)?;
        self.switch_on_id(id);
        Ok(())
    }

    /// Hides the node at `path` only; ancestors and descendants keep their flags.
    pub fn switch_off(&mut self, path: &str) -> SlidesResult<()> {
        let id = self.resolve(path)?;
        self.switch_off_id(id);
        Ok(())
    }

    /// [`switch_on`](Self::switch_on) for an already resolved layer
    pub fn switch_on_id(&mut self, id: LayerId) {
        let mut current = Some(id);
        while let Some(id) = current.filter(|id| !id.is_root()) {
            self.nodes[id.0].set_visible(true);
            current = self.nodes[id.0].parent();
        }
    }

    /// [`switch_off`](Self::switch_off) for an already resolved layer
    pub fn switch_off_id(&mut self, id: LayerId) {
        self.nodes[id.0].set_visible(false);
    }

    /// Sets a layer's visibility flag directly
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        self.nodes[id.0].set_visible(visible);
    }

    /// Hides every layer in the tree.
    pub fn clear(&mut self) {
        for node in &mut self.nodes {
            node.set_visible(false);
        }
    }

    /// Captures the visibility of every node.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.nodes.iter().map(LayerNode::is_visible).collect())
    }

    /// Overwrites every layer's visibility with the recorded value.
    pub fn restore(&mut self, snapshot: &Snapshot) -> SlidesResult<()> {
        if snapshot.slot_count() != self.slot_count() {
            return Err(SlidesError::SnapshotMismatch {
                expected: self.len(),
                actual: snapshot.len(),
            });
        }
        for (node, visible) in self.nodes.iter_mut().zip(snapshot.flags()) {
            node.set_visible(*visible);
        }
        Ok(())
    }

    /// Every layer in pre-order, construction order among siblings
    #[must_use]
    pub fn nodes(&self) -> Descendants<'_> {
        Descendants::new(self, LayerId::ROOT)
    }

    /// Every layer below `id` in pre-order
    #[must_use]
    pub fn descendants(&self, id: LayerId) -> Descendants<'_> {
        Descendants::new(self, id)
    }

    /// Layers without children, in pre-order
    pub fn leaves(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.nodes().filter(|id| self.node(*id).is_leaf())
    }

    /// The layer itself followed by its ancestors, root excluded
    #[must_use]
    pub fn lineage(&self, id: LayerId) -> Lineage<'_> {
        Lineage::new(self, id)
    }

    /// Rebuilds the path that addresses a layer; empty for the root.
    #[must_use]
    pub fn path_of(&self, id: LayerId) -> String {
        let mut names: Vec<&str> = self
            .lineage(id)
            .filter_map(|id| self.node(id).name())
            .collect();
        names.reverse();
        names.join("/")
    }
}
