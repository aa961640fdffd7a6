//! Captured visibility states.

use serde::{Deserialize, Serialize};

use super::node::LayerId;
use super::tree::LayerTree;

/// Visibility of every node of a tree at one instant.
///
/// A snapshot owns its flags; mutating the tree afterwards never changes it.
/// Flags are stored per arena slot, so a snapshot only makes sense against
/// the tree it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    flags: Vec<bool>,
}

impl Snapshot {
    pub(crate) fn new(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    pub(crate) fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.flags.len()
    }

    /// Number of layers recorded, not counting the root
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len().saturating_sub(1)
    }

    /// Whether no layer is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recorded visibility of a node, `None` if the handle is out of range
    #[must_use]
    pub fn is_visible(&self, id: LayerId) -> Option<bool> {
        self.flags.get(id.0).copied()
    }

    /// Number of visible layers
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.flags.iter().skip(1).filter(|v| **v).count()
    }

    /// Paths of the visible layers, in tree order
    #[must_use]
    pub fn visible_paths(&self, tree: &LayerTree) -> Vec<String> {
        tree.nodes()
            .filter(|id| self.is_visible(*id).unwrap_or(false))
            .map(|id| tree.path_of(id))
            .collect()
    }
}
