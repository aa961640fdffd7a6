//! Tree traversal utilities.
//!
//! All iterators borrow the tree and walk it without recursion, so calling
//! the producing method again restarts the walk from the beginning.

use super::node::LayerId;
use super::tree::LayerTree;

/// Pre-order iterator over every layer below a starting node.
///
/// Created by [`LayerTree::nodes`] and [`LayerTree::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a LayerTree,
    stack: Vec<LayerId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(tree: &'a LayerTree, start: LayerId) -> Self {
        let stack = tree.node(start).children().iter().rev().copied().collect();
        Self { tree, stack }
    }
}

impl Iterator for Descendants<'_> {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(id).children().iter().rev().copied());
        Some(id)
    }
}

/// Iterator from a layer up through its ancestors, stopping below the root.
///
/// Created by [`LayerTree::lineage`]. The starting layer is yielded first.
#[derive(Debug)]
pub struct Lineage<'a> {
    tree: &'a LayerTree,
    current: Option<LayerId>,
}

impl<'a> Lineage<'a> {
    pub(crate) fn new(tree: &'a LayerTree, start: LayerId) -> Self {
        Self {
            tree,
            current: Some(start),
        }
    }
}

impl Iterator for Lineage<'_> {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        let id = self.current.filter(|id| !id.is_root())?;
        self.current = self.tree.node(id).parent();
        Some(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample() -> LayerTree {
        // a{b{c} d} e
        let mut tree = LayerTree::new();
        let a = tree.add_layer(LayerId::ROOT, "a", None).unwrap();
        let b = tree.add_layer(a, "b", None).unwrap();
        tree.add_layer(b, "c", None).unwrap();
        tree.add_layer(a, "d", None).unwrap();
        tree.add_layer(LayerId::ROOT, "e", None).unwrap();
        tree
    }

    fn names(tree: &LayerTree, ids: impl Iterator<Item = LayerId>) -> Vec<String> {
        ids.map(|id| tree.node(id).name().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_descendants_preorder() {
        let tree = sample();
        assert_eq!(names(&tree, tree.nodes()), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_descendants_of_subtree() {
        let tree = sample();
        let a = tree.resolve("a").unwrap();
        assert_eq!(names(&tree, tree.descendants(a)), ["b", "c", "d"]);
    }

    #[test]
    fn test_lineage_stops_below_root() {
        let tree = sample();
        let c = tree.resolve("a/b/c").unwrap();
        assert_eq!(names(&tree, tree.lineage(c)), ["c", "b", "a"]);
        assert_eq!(tree.lineage(LayerId::ROOT).count(), 0);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let tree = sample();
        let first: Vec<_> = tree.nodes().collect();
        let second: Vec<_> = tree.nodes().collect();
        assert_eq!(first, second);
    }
}
