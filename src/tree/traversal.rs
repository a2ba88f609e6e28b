//! Walks over a reconstructed tree
//!
//! In-order iteration uses an explicit stack of arena indices (O(height)).
//! Search descends from the root comparing keys, the way a lookup in the
//! finished tree would.

use std::cmp::Ordering;

use super::{OptimalTree, TreeNode};

/// In-order (sorted key) iterator over tree nodes
#[derive(Debug)]
pub struct InOrder<'a> {
    nodes: &'a [TreeNode],
    stack: Vec<usize>,
    current: Option<usize>,
}

impl<'a> InOrder<'a> {
    fn new(nodes: &'a [TreeNode]) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            current: (!nodes.is_empty()).then_some(0),
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.current {
            self.stack.push(index);
            self.current = self.nodes[index].left;
        }
        let index = self.stack.pop()?;
        self.current = self.nodes[index].right;
        Some(&self.nodes[index])
    }
}

impl<K> OptimalTree<K> {
    /// Nodes in ascending key order
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.nodes())
    }

    /// Keys in in-order sequence; equals the covered key slice
    pub fn in_order_keys(&self) -> Vec<&K> {
        self.in_order().map(|node| self.key(node)).collect()
    }
}

impl<K: Ord> OptimalTree<K> {
    /// Nodes visited by a search for `target`, ending at its node.
    ///
    /// `None` when `target` is not in the tree.
    pub fn search_path(&self, target: &K) -> Option<Vec<&TreeNode>> {
        let mut path = Vec::new();
        let mut cursor = self.root();

        while let Some(node) = cursor {
            path.push(node);
            let next = match target.cmp(self.key(node)) {
                Ordering::Equal => return Some(path),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            cursor = next.map(|index| &self.nodes()[index]);
        }
        None
    }

    /// Depth of `target` (root = 1)
    pub fn depth_of(&self, target: &K) -> Option<usize> {
        self.search_path(target).map(|path| path.len())
    }
}
