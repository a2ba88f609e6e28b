//! Optimal tree shape recovered from the root matrix
//!
//! The tree is an explicit value (node arena + owned key set), so
//! reconstruction has no side effects and the result can be queried,
//! printed or fingerprinted independently of the tables.

mod node;
mod reconstruct;
mod traversal;

pub use node::{Side, TreeNode};
pub use reconstruct::{reconstruct, TreeReconstructor};
pub use traversal::InOrder;

use std::fmt;

/// Display precision used when the formatter does not specify one
pub const DEFAULT_PRECISION: usize = 2;

/// Reconstructed optimal (sub)tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct OptimalTree<K> {
    /// Full key set the tables were built for
    keys: Vec<K>,

    /// Interval [i, j] this tree covers
    interval: (usize, usize),

    /// Nodes in emission order, root first
    nodes: Vec<TreeNode>,
}

impl<K> OptimalTree<K> {
    pub(crate) fn from_parts(keys: Vec<K>, interval: (usize, usize), nodes: Vec<TreeNode>) -> Self {
        Self {
            keys,
            interval,
            nodes,
        }
    }

    /// Root node, `None` for an empty interval
    pub fn root(&self) -> Option<&TreeNode> {
        self.nodes.first()
    }

    /// Nodes in emission order (parent before children, left before right)
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for an empty interval
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Covered interval [i, j]
    pub fn interval(&self) -> (usize, usize) {
        self.interval
    }

    /// Key stored at `node`
    pub fn key(&self, node: &TreeNode) -> &K {
        &self.keys[node.key - 1]
    }

    /// Key of the parent of `node`
    pub fn parent_key(&self, node: &TreeNode) -> Option<&K> {
        node.parent.map(|parent| self.key(&self.nodes[parent]))
    }

    /// Deepest level (0 when empty)
    pub fn height(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Σ probability × depth over all nodes
    pub fn expected_cost(&self) -> f64 {
        self.nodes.iter().map(|node| node.cost).sum()
    }

    /// BLAKE3 digest of the shape (keys, depths, links)
    ///
    /// Two reconstructions with the same shape hash equal regardless of
    /// key type; costs are excluded.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.interval.0 as u64).to_le_bytes());
        hasher.update(&(self.interval.1 as u64).to_le_bytes());
        for node in &self.nodes {
            hasher.update(&(node.key as u64).to_le_bytes());
            hasher.update(&(node.depth as u64).to_le_bytes());
            let parent = node.parent.map_or(u64::MAX, |parent| parent as u64);
            hasher.update(&parent.to_le_bytes());
            hasher.update(&[node.side.map_or(0, Side::tag)]);
        }
        hasher.finalize()
    }
}

/// One line per node in emission order:
///
/// ```text
/// Root: Carro (level 1, cost 0.30)
/// left of Carro: Amor (level 2, cost 0.80)
/// ```
///
/// Costs use the formatter precision (`{:.3}`), default 2 digits.
impl<K: fmt::Display> fmt::Display for OptimalTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        for node in &self.nodes {
            match (node.side, self.parent_key(node)) {
                (Some(side), Some(parent)) => write!(f, "{} of {}: ", side, parent)?,
                _ => f.write_str("Root: ")?,
            }
            writeln!(
                f,
                "{} (level {}, cost {:.*})",
                self.key(node),
                node.depth,
                precision,
                node.cost
            )?;
        }
        Ok(())
    }
}
