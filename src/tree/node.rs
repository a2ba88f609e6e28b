//! Reconstructed tree nodes
//!
//! Nodes live in an arena (`Vec<TreeNode>`) in emission order: a node is
//! always emitted before its children, left subtree before right.
//! Links are arena indices, keys are 1-based indices into the key set.

use std::fmt;

/// Which child slot a node occupies under its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Side {
    /// Smaller keys
    Left,

    /// Larger keys
    Right,
}

impl Side {
    pub(crate) fn tag(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// One key placed in the optimal tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct TreeNode {
    /// 1-based key index
    pub key: usize,

    /// Interval [lo, hi] this node is the optimal root of
    pub span: (usize, usize),

    /// Root is at depth 1
    pub depth: usize,

    /// probability × depth (unrounded)
    pub cost: f64,

    /// Arena index of the parent, `None` at the root
    pub parent: Option<usize>,

    /// Slot under the parent, `None` at the root
    pub side: Option<Side>,

    /// Arena index of the left child
    pub left: Option<usize>,

    /// Arena index of the right child
    pub right: Option<usize>,
}

impl TreeNode {
    /// Whether this is the overall root
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// No children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of keys in the subtree rooted here
    #[inline]
    pub fn subtree_len(&self) -> usize {
        self.span.1 - self.span.0 + 1
    }
}
