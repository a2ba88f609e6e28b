//! Tree reconstruction from the root matrix
//!
//! [i, j] with root k splits into [i, k-1] (left, depth + 1) and
//! [k+1, j] (right, depth + 1). Empty intervals emit nothing.
//! Work is driven by an explicit stack so skewed trees do not
//! consume call-stack depth proportional to n.

use tracing::{debug, debug_span};

use super::{OptimalTree, Side, TreeNode};
use crate::table::CostTables;
use crate::ObstError;

/// Pending subtree: interval, depth and where to attach it
#[derive(Debug, Clone, Copy)]
struct Pending {
    lo: usize,
    hi: usize,
    depth: usize,
    parent: Option<(usize, Side)>,
}

/// Rebuilds tree shapes from finalized [`CostTables`]
#[derive(Debug)]
pub struct TreeReconstructor<'a, K> {
    tables: &'a CostTables,
    keys: &'a [K],
    probabilities: &'a [f64],
}

impl<'a, K: Clone> TreeReconstructor<'a, K> {
    /// Reconstructor over the tables built for `keys` / `probabilities`
    pub fn new(
        tables: &'a CostTables,
        keys: &'a [K],
        probabilities: &'a [f64],
    ) -> Result<Self, ObstError> {
        let n = tables.len();
        if keys.len() != n || probabilities.len() != n {
            return Err(ObstError::DimensionMismatch {
                tables: n,
                keys: keys.len(),
                probabilities: probabilities.len(),
            });
        }
        Ok(Self {
            tables,
            keys,
            probabilities,
        })
    }

    /// Whole key set, [1, n]
    pub fn full(&self) -> Result<OptimalTree<K>, ObstError> {
        self.reconstruct(1, self.tables.len())
    }

    /// Optimal subtree over [i, j]; empty when i > j
    pub fn reconstruct(&self, i: usize, j: usize) -> Result<OptimalTree<K>, ObstError> {
        let n = self.tables.len();
        if i == 0 || i > n + 1 || j > n {
            return Err(ObstError::InvalidInterval { i, j, n });
        }

        let span = debug_span!("reconstruct", i, j);
        let _enter = span.enter();

        let mut nodes: Vec<TreeNode> = Vec::with_capacity((j + 1).saturating_sub(i));
        let mut stack = vec![Pending {
            lo: i,
            hi: j,
            depth: 1,
            parent: None,
        }];

        while let Some(task) = stack.pop() {
            if task.lo > task.hi {
                continue;
            }

            let k = self
                .tables
                .root(task.lo, task.hi)
                .filter(|k| (task.lo..=task.hi).contains(k))
                .ok_or(ObstError::MissingRoot {
                    i: task.lo,
                    j: task.hi,
                })?;

            let index = nodes.len();
            nodes.push(TreeNode {
                key: k,
                span: (task.lo, task.hi),
                depth: task.depth,
                cost: self.probabilities[k - 1] * task.depth as f64,
                parent: task.parent.map(|(parent, _)| parent),
                side: task.parent.map(|(_, side)| side),
                left: None,
                right: None,
            });

            if let Some((parent, side)) = task.parent {
                match side {
                    Side::Left => nodes[parent].left = Some(index),
                    Side::Right => nodes[parent].right = Some(index),
                }
            }

            // Right pushed first so the left subtree is emitted first
            stack.push(Pending {
                lo: k + 1,
                hi: task.hi,
                depth: task.depth + 1,
                parent: Some((index, Side::Right)),
            });
            stack.push(Pending {
                lo: task.lo,
                hi: k - 1,
                depth: task.depth + 1,
                parent: Some((index, Side::Left)),
            });
        }

        debug!(nodes = nodes.len(), "tree reconstructed");
        Ok(OptimalTree::from_parts(self.keys.to_vec(), (i, j), nodes))
    }
}

/// Reconstruct [i, j] from `tables` in one call
pub fn reconstruct<K: Clone>(
    tables: &CostTables,
    keys: &[K],
    probabilities: &[f64],
    i: usize,
    j: usize,
) -> Result<OptimalTree<K>, ObstError> {
    TreeReconstructor::new(tables, keys, probabilities)?.reconstruct(i, j)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::build_obst;

    const WORDS: [&str; 4] = ["Amor", "Carro", "Xilofone", "Zebra"];
    const WORD_P: [f64; 4] = [0.40, 0.30, 0.10, 0.20];

    #[test]
    fn words_shape() {
        let tables = build_obst(&WORDS, &WORD_P).unwrap();
        let tree = reconstruct(&tables, &WORDS, &WORD_P, 1, 4).unwrap();

        let shape: Vec<(&str, usize, Option<Side>)> = tree
            .nodes()
            .iter()
            .map(|node| (*tree.key(node), node.depth, node.side))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Carro", 1, None),
                ("Amor", 2, Some(Side::Left)),
                ("Zebra", 2, Some(Side::Right)),
                ("Xilofone", 3, Some(Side::Left)),
            ]
        );
        assert_eq!(tree.parent_key(&tree.nodes()[3]), Some(&"Zebra"));
    }

    #[test]
    fn sub_interval_uses_its_own_root() {
        let tables = build_obst(&WORDS, &WORD_P).unwrap();
        let tree = reconstruct(&tables, &WORDS, &WORD_P, 3, 4).unwrap();
        assert_eq!(tree.root().map(|node| node.key), Some(4));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn empty_interval_is_empty_tree() {
        let tables = build_obst(&WORDS, &WORD_P).unwrap();
        let tree = reconstruct(&tables, &WORDS, &WORD_P, 5, 4).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.expected_cost(), 0.0);
    }

    #[test]
    fn interval_outside_tables_is_rejected() {
        let tables = build_obst(&WORDS, &WORD_P).unwrap();
        let err = reconstruct(&tables, &WORDS, &WORD_P, 0, 2).unwrap_err();
        assert!(matches!(err, ObstError::InvalidInterval { i: 0, j: 2, n: 4 }));
        let err = reconstruct(&tables, &WORDS, &WORD_P, 2, 5).unwrap_err();
        assert!(matches!(err, ObstError::InvalidInterval { .. }));
    }

    #[test]
    fn mismatched_keys_are_rejected() {
        let tables = build_obst(&WORDS, &WORD_P).unwrap();
        let err = TreeReconstructor::new(&tables, &WORDS[..2], &WORD_P).unwrap_err();
        assert!(matches!(
            err,
            ObstError::DimensionMismatch {
                tables: 4,
                keys: 2,
                probabilities: 4
            }
        ));
    }
}
