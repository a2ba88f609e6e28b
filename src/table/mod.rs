//! Expected-cost, weight and root tables
//!
//! All three matrices are `(n+2)×(n+2)` and indexed by 1-based key
//! intervals [i, j]. Only the region i ≤ j + 1 carries meaning:
//!   e[i][j]    minimum expected search cost over keys i..=j
//!   w[i][j]    Σ p over keys i..=j
//!   root[i][j] chosen root for [i, j] (None for empty intervals)
//!
//! Tables are immutable once [`CostTableBuilder::build`] returns.

mod builder;
mod matrix;
mod validate;

pub use builder::{build_obst, CostTableBuilder};
pub use matrix::IntervalMatrix;
pub use validate::{validate_input, InputError, DEFAULT_MASS_TOLERANCE};

/// Finalized DP tables for `n` keys
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct CostTables {
    n: usize,
    e: IntervalMatrix<f64>,
    w: IntervalMatrix<f64>,
    root: IntervalMatrix<Option<usize>>,
}

impl CostTables {
    /// Number of keys
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: construction rejects empty key sets
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Expected cost of the optimal tree over [i, j]; 0 for empty intervals
    pub fn cost(&self, i: usize, j: usize) -> Option<f64> {
        self.in_region(i, j).then(|| self.e[(i, j)])
    }

    /// Probability mass of [i, j]
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        self.in_region(i, j).then(|| self.w[(i, j)])
    }

    /// Root chosen for the non-empty interval [i, j]
    pub fn root(&self, i: usize, j: usize) -> Option<usize> {
        if i == 0 || i > j || j > self.n {
            return None;
        }
        self.root[(i, j)]
    }

    /// e[1][n]
    pub fn optimal_cost(&self) -> f64 {
        self.e[(1, self.n)]
    }

    /// root[1][n]
    pub fn optimal_root(&self) -> Option<usize> {
        self.root(1, self.n)
    }

    /// Raw cost matrix
    pub fn cost_matrix(&self) -> &IntervalMatrix<f64> {
        &self.e
    }

    /// Raw weight matrix
    pub fn weight_matrix(&self) -> &IntervalMatrix<f64> {
        &self.w
    }

    /// Raw root matrix
    pub fn root_matrix(&self) -> &IntervalMatrix<Option<usize>> {
        &self.root
    }

    /// 1 ≤ i ≤ n + 1 and i - 1 ≤ j ≤ n
    fn in_region(&self, i: usize, j: usize) -> bool {
        i >= 1 && i <= self.n + 1 && j + 1 >= i && j <= self.n
    }
}
