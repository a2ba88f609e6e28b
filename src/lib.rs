//! # Optimal Binary Search Trees
//!
//! Given keys in ascending order and the probability that a search targets
//! each key, this crate finds the binary search tree with minimum expected
//! search cost (Σ p·depth, root at depth 1).
//!
//! ## Core Algorithm
//!
//! 1. **Cost tables**: interval DP over [i, j] by increasing length,
//!    `e[i][j] = min_k (e[i][k-1] + e[k+1][j]) + w[i][j]`, O(n³) time, O(n²) space
//! 2. **Tie-break**: candidate roots are scanned ascending; the first strict
//!    minimum wins, so reconstruction is deterministic
//! 3. **Reconstruction**: the root matrix is unfolded into an explicit tree
//!    with per-node depth and cost contribution
//!
//! ## Usage Example
//!
//! ```
//! use obst::{ObstSolver, SolverConfig};
//!
//! let keys = ["Amor", "Carro", "Xilofone", "Zebra"];
//! let p = [0.40, 0.30, 0.10, 0.20];
//!
//! let solution = ObstSolver::new(&keys, &p, SolverConfig::default()).run()?;
//! assert_eq!(solution.tree.root().map(|node| node.key), Some(2));
//! assert!((solution.tables.optimal_cost() - 1.8).abs() < 1e-9);
//! # Ok::<(), obst::ObstError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod input;  // Weighted key listings
pub mod report; // Matrix and tree rendering
pub mod table;  // Cost / weight / root tables
pub mod tree;   // Reconstructed tree shape

// Re-exports for convenience
pub use table::{build_obst, CostTableBuilder, CostTables, InputError, IntervalMatrix};
pub use tree::{reconstruct, OptimalTree, Side, TreeNode, TreeReconstructor};

use thiserror::Error;
use tracing::info_span;

/// Errors surfaced by table construction and reconstruction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObstError {
    /// Keys or probabilities rejected before any DP work
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Requested interval lies outside the tables
    #[error("interval [{i}, {j}] outside tables for {n} keys")]
    InvalidInterval {
        /// Interval start
        i: usize,
        /// Interval end
        j: usize,
        /// Number of keys
        n: usize,
    },

    /// Root matrix has no usable entry for a non-empty interval
    #[error("no root recorded for interval [{i}, {j}]")]
    MissingRoot {
        /// Interval start
        i: usize,
        /// Interval end
        j: usize,
    },

    /// Keys / probabilities do not match the tables' size
    #[error("tables built for {tables} keys, got {keys} keys and {probabilities} probabilities")]
    DimensionMismatch {
        /// Keys the tables were built for
        tables: usize,
        /// Keys supplied
        keys: usize,
        /// Probabilities supplied
        probabilities: usize,
    },
}

/// Solver settings
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Evaluate each interval length in parallel (`parallel` feature)
    pub parallel: bool,

    /// Slack allowed above 1.0 for Σp
    pub mass_tolerance: f64,

    /// Digits used when rendering costs
    pub precision: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            mass_tolerance: table::DEFAULT_MASS_TOLERANCE,
            precision: tree::DEFAULT_PRECISION,
        }
    }
}

impl SolverConfig {
    /// Toggle length-parallel evaluation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the probability-mass tolerance
    pub fn with_mass_tolerance(mut self, tolerance: f64) -> Self {
        self.mass_tolerance = tolerance;
        self
    }

    /// Set display precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Tables plus the tree reconstructed over the whole key set
#[derive(Debug, Clone)]
pub struct ObstSolution<K> {
    /// Finalized DP tables
    pub tables: CostTables,

    /// Optimal tree over [1, n]
    pub tree: OptimalTree<K>,
}

/// Runs both phases for one key set
#[derive(Debug)]
pub struct ObstSolver<'a, K> {
    keys: &'a [K],
    probabilities: &'a [f64],
    config: SolverConfig,
}

impl<'a, K: Ord + Clone> ObstSolver<'a, K> {
    /// Create new solver
    pub fn new(keys: &'a [K], probabilities: &'a [f64], config: SolverConfig) -> Self {
        Self {
            keys,
            probabilities,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Build the tables, then reconstruct the full tree
    pub fn run(&self) -> Result<ObstSolution<K>, ObstError> {
        let span = info_span!("obst_solve", n = self.keys.len());
        let _enter = span.enter();

        let tables = CostTableBuilder::new(self.keys, self.probabilities)
            .mass_tolerance(self.config.mass_tolerance)
            .parallel(self.config.parallel)
            .build()?;
        let tree = TreeReconstructor::new(&tables, self.keys, self.probabilities)?.full()?;

        Ok(ObstSolution { tables, tree })
    }
}
