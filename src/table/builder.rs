//! Interval DP over key ranges
//!
//! Fills `e`, `w` and `root` by increasing interval length:
//!   w[i][j] = w[i][j-1] + p[j]
//!   e[i][j] = min_{i ≤ k ≤ j} (e[i][k-1] + e[k+1][j]) + w[i][j]
//! with e[i][i-1] = w[i][i-1] = 0. Ties keep the lowest k.
//!
//! Cells of one length only read shorter, finalized intervals, so they can
//! be evaluated in any order (or concurrently) and written once each.

use tracing::{debug, info, info_span};

use super::validate::{validate_input, InputError, DEFAULT_MASS_TOLERANCE};
use super::{CostTables, IntervalMatrix};

/// Builds [`CostTables`] for one key set
#[derive(Debug, Clone)]
pub struct CostTableBuilder<'a, K> {
    keys: &'a [K],
    probabilities: &'a [f64],
    mass_tolerance: f64,
    parallel: bool,
}

/// Finalized values for a single interval
#[derive(Debug, Clone, Copy)]
struct Cell {
    i: usize,
    j: usize,
    weight: f64,
    cost: f64,
    root: usize,
}

impl<'a, K: Ord> CostTableBuilder<'a, K> {
    /// Builder over `keys` (strictly ascending) and their probabilities
    pub fn new(keys: &'a [K], probabilities: &'a [f64]) -> Self {
        Self {
            keys,
            probabilities,
            mass_tolerance: DEFAULT_MASS_TOLERANCE,
            parallel: false,
        }
    }

    /// Slack allowed above 1.0 for the probability sum
    pub fn mass_tolerance(mut self, tolerance: f64) -> Self {
        self.mass_tolerance = tolerance;
        self
    }

    /// Evaluate each interval length in parallel.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Validate the input and fill all three matrices
    pub fn build(&self) -> Result<CostTables, InputError> {
        validate_input(self.keys, self.probabilities, self.mass_tolerance)?;

        let p = self.probabilities;
        let n = p.len();
        let span = info_span!("build_obst", n, parallel = self.parallel);
        let _enter = span.enter();

        let mut e = IntervalMatrix::new(n, 0.0);
        let mut w = IntervalMatrix::new(n, 0.0);
        let mut root = IntervalMatrix::new(n, None);

        // Single-key intervals: the key is its own root at depth 1
        for i in 1..=n {
            e[(i, i)] = p[i - 1];
            w[(i, i)] = p[i - 1];
            root[(i, i)] = Some(i);
        }

        for len in 2..=n {
            let cells = self.evaluate_length(&e, &w, len);
            debug_assert_eq!(cells.len(), n - len + 1);

            for cell in cells {
                w[(cell.i, cell.j)] = cell.weight;
                e[(cell.i, cell.j)] = cell.cost;
                root[(cell.i, cell.j)] = Some(cell.root);
            }
            debug!(len, intervals = n - len + 1, "interval length finalized");
        }

        let tables = CostTables { n, e, w, root };
        info!(
            cost = tables.optimal_cost(),
            root = ?tables.optimal_root(),
            "optimal tree cost computed"
        );
        Ok(tables)
    }

    fn evaluate_length(
        &self,
        e: &IntervalMatrix<f64>,
        w: &IntervalMatrix<f64>,
        len: usize,
    ) -> Vec<Cell> {
        let p = self.probabilities;
        let starts = 1..=p.len() - len + 1;

        #[cfg(feature = "parallel")]
        if self.parallel {
            use rayon::prelude::*;
            return starts
                .into_par_iter()
                .filter_map(|i| solve_cell(e, w, p, i, i + len - 1))
                .collect();
        }

        starts
            .filter_map(|i| solve_cell(e, w, p, i, i + len - 1))
            .collect()
    }
}

/// Scan every candidate root of [i, j], keeping the first strict minimum.
///
/// `None` only when the candidate range is empty (i > j).
fn solve_cell(
    e: &IntervalMatrix<f64>,
    w: &IntervalMatrix<f64>,
    p: &[f64],
    i: usize,
    j: usize,
) -> Option<Cell> {
    let weight = w[(i, j - 1)] + p[j - 1];

    let mut best: Option<(usize, f64)> = None;
    for k in i..=j {
        let left = if k > i { e[(i, k - 1)] } else { 0.0 };
        let right = if k < j { e[(k + 1, j)] } else { 0.0 };
        let cost = left + right + weight;

        if best.map_or(true, |(_, lowest)| cost < lowest) {
            best = Some((k, cost));
        }
    }

    best.map(|(root, cost)| Cell {
        i,
        j,
        weight,
        cost,
        root,
    })
}

/// Build the tables with default settings
pub fn build_obst<K: Ord>(keys: &[K], probabilities: &[f64]) -> Result<CostTables, InputError> {
    CostTableBuilder::new(keys, probabilities).build()
}
