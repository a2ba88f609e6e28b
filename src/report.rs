//! Plain-text report: matrices, tree listing and optimal cost
//!
//! Rows cover key columns 1..=n; cells below the diagonal print as zero,
//! empty root cells as `0`.

use anyhow::{anyhow, Result};
use std::fmt::Display;
use std::io::Write;

use crate::table::{CostTables, IntervalMatrix};
use crate::tree::{OptimalTree, DEFAULT_PRECISION};
use crate::SolverConfig;

/// What to include and how to format it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Digits after the decimal point for costs and weights
    pub precision: usize,

    /// Also print the weight matrix
    pub include_weights: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            include_weights: false,
        }
    }
}

impl From<&SolverConfig> for ReportOptions {
    fn from(config: &SolverConfig) -> Self {
        Self {
            precision: config.precision,
            include_weights: false,
        }
    }
}

/// Write the full report for `tables` and `tree`
pub fn write_report<W: Write, K: Display>(
    writer: &mut W,
    tables: &CostTables,
    tree: &OptimalTree<K>,
    options: ReportOptions,
) -> Result<()> {
    let precision = options.precision;

    writeln!(writer, "Cost matrix e[i][j]:")?;
    write_rows(writer, tables.cost_matrix(), |cost| format!("{:.*}", precision, cost))?;

    if options.include_weights {
        writeln!(writer)?;
        writeln!(writer, "Weight matrix w[i][j]:")?;
        write_rows(writer, tables.weight_matrix(), |weight| {
            format!("{:.*}", precision, weight)
        })?;
    }

    writeln!(writer)?;
    writeln!(writer, "Root matrix root[i][j]:")?;
    write_rows(writer, tables.root_matrix(), |root| root.unwrap_or(0).to_string())?;

    writeln!(writer)?;
    writeln!(writer, "Optimal tree:")?;
    write!(writer, "{:.*}", precision, tree)?;

    writeln!(writer)?;
    writeln!(
        writer,
        "Optimal expected cost = {:.*}",
        precision,
        tables.optimal_cost()
    )?;

    writer.flush()?;
    Ok(())
}

/// Render the report into a string (useful for tests and snapshots)
pub fn render_report<K: Display>(
    tables: &CostTables,
    tree: &OptimalTree<K>,
    options: ReportOptions,
) -> Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, tables, tree, options)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered report is not valid UTF-8"))
}

fn write_rows<W: Write, T>(
    writer: &mut W,
    matrix: &IntervalMatrix<T>,
    cell: impl Fn(&T) -> String,
) -> Result<()> {
    for i in 1..=matrix.keys() {
        let row: Vec<String> = matrix.key_row(i).iter().map(&cell).collect();
        writeln!(writer, "[{}]", row.join(", "))?;
    }
    Ok(())
}
