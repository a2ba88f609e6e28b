//! Builds an optimal tree for a small word-frequency table and prints the
//! report plus a few lookups.
//!
//! Run with: `cargo run --example word_frequencies`

use anyhow::{Context, Result};
use obst::input::WeightedKeys;
use obst::report::{write_report, ReportOptions};
use obst::{ObstSolver, SolverConfig};

const LISTING: &str = "\
# word   probability
and      0.22
cat      0.04
do       0.08
if       0.12
is       0.18
of       0.20
the      0.16
";

fn main() -> Result<()> {
    let words = WeightedKeys::parse(LISTING.as_bytes()).context("embedded listing")?;
    let solution = ObstSolver::new(&words.keys, &words.probabilities, SolverConfig::default())
        .run()
        .context("failed to build optimal tree")?;

    write_report(
        &mut std::io::stdout().lock(),
        &solution.tables,
        &solution.tree,
        ReportOptions::default(),
    )?;

    println!();
    for word in ["the", "cat", "zebra"] {
        match solution.tree.depth_of(&word.to_string()) {
            Some(depth) => println!("{:>6}: found at depth {}", word, depth),
            None => println!("{:>6}: not present", word),
        }
    }

    Ok(())
}
