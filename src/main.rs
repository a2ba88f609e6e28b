use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use obst::input::WeightedKeys;
use obst::report::{write_report, ReportOptions};
use obst::{ObstSolution, ObstSolver, SolverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "obst", about = "Optimal binary search trees from key access probabilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit debug logs on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the optimal tree for a key listing and print the report.
    Build {
        /// Key listing (`<key> <probability>` per line).
        listing: PathBuf,
        #[command(flatten)]
        solve: SolveArgs,
    },
    /// Run the bundled four-word example.
    Demo {
        #[command(flatten)]
        solve: SolveArgs,
    },
    /// Print the search path for a key in the optimal tree.
    Search {
        /// Key listing (`<key> <probability>` per line).
        listing: PathBuf,
        /// Key to look up.
        key: String,
        #[command(flatten)]
        solve: SolveArgs,
    },
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Digits printed after the decimal point.
    #[arg(long, default_value_t = 2)]
    precision: usize,
    /// Slack allowed above 1.0 for the probability sum.
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
    /// Evaluate interval lengths in parallel (needs the `parallel` feature).
    #[arg(long)]
    parallel: bool,
    /// Sort keys ascending before building.
    #[arg(long)]
    sort: bool,
    /// Also print the weight matrix.
    #[arg(long)]
    weights: bool,
}

impl SolveArgs {
    fn config(&self) -> SolverConfig {
        SolverConfig::default()
            .with_parallel(self.parallel)
            .with_mass_tolerance(self.tolerance)
            .with_precision(self.precision)
    }

    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            include_weights: self.weights,
            ..ReportOptions::from(&self.config())
        }
    }

    fn prepare(&self, listing: WeightedKeys) -> WeightedKeys {
        if self.sort {
            listing.sorted()
        } else {
            listing
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { listing, solve } => {
            let listing = WeightedKeys::from_path(&listing)?;
            run_build(solve.prepare(listing), &solve)?
        }
        Commands::Demo { solve } => run_build(solve.prepare(WeightedKeys::demo()), &solve)?,
        Commands::Search {
            listing,
            key,
            solve,
        } => {
            let listing = WeightedKeys::from_path(&listing)?;
            run_search(solve.prepare(listing), &key, &solve)?
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn solve(listing: &WeightedKeys, args: &SolveArgs) -> Result<ObstSolution<String>> {
    ObstSolver::new(&listing.keys, &listing.probabilities, args.config())
        .run()
        .with_context(|| format!("failed to build optimal tree for {} keys", listing.len()))
}

fn run_build(listing: WeightedKeys, args: &SolveArgs) -> Result<()> {
    let solution = solve(&listing, args)?;
    let stdout = io::stdout();
    write_report(
        &mut stdout.lock(),
        &solution.tables,
        &solution.tree,
        args.report_options(),
    )
}

fn run_search(listing: WeightedKeys, key: &str, args: &SolveArgs) -> Result<()> {
    let solution = solve(&listing, args)?;
    let tree = &solution.tree;

    let Some(path) = tree.search_path(&key.to_string()) else {
        println!("'{}' is not in the tree.", key);
        return Ok(());
    };

    let visited: Vec<&str> = path.iter().map(|node| tree.key(node).as_str()).collect();
    println!("path: {}", visited.join(" -> "));
    if let Some(node) = path.last() {
        println!(
            "depth={}\tcost={:.*}",
            node.depth, args.precision, node.cost
        );
    }

    Ok(())
}
