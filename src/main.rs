//! # u-held-karp CLI
//!
//! Reads a coordinate file and prints the optimal tour, its cost, and the
//! time spent solving.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{debug, LevelFilter};

use u_held_karp::exact::{HeldKarpSolver, SolverConfig};
use u_held_karp::io::{read_points, Report};
use u_held_karp::solver::TourSolver;
use u_held_karp::Result;

/// Command-line interface for u-held-karp
#[derive(Parser)]
#[command(name = "u-held-karp")]
#[command(version)]
#[command(about = "Exact TSP tours with Held-Karp dynamic programming")]
#[command(long_about = "Solves the travelling salesman problem exactly for small instances.

Input file format:
  4        # city count
  0 0      # city 0, start and end of the tour
  0 1
  1 1
  1 0")]
struct Cli {
    /// Coordinate file: city count, then one "x y" pair per line
    input: PathBuf,

    /// Reject instances with more cities than this
    #[arg(long, default_value_t = SolverConfig::default().max_cities)]
    max_cities: usize,

    /// Memory budget for the DP tables, in MiB
    #[arg(long, default_value_t = SolverConfig::default().max_table_bytes >> 20)]
    max_memory_mib: u64,

    /// Print the result as a single JSON object
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if let Some(level) = log_level(cli.verbose, std::env::var_os("RUST_LOG").is_some()) {
        logger.filter_level(level);
    }
    logger.init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Filter override: `-v` wins, then `RUST_LOG`, then warnings only.
fn log_level(verbose: bool, rust_log_set: bool) -> Option<LevelFilter> {
    if verbose {
        Some(LevelFilter::Debug)
    } else if rust_log_set {
        None
    } else {
        Some(LevelFilter::Warn)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let registry = read_points(&cli.input)?;

    let config = SolverConfig::default()
        .with_max_cities(cli.max_cities)
        .with_max_table_bytes(cli.max_memory_mib.saturating_mul(1 << 20));
    debug!("solver config: {config:?}");
    let solver = HeldKarpSolver::new(config);

    let start = Instant::now();
    let solution = solver.solve(&registry)?;
    let report = Report::new(&solution, start.elapsed());

    if cli.json {
        let json = report.to_json().map_err(std::io::Error::from)?;
        println!("{json}");
    } else {
        print!("{report}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(true, false), Some(LevelFilter::Debug));
        assert_eq!(log_level(true, true), Some(LevelFilter::Debug));
        assert_eq!(log_level(false, true), None);
        assert_eq!(log_level(false, false), Some(LevelFilter::Warn));
    }
}
