#![forbid(unsafe_code)]

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::*;
use perc::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};

////////////////////////////////////////////////////////////////////////////////

/// Estimates the percolation threshold of an n-by-n grid by Monte Carlo simulation.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Grid size.
    n: usize,

    /// Number of independent trials.
    trials: usize,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value_t = 2)]
    log_level: usize,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    stderrlog::new()
        .verbosity(args.log_level)
        .module(module_path!())
        .module("perc")
        .init()
        .context("failed to initialize logger")?;

    let stopwatch = Instant::now();
    let stats = match args.seed {
        Some(seed) => {
            info!("using seed {seed}");
            PercolationStats::with_rng(args.n, args.trials, &mut StdRng::seed_from_u64(seed))
        }
        None => PercolationStats::new(args.n, args.trials),
    }
    .context("simulation failed")?;
    let elapsed = stopwatch.elapsed().as_secs_f64();

    println!("mean()            = {:.6}", stats.mean());
    println!("stddev()          = {:.6}", stats.stddev());
    println!("confidenceLow()   = {:.6}", stats.confidence_low());
    println!("confidenceHigh()  = {:.6}", stats.confidence_high());
    println!("elapsed time()    = {elapsed:.3}");

    Ok(())
}
