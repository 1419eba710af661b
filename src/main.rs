//! # Main — CLI Entry Point
//!
//! `digitsum [RANK]` prints D(RANK), the RANK-th positive integer whose digit
//! sum is prime (default RANK = 10^16). Subcommands expose the building
//! blocks: `count`, `nth`, and the `verify` self-test.
//!
//! ## Global Options
//!
//! - `--method`: counting strategy (closed-form, tabulated, enumerate).
//! - `--sieve-limit`: largest digit sum the primality table covers.
//! - `--config` / `DIGITSUM_CONFIG`: TOML file with the same keys.
//! - `--trace`: log every bucket and digit decision.
//! - `--json`: machine-readable output.
//!
//! Logging goes to stderr (`RUST_LOG`, `LOG_FORMAT=json`); results go to stdout.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use digitsum::counter::Method;
use digitsum::Count;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Rank used when none is given: the Project Euler 845 instance.
pub const DEFAULT_RANK: Count = 10_000_000_000_000_000;

#[derive(Parser)]
#[command(
    name = "digitsum",
    about = "Find D(n), the n-th positive integer whose digit sum is prime",
    long_about = "Project Euler 845 (https://projecteuler.net/problem=845):\n\
                  Let D(n) be the n-th positive integer that has the sum of its digits prime.\n\
                  For example, D(61) = 157 and D(10^8) = 403539364. Find D(10^16)."
)]
struct Cli {
    /// Rank n of the integer to find (default: 10^16)
    rank: Option<Count>,

    /// Counting strategy
    #[arg(long, value_enum, global = true)]
    method: Option<Method>,

    /// Largest digit sum covered by the primality table
    #[arg(long, global = true)]
    sieve_limit: Option<usize>,

    /// TOML configuration file
    #[arg(long, env = "DIGITSUM_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log every bucket and digit decision
    #[arg(long, global = true)]
    trace: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Count k-digit numbers with digit sum q
    Count {
        /// Digit count k
        #[arg(long)]
        digits: u32,
        /// Digit sum q
        #[arg(long)]
        sum: u32,
    },
    /// Print the i-th smallest k-digit number with digit sum q
    Nth {
        /// Rank i (1-based)
        #[arg(long)]
        rank: Count,
        /// Digit count k
        #[arg(long)]
        digits: u32,
        /// Digit sum q
        #[arg(long)]
        sum: u32,
    },
    /// Cross-check the counting strategy against brute-force enumeration
    Verify {
        /// Check every digit count up to this one
        #[arg(long, default_value_t = digitsum::verify::DEFAULT_VERIFY_DIGITS)]
        max_digits: u32,
    },
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // LOG_FORMAT=json for log shipping, human-readable otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    let config = cli::resolve_config(&cli)?;

    match &cli.command {
        None => cli::run_find(&cli, &config, cli.rank.unwrap_or(DEFAULT_RANK)),
        Some(Commands::Count { digits, sum }) => cli::run_count(&cli, &config, *digits, *sum),
        Some(Commands::Nth { rank, digits, sum }) => {
            cli::run_nth(&cli, &config, *rank, *digits, *sum)
        }
        Some(Commands::Verify { max_digits }) => cli::run_verify(&cli, &config, *max_digits),
    }
}
