//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Resolves the
//! configuration, builds the sieve and counter once, runs the requested
//! operation and prints the result.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

use digitsum::config::SolverConfig;
use digitsum::counter::DigitSumCounter;
use digitsum::driver::find_rank;
use digitsum::rank::nth;
use digitsum::sieve::PrimeSieve;
use digitsum::trace::{LogTrace, TraceSink};
use digitsum::verify::verify;
use digitsum::Count;

use super::Cli;

/// Merge the config file (if any) with command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<SolverConfig> {
    let config = SolverConfig::load(cli.config.as_deref())?
        .with_overrides(cli.method, cli.sieve_limit, cli.trace)?;
    info!(
        method = %config.method,
        sieve_limit = config.sieve_limit,
        trace = config.trace,
        "configuration resolved"
    );
    Ok(config)
}

fn trace_sink(config: &SolverConfig) -> Option<&'static dyn TraceSink> {
    if config.trace {
        Some(&LogTrace)
    } else {
        None
    }
}

/// Print `value` as pretty JSON, or `text` otherwise.
fn emit<T: Serialize>(cli: &Cli, value: &T, text: impl std::fmt::Display) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

// ── D(n) ────────────────────────────────────────────────────────

pub fn run_find(cli: &Cli, config: &SolverConfig, rank: Count) -> Result<()> {
    let sieve = PrimeSieve::build(config.sieve_limit);
    let counter = config.method.counter();

    let start = Instant::now();
    let located = find_rank(rank, &sieve, counter.as_ref(), trace_sink(config))
        .with_context(|| format!("finding D({})", rank))?;
    info!(
        rank = %located.rank,
        digits = located.digits,
        sum = located.sum,
        local_rank = %located.local_rank,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "located"
    );

    emit(cli, &located, located.value)
}

// ── Building blocks ─────────────────────────────────────────────

#[derive(Serialize)]
struct CountOutput {
    digits: u32,
    sum: u32,
    count: Count,
}

pub fn run_count(cli: &Cli, config: &SolverConfig, digits: u32, sum: u32) -> Result<()> {
    let counter = config.method.counter();
    let count = counter.count(digits, sum)?;
    emit(cli, &CountOutput { digits, sum, count }, count)
}

#[derive(Serialize)]
struct NthOutput {
    rank: Count,
    digits: u32,
    sum: u32,
    value: u128,
}

pub fn run_nth(cli: &Cli, config: &SolverConfig, rank: Count, digits: u32, sum: u32) -> Result<()> {
    let counter = config.method.counter();
    let value = nth(counter.as_ref(), rank, digits, sum, trace_sink(config))?;
    emit(
        cli,
        &NthOutput {
            rank,
            digits,
            sum,
            value,
        },
        value,
    )
}

// ── Self-test ───────────────────────────────────────────────────

pub fn run_verify(cli: &Cli, config: &SolverConfig, max_digits: u32) -> Result<()> {
    let counter: Box<dyn DigitSumCounter> = config.method.counter();
    let report = verify(counter.as_ref(), max_digits)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for m in &report.mismatches {
            warn!(
                digits = m.digits,
                sum = m.sum,
                check = m.check,
                expected = %m.expected,
                actual = %m.actual,
                "mismatch"
            );
        }
        println!(
            "{}: {} buckets checked up to {} digits, {} mismatches",
            report.method,
            report.buckets_checked,
            report.max_digits,
            report.mismatches.len()
        );
    }

    if !report.passed() {
        bail!(
            "{} disagrees with enumeration in {} buckets",
            report.method,
            report.mismatches.len()
        );
    }
    Ok(())
}
