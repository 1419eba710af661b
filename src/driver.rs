//! # Driver — The n-th Positive Integer with a Prime Digit Sum
//!
//! Sweeps `(digits, sum)` buckets one digit count at a time until the running
//! total reaches the target rank, then reconstructs the answer.
//!
//! ## Sweep order
//!
//! Every `k`-digit number is smaller than every `(k+1)`-digit number, so
//! summing bucket sizes per digit count finds the length of the answer and
//! how many qualifying integers precede that length. Within one length the
//! sum buckets interleave numerically (17 has sum 8, 18 has sum 9, 20 has
//! sum 2), so the answer cannot be taken as "the i-th member of the bucket
//! where the running total crosses the target".
//!
//! The answer is instead resolved digit by digit: at each position, for each
//! candidate digit, count the completions whose total digit sum is prime
//! (`count_strings` summed over every prime target) and descend into the
//! digit where the cumulative count first reaches the remaining rank. The
//! bucket and in-bucket rank of the result are reported alongside it.
//!
//! ## Complexity
//!
//! With `k` digits in the answer and `P` primes up to `9k`, the sweep costs
//! `O(k * P)` counter queries and the descent `O(k * 10 * P)`.

use serde::Serialize;
use tracing::debug;

use crate::counter::DigitSumCounter;
use crate::sieve::PrimeSieve;
use crate::trace::TraceSink;
use crate::{max_digit_sum, Count, Error, Result, MAX_DIGITS};

/// Where the target rank landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Located {
    /// The requested rank among all positive integers with a prime digit sum.
    pub rank: Count,
    /// The integer at that rank.
    pub value: u128,
    /// Its digit count.
    pub digits: u32,
    /// Its digit sum.
    pub sum: u32,
    /// Its rank inside the `(digits, sum)` bucket.
    pub local_rank: Count,
    /// Qualifying integers with fewer digits.
    pub preceding: Count,
}

/// The `target`-th positive integer (1-based, ascending) whose digit sum is
/// prime according to `sieve`.
pub fn find_rank(
    target: Count,
    sieve: &PrimeSieve,
    counter: &dyn DigitSumCounter,
    trace: Option<&dyn TraceSink>,
) -> Result<Located> {
    if target == 0 {
        return Err(Error::ZeroRank);
    }

    let mut found: Count = 0;
    for digits in 1..=MAX_DIGITS {
        let top = max_digit_sum(digits) as usize;
        if !sieve.covers(top) {
            return Err(Error::SieveTooSmall {
                limit: sieve.limit(),
                required: top,
            });
        }

        let mut in_length: Count = 0;
        for sum in sieve.primes_in(2, top) {
            let sum = sum as u32;
            let block = counter.count(digits, sum)?;
            if let Some(trace) = trace {
                trace.bucket(digits, sum, block, found + in_length);
            }
            in_length = in_length
                .checked_add(block)
                .ok_or(Error::Overflow { digits, sum })?;
        }

        if found + in_length >= target {
            debug!(digits, preceding = %found, in_length = %in_length, "located digit count");
            return locate_in_length(target, found, digits, sieve, counter, trace);
        }
        found += in_length;
    }

    Err(Error::TooManyDigits {
        digits: MAX_DIGITS + 1,
        max: MAX_DIGITS,
    })
}

/// Qualifying completions of `len` free positions when the digits so far sum
/// to `spent`, over every prime total up to `top`.
fn qualifying_completions(
    len: u32,
    spent: u32,
    top: usize,
    sieve: &PrimeSieve,
    counter: &dyn DigitSumCounter,
) -> Result<Count> {
    let mut total: Count = 0;
    for sum in sieve.primes_in(spent.max(2) as usize, top) {
        total += counter.count_strings(len, sum as u32 - spent)?;
    }
    Ok(total)
}

/// Resolve the answer among the `digits`-digit numbers, `preceding` qualifying
/// numbers having been skipped already.
fn locate_in_length(
    target: Count,
    preceding: Count,
    digits: u32,
    sieve: &PrimeSieve,
    counter: &dyn DigitSumCounter,
    trace: Option<&dyn TraceSink>,
) -> Result<Located> {
    let top = max_digit_sum(digits) as usize;
    let mut rank = target - preceding;
    let mut value: u128 = 0;
    let mut spent: u32 = 0;

    for position in 0..digits {
        let tail = digits - position - 1;
        let first = if position == 0 { 1 } else { 0 };
        let mut skipped: Count = 0;
        let mut chosen = None;
        for digit in first..=9u32 {
            let block = qualifying_completions(tail, spent + digit, top, sieve, counter)?;
            if skipped + block >= rank {
                chosen = Some(digit);
                break;
            }
            skipped += block;
        }
        let digit = chosen.ok_or(Error::InvalidRank {
            rank,
            count: skipped,
            digits,
            sum: spent,
        })?;
        if let Some(trace) = trace {
            trace.digit(position, digit, skipped, rank);
        }
        value = value * 10 + u128::from(digit);
        rank -= skipped;
        spent += digit;
    }

    // Rank of the answer within its own (digits, sum) bucket.
    let local_rank = count_below_in_bucket(value, digits, spent, counter)? + 1;

    Ok(Located {
        rank: target,
        value,
        digits,
        sum: spent,
        local_rank,
        preceding,
    })
}

/// Members of the `(digits, sum)` bucket that are smaller than `value`.
fn count_below_in_bucket(
    value: u128,
    digits: u32,
    sum: u32,
    counter: &dyn DigitSumCounter,
) -> Result<Count> {
    let mut below: Count = 0;
    let mut spent: u32 = 0;
    let mut place = 10u128.pow(digits - 1);
    for position in 0..digits {
        let digit = ((value / place) % 10) as u32;
        let tail = digits - position - 1;
        let first = if position == 0 { 1 } else { 0 };
        for smaller in first..digit {
            if spent + smaller <= sum {
                below += counter.count_strings(tail, sum - spent - smaller)?;
            }
        }
        spent += digit;
        place /= 10;
    }
    Ok(below)
}
