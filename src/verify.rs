//! # Verify — Cross-Checking a Counter Against Enumeration
//!
//! Walks every `k`-digit number for `k <= max_digits`, buckets them by digit
//! sum, and compares each bucket with what the counter and ranker under test
//! claim: the bucket size, the first member, and the last member.
//!
//! Digit counts are independent, so they are checked in parallel with rayon;
//! the 6-digit pass dominates (900,000 candidates).

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::counter::{DigitSumCounter, Enumerate, SumBucket, ENUMERATE_MAX_DIGITS};
use crate::rank::nth;
use crate::{max_digit_sum, Count, Error, Result};

/// Default depth of the self-test.
pub const DEFAULT_VERIFY_DIGITS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub digits: u32,
    pub sum: u32,
    pub check: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub method: &'static str,
    pub max_digits: u32,
    pub buckets_checked: u64,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare `counter` (and the ranker driven by it) with enumeration for every
/// digit count in `1..=max_digits` and every sum in `1..=9k`.
pub fn verify(counter: &dyn DigitSumCounter, max_digits: u32) -> Result<VerifyReport> {
    if max_digits > ENUMERATE_MAX_DIGITS {
        return Err(Error::EnumerationTooLarge {
            digits: max_digits,
            max: ENUMERATE_MAX_DIGITS,
        });
    }

    let per_length: Vec<(u64, Vec<Mismatch>)> = (1..=max_digits)
        .into_par_iter()
        .map(|digits| verify_length(counter, digits))
        .collect::<Result<_>>()?;

    let mut buckets_checked = 0;
    let mut mismatches = Vec::new();
    for (checked, found) in per_length {
        buckets_checked += checked;
        mismatches.extend(found);
    }

    info!(
        method = counter.name(),
        max_digits,
        buckets_checked,
        mismatches = mismatches.len(),
        "verification finished"
    );

    Ok(VerifyReport {
        method: counter.name(),
        max_digits,
        buckets_checked,
        mismatches,
    })
}

fn verify_length(counter: &dyn DigitSumCounter, digits: u32) -> Result<(u64, Vec<Mismatch>)> {
    let buckets = Enumerate::histogram(digits)?;
    let mut mismatches = Vec::new();
    for sum in 1..=max_digit_sum(digits) {
        let expected = buckets[sum as usize];
        check_bucket(counter, digits, sum, expected, &mut mismatches)?;
    }
    Ok((u64::from(max_digit_sum(digits)), mismatches))
}

fn check_bucket(
    counter: &dyn DigitSumCounter,
    digits: u32,
    sum: u32,
    expected: SumBucket,
    mismatches: &mut Vec<Mismatch>,
) -> Result<()> {
    let mut push = |check: &'static str, expected: String, actual: String| {
        mismatches.push(Mismatch {
            digits,
            sum,
            check,
            expected,
            actual,
        })
    };

    let count = counter.count(digits, sum)?;
    if count != expected.count {
        push("count", expected.count.to_string(), count.to_string());
        // Ranks are meaningless against a wrong count.
        return Ok(());
    }
    if count == 0 {
        return Ok(());
    }

    let ends: [(&'static str, Count, Option<u128>); 2] = [
        ("smallest", 1, expected.smallest),
        ("largest", count, expected.largest),
    ];
    for (check, rank, want) in ends {
        let got = nth(counter, rank, digits, sum, None)?;
        if Some(got) != want {
            push(check, format!("{:?}", want), got.to_string());
        }
    }
    Ok(())
}
