//! # Counter — How Many Numbers Have a Given Digit Sum
//!
//! Counts `k`-digit numbers (no leading zero) whose digits sum to `q`, without
//! listing them. Three interchangeable strategies sit behind
//! [`DigitSumCounter`]:
//!
//! | Strategy     | Cost per query          | Range                     |
//! |--------------|-------------------------|---------------------------|
//! | `ClosedForm` | O(k * q/10) bignum ops  | up to [`MAX_DIGITS`]      |
//! | `Tabulated`  | O(1) after O(k * 9k * 10) setup | up to [`MAX_DIGITS`] |
//! | `Enumerate`  | O(10^k)                 | up to [`ENUMERATE_MAX_DIGITS`] |
//!
//! ## Two levels of counting
//!
//! Every strategy implements `count_strings(len, sum)`: the number of
//! length-`len` strings over `0..=9` (leading zeros allowed) summing to `sum`.
//! `count(k, q)` then peels off the leading digit `d1 in 1..=9`:
//!
//! ```text
//! count(k, q) = sum_{d1=1}^{min(9,q)} count_strings(k - 1, q - d1)
//! ```
//!
//! The ranker works on the string level for every position after the first.
//!
//! ## Algorithm: Inclusion-Exclusion
//!
//! Without the `<= 9` cap, the number of ways to write `r` as an ordered sum of
//! `m` non-negative parts is `C(r + m - 1, m - 1)` (stars and bars). Forcing
//! `i` chosen digits to be `>= 10` removes `10i` from the budget, so
//!
//! ```text
//! count_strings(m, r) = sum_{i=0}^{min(m, r/10)} (-1)^i C(m, i) C(r - 10i + m - 1, m - 1)
//! ```
//!
//! The alternating sum is carried in arbitrary precision; only the final
//! value is narrowed to [`Count`].
//!
//! ## Algorithm: Tabulated Recurrence
//!
//! `S(0, 0) = 1`, `S(m, r) = sum_{d=0}^{min(9, r)} S(m - 1, r - d)`. The table
//! for every `m <= MAX_DIGITS` is filled at construction; `S(m, r) <= 10^m`
//! so every entry fits.
//!
//! ## References
//!
//! - Math StackExchange 1125070, "Counting the numbers with certain sum of digits".

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::binomial::binomial;
use crate::{check_digits, max_digit_sum, Count, Error, Result, MAX_DIGITS};

/// Largest digit count [`Enumerate`] will walk.
pub const ENUMERATE_MAX_DIGITS: u32 = 7;

/// Counts numbers and digit strings by digit sum.
pub trait DigitSumCounter: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Number of length-`len` strings over `0..=9` (leading zeros allowed)
    /// whose digits sum to `sum`. `count_strings(0, 0) == 1`.
    fn count_strings(&self, len: u32, sum: u32) -> Result<Count>;

    /// Number of `digits`-digit numbers (no leading zero) with digit sum `sum`.
    /// Zero when `sum` is outside `[1, 9 * digits]`.
    fn count(&self, digits: u32, sum: u32) -> Result<Count> {
        check_digits(digits)?;
        if sum == 0 || sum > max_digit_sum(digits) {
            return Ok(0);
        }
        if digits == 1 {
            return Ok(1);
        }
        let mut total: Count = 0;
        for lead in 1..=sum.min(9) {
            let block = self.count_strings(digits - 1, sum - lead)?;
            total = total
                .checked_add(block)
                .ok_or(Error::Overflow { digits, sum })?;
        }
        Ok(total)
    }
}

/// Selects a [`DigitSumCounter`] implementation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Inclusion-exclusion over binomial coefficients
    #[default]
    ClosedForm,
    /// Precomputed digit-by-digit recurrence
    Tabulated,
    /// Walk every candidate (small digit counts only)
    Enumerate,
}

impl Method {
    pub fn counter(self) -> Box<dyn DigitSumCounter> {
        match self {
            Method::ClosedForm => Box::new(ClosedForm),
            Method::Tabulated => Box::new(Tabulated::new()),
            Method::Enumerate => Box::new(Enumerate),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::ClosedForm => write!(f, "closed-form"),
            Method::Tabulated => write!(f, "tabulated"),
            Method::Enumerate => write!(f, "enumerate"),
        }
    }
}

// ── Closed form ─────────────────────────────────────────────────

/// Inclusion-exclusion with exact binomial coefficients.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedForm;

impl DigitSumCounter for ClosedForm {
    fn name(&self) -> &'static str {
        "closed-form"
    }

    fn count_strings(&self, len: u32, sum: u32) -> Result<Count> {
        if len > MAX_DIGITS {
            return Err(Error::TooManyDigits {
                digits: len,
                max: MAX_DIGITS,
            });
        }
        if sum > max_digit_sum(len) {
            return Ok(0);
        }
        if len == 0 {
            return Ok(1);
        }
        let m = i64::from(len);
        let r = i64::from(sum);
        let mut total = Integer::new();
        for i in 0..=m.min(r / 10) {
            let term = binomial(m, i) * binomial(r - 10 * i + m - 1, m - 1);
            if i % 2 == 0 {
                total += term;
            } else {
                total -= term;
            }
        }
        total.to_u128().ok_or(Error::Overflow { digits: len, sum })
    }
}

// ── Tabulated recurrence ────────────────────────────────────────

/// `S(m, r)` for every `m <= MAX_DIGITS`, `r <= 9m`, filled once.
#[derive(Debug, Clone)]
pub struct Tabulated {
    table: Vec<Vec<Count>>,
}

impl Tabulated {
    pub fn new() -> Self {
        let mut table: Vec<Vec<Count>> = Vec::with_capacity(MAX_DIGITS as usize + 1);
        table.push(vec![1]);
        for m in 1..=MAX_DIGITS as usize {
            let prev = &table[m - 1];
            let row: Vec<Count> = (0..=9 * m)
                .map(|r| {
                    let lo = r.saturating_sub(9);
                    let hi = r.min(prev.len() - 1);
                    if lo > hi {
                        0
                    } else {
                        prev[lo..=hi].iter().sum()
                    }
                })
                .collect();
            table.push(row);
        }
        Tabulated { table }
    }
}

impl Default for Tabulated {
    fn default() -> Self {
        Tabulated::new()
    }
}

impl DigitSumCounter for Tabulated {
    fn name(&self) -> &'static str {
        "tabulated"
    }

    fn count_strings(&self, len: u32, sum: u32) -> Result<Count> {
        let row = self.table.get(len as usize).ok_or(Error::TooManyDigits {
            digits: len,
            max: MAX_DIGITS,
        })?;
        Ok(row.get(sum as usize).copied().unwrap_or(0))
    }
}

// ── Enumeration ─────────────────────────────────────────────────

/// Members of one `(digits, sum)` bucket found by enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SumBucket {
    pub count: Count,
    pub smallest: Option<u128>,
    pub largest: Option<u128>,
}

/// Naive enumeration of every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumerate;

impl Enumerate {
    /// Walk every `digits`-digit number once and bucket it by digit sum.
    /// Index `q` of the result describes digit sum `q`, for `q in 0..=9*digits`.
    pub fn histogram(digits: u32) -> Result<Vec<SumBucket>> {
        check_digits(digits)?;
        check_enumerable(digits)?;
        let lo = 10u64.pow(digits - 1);
        let hi = 10u64.pow(digits);
        let mut buckets = vec![SumBucket::default(); max_digit_sum(digits) as usize + 1];
        for n in lo..hi {
            let bucket = &mut buckets[crate::digit_sum(u128::from(n)) as usize];
            bucket.count += 1;
            if bucket.smallest.is_none() {
                bucket.smallest = Some(u128::from(n));
            }
            bucket.largest = Some(u128::from(n));
        }
        Ok(buckets)
    }
}

fn check_enumerable(digits: u32) -> Result<()> {
    if digits > ENUMERATE_MAX_DIGITS {
        return Err(Error::EnumerationTooLarge {
            digits,
            max: ENUMERATE_MAX_DIGITS,
        });
    }
    Ok(())
}

impl DigitSumCounter for Enumerate {
    fn name(&self) -> &'static str {
        "enumerate"
    }

    fn count_strings(&self, len: u32, sum: u32) -> Result<Count> {
        check_enumerable(len)?;
        let hi = 10u64.pow(len);
        Ok((0..hi)
            .filter(|&n| crate::digit_sum(u128::from(n)) == sum)
            .count() as Count)
    }

    fn count(&self, digits: u32, sum: u32) -> Result<Count> {
        let buckets = Enumerate::histogram(digits)?;
        Ok(buckets
            .get(sum as usize)
            .map(|bucket| bucket.count)
            .unwrap_or(0))
    }
}
