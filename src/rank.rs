//! # Rank — Reconstructing the i-th Number with a Given Digit Sum
//!
//! Inverse of counting: given `1 <= i <= count(k, q)`, produce the `i`-th
//! smallest `k`-digit number whose digits sum to `q`.
//!
//! ## Algorithm
//!
//! Numbers in a `(k, q)` bucket, sorted ascending, are grouped by their leading
//! digit: first every member starting with 1, then every member starting with
//! 2, and so on. The group for leading digit `d` has exactly
//! `count_strings(k - 1, q - d)` members. Walking `d` upwards and subtracting
//! group sizes from `i` locates the leading digit; the same step then repeats
//! on the remaining `k - 1` positions, where 0 is now a legal digit.
//!
//! Each position costs at most ten counter queries, so a 17-digit answer needs
//! under 170 of them.

use crate::counter::DigitSumCounter;
use crate::trace::TraceSink;
use crate::{check_digits, max_digit_sum, Count, Error, Result};

/// The `rank`-th smallest `digits`-digit number with digit sum `sum` (1-based).
pub fn nth(
    counter: &dyn DigitSumCounter,
    rank: Count,
    digits: u32,
    sum: u32,
    trace: Option<&dyn TraceSink>,
) -> Result<u128> {
    check_digits(digits)?;
    if sum == 0 || sum > max_digit_sum(digits) {
        return Err(Error::InvalidSum {
            digits,
            sum,
            max: max_digit_sum(digits),
        });
    }
    let count = counter.count(digits, sum)?;
    if rank == 0 || rank > count {
        return Err(Error::InvalidRank {
            rank,
            count,
            digits,
            sum,
        });
    }

    let mut value: u128 = 0;
    let mut rank = rank;
    let mut remaining = sum;
    for position in 0..digits {
        let tail = digits - position - 1;
        let first = if position == 0 { 1 } else { 0 };
        let mut skipped: Count = 0;
        let mut chosen = None;
        for digit in first..=remaining.min(9) {
            let block = counter.count_strings(tail, remaining - digit)?;
            if skipped + block >= rank {
                chosen = Some(digit);
                break;
            }
            skipped += block;
        }
        // Unreachable once the rank was validated against `count`, unless the
        // counter disagrees with itself between `count` and `count_strings`.
        let digit = chosen.ok_or(Error::InvalidRank {
            rank,
            count: skipped,
            digits,
            sum,
        })?;
        if let Some(trace) = trace {
            trace.digit(position, digit, skipped, rank);
        }
        value = value * 10 + u128::from(digit);
        rank -= skipped;
        remaining -= digit;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{ClosedForm, Enumerate, Tabulated};
    use crate::trace::RecordingTrace;
    use crate::{digit_count, digit_sum};

    #[test]
    fn two_digit_sum_nine() {
        assert_eq!(nth(&ClosedForm, 1, 2, 9, None).unwrap(), 18);
        assert_eq!(nth(&ClosedForm, 2, 2, 9, None).unwrap(), 27);
        assert_eq!(nth(&ClosedForm, 9, 2, 9, None).unwrap(), 90);
    }

    #[test]
    fn single_digit_is_the_sum() {
        for q in 1..=9 {
            assert_eq!(nth(&Tabulated::new(), 1, 1, q, None).unwrap(), u128::from(q));
        }
    }

    #[test]
    fn zeros_inside_the_number() {
        // 3-digit numbers with digit sum 1: only 100.
        assert_eq!(nth(&ClosedForm, 1, 3, 1, None).unwrap(), 100);
        // Digit sum 2: 101, 110, 200.
        assert_eq!(nth(&ClosedForm, 1, 3, 2, None).unwrap(), 101);
        assert_eq!(nth(&ClosedForm, 2, 3, 2, None).unwrap(), 110);
        assert_eq!(nth(&ClosedForm, 3, 3, 2, None).unwrap(), 200);
    }

    #[test]
    fn rank_out_of_range() {
        assert_eq!(
            nth(&ClosedForm, 0, 2, 9, None),
            Err(Error::InvalidRank {
                rank: 0,
                count: 9,
                digits: 2,
                sum: 9
            })
        );
        assert_eq!(
            nth(&ClosedForm, 10, 2, 9, None),
            Err(Error::InvalidRank {
                rank: 10,
                count: 9,
                digits: 2,
                sum: 9
            })
        );
    }

    #[test]
    fn sum_out_of_range() {
        assert_eq!(
            nth(&ClosedForm, 1, 2, 0, None),
            Err(Error::InvalidSum {
                digits: 2,
                sum: 0,
                max: 18
            })
        );
        assert_eq!(
            nth(&ClosedForm, 1, 2, 19, None),
            Err(Error::InvalidSum {
                digits: 2,
                sum: 19,
                max: 18
            })
        );
    }

    #[test]
    fn matches_enumeration_for_every_four_digit_bucket() {
        let buckets = Enumerate::histogram(4).unwrap();
        for q in 1..=36u32 {
            let mut expected: Vec<u128> = (1000u128..10_000).filter(|&n| digit_sum(n) == q).collect();
            expected.sort_unstable();
            assert_eq!(expected.len() as Count, buckets[q as usize].count);
            for (i, &want) in expected.iter().enumerate() {
                let got = nth(&ClosedForm, i as Count + 1, 4, q, None).unwrap();
                assert_eq!(got, want, "rank {} of (4, {})", i + 1, q);
            }
        }
    }

    #[test]
    fn widest_numbers() {
        let tabulated = Tabulated::new();
        let digits = crate::MAX_DIGITS;
        let top = max_digit_sum(digits);
        // Only one 38-digit number has every digit 9.
        assert_eq!(nth(&tabulated, 1, digits, top, None).unwrap(), 10u128.pow(38) - 1);
        let smallest = nth(&tabulated, 1, digits, 1, None).unwrap();
        assert_eq!(smallest, 10u128.pow(37));
        assert_eq!(digit_count(smallest), digits);
    }

    #[test]
    fn trace_sees_every_position() {
        let trace = RecordingTrace::default();
        let value = nth(&ClosedForm, 9, 2, 9, Some(&trace)).unwrap();
        assert_eq!(value, 90);
        let digits = trace.digits.lock().unwrap();
        // Leading 9 skips the eight members 18..81; the tail 0 skips nothing.
        assert_eq!(*digits, vec![(0, 9, 8, 9), (1, 0, 0, 1)]);
    }
}
