//! Property-based tests for digitsum's counting and ranking primitives.
//!
//! These tests use the `proptest` framework to check invariants over randomly
//! generated digit counts, sums and ranks, plus one exhaustive brute-force
//! pass that pins the counters to enumeration for every `k <= 6`.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test property_tests
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```
//!
//! Each property is named `prop_<function>_<invariant>`.

use proptest::prelude::*;
use rug::Integer;

use digitsum::binomial::binomial;
use digitsum::counter::{ClosedForm, DigitSumCounter, Enumerate, Tabulated};
use digitsum::driver::find_rank;
use digitsum::rank::nth;
use digitsum::sieve::PrimeSieve;
use digitsum::{digit_count, digit_sum, max_digit_sum, Count, MAX_DIGITS};

/// A digit count and a sum inside its valid range.
fn bucket(max_digits: u32) -> impl Strategy<Value = (u32, u32)> {
    (1..=max_digits).prop_flat_map(|k| (Just(k), 1..=max_digit_sum(k)))
}

// == Brute-force agreement ===================================================

/// For all 1 <= k <= 6 and 1 <= q <= 9k, the closed form and the tabulated
/// recurrence both equal the enumerated count.
#[test]
fn counters_match_enumeration_up_to_six_digits() {
    let tabulated = Tabulated::new();
    for k in 1..=6 {
        let buckets = Enumerate::histogram(k).unwrap();
        for q in 1..=max_digit_sum(k) {
            let expected = buckets[q as usize].count;
            assert_eq!(ClosedForm.count(k, q).unwrap(), expected, "closed form ({k}, {q})");
            assert_eq!(tabulated.count(k, q).unwrap(), expected, "tabulated ({k}, {q})");
        }
    }
}

/// nth(1) is the smallest member and nth(count) the largest, for every bucket
/// up to five digits.
#[test]
fn ranker_extremes_match_enumeration() {
    for k in 1..=5 {
        let buckets = Enumerate::histogram(k).unwrap();
        for q in 1..=max_digit_sum(k) {
            let b = buckets[q as usize];
            assert_eq!(Some(nth(&ClosedForm, 1, k, q, None).unwrap()), b.smallest);
            assert_eq!(Some(nth(&ClosedForm, b.count, k, q, None).unwrap()), b.largest);
        }
    }
}

#[test]
fn concrete_cases() {
    assert_eq!(ClosedForm.count(1, 5).unwrap(), 1);
    assert_eq!(ClosedForm.count(2, 9).unwrap(), 9);
    assert_eq!(nth(&ClosedForm, 1, 2, 9, None).unwrap(), 18);
    assert_eq!(nth(&ClosedForm, 9, 2, 9, None).unwrap(), 90);
}

#[test]
fn published_fixtures() {
    let sieve = PrimeSieve::default();
    assert_eq!(find_rank(61, &sieve, &ClosedForm, None).unwrap().value, 157);
    assert_eq!(
        find_rank(100_000_000, &sieve, &ClosedForm, None).unwrap().value,
        403_539_364
    );
}

proptest! {
    /// count(k, q) == count(k, 9k + 1 - q).
    ///
    /// Reflecting every digit d -> 9 - d except the leading one, which maps
    /// d -> 10 - d, is a bijection between the two buckets.
    #[test]
    fn prop_count_reflection_symmetry((k, q) in bucket(MAX_DIGITS)) {
        let tabulated = Tabulated::new();
        prop_assert_eq!(
            tabulated.count(k, q).unwrap(),
            tabulated.count(k, max_digit_sum(k) + 1 - q).unwrap()
        );
    }

    /// The closed form agrees with the recurrence at every width.
    #[test]
    fn prop_closed_form_matches_tabulated((k, q) in bucket(MAX_DIGITS)) {
        prop_assert_eq!(
            ClosedForm.count(k, q).unwrap(),
            Tabulated::new().count(k, q).unwrap()
        );
    }

    /// nth(i) is a k-digit number with digit sum q, and nth(i) < nth(i + 1).
    #[test]
    fn prop_nth_is_increasing_member(
        (k, q) in bucket(20),
        pick in any::<u128>(),
    ) {
        let tabulated = Tabulated::new();
        let count = tabulated.count(k, q).unwrap();
        let i: Count = pick % count + 1;
        let value = nth(&tabulated, i, k, q, None).unwrap();
        prop_assert_eq!(digit_count(value), k);
        prop_assert_eq!(digit_sum(value), q);
        if i < count {
            let next = nth(&tabulated, i + 1, k, q, None).unwrap();
            prop_assert!(value < next, "nth({}) = {} !< nth({}) = {}", i, value, i + 1, next);
        }
    }

    /// Our multiplicative binomial matches GMP's.
    #[test]
    fn prop_binomial_matches_gmp(n in 0u32..500, k in 0u32..500) {
        let expected = Integer::from(Integer::binomial_u(n, k));
        prop_assert_eq!(binomial(i64::from(n), i64::from(k)), expected);
    }

    /// The sieve agrees with GMP's primality test everywhere in its range.
    #[test]
    fn prop_sieve_matches_gmp(max in 0usize..2000) {
        let sieve = PrimeSieve::build(max);
        for n in 0..=max {
            let gmp = Integer::from(n).is_probably_prime(30) != rug::integer::IsPrime::No;
            prop_assert_eq!(sieve.is_prime(n), gmp, "n = {}", n);
        }
    }

    /// D(n) has a prime digit sum, and D(n) < D(n + 1).
    #[test]
    fn prop_find_rank_is_increasing(n in 1u128..10_000_000_000) {
        let sieve = PrimeSieve::default();
        let tabulated = Tabulated::new();
        let here = find_rank(n, &sieve, &tabulated, None).unwrap();
        let next = find_rank(n + 1, &sieve, &tabulated, None).unwrap();
        prop_assert!(sieve.is_prime(digit_sum(here.value) as usize));
        prop_assert!(here.value < next.value);
    }
}

// Bignum-heavy: the ranker issues hundreds of closed-form queries per case.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Closed form and tabulated counters drive the ranker to the same number.
    #[test]
    fn prop_nth_independent_of_counter(
        (k, q) in bucket(MAX_DIGITS),
        pick in any::<u128>(),
    ) {
        let tabulated = Tabulated::new();
        let count = tabulated.count(k, q).unwrap();
        let i: Count = pick % count + 1;
        prop_assert_eq!(
            nth(&tabulated, i, k, q, None).unwrap(),
            nth(&ClosedForm, i, k, q, None).unwrap()
        );
    }
}
