//! # Sieve — Primality Table for Digit Sums
//!
//! The driver needs one question answered over and over: is this digit sum
//! prime? Digit sums are tiny (at most 9 * 38 = 342 for the widest number the
//! crate handles), so a plain boolean table indexed by value is the whole
//! data structure.
//!
//! ## Algorithm: Sieve of Eratosthenes
//!
//! Start with every index >= 2 marked prime. For each `p` with `p * p <= max`
//! that is still marked, clear `p*p, p*p + p, ...`. Indices 0 and 1 are never
//! prime. Complexity: O(n log log n) time, O(n) space.
//!
//! The table is built once and never mutated afterwards; callers share it by
//! reference.
//!
//! ## References
//!
//! - Eratosthenes of Cyrene, ~240 BCE (sieve algorithm).
//! - OEIS A000720: pi(n), the prime counting function.

/// Default table size: covers every digit sum of a 38-digit number with margin.
pub const DEFAULT_SIEVE_LIMIT: usize = 400;

/// Largest table [`PrimeSieve::build`] will allocate. Far beyond any digit
/// sum the crate can produce.
pub const MAX_SIEVE_LIMIT: usize = 1 << 20;

/// Immutable primality table for `0..=limit`.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    is_prime: Vec<bool>,
}

impl PrimeSieve {
    /// Build the table for all values in `0..=max`, with `max` clamped to
    /// [`MAX_SIEVE_LIMIT`].
    pub fn build(max: usize) -> Self {
        let max = max.min(MAX_SIEVE_LIMIT);
        let mut is_prime = vec![true; max + 1];
        is_prime[0] = false;
        if max >= 1 {
            is_prime[1] = false;
        }
        let mut p = 2;
        while p * p <= max {
            if is_prime[p] {
                let mut multiple = p * p;
                while multiple <= max {
                    is_prime[multiple] = false;
                    multiple += p;
                }
            }
            p += 1;
        }
        PrimeSieve { is_prime }
    }

    /// Largest value the table classifies.
    #[inline]
    pub fn limit(&self) -> usize {
        self.is_prime.len() - 1
    }

    /// Whether `n` is prime. Values beyond the limit report `false`; callers
    /// that can exceed the limit check [`PrimeSieve::covers`] first.
    #[inline]
    pub fn is_prime(&self, n: usize) -> bool {
        self.is_prime.get(n).copied().unwrap_or(false)
    }

    /// Whether the table classifies every value in `0..=n`.
    #[inline]
    pub fn covers(&self, n: usize) -> bool {
        n <= self.limit()
    }

    /// Primes in `lo..=hi`, ascending. `hi` is clamped to the table limit.
    pub fn primes_in(&self, lo: usize, hi: usize) -> impl Iterator<Item = usize> + '_ {
        let hi = hi.min(self.limit());
        (lo..=hi).filter(move |&n| self.is_prime[n])
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        PrimeSieve::build(DEFAULT_SIEVE_LIMIT)
    }
}
