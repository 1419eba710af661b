//! # Binomial — Exact Binomial Coefficients
//!
//! `C(n, k)` in arbitrary precision, used by the closed-form digit-sum counter.
//!
//! ## Algorithm
//!
//! Multiplicative formula over the smaller of `k` and `n - k`:
//!
//! ```text
//! C(n, k) = prod_{i=0}^{k-1} (n - i) / (i + 1)
//! ```
//!
//! The division is applied after every multiplication. After step `i` the
//! accumulator equals `C(n, i + 1)`, so each division is exact and the
//! intermediate value never exceeds `C(n, k) * (n - k + 1)`.
//!
//! Out-of-range arguments (`n < 0`, `k < 0`, `k > n`) yield zero rather than an
//! error. The inclusion-exclusion sum relies on this: terms whose lower index
//! runs negative simply vanish.

use rug::Integer;

/// Exact `C(n, k)`; zero when `n < 0`, `k < 0` or `k > n`.
pub fn binomial(n: i64, k: i64) -> Integer {
    if n < 0 || k < 0 || k > n {
        return Integer::new();
    }
    let k = k.min(n - k);
    let mut result = Integer::from(1u32);
    for i in 0..k {
        result *= n - i;
        result /= i + 1;
    }
    result
}
