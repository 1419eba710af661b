pub mod binomial;
pub mod config;
pub mod counter;
pub mod driver;
pub mod error;
pub mod rank;
pub mod sieve;
pub mod trace;
pub mod verify;

pub use error::{Error, Result};

/// Counts, ranks and bucket sizes. 128 bits hold every count for up to
/// [`MAX_DIGITS`] digits, so the algorithms never need to wrap.
pub type Count = u128;

/// Largest digit count accepted anywhere in the crate. `10^38 - 1` is the
/// largest 38-digit number and still fits in a `u128`.
pub const MAX_DIGITS: u32 = 38;

/// Largest digit sum a `digits`-digit number can have.
#[inline]
pub fn max_digit_sum(digits: u32) -> u32 {
    9 * digits
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u128) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// Number of decimal digits of `n` (`0` has one digit).
pub fn digit_count(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Reject digit counts the algorithms cannot represent.
pub(crate) fn check_digits(digits: u32) -> Result<()> {
    if digits == 0 {
        return Err(Error::ZeroDigits);
    }
    if digits > MAX_DIGITS {
        return Err(Error::TooManyDigits {
            digits,
            max: MAX_DIGITS,
        });
    }
    Ok(())
}
