use thiserror::Error;

use crate::Count;

/// Failures of the counting, ranking and search operations.
///
/// Every variant is local to a single computation; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("digit count must be at least 1")]
    ZeroDigits,

    #[error("digit count {digits} exceeds the supported maximum of {max}")]
    TooManyDigits { digits: u32, max: u32 },

    #[error("digit sum {sum} is outside [1, {max}] for {digits}-digit numbers")]
    InvalidSum { digits: u32, sum: u32, max: u32 },

    #[error("rank {rank} is outside [1, {count}] for {digits}-digit numbers with digit sum {sum}")]
    InvalidRank {
        rank: Count,
        count: Count,
        digits: u32,
        sum: u32,
    },

    #[error("target rank must be at least 1")]
    ZeroRank,

    #[error("count for {digits} digits with digit sum {sum} does not fit in 128 bits")]
    Overflow { digits: u32, sum: u32 },

    #[error("sieve limit {limit} cannot classify digit sums up to {required}")]
    SieveTooSmall { limit: usize, required: usize },

    #[error("enumeration is limited to {max} digits, got {digits}")]
    EnumerationTooLarge { digits: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
