//! Observation hooks for the driver and the ranker.
//!
//! The algorithms never print. Callers that want to see the bucket sweep or
//! the digit-by-digit reconstruction pass a `&dyn TraceSink`; everyone else
//! passes `None`.

use tracing::info;

use crate::Count;

pub trait TraceSink: Send + Sync {
    /// The driver measured the `(digits, sum)` bucket. `found` is the number
    /// of qualifying integers in all earlier buckets.
    fn bucket(&self, digits: u32, sum: u32, block: Count, found: Count);

    /// The ranker fixed `digit` at `position` (0 = most significant), having
    /// skipped `skipped` numbers with smaller digits there. `rank` is the rank
    /// still to be resolved before the skip.
    fn digit(&self, position: u32, digit: u32, skipped: Count, rank: Count);
}

/// Forwards trace hooks to `tracing` events.
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn bucket(&self, digits: u32, sum: u32, block: Count, found: Count) {
        info!(
            digits,
            sum,
            block = %block,
            found = %found,
            "bucket"
        );
    }

    fn digit(&self, position: u32, digit: u32, skipped: Count, rank: Count) {
        info!(position, digit, skipped = %skipped, rank = %rank, "digit");
    }
}

/// Records every hook call so tests can assert on the sweep order.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingTrace {
    pub buckets: std::sync::Mutex<Vec<(u32, u32, Count, Count)>>,
    pub digits: std::sync::Mutex<Vec<(u32, u32, Count, Count)>>,
}

#[cfg(test)]
impl TraceSink for RecordingTrace {
    fn bucket(&self, digits: u32, sum: u32, block: Count, found: Count) {
        self.buckets
            .lock()
            .unwrap()
            .push((digits, sum, block, found));
    }

    fn digit(&self, position: u32, digit: u32, skipped: Count, rank: Count) {
        self.digits
            .lock()
            .unwrap()
            .push((position, digit, skipped, rank));
    }
}
