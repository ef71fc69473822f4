//! The query engine: pure, read-only operations over the record store.
//!
//! Every operation takes the store by shared reference, validates its
//! arguments before any computation, and returns owned values, so callers
//! can invoke them concurrently and cannot corrupt the store through a
//! result.
//!
//! Grouping internals use `BTreeMap`, which makes every "first encountered
//! max" tie-break deterministic: among equal counts or scores the
//! lexicographically smallest key wins, on every run.

pub mod missions;
pub mod reliability;
pub mod rockets;

use chrono::NaiveDate;

use crate::error::{Result, ScanError};

/// Inclusive `[from, to]` windows must not be inverted.
pub(crate) fn validate_window(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if from > to {
        return Err(ScanError::TimeFrameMismatch);
    }
    Ok(())
}

pub(crate) fn validate_limit(n: usize) -> Result<()> {
    if n == 0 {
        return Err(ScanError::InvalidArgument("n must be greater than zero"));
    }
    Ok(())
}
