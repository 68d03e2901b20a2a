//! Error type returned by [`Sorter::sort`](crate::core::Sorter::sort).

use thiserror::Error;

/// Failure of a sort call.
///
/// The only condition a caller can trigger is a reversed range. Empty ranges, singletons,
/// duplicates and pre-sorted input are all valid and never produce an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// `to` is smaller than `from`. Raised before any slot is read or written.
    #[error("'to' must be >= 'from', got from={from} and to={to}")]
    InvalidRange {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
    },
}
