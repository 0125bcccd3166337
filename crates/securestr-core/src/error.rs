//! Error values returned by buffer operations.
//!
//! Every contract violation is surfaced as a value. The library never
//! panics on bad input, never prints, and never terminates the process;
//! interpreting a failure is entirely the caller's decision.

use thiserror::Error;

/// Failure cases of the fixed-capacity string operations.
///
/// An operation that returns an error has not modified its destination:
/// all writes are all-or-nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrError {
    /// The destination lacks room for the requested write.
    #[error("destination has {available} free bytes, operation needs {required}")]
    Capacity {
        /// Bytes the operation would have written.
        required: usize,
        /// Free bytes the destination actually has.
        available: usize,
    },

    /// A position or length exceeds the source content bounds.
    ///
    /// Positions are valid only within the content range, never in the
    /// capacity range beyond it, even though storage exists there.
    #[error("position {index} is outside the content bounds (length {limit})")]
    Range {
        /// The offending position.
        index: usize,
        /// The content length that bounds valid positions.
        limit: usize,
    },

    /// The requested capacity exceeds [`CAP_MAX`](crate::CAP_MAX).
    #[error("requested capacity {requested} exceeds the supported maximum")]
    CapacityCeiling {
        /// The rejected capacity request.
        requested: usize,
    },

    /// Backing storage could not be obtained from the allocator.
    #[error("allocation of {requested} bytes failed")]
    AllocationFailed {
        /// Size of the failed allocation, including the terminator byte.
        requested: usize,
    },
}

/// Result alias used throughout the crate.
pub type StrResult<T> = Result<T, StrError>;
