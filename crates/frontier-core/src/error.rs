//! Error types for checked array and arena operations.
//!
//! Every failure is a deterministic function of the input state, so nothing
//! here is retryable. Unchecked operations never produce these errors
//! except [`ArrayError::AllocatorExhausted`] when they allocate.

use std::error::Error;
use std::fmt;

/// Errors returned by checked array operations and by arena allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index was outside the valid range for the operation.
    ///
    /// `bound` is the array length for reads, swaps and removals, and the
    /// capacity for dynamic-array writes.
    IndexOutOfRange {
        /// The rejected index.
        index: u32,
        /// The exclusive upper bound the index was checked against.
        bound: u32,
    },
    /// `pop` on an array with no live slots.
    EmptyArray,
    /// A `[start, end)` range that is reversed or runs past the array.
    InvalidBounds {
        /// Requested start (inclusive).
        start: u32,
        /// Requested end (exclusive).
        end: u32,
        /// Array length at the time of the request.
        len: u32,
    },
    /// The arena cannot grow far enough to satisfy an allocation.
    AllocatorExhausted {
        /// Words the arena would need in total after the allocation.
        requested: usize,
        /// Configured maximum arena size in words.
        limit: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range (bound {bound})")
            }
            Self::EmptyArray => write!(f, "array is empty"),
            Self::InvalidBounds { start, end, len } => {
                write!(f, "invalid range {start}..{end} for array of length {len}")
            }
            Self::AllocatorExhausted { requested, limit } => {
                write!(
                    f,
                    "arena exhausted: {requested} words needed, limit {limit} words"
                )
            }
        }
    }
}

impl Error for ArrayError {}
