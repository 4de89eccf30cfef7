//! Error types for regraft operations.

use thiserror::Error;

/// Result type alias for regraft operations.
pub type RegraftResult<T> = Result<T, RegraftError>;

/// Errors raised by the update operators.
///
/// Every error is a precondition failure detected before any allocation
/// happens; an operation either fully validates and computes, or aborts
/// without touching its inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegraftError {
    /// A list index was outside the permitted range.
    ///
    /// Insertion (and keyed writes into lists) permit indices in
    /// `0..=len`, where writing at exactly `len` appends.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the list at the time of the check.
        len: usize,
    },
}
