//! Error type shared by the distance model, the cost evaluator and the
//! search runners.

use std::fmt;

/// Errors raised at the crate's call boundaries.
///
/// All variants describe caller misuse. Once a run has validated its
/// inputs, the search itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TspError {
    /// The distance matrix is not square, has fewer than two locations,
    /// or contains negative or non-finite entries.
    InvalidMatrix(String),
    /// A tour has the wrong length, an out-of-range index, or a duplicate.
    InvalidTour(String),
    /// A search parameter is outside its allowed range.
    InvalidParameter(String),
}

/// Result alias used throughout the crate.
pub type TspResult<T> = Result<T, TspError>;

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::InvalidMatrix(msg) => write!(f, "invalid distance matrix: {msg}"),
            TspError::InvalidTour(msg) => write!(f, "invalid tour: {msg}"),
            TspError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for TspError {}
