//! Error types shared by point staging, tree construction, and search.

use thiserror::Error;

/// Errors raised while staging points or querying a tree.
///
/// Both kinds are local and non-retryable: the caller has to fix the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A coordinate vector's length disagrees with the declared dimensionality.
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A dimension index outside `[0, dimensions)` was requested from a point.
    #[error("dimension index {index} out of range for a point with {dimensions} dimensions")]
    IndexOutOfRange { index: usize, dimensions: usize },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, KdTreeError>;
