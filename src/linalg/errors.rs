//! linalg::errors — failure modes of the banded solver.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the banded storage and
//! factorization routines in [`crate::linalg::banded`].
//!
//! Key behaviors
//! -------------
//! - [`LinalgError::NotPositiveDefinite`] surfaces a non-positive Cholesky
//!   pivot together with the row at which it appeared.
//! - [`LinalgError::DimensionMismatch`] reports right-hand sides or vectors
//!   whose length disagrees with the matrix dimension.
//! - [`LinalgError::OutsideBand`] rejects writes to entries that the banded
//!   storage cannot represent.
//!
//! Conventions
//! -----------
//! - Indices are 0-based row/column positions in the full (virtual) matrix.
//! - Filter code never matches on these variants; it wraps them into
//!   `FilterError::Linalg` and propagates with `?`.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type LinalgResult<T> = Result<T, LinalgError>;

/// Errors raised by banded matrix storage, factorization, and solves.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Cholesky pivot at `index` was not strictly positive (or not finite).
    NotPositiveDefinite { index: usize, pivot: f64 },

    /// Vector length does not match the matrix dimension.
    DimensionMismatch { expected: usize, actual: usize },

    /// Entry `(row, col)` lies outside the stored band.
    OutsideBand { row: usize, col: usize, bandwidth: usize },
}

impl std::error::Error for LinalgError {}

impl std::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinalgError::NotPositiveDefinite { index, pivot } => write!(
                f,
                "Linalg Error: matrix is not positive definite (pivot {pivot} at row {index})"
            ),
            LinalgError::DimensionMismatch { expected, actual } => write!(
                f,
                "Linalg Error: dimension mismatch (expected length {expected}, got {actual})"
            ),
            LinalgError::OutsideBand { row, col, bandwidth } => write!(
                f,
                "Linalg Error: entry ({row}, {col}) lies outside bandwidth {bandwidth}"
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LinalgError> for PyErr {
    fn from(err: LinalgError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
