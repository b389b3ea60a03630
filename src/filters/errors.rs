//! filters::errors — shared error types and Python bridges for the filters.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by every trend/cycle filter
//! in this subtree, together with a conversion layer to Python exceptions
//! for the PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`FilterResult`] and [`FilterError`] as the canonical result and
//!   error types for option validation, input validation, and the numerical
//!   stages of the Baxter–King, Hodrick–Prescott, and Christiano–Fitzgerald
//!   filters.
//! - Attach human-readable `Display` messages that name the offending
//!   parameter and value.
//! - Wrap solver failures from [`crate::linalg`] via `From<LinalgError>`.
//! - Implement `From<FilterError> for PyErr` (feature `python-bindings`),
//!   mapping every variant to `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameter and shape errors are raised before any numeric work starts;
//!   no filter ever returns a partially computed array.
//! - No error is downgraded to NaN or zero output.
//! - `FilterError` values are small, `Clone`, and `Send`, so they can cross
//!   the rayon column pool when the `parallel` feature is enabled.
//!
//! Conventions
//! -----------
//! - Variants are grouped as parameter errors, data/shape errors, and
//!   numerical errors.
//! - Rows index time (0-based); columns index series within a panel. 1-D
//!   inputs report `column = 0`.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages embed their payloads and that
//!   `LinalgError` converts into `FilterError::Linalg`.
use crate::linalg::errors::LinalgError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type FilterResult<T> = Result<T, FilterError>;

/// FilterError — error conditions for trend/cycle filters.
///
/// Variants
/// --------
/// - `InvalidPeriod { name, value }`
///   A cutoff period is non-finite or below the Nyquist limit of 2.
/// - `InvalidBand { low_period, high_period }`
///   The cutoffs are not strictly ordered (`high_period ≤ low_period`).
/// - `InvalidLambda(value)`
///   The HP smoothing constant is non-positive or non-finite.
/// - `InvalidWindow(k)`
///   The BK half-window `K` is zero, or `2K + 1` overflows `usize`.
/// - `InsufficientData { len, required }`
///   The series is shorter than the filter's minimum length.
/// - `NonFiniteData { row, column, value }`
///   An observation is NaN or ±∞.
/// - `ShapeMismatch { column, expected, actual }`
///   Columns of a multivariate input (or a caller-side axis) have
///   inconsistent lengths.
/// - `EmptyPanel`
///   A multivariate input has no columns.
/// - `Linalg(err)`
///   The banded solver failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    // ---- Parameters ----
    InvalidPeriod { name: &'static str, value: f64 },
    InvalidBand { low_period: f64, high_period: f64 },
    InvalidLambda(f64),
    InvalidWindow(usize),

    // ---- Data / shape ----
    InsufficientData { len: usize, required: usize },
    NonFiniteData { row: usize, column: usize, value: f64 },
    ShapeMismatch { column: usize, expected: usize, actual: usize },
    EmptyPanel,

    // ---- Numerical ----
    Linalg(LinalgError),
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Linalg(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameters ----
            FilterError::InvalidPeriod { name, value } => {
                write!(f, "Invalid {name}: {value}. Must be finite and at least 2.")
            }
            FilterError::InvalidBand { low_period, high_period } => write!(
                f,
                "Invalid band: high_period ({high_period}) must be greater than low_period ({low_period})."
            ),
            FilterError::InvalidLambda(lambda) => {
                write!(f, "Invalid lambda: {lambda}. Must be finite and > 0.")
            }
            FilterError::InvalidWindow(k) => {
                write!(f, "Invalid window K: {k}. Must be >= 1 and 2K + 1 must fit in usize.")
            }

            // ---- Data / shape ----
            FilterError::InsufficientData { len, required } => write!(
                f,
                "Insufficient data: series has {len} observations, filter requires at least {required}."
            ),
            FilterError::NonFiniteData { row, column, value } => {
                write!(f, "Data point at row {row}, column {column} is non-finite: {value}")
            }
            FilterError::ShapeMismatch { column, expected, actual } => write!(
                f,
                "Shape mismatch: column {column} has length {actual}, expected {expected}."
            ),
            FilterError::EmptyPanel => write!(f, "Input has no columns."),

            // ---- Numerical ----
            FilterError::Linalg(err) => write!(f, "{err}"),
        }
    }
}

impl From<LinalgError> for FilterError {
    fn from(err: LinalgError) -> Self {
        FilterError::Linalg(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
