//! filters::validation — shared input guards for the filters.
//!
//! Purpose
//! -------
//! Centralize the checks every filter performs on its input before any
//! weights are built or systems solved: minimum length, finiteness, and
//! non-empty column sets.
//!
//! Key behaviors
//! -------------
//! - [`validate_series`] checks a single 1-D series.
//! - [`validate_panel`] checks an `n × k` matrix (rows = time, columns =
//!   series), reporting the row and column of any non-finite value.
//!
//! Invariants & assumptions
//! ------------------------
//! - `required` is the filter-specific minimum length (`2K + 1` for BK,
//!   3 for HP, 1 for CF); the caller derives it from validated options.
//! - Option validation (periods, λ, K) happens in the options constructors,
//!   not here.
//!
//! Conventions
//! -----------
//! - Purely a validation module: no allocation beyond the error value.
//! - A successful return is a guarantee that downstream numeric code can
//!   index the input without further bounds or NaN checks.
use crate::filters::errors::{FilterError, FilterResult};
use ndarray::{ArrayView1, ArrayView2};

/// Validate a 1-D series against a minimum length and finiteness.
///
/// Errors
/// ------
/// - `FilterError::InsufficientData` when `series.len() < required`.
/// - `FilterError::NonFiniteData` (with `column = 0`) for the first NaN/±∞.
pub fn validate_series(series: ArrayView1<f64>, required: usize) -> FilterResult<()> {
    if series.len() < required {
        return Err(FilterError::InsufficientData { len: series.len(), required });
    }
    for (row, &value) in series.iter().enumerate() {
        if !value.is_finite() {
            return Err(FilterError::NonFiniteData { row, column: 0, value });
        }
    }
    Ok(())
}

/// Validate an `n × k` panel against a minimum length and finiteness.
///
/// Errors
/// ------
/// - `FilterError::EmptyPanel` when the panel has no columns.
/// - `FilterError::InsufficientData` when `n < required`.
/// - `FilterError::NonFiniteData` for the first NaN/±∞ in row-major order.
pub fn validate_panel(panel: ArrayView2<f64>, required: usize) -> FilterResult<()> {
    if panel.ncols() == 0 {
        return Err(FilterError::EmptyPanel);
    }
    if panel.nrows() < required {
        return Err(FilterError::InsufficientData { len: panel.nrows(), required });
    }
    for ((row, column), &value) in panel.indexed_iter() {
        if !value.is_finite() {
            return Err(FilterError::NonFiniteData { row, column, value });
        }
    }
    Ok(())
}
