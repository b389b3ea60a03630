//! filters::columns — column-wise application of 1-D filters.
//!
//! Purpose
//! -------
//! Provide the single "apply per column, reassemble" operation shared by all
//! filters, plus a helper for building panels from separately owned columns.
//! Filter kernels only ever see one column at a time and stay free of
//! multivariate bookkeeping.
//!
//! Key behaviors
//! -------------
//! - [`map_columns`] runs a column kernel on every column of an `n × k`
//!   input and writes into an `out_rows × k` output, preserving column order.
//! - With the `parallel` feature, columns are dispatched to the rayon pool;
//!   results are identical to the sequential path since no kernel reads
//!   another column's state.
//! - [`stack_columns`] assembles an `n × k` panel, rejecting ragged input.
//!
//! Invariants & assumptions
//! ------------------------
//! - The kernel receives column `j` of the input and column `j` of the
//!   output; it must fill the whole output column.
//! - Input validation happens before `map_columns` is called.
use crate::filters::errors::{FilterError, FilterResult};
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, Axis};

#[cfg(feature = "parallel")]
use ndarray::parallel::prelude::*;

/// Apply `kernel` to every column of `input`, collecting an
/// `out_rows × input.ncols()` result.
///
/// Errors
/// ------
/// - Propagates the first error returned by `kernel`.
pub(crate) fn map_columns<F>(
    input: ArrayView2<f64>, out_rows: usize, kernel: F,
) -> FilterResult<Array2<f64>>
where
    F: Fn(ArrayView1<f64>, ArrayViewMut1<f64>) -> FilterResult<()> + Send + Sync,
{
    let mut output = Array2::<f64>::zeros((out_rows, input.ncols()));
    for_each_column(input, &mut output, &kernel)?;
    Ok(output)
}

#[cfg(not(feature = "parallel"))]
fn for_each_column<F>(input: ArrayView2<f64>, output: &mut Array2<f64>, kernel: &F) -> FilterResult<()>
where
    F: Fn(ArrayView1<f64>, ArrayViewMut1<f64>) -> FilterResult<()>,
{
    for (out_col, in_col) in output.axis_iter_mut(Axis(1)).zip(input.axis_iter(Axis(1))) {
        kernel(in_col, out_col)?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn for_each_column<F>(input: ArrayView2<f64>, output: &mut Array2<f64>, kernel: &F) -> FilterResult<()>
where
    F: Fn(ArrayView1<f64>, ArrayViewMut1<f64>) -> FilterResult<()> + Send + Sync,
{
    output
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .zip(input.axis_iter(Axis(1)).into_par_iter())
        .try_for_each(|(out_col, in_col)| kernel(in_col, out_col))
}

/// Assemble an `n × k` panel (rows = time) from `k` columns of equal length.
///
/// Errors
/// ------
/// - `FilterError::EmptyPanel` when `columns` is empty.
/// - `FilterError::ShapeMismatch { column, expected, actual }` for the first
///   column whose length differs from the first column's.
///
/// Examples
/// --------
/// ```rust
/// use rust_tsfilters::filters::stack_columns;
///
/// let gdp = [1.0, 2.0, 3.0];
/// let cpi = [4.0, 5.0, 6.0];
/// let panel = stack_columns(&[&gdp[..], &cpi[..]]).unwrap();
/// assert_eq!(panel.dim(), (3, 2));
/// assert_eq!(panel[[2, 1]], 6.0);
/// ```
pub fn stack_columns(columns: &[&[f64]]) -> FilterResult<Array2<f64>> {
    let expected = columns.first().ok_or(FilterError::EmptyPanel)?.len();
    for (column, values) in columns.iter().enumerate() {
        if values.len() != expected {
            return Err(FilterError::ShapeMismatch { column, expected, actual: values.len() });
        }
    }
    Ok(Array2::from_shape_fn((expected, columns.len()), |(row, column)| columns[column][row]))
}
