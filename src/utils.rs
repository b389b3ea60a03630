//! utils — Python input conversion for the filter bindings.
//!
//! Converts the array-likes accepted by the Python API (numpy arrays,
//! pandas objects exposing `to_numpy`, nested sequences) into read-only
//! numpy views that the filters can borrow as `ndarray` views. Only compiled
//! with the `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Array/Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

/// A validated-dimension filter input: a single series or an `n × k` panel.
#[cfg(feature = "python-bindings")]
pub enum FilterInput<'py> {
    Series(PyReadonlyArray1<'py, f64>),
    Panel(PyReadonlyArray2<'py, f64>),
}

#[cfg(feature = "python-bindings")]
impl<'py> FilterInput<'py> {
    fn from_numpy(obj: &Bound<'py, PyAny>) -> Option<Self> {
        if let Ok(series) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Some(FilterInput::Series(series));
        }
        if let Ok(panel) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Some(FilterInput::Panel(panel));
        }
        None
    }
}

/// Convert a Python array-like into a [`FilterInput`].
///
/// Accepted inputs, in order of preference:
/// - 1-D or 2-D float64 `numpy.ndarray` (borrowed, no copy);
/// - objects with `to_numpy()` (pandas `Series` / `DataFrame`) yielding one
///   of the above;
/// - a sequence of floats (copied into a 1-D array);
/// - a sequence of equal-length float sequences, one per time step (copied
///   into an `n × k` array).
///
/// Errors
/// ------
/// - `TypeError` when the object matches none of the accepted shapes.
/// - `ValueError` for ragged nested sequences.
#[cfg(feature = "python-bindings")]
pub fn extract_filter_input<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<FilterInput<'py>> {
    if let Some(input) = FilterInput::from_numpy(raw_data) {
        return Ok(input);
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Some(input) = FilterInput::from_numpy(&obj) {
            return Ok(input);
        }
    }

    if let Ok(vec) = raw_data.extract::<Vec<f64>>() {
        return Ok(FilterInput::Series(vec.into_pyarray(py).readonly()));
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 1-D or 2-D numpy.ndarray, pandas object, or (nested) sequence of float64",
        )
    })?;
    let panel = rows_to_panel(&rows)?;
    Ok(FilterInput::Panel(panel.into_pyarray(py).readonly()))
}

/// Pack row-major nested sequences (rows = time) into an `n × k` array.
#[cfg(feature = "python-bindings")]
fn rows_to_panel(rows: &[Vec<f64>]) -> PyResult<Array2<f64>> {
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some(row) = rows.iter().position(|r| r.len() != ncols) {
        return Err(PyValueError::new_err(format!(
            "row {row} has length {}, expected {ncols}",
            rows[row].len()
        )));
    }
    Ok(Array2::from_shape_fn((rows.len(), ncols), |(t, j)| rows[t][j]))
}
