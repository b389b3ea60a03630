//! rust_tsfilters — business-cycle filters for time series, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the Baxter–King, Hodrick–Prescott and Christiano–Fitzgerald filters to
//! Python via the `_rust_tsfilters` extension module. When the
//! `python-bindings` feature is enabled, this module defines the
//! Python-facing functions and the `filters` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`filters`] and [`linalg`]) as the
//!   public crate surface.
//! - Define `#[pyfunction]` wrappers (`bkfilter`, `hpfilter`, `cffilter`)
//!   with the conventional keyword arguments and defaults.
//! - Create and register the `filters` submodule under `rust_tsfilters` so
//!   that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, option construction, and error mapping.
//! - 1-D inputs produce 1-D outputs and 2-D inputs (rows = time) produce
//!   2-D outputs with the same column order.
//!
//! Conventions
//! -----------
//! - Python-exposed functions live under `_rust_tsfilters.filters` and are
//!   typically wrapped by thin pure-Python facades that re-attach pandas
//!   indexes using the alignment contract of each filter.
//! - Errors from core Rust code are propagated as [`filters::FilterError`]
//!   internally and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`filters`] directly and can ignore the
//!   PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by integration tests under `tests/`.

pub mod filters;
pub mod linalg;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Dimension;

#[cfg(feature = "python-bindings")]
use numpy::IntoPyArray;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    filters::{
        BKOptions, CFAssumption, CFOptions, Decomposition, HPOptions, bkfilter, bkfilter_panel,
        cffilter, cffilter_panel, hpfilter, hpfilter_panel,
    },
    utils::{FilterInput, extract_filter_input},
};

#[cfg(feature = "python-bindings")]
fn decomposition_into_py<D: Dimension>(
    py: Python<'_>, decomposition: Decomposition<D>,
) -> (PyObject, PyObject) {
    let (cycle, trend) = decomposition.into_parts();
    (cycle.into_pyarray(py).into_any().unbind(), trend.into_pyarray(py).into_any().unbind())
}

/// bkfilter — Baxter–King band-pass filter.
///
/// Parameters
/// ----------
/// - `x`: 1-D or 2-D array-like (rows = time).
/// - `low`, `high`: pass band in periods (defaults 6 and 32).
/// - `K`: half-window (default 12).
///
/// Returns
/// -------
/// The cyclical component, trimmed by `K` observations at each end.
///
/// Errors
/// ------
/// - `ValueError` for invalid options, too short or non-finite data.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "bkfilter",
    signature = (x, low = 6.0, high = 32.0, K = 12),
    text_signature = "(x, /, low=6, high=32, K=12)"
)]
#[allow(non_snake_case)]
pub fn py_bkfilter<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, low: f64, high: f64, K: usize,
) -> PyResult<PyObject> {
    let opts = BKOptions::new(low, high, K)?;
    let cycle = match extract_filter_input(py, x)? {
        FilterInput::Series(series) => {
            bkfilter(series.as_array(), &opts)?.into_pyarray(py).into_any().unbind()
        }
        FilterInput::Panel(panel) => {
            bkfilter_panel(panel.as_array(), &opts)?.into_pyarray(py).into_any().unbind()
        }
    };
    Ok(cycle)
}

/// hpfilter — Hodrick–Prescott filter.
///
/// Parameters
/// ----------
/// - `x`: 1-D or 2-D array-like (rows = time), at least 3 observations.
/// - `lamb`: smoothing parameter (default 1600).
///
/// Returns
/// -------
/// `(cycle, trend)`, each with the shape of `x`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "hpfilter", signature = (x, lamb = 1600.0), text_signature = "(x, /, lamb=1600)")]
pub fn py_hpfilter<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, lamb: f64,
) -> PyResult<(PyObject, PyObject)> {
    let opts = HPOptions::new(lamb)?;
    let parts = match extract_filter_input(py, x)? {
        FilterInput::Series(series) => decomposition_into_py(py, hpfilter(series.as_array(), &opts)?),
        FilterInput::Panel(panel) => {
            decomposition_into_py(py, hpfilter_panel(panel.as_array(), &opts)?)
        }
    };
    Ok(parts)
}

/// cffilter — Christiano–Fitzgerald asymmetric band-pass filter.
///
/// Parameters
/// ----------
/// - `x`: 1-D or 2-D array-like (rows = time).
/// - `low`, `high`: pass band in periods (defaults 6 and 32).
/// - `drift`: remove the first-to-last straight line first (default True).
/// - `stationary`: use truncated ideal weights instead of the random-walk
///   boundary correction (default False).
///
/// Returns
/// -------
/// `(cycle, trend)`, each with the shape of `x`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "cffilter",
    signature = (x, low = 6.0, high = 32.0, drift = true, stationary = false),
    text_signature = "(x, /, low=6, high=32, drift=True, stationary=False)"
)]
pub fn py_cffilter<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, low: f64, high: f64, drift: bool, stationary: bool,
) -> PyResult<(PyObject, PyObject)> {
    let assumption =
        if stationary { CFAssumption::Stationary } else { CFAssumption::RandomWalk };
    let opts = CFOptions::new(low, high, drift, assumption)?;
    let parts = match extract_filter_input(py, x)? {
        FilterInput::Series(series) => decomposition_into_py(py, cffilter(series.as_array(), &opts)?),
        FilterInput::Panel(panel) => {
            decomposition_into_py(py, cffilter_panel(panel.as_array(), &opts)?)
        }
    };
    Ok(parts)
}

/// _rust_tsfilters — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_tsfilters` Python module and register the `filters`
/// submodule used by the public `rust_tsfilters` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_tsfilters<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let filters_mod = PyModule::new(_py, "filters")?;
    register_filters(_py, m, &filters_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_tsfilters.filters", filters_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn register_filters<'py>(
    _py: Python, rust_tsfilters: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_bkfilter, m)?)?;
    m.add_function(wrap_pyfunction!(py_hpfilter, m)?)?;
    m.add_function(wrap_pyfunction!(py_cffilter, m)?)?;
    rust_tsfilters.add_submodule(m)?;
    Ok(())
}
