//! filters::baxter_king — Baxter–King (1999) finite band-pass filter.
//!
//! Purpose
//! -------
//! Extract the business-cycle component of a series with a symmetric,
//! fixed-length moving average that approximates the ideal band-pass filter
//! for periods between `low_period` and `high_period`.
//!
//! Key behaviors
//! -------------
//! - Build the `2K + 1` ideal band-pass coefficients for lags `−K..=K` and
//!   subtract their mean, so the kernel sums to zero and removes constants
//!   (zero gain at frequency zero).
//! - Convolve the kernel with each column, keeping only positions where the
//!   whole kernel fits: output index `i` corresponds to input index `i + K`,
//!   and the output has `n − 2K` rows.
//! - Multivariate input is filtered column by column via
//!   [`map_columns`](crate::filters::columns).
//!
//! Invariants & assumptions
//! ------------------------
//! - Options are validated at construction: `2 ≤ low_period < high_period`
//!   and `K ≥ 1`.
//! - Input must contain more than `2K` finite observations.
//! - The `K` samples at each end are dropped, never extrapolated or padded.
//!
//! Conventions
//! -----------
//! - Periods are in samples per cycle; for quarterly data the conventional
//!   band is 6–32 quarters with `K = 12` ([`BKOptions::default`]).
//! - [`ALIGNMENT_RULE`] documents the trimming for label-preserving callers.
//!
//! Testing notes
//! -------------
//! - Unit tests check the kernel against its closed form, the zero-sum
//!   property, constant/linear nulling, trimming, and option/length errors.
//! - `tests/filters_reference.rs` compares against a literal regression
//!   vector on quarterly real GDP.
use crate::filters::{
    alignment::{AlignmentRule, OutputAlignment},
    columns::map_columns,
    errors::{FilterError, FilterResult},
    validation::{validate_panel, validate_series},
    weights::Band,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1, AsArray, Ix1, Ix2, Zip};

/// Conventional half-window for quarterly data.
pub const DEFAULT_WINDOW: usize = 12;

/// BK drops `K` samples at each end of the input.
pub const ALIGNMENT_RULE: AlignmentRule = AlignmentRule::TrimWindow;

/// BKOptions — validated configuration of the Baxter–King filter.
///
/// Fields
/// ------
/// - `band`: [`Band`]
///   Pass band in periods (samples per cycle).
/// - `k`: `usize`
///   Half-window; the kernel has `2K + 1` taps.
///
/// Invariants
/// ----------
/// - `k ≥ 1`; `band` satisfies the [`Band`] invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct BKOptions {
    band: Band,
    k: usize,
}

impl BKOptions {
    /// Construct validated Baxter–King options.
    ///
    /// Errors
    /// ------
    /// - `FilterError::InvalidPeriod` / `FilterError::InvalidBand` from
    ///   [`Band::new`].
    /// - `FilterError::InvalidWindow(k)` when `k == 0` or when the kernel
    ///   length `2K + 1` does not fit in `usize`.
    pub fn new(low_period: f64, high_period: f64, k: usize) -> FilterResult<Self> {
        let band = Band::new(low_period, high_period)?;
        BKOptions::with_band(band, k)
    }

    /// Construct options from an already validated band.
    pub fn with_band(band: Band, k: usize) -> FilterResult<Self> {
        if k == 0 || k.checked_mul(2).and_then(|w| w.checked_add(1)).is_none() {
            return Err(FilterError::InvalidWindow(k));
        }
        Ok(BKOptions { band, k })
    }

    pub fn band(&self) -> Band {
        self.band
    }

    /// Half-window `K`.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Smallest admissible series length, `2K + 1`.
    pub fn min_len(&self) -> usize {
        self.k.saturating_mul(2).saturating_add(1)
    }

    /// Output placement for an input of length `n`.
    pub fn alignment(&self, n: usize) -> OutputAlignment {
        ALIGNMENT_RULE.resolve(n, self.k)
    }

    /// Mean-corrected kernel for lags `−K..=K` (index `K` is lag 0).
    ///
    /// Returns
    /// -------
    /// `Array1<f64>` of length `2K + 1`, symmetric around index `K` and
    /// summing to zero up to rounding.
    pub fn weights(&self) -> Array1<f64> {
        let k = self.k;
        let one_sided = self.band.ideal_weights(k);
        let mut kernel = Array1::from_shape_fn(2 * k + 1, |i| one_sided[i.abs_diff(k)]);
        let mean = kernel.sum() / kernel.len() as f64;
        kernel -= mean;
        kernel
    }
}

impl Default for BKOptions {
    fn default() -> Self {
        BKOptions { band: Band::default(), k: DEFAULT_WINDOW }
    }
}

/// Baxter–King band-pass filter of a single series.
///
/// Parameters
/// ----------
/// - `x`: anything viewable as a 1-D `f64` array (`&[f64]`, `&Array1<f64>`,
///   `ArrayView1<f64>`), length `n > 2K`, finite.
/// - `opts`: validated [`BKOptions`].
///
/// Returns
/// -------
/// `FilterResult<Array1<f64>>`
///   The cyclical component of length `n − 2K`; element `i` belongs to input
///   index `i + K`.
///
/// Errors
/// ------
/// - `FilterError::InsufficientData` when `n ≤ 2K`.
/// - `FilterError::NonFiniteData` for NaN/±∞ observations.
///
/// Examples
/// --------
/// ```rust
/// use rust_tsfilters::filters::{BKOptions, bkfilter};
///
/// let level = vec![3.0; 30];
/// let opts = BKOptions::new(6.0, 32.0, 12).unwrap();
/// let cycle = bkfilter(&level[..], &opts).unwrap();
/// assert_eq!(cycle.len(), 6);
/// assert!(cycle.iter().all(|c| c.abs() < 1e-12));
/// ```
pub fn bkfilter<'a, V>(x: V, opts: &BKOptions) -> FilterResult<Array1<f64>>
where
    V: AsArray<'a, f64, Ix1>,
{
    let x: ArrayView1<f64> = x.into();
    validate_series(x, opts.min_len())?;
    log::debug!(
        "bkfilter: n={}, low_period={}, high_period={}, k={}",
        x.len(),
        opts.band.low_period(),
        opts.band.high_period(),
        opts.k
    );

    let kernel = opts.weights();
    let mut cycle = Array1::<f64>::zeros(opts.alignment(x.len()).len);
    convolve_valid(kernel.view(), x, cycle.view_mut());
    Ok(cycle)
}

/// Baxter–King band-pass filter applied to each column of an `n × k` panel.
///
/// Returns an `(n − 2K) × k` array whose column `j` equals
/// [`bkfilter`] applied to input column `j`.
///
/// Errors
/// ------
/// - `FilterError::EmptyPanel`, `FilterError::InsufficientData`,
///   `FilterError::NonFiniteData` as for [`bkfilter`].
pub fn bkfilter_panel<'a, V>(x: V, opts: &BKOptions) -> FilterResult<Array2<f64>>
where
    V: AsArray<'a, f64, Ix2>,
{
    let x: ArrayView2<f64> = x.into();
    validate_panel(x, opts.min_len())?;
    log::debug!("bkfilter_panel: n={}, columns={}, k={}", x.nrows(), x.ncols(), opts.k);

    let kernel = opts.weights();
    map_columns(x, opts.alignment(x.nrows()).len, |column, out| {
        convolve_valid(kernel.view(), column, out);
        Ok(())
    })
}

/// Full-overlap ("valid") convolution of a symmetric kernel with `x`.
fn convolve_valid(kernel: ArrayView1<f64>, x: ArrayView1<f64>, out: ArrayViewMut1<f64>) {
    Zip::from(out).and(x.windows(kernel.len())).for_each(|y, window| {
        *y = window.dot(&kernel);
    });
}
