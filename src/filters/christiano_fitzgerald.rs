//! filters::christiano_fitzgerald — asymmetric full-sample band-pass filter.
//!
//! Purpose
//! -------
//! Approximate the ideal band-pass filter at every sample of a finite series
//! by using all available observations, with weights that change with the
//! position `t` (Christiano & Fitzgerald, 2003). Unlike Baxter–King nothing
//! is trimmed: the output has one value per input sample.
//!
//! Key behaviors
//! -------------
//! - Optional drift removal: subtract the straight line through the first
//!   and last observation before filtering. The returned trend is
//!   `x − cycle` on the original input, so the drift ends up in the trend.
//! - For output index `t` with `p = t` lags and `f = n − 1 − t` leads, the
//!   ideal weights `B_j` are applied to `x[t ± j]` for `j` below the
//!   available horizon, and the two endpoints `x[0]`, `x[n − 1]` receive a
//!   boundary weight `B̃_p`, `B̃_f` chosen by [`CFAssumption`].
//! - Boundary weights are computed once per length from prefix sums of the
//!   ideal weights, so one column costs `O(n²)` multiply-adds.
//!
//! Invariants & assumptions
//! ------------------------
//! - Under [`CFAssumption::RandomWalk`] each row of the weight matrix sums
//!   to zero, so constants are removed and a random walk without drift
//!   yields a stationary cycle.
//! - The weight matrix is time-reversal symmetric:
//!   `W[t, s] == W[n − 1 − t, n − 1 − s]`.
//! - Any `n ≥ 1` is admissible; for `n = 1` the random-walk cycle is zero.
//!
//! Conventions
//! -----------
//! - Defaults follow the quarterly convention: band 6–32, drift removal on,
//!   random-walk boundary correction.
//! - Output is full length ([`ALIGNMENT_RULE`] = `FullLength`).
//!
//! Downstream usage
//! ----------------
//! - [`CFOptions::weights`] exposes the full `n × n` weight matrix for
//!   diagnostics (gain/phase at a given `t`); the filter itself never forms
//!   it.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the weight-matrix invariants, agreement between the
//!   direct computation and `W·x̃`, drift handling, and panel equivalence.
//! - `tests/filters_reference.rs` carries a literal regression vector on
//!   quarterly real GDP.
use crate::filters::{
    alignment::{AlignmentRule, OutputAlignment},
    columns::map_columns,
    decomposition::{PanelDecomposition, SeriesDecomposition},
    errors::FilterResult,
    validation::{validate_panel, validate_series},
    weights::Band,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut1, AsArray, Ix1, Ix2, Zip, s};

/// Any non-empty series can be filtered.
pub const MIN_OBSERVATIONS: usize = 1;

/// CF returns one cycle/trend value per input sample.
pub const ALIGNMENT_RULE: AlignmentRule = AlignmentRule::FullLength;

/// Boundary treatment of the Christiano–Fitzgerald weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CFAssumption {
    /// The series is I(1): each endpoint absorbs the ideal weight mass
    /// beyond the sample, `B̃_m = −B0/2 − Σ_{j=1}^{m−1} B_j`.
    #[default]
    RandomWalk,
    /// The series is I(0): the ideal filter is truncated and each endpoint
    /// keeps its own weight `B_m`. Truncation is the mean-square optimal
    /// finite approximation when `x` is white noise; folding the omitted
    /// ideal weights into the endpoint is only optimal for a unit root,
    /// which is the `RandomWalk` case.
    Stationary,
}

/// CFOptions — validated Christiano–Fitzgerald configuration.
///
/// Fields
/// ------
/// - `band`: [`Band`]
///   Pass band in periods.
/// - `drift`: `bool`
///   Remove the first-to-last straight line before filtering.
/// - `assumption`: [`CFAssumption`]
///   Boundary correction.
#[derive(Debug, Clone, PartialEq)]
pub struct CFOptions {
    band: Band,
    drift: bool,
    assumption: CFAssumption,
}

impl CFOptions {
    /// Construct validated options.
    ///
    /// Errors
    /// ------
    /// - `FilterError::InvalidPeriod` / `FilterError::InvalidBand` from
    ///   [`Band::new`].
    pub fn new(
        low_period: f64, high_period: f64, drift: bool, assumption: CFAssumption,
    ) -> FilterResult<Self> {
        Ok(CFOptions::with_band(Band::new(low_period, high_period)?, drift, assumption))
    }

    pub fn with_band(band: Band, drift: bool, assumption: CFAssumption) -> Self {
        CFOptions { band, drift, assumption }
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn drift(&self) -> bool {
        self.drift
    }

    pub fn assumption(&self) -> CFAssumption {
        self.assumption
    }

    /// Output placement for an input of length `n` (always the full input).
    pub fn alignment(&self, n: usize) -> OutputAlignment {
        ALIGNMENT_RULE.resolve(n, 0)
    }

    /// Full `n × n` weight matrix: row `t` holds the weights that produce
    /// `cycle[t]` from the (drift-adjusted) series.
    ///
    /// Returns
    /// -------
    /// `Array2<f64>`
    ///   `W` with `cycle = W · x̃`. An empty matrix for `n = 0`.
    pub fn weights(&self, n: usize) -> Array2<f64> {
        let mut w = Array2::<f64>::zeros((n, n));
        if n == 0 {
            return w;
        }
        let kernel = CFKernel::new(self, n);
        let last = n - 1;
        for t in 0..n {
            let (leads, lags) = (last - t, t);
            w[[t, t]] += kernel.ideal[0];
            for j in 1..leads {
                w[[t, t + j]] += kernel.ideal[j];
            }
            for j in 1..lags {
                w[[t, t - j]] += kernel.ideal[j];
            }
            w[[t, last]] += kernel.endpoint[leads];
            w[[t, 0]] += kernel.endpoint[lags];
        }
        w
    }
}

impl Default for CFOptions {
    fn default() -> Self {
        CFOptions { band: Band::default(), drift: true, assumption: CFAssumption::default() }
    }
}

/// Ideal weights `B_0..B_{n−1}` and boundary weights `B̃_0..B̃_{n−1}` for one
/// series length.
struct CFKernel {
    ideal: Array1<f64>,
    endpoint: Array1<f64>,
}

impl CFKernel {
    fn new(opts: &CFOptions, n: usize) -> Self {
        let ideal = opts.band.ideal_weights(n.saturating_sub(1));
        let endpoint = match opts.assumption {
            CFAssumption::RandomWalk => {
                let half = 0.5 * ideal[0];
                let mut inner = 0.0;
                let mut endpoint = Array1::<f64>::zeros(ideal.len());
                for m in 0..ideal.len() {
                    endpoint[m] = -half - inner;
                    if m >= 1 {
                        inner += ideal[m];
                    }
                }
                endpoint
            }
            // m = 0 lands on x[t] itself, which already carries B0.
            CFAssumption::Stationary => {
                Array1::from_shape_fn(ideal.len(), |m| if m == 0 { 0.0 } else { ideal[m] })
            }
        };
        CFKernel { ideal, endpoint }
    }

    /// `cycle[t]` for a drift-adjusted series.
    fn cycle_at(&self, x: ArrayView1<f64>, t: usize) -> f64 {
        let last = x.len() - 1;
        let (leads, lags) = (last - t, t);
        let mut acc = self.ideal[0] * x[t];
        if leads > 1 {
            acc += self.ideal.slice(s![1..leads]).dot(&x.slice(s![t + 1..last]));
        }
        if lags > 1 {
            acc += self.ideal.slice(s![1..lags]).dot(&x.slice(s![1..t;-1]));
        }
        acc + self.endpoint[leads] * x[last] + self.endpoint[lags] * x[0]
    }

    fn filter_into(&self, x: ArrayView1<f64>, drift: bool, out: ArrayViewMut1<f64>) {
        let adjusted = remove_drift(x, drift);
        Zip::indexed(out).for_each(|t, y| *y = self.cycle_at(adjusted.view(), t));
    }
}

/// Subtract the line through `(0, x[0])` and `(n − 1, x[n − 1])`.
///
/// Series with fewer than two samples have no defined slope and are
/// returned unchanged.
fn remove_drift(x: ArrayView1<f64>, drift: bool) -> Array1<f64> {
    let n = x.len();
    if !drift || n < 2 {
        return x.to_owned();
    }
    let start = x[0];
    let slope = (x[n - 1] - start) / (n - 1) as f64;
    Array1::from_shape_fn(n, |t| x[t] - (start + slope * t as f64))
}

/// Christiano–Fitzgerald band-pass filter of a single series.
///
/// Parameters
/// ----------
/// - `x`: 1-D `f64` data, length `n ≥ 1`, finite.
/// - `opts`: validated [`CFOptions`].
///
/// Returns
/// -------
/// `FilterResult<SeriesDecomposition>`
///   `cycle` and `trend = x − cycle`, both of length `n`.
///
/// Errors
/// ------
/// - `FilterError::InsufficientData` for an empty series.
/// - `FilterError::NonFiniteData` for NaN/±∞ observations.
///
/// Examples
/// --------
/// ```rust
/// use rust_tsfilters::filters::{CFOptions, cffilter};
///
/// let x: Vec<f64> = (0..48).map(|t| (t as f64 * 0.5).sin() + 0.1 * t as f64).collect();
/// let out = cffilter(&x[..], &CFOptions::default()).unwrap();
/// assert_eq!(out.cycle.len(), 48);
/// for t in 0..48 {
///     assert!((out.cycle[t] + out.trend[t] - x[t]).abs() < 1e-12);
/// }
/// ```
pub fn cffilter<'a, V>(x: V, opts: &CFOptions) -> FilterResult<SeriesDecomposition>
where
    V: AsArray<'a, f64, Ix1>,
{
    let x: ArrayView1<f64> = x.into();
    validate_series(x, MIN_OBSERVATIONS)?;
    log::debug!(
        "cffilter: n={}, low_period={}, high_period={}, drift={}, assumption={:?}",
        x.len(),
        opts.band.low_period(),
        opts.band.high_period(),
        opts.drift,
        opts.assumption
    );

    let kernel = CFKernel::new(opts, x.len());
    let mut cycle = Array1::<f64>::zeros(x.len());
    kernel.filter_into(x, opts.drift, cycle.view_mut());
    Ok(SeriesDecomposition::from_cycle(x, cycle))
}

/// Christiano–Fitzgerald filter applied to each column of an `n × k` panel.
///
/// Drift is removed per column; the weights depend only on `n` and are
/// shared.
///
/// Errors
/// ------
/// - `FilterError::EmptyPanel`, `FilterError::InsufficientData`,
///   `FilterError::NonFiniteData` as for [`cffilter`].
pub fn cffilter_panel<'a, V>(x: V, opts: &CFOptions) -> FilterResult<PanelDecomposition>
where
    V: AsArray<'a, f64, Ix2>,
{
    let x: ArrayView2<f64> = x.into();
    validate_panel(x, MIN_OBSERVATIONS)?;
    log::debug!(
        "cffilter_panel: n={}, columns={}, drift={}, assumption={:?}",
        x.nrows(),
        x.ncols(),
        opts.drift,
        opts.assumption
    );

    let kernel = CFKernel::new(opts, x.nrows());
    let cycle = map_columns(x, x.nrows(), |column, out| {
        kernel.filter_into(column, opts.drift, out);
        Ok(())
    })?;
    Ok(PanelDecomposition::from_cycle(x, cycle))
}
