//! filters::weights — cutoff bands and ideal band-pass weights.
//!
//! Purpose
//! -------
//! Hold the frequency-domain building blocks shared by the Baxter–King and
//! Christiano–Fitzgerald filters: a validated pair of cutoff periods and the
//! sinc-type coefficients of the ideal (infinite) low-pass and band-pass
//! filters.
//!
//! Key behaviors
//! -------------
//! - [`Band`] validates `2 ≤ low_period < high_period` once, so every filter
//!   built on it can assume an ordered, finite band.
//! - [`Band::angular_cutoffs`] converts periods to angular frequencies:
//!   `ωl = 2π / high_period` and `ωu = 2π / low_period` (a short period is a
//!   high frequency).
//! - [`ideal_lowpass_weights`] returns `b0 = ω/π`, `bj = sin(jω)/(jπ)`.
//! - [`Band::ideal_weights`] returns the ideal band-pass coefficients as the
//!   difference of the two low-pass sequences.
//!
//! Conventions
//! -----------
//! - Weight arrays are indexed by lag: element `j` is the coefficient on
//!   `x[t ± j]`; the filters are symmetric in the ideal case.
//! - Periods are measured in samples per cycle and may be fractional.
use crate::filters::errors::{FilterError, FilterResult};
use ndarray::Array1;
use std::f64::consts::PI;

/// Conventional lower cutoff (6 quarters, i.e. 1.5 years).
pub const DEFAULT_LOW_PERIOD: f64 = 6.0;

/// Conventional upper cutoff (32 quarters, i.e. 8 years).
pub const DEFAULT_HIGH_PERIOD: f64 = 32.0;

/// Band — validated pair of cutoff periods for a band-pass filter.
///
/// Purpose
/// -------
/// Represent the pass band `[low_period, high_period]` (in samples per
/// cycle) of a band-pass filter. Components with periods inside the band
/// are kept; shorter and longer cycles are attenuated.
///
/// Invariants
/// ----------
/// - `low_period` is finite and `≥ 2` (the Nyquist period).
/// - `high_period` is finite and `> low_period`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    low_period: f64,
    high_period: f64,
}

impl Band {
    /// Construct a validated band.
    ///
    /// Errors
    /// ------
    /// - `FilterError::InvalidPeriod { name: "low_period", .. }` when
    ///   `low_period` is non-finite or `< 2`.
    /// - `FilterError::InvalidPeriod { name: "high_period", .. }` when
    ///   `high_period` is non-finite.
    /// - `FilterError::InvalidBand` when `high_period ≤ low_period`.
    pub fn new(low_period: f64, high_period: f64) -> FilterResult<Self> {
        if !low_period.is_finite() || low_period < 2.0 {
            return Err(FilterError::InvalidPeriod { name: "low_period", value: low_period });
        }
        if !high_period.is_finite() {
            return Err(FilterError::InvalidPeriod { name: "high_period", value: high_period });
        }
        if high_period <= low_period {
            return Err(FilterError::InvalidBand { low_period, high_period });
        }
        Ok(Band { low_period, high_period })
    }

    /// Shortest period kept by the filter.
    pub fn low_period(&self) -> f64 {
        self.low_period
    }

    /// Longest period kept by the filter.
    pub fn high_period(&self) -> f64 {
        self.high_period
    }

    /// Angular cutoffs `(ωl, ωu) = (2π / high_period, 2π / low_period)`.
    pub fn angular_cutoffs(&self) -> (f64, f64) {
        (2.0 * PI / self.high_period, 2.0 * PI / self.low_period)
    }

    /// Ideal band-pass coefficients `B_0..=B_max_lag`.
    ///
    /// Returns
    /// -------
    /// `Array1<f64>` of length `max_lag + 1` with
    /// `B_j = b_j(ωu) − b_j(ωl)`, i.e. `B_0 = (ωu − ωl)/π` and
    /// `B_j = (sin(jωu) − sin(jωl))/(jπ)`.
    ///
    /// Notes
    /// -----
    /// - The infinite two-sided sequence satisfies `B_0 + 2·Σ_{j≥1} B_j = 0`
    ///   (zero gain at frequency zero); truncations do not, which is what the
    ///   BK mean correction and the CF endpoint correction repair.
    pub fn ideal_weights(&self, max_lag: usize) -> Array1<f64> {
        let (omega_low, omega_high) = self.angular_cutoffs();
        ideal_lowpass_weights(omega_high, max_lag) - ideal_lowpass_weights(omega_low, max_lag)
    }
}

impl Default for Band {
    fn default() -> Self {
        Band { low_period: DEFAULT_LOW_PERIOD, high_period: DEFAULT_HIGH_PERIOD }
    }
}

/// Ideal low-pass coefficients for angular cutoff `omega`, lags `0..=max_lag`.
///
/// `b0 = ω/π` and `bj = sin(jω)/(jπ)` for `j ≥ 1`.
pub fn ideal_lowpass_weights(omega: f64, max_lag: usize) -> Array1<f64> {
    Array1::from_shape_fn(max_lag + 1, |j| {
        if j == 0 {
            omega / PI
        } else {
            let lag = j as f64;
            (lag * omega).sin() / (lag * PI)
        }
    })
}
