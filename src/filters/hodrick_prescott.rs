//! filters::hodrick_prescott — Hodrick–Prescott trend/cycle decomposition.
//!
//! Purpose
//! -------
//! Separate a series into a smooth trend τ and a cyclical residual by
//! minimizing `Σ (x_t − τ_t)² + λ Σ (Δ²τ_t)²`. The first-order conditions
//! give the linear system `(I + λ·DᵀD) τ = x` with `D` the
//! `(n − 2) × n` second-difference operator.
//!
//! Key behaviors
//! -------------
//! - The system matrix is assembled in pentadiagonal form by
//!   [`SymmetricBandedMatrix::hp_penalty`] and factored once with
//!   [`BandedCholesky`]; the factor is shared by every column of a panel.
//! - `cycle = x − τ` and the returned trend is recomputed as `x − cycle`,
//!   so `cycle + trend == x` holds to rounding.
//!
//! Invariants & assumptions
//! ------------------------
//! - `λ > 0` and finite (validated by [`HPOptions::new`]); the matrix is
//!   then symmetric positive definite for every `n`.
//! - `n ≥ 3`: with fewer samples `D` has no rows and the filter is the
//!   identity.
//!
//! Conventions
//! -----------
//! - λ = 1600 is the conventional value for quarterly data; 6.25 (annual)
//!   and 129600 (monthly) are the usual Ravn–Uhlig alternatives.
//! - Output is full length ([`ALIGNMENT_RULE`] = `FullLength`).
//!
//! Testing notes
//! -------------
//! - Unit tests cover reconstruction, the linear-trend fixed point, the
//!   λ → ∞ limit, and parameter/length errors.
//! - `tests/filters_reference.rs` checks the published real-GDP table.
use crate::{
    filters::{
        alignment::{AlignmentRule, OutputAlignment},
        columns::map_columns,
        decomposition::{PanelDecomposition, SeriesDecomposition},
        errors::{FilterError, FilterResult},
        validation::{validate_panel, validate_series},
    },
    linalg::{BandedCholesky, SymmetricBandedMatrix},
};
use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewMut1, AsArray, Ix1, Ix2, Zip};

/// Conventional smoothing parameter for quarterly data.
pub const DEFAULT_LAMBDA: f64 = 1600.0;

/// Smallest series length with a non-trivial penalty.
pub const MIN_OBSERVATIONS: usize = 3;

/// HP returns one trend/cycle value per input sample.
pub const ALIGNMENT_RULE: AlignmentRule = AlignmentRule::FullLength;

/// HPOptions — validated Hodrick–Prescott configuration.
///
/// Fields
/// ------
/// - `lambda`: `f64`
///   Smoothing weight on squared second differences of the trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HPOptions {
    lambda: f64,
}

impl HPOptions {
    /// Construct validated options.
    ///
    /// Errors
    /// ------
    /// - `FilterError::InvalidLambda` when `lambda` is not finite or `≤ 0`.
    pub fn new(lambda: f64) -> FilterResult<Self> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(FilterError::InvalidLambda(lambda));
        }
        Ok(HPOptions { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Output placement for an input of length `n` (always the full input).
    pub fn alignment(&self, n: usize) -> OutputAlignment {
        ALIGNMENT_RULE.resolve(n, 0)
    }

    /// Factor `I + λ·DᵀD` for series of length `n`.
    fn factor(&self, n: usize) -> FilterResult<BandedCholesky> {
        let system = SymmetricBandedMatrix::hp_penalty(n, self.lambda);
        Ok(BandedCholesky::factor(&system)?)
    }
}

impl Default for HPOptions {
    fn default() -> Self {
        HPOptions { lambda: DEFAULT_LAMBDA }
    }
}

/// Hodrick–Prescott filter of a single series.
///
/// Parameters
/// ----------
/// - `x`: 1-D `f64` data, length `n ≥ 3`, finite.
/// - `opts`: validated [`HPOptions`].
///
/// Returns
/// -------
/// `FilterResult<SeriesDecomposition>`
///   `cycle` and `trend`, both of length `n`.
///
/// Errors
/// ------
/// - `FilterError::InsufficientData` when `n < 3`.
/// - `FilterError::NonFiniteData` for NaN/±∞ observations.
/// - `FilterError::Linalg` if the factorization fails (not expected for
///   validated λ).
///
/// Examples
/// --------
/// ```rust
/// use rust_tsfilters::filters::{HPOptions, hpfilter};
///
/// let line: Vec<f64> = (0..20).map(|t| 1.0 + 0.5 * t as f64).collect();
/// let out = hpfilter(&line[..], &HPOptions::default()).unwrap();
/// assert!(out.cycle.iter().all(|c| c.abs() < 1e-8));
/// ```
pub fn hpfilter<'a, V>(x: V, opts: &HPOptions) -> FilterResult<SeriesDecomposition>
where
    V: AsArray<'a, f64, Ix1>,
{
    let x: ArrayView1<f64> = x.into();
    validate_series(x, MIN_OBSERVATIONS)?;
    log::debug!("hpfilter: n={}, lambda={}", x.len(), opts.lambda);

    let factor = opts.factor(x.len())?;
    let mut cycle = Array1::<f64>::zeros(x.len());
    hp_cycle(&factor, x, cycle.view_mut())?;
    Ok(SeriesDecomposition::from_cycle(x, cycle))
}

/// Hodrick–Prescott filter applied to each column of an `n × k` panel.
///
/// The penalty matrix depends only on `n` and λ, so it is factored once and
/// reused for all columns.
///
/// Errors
/// ------
/// - `FilterError::EmptyPanel`, `FilterError::InsufficientData`,
///   `FilterError::NonFiniteData` as for [`hpfilter`].
pub fn hpfilter_panel<'a, V>(x: V, opts: &HPOptions) -> FilterResult<PanelDecomposition>
where
    V: AsArray<'a, f64, Ix2>,
{
    let x: ArrayView2<f64> = x.into();
    validate_panel(x, MIN_OBSERVATIONS)?;
    log::debug!("hpfilter_panel: n={}, columns={}, lambda={}", x.nrows(), x.ncols(), opts.lambda);

    let factor = opts.factor(x.nrows())?;
    let cycle = map_columns(x, x.nrows(), |column, out| hp_cycle(&factor, column, out))?;
    Ok(PanelDecomposition::from_cycle(x, cycle))
}

/// Write `x − τ` into `out`, where τ solves the factored HP system.
fn hp_cycle(
    factor: &BandedCholesky, x: ArrayView1<f64>, out: ArrayViewMut1<f64>,
) -> FilterResult<()> {
    let trend = factor.solve(x)?;
    Zip::from(out).and(&x).and(&trend).for_each(|c, &xt, &tau| *c = xt - tau);
    Ok(())
}
