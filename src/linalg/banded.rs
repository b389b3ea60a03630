//! linalg::banded — symmetric banded storage and banded Cholesky solves.
//!
//! Purpose
//! -------
//! Solve symmetric positive-definite systems `A x = b` whose nonzeros lie
//! within `p` diagonals of the main diagonal, without ever forming the dense
//! `n × n` matrix. The Hodrick–Prescott filter uses this with `p = 2` for
//! `A = I + λ·DᵀD`, `D` the second-difference operator.
//!
//! Key behaviors
//! -------------
//! - [`SymmetricBandedMatrix`] stores the main diagonal and the `p`
//!   sub-diagonals in an `n × (p + 1)` array; the upper triangle is implied
//!   by symmetry.
//! - [`SymmetricBandedMatrix::hp_penalty`] assembles `I + λ·DᵀD` directly in
//!   banded form by accumulating `λ·dᵣdᵣᵀ` for every stencil row `dᵣ`.
//! - [`BandedCholesky::factor`] computes `A = LLᵀ` in `O(n·p²)` and
//!   [`BandedCholesky::solve`] performs forward/back substitution in `O(n·p)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `bands[[i, d]] = A[i, i − d]` for `0 ≤ d ≤ p` and `d ≤ i`; entries with
//!   `d > i` are unused padding and stay zero.
//! - The Cholesky factor inherits the bandwidth of `A`: `L[i, j] = 0` for
//!   `i − j > p`.
//! - Factorization fails with [`LinalgError::NotPositiveDefinite`] as soon
//!   as a pivot is not strictly positive; no partial factor is returned.
//!
//! Conventions
//! -----------
//! - Indices are 0-based positions in the virtual dense matrix.
//! - Vectors are `ndarray` 1-D arrays; right-hand sides are borrowed as
//!   `ArrayView1<f64>` so callers can pass matrix columns without copying.
//!
//! Downstream usage
//! ----------------
//! - Factor once per matrix and reuse the factor for every right-hand side
//!   (the HP filter shares one factor across all columns of a panel).
//!
//! Testing notes
//! -------------
//! - Unit tests check the assembled HP penalty against its closed-form band
//!   pattern, compare solves with a dense elimination reference, and cover
//!   the non-positive-definite and dimension-mismatch error paths.
use crate::linalg::errors::{LinalgError, LinalgResult};
use ndarray::{Array1, Array2, ArrayView1};

/// Second-difference stencil `(1, −2, 1)` forming each row of `D`.
const SECOND_DIFFERENCE: [f64; 3] = [1.0, -2.0, 1.0];

/// SymmetricBandedMatrix — lower-band storage of a symmetric matrix.
///
/// Fields
/// ------
/// - `bands`: `Array2<f64>`
///   `n × (p + 1)` array with `bands[[i, d]] = A[i, i − d]`.
///
/// Performance
/// -----------
/// - Memory is `O(n·p)`; element access is `O(1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricBandedMatrix {
    bands: Array2<f64>,
}

impl SymmetricBandedMatrix {
    /// Zero matrix of dimension `dim` with `bandwidth` stored sub-diagonals.
    pub fn zeros(dim: usize, bandwidth: usize) -> Self {
        SymmetricBandedMatrix { bands: Array2::zeros((dim, bandwidth + 1)) }
    }

    /// Assemble the Hodrick–Prescott system matrix `I + λ·DᵀD`.
    ///
    /// Parameters
    /// ----------
    /// - `dim`: `usize`
    ///   Series length `n`. For `n < 3` the operator `D` has no rows and the
    ///   result is the identity.
    /// - `lambda`: `f64`
    ///   Smoothing weight. The caller validates `λ > 0`; this constructor
    ///   performs no checks.
    ///
    /// Returns
    /// -------
    /// `SymmetricBandedMatrix`
    ///   Pentadiagonal (`p = 2`) matrix. For `n ≥ 4` the diagonal of `DᵀD` is
    ///   `1, 5, 6, …, 6, 5, 1`, the first off-diagonal `−2, −4, …, −4, −2`
    ///   and the second off-diagonal all ones.
    pub fn hp_penalty(dim: usize, lambda: f64) -> Self {
        let mut matrix = SymmetricBandedMatrix::zeros(dim, 2);
        for row in 0..dim.saturating_sub(2) {
            for a in 0..3 {
                for b in 0..=a {
                    matrix.bands[[row + a, a - b]] +=
                        lambda * SECOND_DIFFERENCE[a] * SECOND_DIFFERENCE[b];
                }
            }
        }
        for i in 0..dim {
            matrix.bands[[i, 0]] += 1.0;
        }
        matrix
    }

    /// Matrix dimension `n`.
    pub fn dim(&self) -> usize {
        self.bands.nrows()
    }

    /// Number of stored sub-diagonals `p`.
    pub fn bandwidth(&self) -> usize {
        self.bands.ncols() - 1
    }

    /// Entry `A[row, col]`; zero outside the band.
    ///
    /// Panics
    /// ------
    /// - Panics if `row` or `col` is not smaller than [`dim`](Self::dim).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dim() && col < self.dim(), "index ({row}, {col}) out of bounds");
        let (hi, lo) = if row >= col { (row, col) } else { (col, row) };
        let offset = hi - lo;
        if offset > self.bandwidth() { 0.0 } else { self.bands[[hi, offset]] }
    }

    /// Set `A[row, col]` (and by symmetry `A[col, row]`) to `value`.
    ///
    /// Errors
    /// ------
    /// - `LinalgError::OutsideBand` when `|row − col| > p`.
    /// - `LinalgError::DimensionMismatch` when an index is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> LinalgResult<()> {
        let dim = self.dim();
        if row >= dim || col >= dim {
            return Err(LinalgError::DimensionMismatch { expected: dim, actual: row.max(col) + 1 });
        }
        let (hi, lo) = if row >= col { (row, col) } else { (col, row) };
        if hi - lo > self.bandwidth() {
            return Err(LinalgError::OutsideBand { row, col, bandwidth: self.bandwidth() });
        }
        self.bands[[hi, hi - lo]] = value;
        Ok(())
    }

    /// Banded matrix–vector product `A x`.
    ///
    /// Errors
    /// ------
    /// - `LinalgError::DimensionMismatch` when `x.len() != n`.
    pub fn matvec(&self, x: ArrayView1<f64>) -> LinalgResult<Array1<f64>> {
        let n = self.dim();
        if x.len() != n {
            return Err(LinalgError::DimensionMismatch { expected: n, actual: x.len() });
        }
        let p = self.bandwidth();
        let mut y = Array1::<f64>::zeros(n);
        for i in 0..n {
            y[i] += self.bands[[i, 0]] * x[i];
            for d in 1..=p.min(i) {
                let a = self.bands[[i, d]];
                y[i] += a * x[i - d];
                y[i - d] += a * x[i];
            }
        }
        Ok(y)
    }
}

/// BandedCholesky — lower-triangular banded factor `L` with `A = LLᵀ`.
///
/// Purpose
/// -------
/// Hold the Cholesky factor of a [`SymmetricBandedMatrix`] in the same banded
/// layout so repeated solves cost `O(n·p)` each.
///
/// Fields
/// ------
/// - `lower`: `Array2<f64>`
///   `n × (p + 1)` array with `lower[[i, d]] = L[i, i − d]`.
///
/// Invariants
/// ----------
/// - `lower[[i, 0]] > 0` for every row (strictly positive diagonal).
#[derive(Debug, Clone, PartialEq)]
pub struct BandedCholesky {
    lower: Array2<f64>,
}

impl BandedCholesky {
    /// Factor a symmetric positive-definite banded matrix.
    ///
    /// Returns
    /// -------
    /// `LinalgResult<BandedCholesky>`
    ///   The banded factor on success.
    ///
    /// Errors
    /// ------
    /// - `LinalgError::NotPositiveDefinite { index, pivot }`
    ///   Returned at the first row whose pivot is `≤ 0` or not finite.
    ///
    /// Notes
    /// -----
    /// - Row `i` only touches columns `max(0, i − p)..=i`, so the inner
    ///   update sums at most `p` products.
    pub fn factor(matrix: &SymmetricBandedMatrix) -> LinalgResult<Self> {
        let n = matrix.dim();
        let p = matrix.bandwidth();
        log::trace!("banded cholesky: n={n}, bandwidth={p}");

        let mut lower = Array2::<f64>::zeros((n, p + 1));
        for i in 0..n {
            let first = i.saturating_sub(p);
            for j in first..=i {
                let mut sum = matrix.bands[[i, i - j]];
                for k in first..j {
                    sum -= lower[[i, i - k]] * lower[[j, j - k]];
                }
                if j == i {
                    if !(sum > 0.0 && sum.is_finite()) {
                        return Err(LinalgError::NotPositiveDefinite { index: i, pivot: sum });
                    }
                    lower[[i, 0]] = sum.sqrt();
                } else {
                    lower[[i, i - j]] = sum / lower[[j, 0]];
                }
            }
        }
        Ok(BandedCholesky { lower })
    }

    /// Dimension of the factored matrix.
    pub fn dim(&self) -> usize {
        self.lower.nrows()
    }

    /// Solve `A x = rhs` using the stored factor.
    ///
    /// Errors
    /// ------
    /// - `LinalgError::DimensionMismatch` when `rhs.len() != n`.
    pub fn solve(&self, rhs: ArrayView1<f64>) -> LinalgResult<Array1<f64>> {
        let n = self.dim();
        if rhs.len() != n {
            return Err(LinalgError::DimensionMismatch { expected: n, actual: rhs.len() });
        }
        let p = self.lower.ncols() - 1;

        // Forward substitution: L y = rhs.
        let mut y = Array1::<f64>::zeros(n);
        for i in 0..n {
            let mut acc = rhs[i];
            for k in i.saturating_sub(p)..i {
                acc -= self.lower[[i, i - k]] * y[k];
            }
            y[i] = acc / self.lower[[i, 0]];
        }

        // Back substitution: Lᵀ x = y.
        let mut x = Array1::<f64>::zeros(n);
        for i in (0..n).rev() {
            let mut acc = y[i];
            for k in (i + 1)..(i + p + 1).min(n) {
                acc -= self.lower[[k, k - i]] * x[k];
            }
            x[i] = acc / self.lower[[i, 0]];
        }
        Ok(x)
    }
}
