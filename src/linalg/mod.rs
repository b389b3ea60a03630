//! linalg — banded symmetric positive-definite solves.
//!
//! Purpose
//! -------
//! Provide the linear-algebra kernel behind the Hodrick–Prescott filter: an
//! explicit banded storage type and a banded Cholesky factorization whose
//! cost is linear in the system size.
//!
//! Key behaviors
//! -------------
//! - [`SymmetricBandedMatrix`] stores only the lower band of a symmetric
//!   matrix and can assemble the HP system `I + λ·DᵀD` directly.
//! - [`BandedCholesky`] factors once and solves any number of right-hand
//!   sides.
//! - Failures surface as [`LinalgError`] through [`LinalgResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Dense `n × n` matrices are never formed; storage is `n × (p + 1)`.
//! - Positive definiteness is checked pivot by pivot during factorization.
//!
//! Downstream usage
//! ----------------
//! - `filters::hodrick_prescott` assembles the HP matrix, factors it once per
//!   series length, and solves each column against the shared factor.

pub mod banded;
pub mod errors;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::banded::{BandedCholesky, SymmetricBandedMatrix};
pub use self::errors::{LinalgError, LinalgResult};
