//! filters — trend/cycle decomposition of evenly spaced time series.
//!
//! Purpose
//! -------
//! Bundle the three classical business-cycle filters, their options, shared
//! weight construction, input validation, and error types under a single
//! namespace. This is the main entry point of the crate and the surface the
//! Python bindings delegate to.
//!
//! Key behaviors
//! -------------
//! - [`baxter_king`]: symmetric, mean-corrected `2K + 1` band-pass kernel;
//!   returns the cycle only, trimmed by `K` samples at each end.
//! - [`hodrick_prescott`]: penalized least-squares trend via a banded
//!   Cholesky solve of `(I + λ·DᵀD) τ = x`; returns cycle and trend.
//! - [`christiano_fitzgerald`]: asymmetric full-sample band-pass filter with
//!   a random-walk (or stationary) boundary correction; returns cycle and
//!   trend.
//! - Every filter has a 1-D entry point (`*filter`) and a panel entry point
//!   (`*filter_panel`) that applies the same computation to each column of
//!   an `n × k` array (rows = time).
//!
//! Invariants & assumptions
//! ------------------------
//! - Options are validated once at construction (`BKOptions::new`,
//!   `HPOptions::new`, `CFOptions::new`); filter calls validate only data
//!   (length, finiteness, non-empty panels).
//! - For HP and CF, `cycle + trend == input` elementwise: the trend is
//!   always formed as `input − cycle`.
//! - Panel results equal the per-column 1-D results; columns never interact.
//!
//! Conventions
//! -----------
//! - Periods are in samples per cycle; defaults follow the quarterly
//!   convention (band 6–32, `K = 12`, `λ = 1600`).
//! - Output placement relative to the input is described by
//!   [`OutputAlignment`], available from each options type via
//!   `alignment(n)`.
//! - Filters are pure functions: no global state, no I/O. Entry points emit
//!   `log::debug!` records; inner loops never log.
//!
//! Downstream usage
//! ----------------
//! - Rust callers typically `use rust_tsfilters::filters::prelude::*;`.
//! - Callers that carry timestamps or labels apply
//!   [`OutputAlignment::slice`] to keep them in step with the output.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own invariants.
//! - `tests/` exercises the public surface end to end against literal
//!   reference vectors.

pub mod alignment;
pub mod baxter_king;
pub mod christiano_fitzgerald;
pub mod columns;
pub mod decomposition;
pub mod errors;
pub mod hodrick_prescott;
pub mod validation;
pub mod weights;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::alignment::{AlignmentRule, OutputAlignment};

pub use self::baxter_king::{BKOptions, bkfilter, bkfilter_panel};

pub use self::christiano_fitzgerald::{CFAssumption, CFOptions, cffilter, cffilter_panel};

pub use self::columns::stack_columns;

pub use self::decomposition::{Decomposition, PanelDecomposition, SeriesDecomposition};

pub use self::errors::{FilterError, FilterResult};

pub use self::hodrick_prescott::{HPOptions, hpfilter, hpfilter_panel};

pub use self::weights::Band;

// ---- Optional convenience prelude for downstream crates -------------------
//
//     use rust_tsfilters::filters::prelude::*;

pub mod prelude {
    pub use super::{
        AlignmentRule, BKOptions, Band, CFAssumption, CFOptions, Decomposition, FilterError,
        FilterResult, HPOptions, OutputAlignment, PanelDecomposition, SeriesDecomposition,
        bkfilter, bkfilter_panel, cffilter, cffilter_panel, hpfilter, hpfilter_panel,
        stack_columns,
    };
}
