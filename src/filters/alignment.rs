//! filters::alignment — where filter output sits on the input's time axis.
//!
//! Purpose
//! -------
//! Make the output/input index correspondence of every filter explicit, so a
//! caller-side wrapper that carries timestamps or column labels never has to
//! guess how many samples a filter dropped.
//!
//! Key behaviors
//! -------------
//! - [`AlignmentRule`] names the trimming policy of a filter; each filter
//!   module exports its rule as a constant (`ALIGNMENT_RULE`).
//! - [`OutputAlignment`] is the rule evaluated for a concrete input length:
//!   output index `i` corresponds to input index `offset + i`.
//! - [`OutputAlignment::slice`] applies the contract to any caller-owned
//!   axis (dates, labels, …) of the input length.
//!
//! Conventions
//! -----------
//! - Baxter–King: `TrimWindow` — `offset = K`, `len = n − 2K`.
//! - Hodrick–Prescott and Christiano–Fitzgerald: `FullLength` —
//!   `offset = 0`, `len = n`.
use crate::filters::errors::{FilterError, FilterResult};
use std::ops::Range;

/// Trimming policy of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentRule {
    /// Output has one sample per input sample.
    FullLength,
    /// The first and last `K` samples are dropped.
    TrimWindow,
}

impl AlignmentRule {
    /// Evaluate the rule for an input of length `input_len` and half-window
    /// `k` (ignored by `FullLength`).
    pub fn resolve(self, input_len: usize, k: usize) -> OutputAlignment {
        match self {
            AlignmentRule::FullLength => OutputAlignment { offset: 0, len: input_len, input_len },
            AlignmentRule::TrimWindow => OutputAlignment {
                offset: k.min(input_len),
                len: input_len.saturating_sub(k.saturating_mul(2)),
                input_len,
            },
        }
    }
}

/// Offset/length contract for one filter call.
///
/// Fields
/// ------
/// - `offset`: input index of the first output sample.
/// - `len`: number of output samples.
/// - `input_len`: length of the input the contract was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputAlignment {
    pub offset: usize,
    pub len: usize,
    pub input_len: usize,
}

impl OutputAlignment {
    /// Input indices covered by the output.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Restrict a caller-owned axis of the input length to the output range.
    ///
    /// Errors
    /// ------
    /// - `FilterError::ShapeMismatch` when `axis.len() != input_len`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_tsfilters::filters::BKOptions;
    ///
    /// let quarters: Vec<u32> = (0..40).collect();
    /// let opts = BKOptions::new(6.0, 32.0, 12).unwrap();
    /// let kept = opts.alignment(quarters.len()).slice(&quarters).unwrap();
    /// assert_eq!(kept.first(), Some(&12));
    /// assert_eq!(kept.len(), 16);
    /// ```
    pub fn slice<'a, T>(&self, axis: &'a [T]) -> FilterResult<&'a [T]> {
        if axis.len() != self.input_len {
            return Err(FilterError::ShapeMismatch {
                column: 0,
                expected: self.input_len,
                actual: axis.len(),
            });
        }
        Ok(&axis[self.range()])
    }
}
