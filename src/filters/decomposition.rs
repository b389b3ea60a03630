//! filters::decomposition — cycle/trend output pairs.
//!
//! [`Decomposition`] is the output of the full-length filters (HP and CF). It
//! is generic over the array dimension so the same type carries a single
//! series (`Ix1`) or a panel (`Ix2`). The trend is always formed as
//! `input − cycle`, which makes `cycle + trend == input` hold to rounding for
//! every filter that returns this type.
use ndarray::{Array, ArrayView, Dimension, Ix1, Ix2};

/// Cycle and trend components of a filtered series or panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition<D: Dimension> {
    /// Band-passed / detrended component.
    pub cycle: Array<f64, D>,
    /// `input − cycle`.
    pub trend: Array<f64, D>,
}

/// Decomposition of a single series.
pub type SeriesDecomposition = Decomposition<Ix1>;

/// Decomposition of an `n × k` panel.
pub type PanelDecomposition = Decomposition<Ix2>;

impl<D: Dimension> Decomposition<D> {
    /// Pair `cycle` with the trend implied by `input`.
    pub(crate) fn from_cycle(input: ArrayView<f64, D>, cycle: Array<f64, D>) -> Self {
        let mut trend = input.to_owned();
        trend -= &cycle;
        Decomposition { cycle, trend }
    }

    /// Split into `(cycle, trend)`, the order used by the Python API.
    pub fn into_parts(self) -> (Array<f64, D>, Array<f64, D>) {
        (self.cycle, self.trend)
    }
}
