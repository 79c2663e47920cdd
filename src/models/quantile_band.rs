use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ANALYSIS;
use crate::utils::maths_utils::{quantile_linear, sorted_copy};

/// Quartile cut points of one group's price distribution.
/// Immutable once built; `p25 <= p50 <= p75` always holds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantileBand {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

impl QuantileBand {
    /// Compute the band from an unsorted price sample. `None` when the sample is empty.
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        let sorted = sorted_copy(prices);
        Some(Self {
            p25: quantile_linear(&sorted, ANALYSIS.bands.lower)?,
            p50: quantile_linear(&sorted, ANALYSIS.bands.median)?,
            p75: quantile_linear(&sorted, ANALYSIS.bands.upper)?,
        })
    }

    pub fn is_well_formed(&self) -> bool {
        self.p25 <= self.p50 && self.p50 <= self.p75
    }

    /// Integer view for display, truncated towards zero (never rounded)
    pub fn cutoffs(&self) -> BandCutoffs {
        BandCutoffs {
            p25: self.p25.trunc() as u32,
            p50: self.p50.trunc() as u32,
            p75: self.p75.trunc() as u32,
        }
    }
}

/// Truncated integer band echoed back with every judgement
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCutoffs {
    pub p25: u32,
    pub p50: u32,
    pub p75: u32,
}

impl fmt::Display for BandCutoffs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "p25≈{}, p50≈{}, p75≈{}", self.p25, self.p50, self.p75)
    }
}
