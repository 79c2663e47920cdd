// Domain models for fare analysis
// These modules contain pure business logic independent of console/rendering

pub mod quantile_band;
pub mod threshold_table;
pub mod verdict;

// Re-export key types for convenience
pub use quantile_band::{BandCutoffs, QuantileBand};
pub use threshold_table::{GeneralKey, GroupKey, SeasonalKey, TableMode, ThresholdTable};
pub use verdict::{BuyAction, FareQuery, Judgement, PriceTier, Verdict};
