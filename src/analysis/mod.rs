// Threshold construction, fare classification and distribution summaries
pub mod distribution_summary;
pub mod fare_classifier;
pub mod threshold_builder;

// Re-export commonly used types
pub use distribution_summary::{DistributionSummary, PriceStats, summarize};
pub use fare_classifier::{classify, tier_for_price};
pub use threshold_builder::{Thresholds, build_table, build_thresholds};
