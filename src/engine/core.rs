use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::analysis::{DistributionSummary, Thresholds, build_thresholds, summarize};
use crate::config::DEBUG_FLAGS;
use crate::data::load_fare_records;
use crate::domain::FareRecord;
use crate::models::{FareQuery, Verdict};

/// Owns the historical sample and the thresholds derived from it.
///
/// Readers take an `Arc` snapshot; `reload` builds a complete replacement and
/// then swaps the pointer, so a snapshot never observes a half-built table.
#[derive(Debug, Clone, Default)]
pub struct FareEngine {
    sample: Arc<Vec<FareRecord>>,
    thresholds: Arc<Thresholds>,
}

impl FareEngine {
    pub fn new(sample: Vec<FareRecord>) -> Self {
        let thresholds = build_thresholds(&sample);
        Self {
            sample: Arc::new(sample),
            thresholds: Arc::new(thresholds),
        }
    }

    /// Load and clean the CSV at `path`, then build thresholds from it.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let report = load_fare_records(path)?;
        Ok(Self::new(report.records))
    }

    /// Replace the sample. Both tables are rebuilt before being published.
    pub fn reload(&mut self, sample: Vec<FareRecord>) {
        let thresholds = Arc::new(build_thresholds(&sample));

        // THE SWAP: existing snapshots keep the old tables alive until dropped
        self.sample = Arc::new(sample);
        self.thresholds = thresholds;

        if DEBUG_FLAGS.print_engine_reloads {
            log::info!(
                "🔄 Thresholds republished ({} fares, {} seasonal / {} general groups)",
                self.sample.len(),
                self.thresholds.seasonal.len(),
                self.thresholds.general.len()
            );
        }
    }

    pub fn judge(&self, query: &FareQuery) -> Verdict {
        self.thresholds.judge(query)
    }

    /// Shared read-only handle on the current tables
    pub fn snapshot(&self) -> Arc<Thresholds> {
        Arc::clone(&self.thresholds)
    }

    pub fn sample(&self) -> &[FareRecord] {
        &self.sample
    }

    pub fn summary(&self) -> Option<DistributionSummary> {
        summarize(&self.sample)
    }
}
