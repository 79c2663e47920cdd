use std::collections::BTreeMap;

use itertools::Itertools;

use crate::analysis::fare_classifier::classify;
use crate::config::DEBUG_FLAGS;
use crate::domain::FareRecord;
use crate::models::{
    FareQuery, GeneralKey, GroupKey, QuantileBand, SeasonalKey, ThresholdTable, Verdict,
};

/// Both lookup tables, always built from the same sample.
/// There is no partial update path: a new sample means a new `Thresholds`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Thresholds {
    pub seasonal: ThresholdTable<SeasonalKey>,
    pub general: ThresholdTable<GeneralKey>,
}

impl Thresholds {
    /// Judge with the seasonal table when the query's season is known,
    /// otherwise with the general table.
    pub fn judge(&self, query: &FareQuery) -> Verdict {
        if query.season.known().is_some() {
            classify(query, &self.seasonal)
        } else {
            classify(query, &self.general)
        }
    }
}

/// Partition `sample` by key shape `K` and compute one band per non-empty group.
/// Records that cannot form a `K` (e.g. no season for the seasonal shape) are skipped.
pub fn build_table<K: GroupKey>(sample: &[FareRecord]) -> ThresholdTable<K> {
    let groups = sample
        .iter()
        .filter_map(|record| K::from_record(record).map(|key| (key, record.price_f64())))
        .into_group_map();

    let bands: BTreeMap<K, QuantileBand> = groups
        .into_iter()
        .filter_map(|(key, prices)| QuantileBand::from_prices(&prices).map(|band| (key, band)))
        .collect();

    ThresholdTable::from_bands(bands)
}

/// Build the seasonal and general tables from one historical sample.
pub fn build_thresholds(sample: &[FareRecord]) -> Thresholds {
    let thresholds = Thresholds {
        seasonal: build_table(sample),
        general: build_table(sample),
    };

    log::info!(
        "📊 Built thresholds from {} fares: {} seasonal groups, {} general groups",
        sample.len(),
        thresholds.seasonal.len(),
        thresholds.general.len()
    );

    if DEBUG_FLAGS.print_threshold_tables {
        log_table(&thresholds.seasonal);
        log_table(&thresholds.general);
    }

    thresholds
}

fn log_table<K: GroupKey>(table: &ThresholdTable<K>) {
    log::info!("--- {:?} table ({} groups) ---", table.mode(), table.len());
    for (key, band) in table.iter() {
        log::info!("   {} → {}", key, band.cutoffs());
    }
}
