use itertools::Itertools;
use serde::Serialize;
use statrs::statistics::Statistics;

use crate::config::ANALYSIS;
use crate::domain::{FareRecord, Route, TimeSlot};
use crate::models::QuantileBand;
use crate::utils::maths_utils::{RangeF64, get_min_max};

/// Descriptive statistics of one price population
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two prices
    pub std_dev: Option<f64>,
    pub band: QuantileBand,
}

impl PriceStats {
    /// `None` for an empty population
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        let (min, max) = get_min_max(prices)?;
        let band = QuantileBand::from_prices(prices)?;
        let std_dev = if prices.len() > 1 {
            Some(prices.iter().std_dev())
        } else {
            None
        };

        Some(Self {
            count: prices.len(),
            min,
            max,
            mean: prices.iter().mean(),
            std_dev,
            band,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Textual stand-in for the price distribution charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub overall: PriceStats,
    pub by_route: Vec<(Route, PriceStats)>,
    pub by_time_slot: Vec<(TimeSlot, PriceStats)>,
    pub histogram: Vec<HistogramBin>,
}

/// Summarize the raw historical sample. `None` when the sample is empty.
pub fn summarize(sample: &[FareRecord]) -> Option<DistributionSummary> {
    let prices: Vec<f64> = sample.iter().map(FareRecord::price_f64).collect();
    let overall = PriceStats::from_prices(&prices)?;

    let by_route = grouped_stats(sample, FareRecord::route);
    let by_time_slot = grouped_stats(sample, |record| record.time_slot);
    let histogram = histogram(&prices, overall.min, overall.max, ANALYSIS.summary.histogram_bins);

    Some(DistributionSummary {
        overall,
        by_route,
        by_time_slot,
        histogram,
    })
}

fn grouped_stats<G, F>(sample: &[FareRecord], group_of: F) -> Vec<(G, PriceStats)>
where
    G: Ord + Copy + std::hash::Hash,
    F: Fn(&FareRecord) -> G,
{
    sample
        .iter()
        .map(|record| (group_of(record), record.price_f64()))
        .into_group_map()
        .into_iter()
        .sorted_by_key(|(group, _)| *group)
        .filter_map(|(group, prices)| PriceStats::from_prices(&prices).map(|stats| (group, stats)))
        .collect()
}

fn histogram(prices: &[f64], min: f64, max: f64, n_bins: usize) -> Vec<HistogramBin> {
    let range = RangeF64::new(min, max, n_bins.max(1));
    let mut counts = vec![0usize; range.n_chunks()];
    for &price in prices {
        counts[range.chunk_index(price)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| {
            let (lower, upper) = range.chunk_bounds(index);
            HistogramBin {
                lower,
                upper,
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airport, Season};

    fn record(dep: Airport, slot: TimeSlot, price: u32) -> FareRecord {
        FareRecord::new(dep, dep.other_end(), Season::Peak, slot, price)
    }

    #[test]
    fn test_empty_sample_has_no_summary() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_overall_and_grouped_stats() {
        let sample = vec![
            record(Airport::Tpe, TimeSlot::Morning, 5000),
            record(Airport::Tpe, TimeSlot::Morning, 7000),
            record(Airport::Tpe, TimeSlot::Evening, 9000),
            record(Airport::Nrt, TimeSlot::Evening, 11000),
        ];
        let summary = summarize(&sample).unwrap();

        assert_eq!(summary.overall.count, 4);
        assert_eq!(summary.overall.min, 5000.0);
        assert_eq!(summary.overall.max, 11000.0);
        assert_eq!(summary.overall.mean, 8000.0);
        assert!(summary.overall.std_dev.is_some());

        let routes: Vec<String> = summary.by_route.iter().map(|(r, _)| r.to_string()).collect();
        assert_eq!(routes, vec!["TPE→NRT", "NRT→TPE"]);
        assert_eq!(summary.by_route[0].1.count, 3);

        let slots: Vec<TimeSlot> = summary.by_time_slot.iter().map(|(s, _)| *s).collect();
        assert_eq!(slots, vec![TimeSlot::Morning, TimeSlot::Evening]);
    }

    #[test]
    fn test_histogram_counts_every_price() {
        let sample: Vec<FareRecord> = (1..=25)
            .map(|i| record(Airport::Tpe, TimeSlot::Noon, 4000 + i * 200))
            .collect();
        let summary = summarize(&sample).unwrap();

        assert_eq!(summary.histogram.len(), ANALYSIS.summary.histogram_bins);
        let total: usize = summary.histogram.iter().map(|bin| bin.count).sum();
        assert_eq!(total, sample.len());
        assert_eq!(summary.histogram.first().unwrap().lower, 4200.0);
        assert_eq!(summary.histogram.last().unwrap().upper, 9000.0);
    }

    #[test]
    fn test_single_price_has_no_std_dev() {
        let summary = summarize(&[record(Airport::Nrt, TimeSlot::Noon, 6400)]).unwrap();
        assert_eq!(summary.overall.std_dev, None);
        assert_eq!(summary.histogram[0].count, 1);
    }
}
