//! Analysis and computation configuration

/// Quantile cut points used to build every price band
pub struct BandLevels {
    pub lower: f64,
    pub median: f64,
    pub upper: f64,
}

/// Settings for the textual distribution summary
pub struct SummarySettings {
    // Number of equal-width bins in the overall price histogram
    pub histogram_bins: usize,
    // Width (in characters) of the longest histogram bar
    pub histogram_bar_width: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Product line covered by the sample (shown in the console banner)
    pub route_description: &'static str,
    // Period the historical sample was collected in
    pub sample_period: &'static str,

    // Sub-groups
    pub bands: BandLevels,
    pub summary: SummarySettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    route_description: "Taiwanese full-service carriers, economy, one-way TPE <-> NRT",
    sample_period: "fares collected January to April 2026",

    bands: BandLevels {
        lower: 0.25,
        median: 0.50,
        upper: 0.75,
    },

    summary: SummarySettings {
        histogram_bins: 10,
        histogram_bar_width: 40,
    },
};
