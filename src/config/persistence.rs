//! File locations and CSV layout

/// Where the historical sample lives and how its columns are named
pub struct SampleFileConfig {
    /// Default path of the historical fare CSV (overridable via `--data`)
    pub default_path: &'static str,
    /// Accepted header names for each column: (native, english)
    pub departure_headers: &'static [&'static str],
    pub arrival_headers: &'static [&'static str],
    pub season_headers: &'static [&'static str],
    pub time_slot_headers: &'static [&'static str],
    pub price_headers: &'static [&'static str],
}

pub struct PersistenceConfig {
    pub sample: SampleFileConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    sample: SampleFileConfig {
        default_path: "機票資料.csv",
        departure_headers: &["出發地", "departure"],
        arrival_headers: &["目的地", "arrival"],
        season_headers: &["淡旺季", "season"],
        time_slot_headers: &["飛行時間", "time_slot"],
        price_headers: &["票價", "price"],
    },
};
