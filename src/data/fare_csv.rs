use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};

use crate::config::{DEBUG_FLAGS, PERSISTENCE};
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::domain::{Airport, FareRecord, Season, SeasonChoice, TimeSlot};
use crate::utils::text_utils::clean_field;

/// Cleaned records plus how many rows were thrown away
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<FareRecord>,
    pub dropped: usize,
    /// Kept rows with no usable season (general table only)
    pub without_season: usize,
}

/// Why a CSV row did not make it into the sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    Malformed(String),
    UnknownAirport(String),
    SameEndpoints,
    UnknownTimeSlot(String),
    BadPrice(String),
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RowRejection::Malformed(e) => write!(f, "unreadable row: {}", e),
            RowRejection::UnknownAirport(raw) => write!(f, "unknown airport {:?}", raw),
            RowRejection::SameEndpoints => write!(f, "departure equals arrival"),
            RowRejection::UnknownTimeSlot(raw) => write!(
                f,
                "unknown time slot {:?} (expected one of {})",
                raw,
                TimeSlot::iter().map(|slot| slot.label()).join("/")
            ),
            RowRejection::BadPrice(raw) => write!(f, "price {:?} is not a positive number", raw),
        }
    }
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    departure: usize,
    arrival: usize,
    season: usize,
    time_slot: usize,
    price: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let lookup: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (clean_field(name.trim_start_matches('\u{feff}')), idx))
            .collect();

        let find = |aliases: &[&str]| -> Result<usize> {
            match aliases.iter().find_map(|alias| lookup.get(*alias)) {
                Some(idx) => Ok(*idx),
                None => bail!(
                    "missing required column (expected one of {:?}), found {:?}",
                    aliases,
                    headers.iter().collect::<Vec<_>>()
                ),
            }
        };

        let sample = &PERSISTENCE.sample;
        Ok(Self {
            departure: find(sample.departure_headers)?,
            arrival: find(sample.arrival_headers)?,
            season: find(sample.season_headers)?,
            time_slot: find(sample.time_slot_headers)?,
            price: find(sample.price_headers)?,
        })
    }
}

/// Read and clean the historical fare CSV at `path`.
pub fn load_fare_records(path: &Path) -> Result<LoadReport> {
    let file = File::open(path).context(format!("Failed to open fare sample: {}", path.display()))?;
    let report = load_fare_records_from_reader(BufReader::new(file))
        .context(format!("Failed to read fare sample: {}", path.display()))?;

    log::info!(
        "✅ Loaded {} fares from {}",
        report.records.len(),
        path.display()
    );
    Ok(report)
}

/// Same as [`load_fare_records`] over any reader. Rows that fail cleaning are
/// dropped and counted; only a missing column or unreadable header is an error.
pub fn load_fare_records_from_reader<R: Read>(reader: R) -> Result<LoadReport> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers().context("Failed to read CSV header")?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut report = LoadReport::default();
    for (idx, row) in csv_reader.records().enumerate() {
        let parsed = row
            .map_err(|e| RowRejection::Malformed(e.to_string()))
            .and_then(|record| parse_row(&record, &columns));
        match parsed {
            Ok(record) => {
                if record.season.is_none() {
                    report.without_season += 1;
                }
                report.records.push(record);
            }
            Err(rejection) => {
                report.dropped += 1;
                if DEBUG_FLAGS.print_dropped_rows {
                    // +2: one for the header, one for 1-based line numbers
                    log::debug!("Dropping line {}: {}", idx + 2, rejection);
                }
            }
        }
    }

    if report.dropped > 0 {
        log::warn!(
            "⚠️  Dropped {} of {} rows that failed cleaning",
            report.dropped,
            report.dropped + report.records.len()
        );
    }
    if report.without_season > 0 {
        log::info!(
            "ℹ️  {} rows have no season ({}); used for the general table only",
            report.without_season,
            Season::iter().map(|season| season.label()).join("/")
        );
    }
    Ok(report)
}

fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("")
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<FareRecord, RowRejection> {
    let raw_departure = field(record, columns.departure);
    let departure = Airport::parse(raw_departure)
        .ok_or_else(|| RowRejection::UnknownAirport(raw_departure.to_string()))?;

    let raw_arrival = field(record, columns.arrival);
    let arrival = Airport::parse(raw_arrival)
        .ok_or_else(|| RowRejection::UnknownAirport(raw_arrival.to_string()))?;
    if departure == arrival {
        return Err(RowRejection::SameEndpoints);
    }

    // Blank or unrecognised seasons keep the row out of the seasonal table only
    let raw_season = field(record, columns.season);
    let season = SeasonChoice::normalize(raw_season).and_then(|choice| choice.known());
    if season.is_none() && DEBUG_FLAGS.print_dropped_rows {
        log::debug!("No season in {:?}, row kept for the general table", raw_season);
    }

    let raw_slot = field(record, columns.time_slot);
    let time_slot = TimeSlot::from_label(raw_slot)
        .ok_or_else(|| RowRejection::UnknownTimeSlot(raw_slot.to_string()))?;

    let raw_price = field(record, columns.price);
    let price = parse_price(raw_price).ok_or_else(|| RowRejection::BadPrice(raw_price.to_string()))?;

    Ok(FareRecord::new(departure, arrival, season, time_slot, price))
}

/// Numeric coercion: decimals are truncated like an integer cast.
fn parse_price(raw: &str) -> Option<u32> {
    let value: f64 = clean_field(raw).parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < 1.0 || truncated > u32::MAX as f64 {
        return None;
    }
    Some(truncated as u32)
}
