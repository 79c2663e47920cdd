use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::text_utils::clean_field;

/// Coarse departure-time bucket. Bucketing is by hour only.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    /// 06:00 - 09:59
    Morning,
    /// 10:00 - 14:59
    Noon,
    /// 15:00 - 20:59
    Evening,
}

impl TimeSlot {
    pub const CLOCK_FORMAT: &'static str = "%H:%M";

    /// Bucket a 24-hour "HH:MM" departure time.
    ///
    /// Returns `None` for malformed input and for the uncovered night hours
    /// (21:00 - 05:59). Callers must re-prompt or reject rather than guess.
    pub fn classify(clock: &str) -> Option<Self> {
        let time = NaiveTime::parse_from_str(clock.trim(), Self::CLOCK_FORMAT).ok()?;
        Self::from_hour(time.hour())
    }

    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            6..=9 => Some(TimeSlot::Morning),
            10..=14 => Some(TimeSlot::Noon),
            15..=20 => Some(TimeSlot::Evening),
            _ => None,
        }
    }

    /// Label used in the historical sample ("早" / "午" / "晚")
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "早",
            TimeSlot::Noon => "午",
            TimeSlot::Evening => "晚",
        }
    }

    /// Parse a sample label, native or English.
    pub fn from_label(text: &str) -> Option<Self> {
        match clean_field(text).to_lowercase().as_str() {
            "早" | "morning" => Some(TimeSlot::Morning),
            "午" | "noon" => Some(TimeSlot::Noon),
            "晚" | "evening" => Some(TimeSlot::Evening),
            _ => None,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeSlot::Morning => write!(f, "morning"),
            TimeSlot::Noon => write!(f, "noon"),
            TimeSlot::Evening => write!(f, "evening"),
        }
    }
}
