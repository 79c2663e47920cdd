use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::text_utils::clean_field;

/// Travel season flag carried by every historical record
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
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Peak,
    OffPeak,
}

impl Season {
    /// Label used in the historical sample ("旺" / "淡")
    pub fn label(&self) -> &'static str {
        match self {
            Season::Peak => "旺",
            Season::OffPeak => "淡",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Season::Peak => write!(f, "peak"),
            Season::OffPeak => write!(f, "off-peak"),
        }
    }
}

/// Season as supplied with a query: it may legitimately be unknown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonChoice {
    Known(Season),
    Unknown,
}

const PEAK_WORDS: &[&str] = &["旺", "旺季", "peak"];
const OFF_PEAK_WORDS: &[&str] = &["淡", "淡季", "off-peak", "offpeak", "off"];
const UNKNOWN_WORDS: &[&str] = &["不知道", "不確定", "?", "na", "unknown"];

impl SeasonChoice {
    /// Map one of the accepted synonyms to its canonical value.
    /// Anything outside the vocabulary is `None`; it is never coerced to `Unknown`.
    pub fn normalize(raw: &str) -> Option<Self> {
        let word = clean_field(raw).to_lowercase();
        let word = word.as_str();
        if PEAK_WORDS.contains(&word) {
            Some(SeasonChoice::Known(Season::Peak))
        } else if OFF_PEAK_WORDS.contains(&word) {
            Some(SeasonChoice::Known(Season::OffPeak))
        } else if UNKNOWN_WORDS.contains(&word) {
            Some(SeasonChoice::Unknown)
        } else {
            None
        }
    }

    pub fn known(&self) -> Option<Season> {
        match self {
            SeasonChoice::Known(season) => Some(*season),
            SeasonChoice::Unknown => None,
        }
    }
}

impl From<Season> for SeasonChoice {
    fn from(season: Season) -> Self {
        SeasonChoice::Known(season)
    }
}

impl fmt::Display for SeasonChoice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeasonChoice::Known(season) => write!(f, "{} season", season),
            SeasonChoice::Unknown => write!(f, "any season"),
        }
    }
}
