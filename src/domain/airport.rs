use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::text_utils::clean_field;

/// Endpoints of the supported route. The set is closed: every fare in the
/// sample flies between these two airports.
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
pub enum Airport {
    /// Taoyuan International (Taipei)
    #[serde(rename = "TPE")]
    Tpe,
    /// Narita International (Tokyo)
    #[serde(rename = "NRT")]
    Nrt,
}

impl Airport {
    pub fn code(&self) -> &'static str {
        match self {
            Airport::Tpe => "TPE",
            Airport::Nrt => "NRT",
        }
    }

    /// Accepts the IATA code in any case, full-width or half-width.
    pub fn parse(text: &str) -> Option<Self> {
        match clean_field(text).to_uppercase().as_str() {
            "TPE" => Some(Airport::Tpe),
            "NRT" => Some(Airport::Nrt),
            _ => None,
        }
    }

    /// The arrival airport is never chosen independently: it is the other end of the route.
    pub fn other_end(self) -> Self {
        match self {
            Airport::Tpe => Airport::Nrt,
            Airport::Nrt => Airport::Tpe,
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Direction of travel along the route
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Route {
    pub departure: Airport,
    pub arrival: Airport,
}

impl Route {
    pub fn new(departure: Airport, arrival: Airport) -> Self {
        Self {
            departure,
            arrival,
        }
    }

    /// Outbound route from `departure` to the opposite endpoint
    pub fn from_departure(departure: Airport) -> Self {
        Self::new(departure, departure.other_end())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}→{}", self.departure, self.arrival)
    }
}
