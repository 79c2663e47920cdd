use serde::{Deserialize, Serialize};

use crate::domain::{Airport, Route, Season, TimeSlot};

/// One cleaned historical fare observation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareRecord {
    pub departure: Airport,
    pub arrival: Airport,
    /// `None` when the sample row carried no usable season; such rows only
    /// feed tables that ignore the season
    pub season: Option<Season>,
    pub time_slot: TimeSlot,
    /// Positive fare in TWD
    pub price: u32,
}

impl FareRecord {
    // A constructor for convenience
    pub fn new<S: Into<Option<Season>>>(
        departure: Airport,
        arrival: Airport,
        season: S,
        time_slot: TimeSlot,
        price: u32,
    ) -> Self {
        debug_assert!(price > 0, "fare records must carry a positive price");
        FareRecord {
            departure,
            arrival,
            season: season.into(),
            time_slot,
            price,
        }
    }

    pub fn route(&self) -> Route {
        Route::new(self.departure, self.arrival)
    }

    pub fn price_f64(&self) -> f64 {
        self.price as f64
    }
}
