use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Airport, Route, SeasonChoice, TimeSlot};
use crate::models::quantile_band::BandCutoffs;
use crate::models::threshold_table::TableMode;

/// A live fare to be judged. The arrival airport is derived from the departure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareQuery {
    pub departure: Airport,
    pub arrival: Airport,
    pub time_slot: TimeSlot,
    pub season: SeasonChoice,
    pub price: u32,
}

impl FareQuery {
    pub fn new(departure: Airport, time_slot: TimeSlot, season: SeasonChoice, price: u32) -> Self {
        let route = Route::from_departure(departure);
        Self {
            departure: route.departure,
            arrival: route.arrival,
            time_slot,
            season,
            price,
        }
    }

    pub fn route(&self) -> Route {
        Route::new(self.departure, self.arrival)
    }
}

/// Where a price falls within its group's band, cheapest first
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
pub enum PriceTier {
    /// price <= p25
    VeryCheap,
    /// p25 < price <= p50
    CheapOrFair,
    /// p50 < price <= p75
    Expensive,
    /// price > p75
    VeryExpensive,
}

impl PriceTier {
    pub fn action(&self) -> BuyAction {
        match self {
            PriceTier::VeryCheap => BuyAction::StronglyBuy,
            PriceTier::CheapOrFair => BuyAction::Buy,
            PriceTier::Expensive => BuyAction::ConsiderWaiting,
            PriceTier::VeryExpensive => BuyAction::DoNotBuy,
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PriceTier::VeryCheap => write!(f, "very cheap"),
            PriceTier::CheapOrFair => write!(f, "cheap or fair"),
            PriceTier::Expensive => write!(f, "expensive"),
            PriceTier::VeryExpensive => write!(f, "very expensive"),
        }
    }
}

/// Recommended action paired with each tier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum BuyAction {
    StronglyBuy,
    Buy,
    ConsiderWaiting,
    DoNotBuy,
}

impl fmt::Display for BuyAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuyAction::StronglyBuy => write!(f, "strongly recommended to buy now"),
            BuyAction::Buy => write!(f, "recommended to buy"),
            BuyAction::ConsiderWaiting => write!(f, "consider waiting if your plans are flexible"),
            BuyAction::DoNotBuy => write!(f, "not recommended to buy now"),
        }
    }
}

/// A successful classification
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgement {
    pub query: FareQuery,
    pub mode: TableMode,
    pub band: BandCutoffs,
    pub tier: PriceTier,
    pub action: BuyAction,
}

/// Outcome of judging one query against one table.
/// A lookup miss is an ordinary outcome, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Judged(Judgement),
    InsufficientSample { query: FareQuery, mode: TableMode },
}

impl Verdict {
    pub fn query(&self) -> &FareQuery {
        match self {
            Verdict::Judged(judgement) => &judgement.query,
            Verdict::InsufficientSample { query, .. } => query,
        }
    }

    pub fn mode(&self) -> TableMode {
        match self {
            Verdict::Judged(judgement) => judgement.mode,
            Verdict::InsufficientSample { mode, .. } => *mode,
        }
    }

    pub fn judgement(&self) -> Option<&Judgement> {
        match self {
            Verdict::Judged(judgement) => Some(judgement),
            Verdict::InsufficientSample { .. } => None,
        }
    }

    pub fn tier(&self) -> Option<PriceTier> {
        self.judgement().map(|j| j.tier)
    }
}
