use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::domain::{Airport, FareRecord, Season, TimeSlot};
use crate::models::quantile_band::QuantileBand;
use crate::models::verdict::FareQuery;

/// Which grouping a table (and therefore a verdict) was built from
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    /// direction + season + time slot
    Seasonal,
    /// direction + time slot, season ignored
    General,
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableMode::Seasonal => write!(f, "season known (direction + season + time slot)"),
            TableMode::General => {
                write!(f, "season unknown (overall distribution by direction + time slot)")
            }
        }
    }
}

/// The shape of the tuple used to partition historical fares.
pub trait GroupKey: Copy + Eq + Hash + Ord + Debug + fmt::Display {
    const MODE: TableMode;

    /// Key for a historical record, or `None` when the record cannot take part in this grouping.
    fn from_record(record: &FareRecord) -> Option<Self>;

    /// Key for a live query, or `None` when the query lacks a field this shape needs.
    fn for_query(query: &FareQuery) -> Option<Self>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeasonalKey {
    pub departure: Airport,
    pub arrival: Airport,
    pub season: Season,
    pub time_slot: TimeSlot,
}

impl GroupKey for SeasonalKey {
    const MODE: TableMode = TableMode::Seasonal;

    fn from_record(record: &FareRecord) -> Option<Self> {
        Some(Self {
            departure: record.departure,
            arrival: record.arrival,
            season: record.season?,
            time_slot: record.time_slot,
        })
    }

    fn for_query(query: &FareQuery) -> Option<Self> {
        Some(Self {
            departure: query.departure,
            arrival: query.arrival,
            season: query.season.known()?,
            time_slot: query.time_slot,
        })
    }
}

impl fmt::Display for SeasonalKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}→{} [{}] [{}]",
            self.departure, self.arrival, self.season, self.time_slot
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GeneralKey {
    pub departure: Airport,
    pub arrival: Airport,
    pub time_slot: TimeSlot,
}

impl GroupKey for GeneralKey {
    const MODE: TableMode = TableMode::General;

    fn from_record(record: &FareRecord) -> Option<Self> {
        Some(Self {
            departure: record.departure,
            arrival: record.arrival,
            time_slot: record.time_slot,
        })
    }

    fn for_query(query: &FareQuery) -> Option<Self> {
        Some(Self {
            departure: query.departure,
            arrival: query.arrival,
            time_slot: query.time_slot,
        })
    }
}

impl fmt::Display for GeneralKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}→{} [{}]", self.departure, self.arrival, self.time_slot)
    }
}

/// Group key -> quantile band. Groups with no records are simply absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable<K: GroupKey> {
    bands: BTreeMap<K, QuantileBand>,
}

impl<K: GroupKey> ThresholdTable<K> {
    pub fn from_bands(bands: BTreeMap<K, QuantileBand>) -> Self {
        Self { bands }
    }

    pub fn mode(&self) -> TableMode {
        K::MODE
    }

    pub fn get(&self, key: &K) -> Option<&QuantileBand> {
        self.bands.get(key)
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Groups in key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &QuantileBand)> {
        self.bands.iter()
    }
}

impl<K: GroupKey> Default for ThresholdTable<K> {
    fn default() -> Self {
        Self {
            bands: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeasonChoice;

    #[test]
    fn test_seasonal_key_needs_a_known_season() {
        let known = FareQuery::new(Airport::Tpe, TimeSlot::Morning, Season::Peak.into(), 6000);
        let unknown = FareQuery::new(Airport::Tpe, TimeSlot::Morning, SeasonChoice::Unknown, 6000);

        let key = SeasonalKey::for_query(&known).unwrap();
        assert_eq!(key.arrival, Airport::Nrt);
        assert_eq!(key.season, Season::Peak);
        assert!(SeasonalKey::for_query(&unknown).is_none());
        assert!(GeneralKey::for_query(&unknown).is_some());
    }

    #[test]
    fn test_record_and_query_keys_agree() {
        let record = FareRecord::new(Airport::Nrt, Airport::Tpe, Season::OffPeak, TimeSlot::Evening, 8200);
        let query = FareQuery::new(Airport::Nrt, TimeSlot::Evening, Season::OffPeak.into(), 1);

        assert_eq!(SeasonalKey::from_record(&record), SeasonalKey::for_query(&query));
        assert_eq!(GeneralKey::from_record(&record), GeneralKey::for_query(&query));
    }

    #[test]
    fn test_seasonless_record_only_has_a_general_key() {
        let record =
            FareRecord::new(Airport::Tpe, Airport::Nrt, None::<Season>, TimeSlot::Morning, 9000);
        assert!(SeasonalKey::from_record(&record).is_none());
        assert!(GeneralKey::from_record(&record).is_some());
    }

    #[test]
    fn test_key_display() {
        let record = FareRecord::new(Airport::Tpe, Airport::Nrt, Season::Peak, TimeSlot::Noon, 7000);
        assert_eq!(
            SeasonalKey::from_record(&record).unwrap().to_string(),
            "TPE→NRT [peak] [noon]"
        );
        assert_eq!(GeneralKey::from_record(&record).unwrap().to_string(), "TPE→NRT [noon]");
    }

    #[test]
    fn test_default_table_is_empty() {
        let table: ThresholdTable<GeneralKey> = ThresholdTable::default();
        assert!(table.is_empty());
        assert_eq!(table.mode(), TableMode::General);
    }
}
