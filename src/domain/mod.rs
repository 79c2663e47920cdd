// Domain types and value objects
pub mod airport;
pub mod fare_record;
pub mod season;
pub mod time_slot;

// Re-export commonly used types
pub use airport::{Airport, Route};
pub use fare_record::FareRecord;
pub use season::{Season, SeasonChoice};
pub use time_slot::TimeSlot;
