// Historical sample ingestion
pub mod fare_csv;

// Re-export commonly used types
pub use fare_csv::{LoadReport, RowRejection, load_fare_records, load_fare_records_from_reader};
