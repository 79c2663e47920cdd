pub mod core;

// Re-export the engine so callers use crate::engine::FareEngine
pub use self::core::FareEngine;
