//! Domain module - core entities
//!
//! Contains the extracted exchange-rate record and its natural key.

pub mod exchange_rate;

// Re-export commonly used items for convenience
pub use exchange_rate::ExchangeRateRecord;
