//! Hana FX Crawler - exchange-rate sheet extraction
//!
//! Extracts one structured exchange-rate record for a configured currency
//! from a snapshot of the bank's rate-lookup page, with optional SQLite
//! persistence. Browser automation (navigation, form interaction, session
//! lifecycle) is an external collaborator: this crate starts from a raw
//! HTML document.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the main entry points
pub use application::{CrawlSummary, CrawlingService};
pub use domain::ExchangeRateRecord;
pub use infrastructure::AppConfig;
