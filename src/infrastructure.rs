//! Infrastructure layer for parsing, persistence, and external integrations
//!
//! HTML parsing of the rate-lookup page, the SQLite repository, the page
//! snapshot client, configuration and logging.

pub mod config;
pub mod exchange_rate_repository;
pub mod http_client;
pub mod logging;
pub mod parsing;

// Re-export commonly used items
pub use config::AppConfig;
pub use exchange_rate_repository::ExchangeRateRepository;
pub use http_client::PageSnapshotClient;
pub use parsing::{
    ContextualParser, ParseContext, ParsingConfig, ParsingError, ParsingResult, RateSheetParser,
};
