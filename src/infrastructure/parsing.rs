//! HTML parsing infrastructure for the rate-lookup page
//!
//! Trait-based parsing over an already-fetched page snapshot. The pipeline
//! is synchronous and holds no resources: localized date/time parsing,
//! label-anchored header metadata, safe numeric coercion and the currency
//! row scan compose into at most one record per snapshot.

pub mod config;
pub mod context;
pub mod datetime;
pub mod error;
pub mod metadata;
pub mod numeric;
pub mod rate_sheet_parser;
pub mod rate_table;

// Re-export public types
pub use config::ParsingConfig;
pub use context::ParseContext;
pub use error::{ParsingError, ParsingResult};
pub use metadata::{MetadataLocator, RateSheetMetadata};
pub use rate_sheet_parser::RateSheetParser;
pub use rate_table::RateTableScanner;

use scraper::Html;

/// Parser trait with context support
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse HTML with contextual information
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output>;
}
