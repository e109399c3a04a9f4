//! Rate-sheet parser composing metadata, row scan and numeric coercion
//!
//! Produces at most one `ExchangeRateRecord` per snapshot: the header
//! metadata (with its fallbacks) merged with the coerced cells of the first
//! row matching the target currency. No matching row means an empty result,
//! never an error.

use scraper::Html;
use tracing::{debug, info};

use super::context::ParseContext;
use super::metadata::{MetadataLocator, RateSheetMetadata};
use super::numeric::coerce_rate;
use super::rate_table::RateTableScanner;
use super::{ContextualParser, ParsingConfig, ParsingResult};
use crate::domain::exchange_rate::ExchangeRateRecord;

/// Parser for the bank's rate-lookup result page
pub struct RateSheetParser {
    metadata_locator: MetadataLocator,
    table_scanner: RateTableScanner,
}

impl RateSheetParser {
    /// Create a parser with the default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ParsingConfig::default())
    }

    /// Create a parser from selector configuration
    pub fn with_config(config: &ParsingConfig) -> ParsingResult<Self> {
        Ok(Self {
            metadata_locator: MetadataLocator::with_config(&config.metadata_selectors)?,
            table_scanner: RateTableScanner::with_config(&config.rate_table_selectors)?,
        })
    }

    /// Assemble a record from header metadata, the matched row's cells and
    /// the fixed context values. Pure composition; cells beyond index 10 are
    /// ignored.
    fn assemble_record(
        metadata: &RateSheetMetadata,
        cells: &[String],
        context: &ParseContext,
    ) -> ExchangeRateRecord {
        let cell = |index: usize| coerce_rate(cells.get(index).map(String::as_str));

        ExchangeRateRecord {
            base_date: metadata.base_date,
            currency_code: context.currency_code.clone(),
            announcement_sequence: context.announcement_sequence,
            announcement_type: context.announcement_type.clone(),
            cash_buy: cell(1),
            cash_buy_spread: cell(2),
            cash_sell: cell(3),
            cash_sell_spread: cell(4),
            remit_send: cell(5),
            remit_receive: cell(6),
            check_sell: cell(7),
            rate: cell(8),
            exchange_fee_rate: cell(9),
            conversion_rate: cell(10),
            announcement_datetime: metadata.announcement_datetime,
            query_datetime: metadata.query_datetime,
        }
    }
}

impl ContextualParser for RateSheetParser {
    type Output = Vec<ExchangeRateRecord>;
    type Context = ParseContext;

    fn parse_with_context(
        &self,
        html: &Html,
        context: &Self::Context,
    ) -> ParsingResult<Self::Output> {
        debug!(currency = %context.currency_code, "Parsing rate sheet");

        let metadata = self.metadata_locator.extract(html);

        let Some(cells) = self
            .table_scanner
            .find_currency_row(html, &context.currency_code)
        else {
            info!(
                currency = %context.currency_code,
                "No matching currency row, yielding empty result"
            );
            return Ok(Vec::new());
        };

        let record = Self::assemble_record(&metadata, &cells, context);
        info!(
            currency = %record.currency_code,
            base_date = %record.base_date,
            rate = record.rate,
            "Extracted exchange-rate record"
        );
        Ok(vec![record])
    }
}
