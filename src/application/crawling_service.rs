//! Crawl orchestration
//!
//! Wires a page snapshot source, the rate-sheet parser and the optional
//! repository sink together. The service owns no browser and no session;
//! it receives one HTML document per run and routes at most one record
//! downstream.

use anyhow::Result;
use scraper::Html;
use tracing::{error, info};

use crate::domain::exchange_rate::ExchangeRateRecord;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::exchange_rate_repository::ExchangeRateRepository;
use crate::infrastructure::parsing::{ContextualParser, ParseContext, RateSheetParser};

/// Outcome counts of one crawl run
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct CrawlSummary {
    pub suc_cnt: u32,
    pub err_cnt: u32,
}

/// Full outcome of one crawl run: counts plus the extracted records
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub summary: CrawlSummary,
    pub records: Vec<ExchangeRateRecord>,
}

/// Service extracting and routing exchange-rate records
pub struct CrawlingService {
    parser: RateSheetParser,
    context: ParseContext,
    repository: Option<ExchangeRateRepository>,
}

impl CrawlingService {
    /// Build the service from application configuration. Opens the database
    /// sink only when one is configured.
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let parser = RateSheetParser::with_config(&config.parsing)?;
        let context = ParseContext::new(
            config.target.currency_code.clone(),
            config.target.announcement_sequence,
        )
        .with_announcement_type(config.target.announcement_type.clone());

        let repository = match &config.database.path {
            Some(path) => Some(ExchangeRateRepository::connect(path.as_ref()).await?),
            None => None,
        };

        Ok(Self {
            parser,
            context,
            repository,
        })
    }

    /// Extract records from one snapshot without touching any sink.
    pub fn extract(&self, html: &str) -> Result<Vec<ExchangeRateRecord>> {
        let document = Html::parse_document(html);
        let records = self.parser.parse_with_context(&document, &self.context)?;
        Ok(records)
    }

    /// Extract from one snapshot and route the result: persist when a
    /// repository is configured, and report success/error counts. An empty
    /// extraction is a normal outcome and counts as neither.
    pub async fn run_on_snapshot(&self, html: &str) -> CrawlOutcome {
        let mut outcome = CrawlOutcome::default();

        let records = match self.extract(html) {
            Ok(records) => records,
            Err(e) => {
                error!("Extraction failed: {e}");
                outcome.summary.err_cnt += 1;
                return outcome;
            }
        };

        if records.is_empty() {
            info!("No exchange-rate record extracted from snapshot");
            return outcome;
        }

        for record in &records {
            if let Some(repository) = &self.repository {
                if let Err(e) = repository.upsert_rate(record).await {
                    error!("Failed to persist record: {e}");
                    outcome.summary.err_cnt += 1;
                    continue;
                }
            }
            info!(
                currency = %record.currency_code,
                base_date = %record.base_date,
                rate = record.rate,
                "Processed exchange-rate record"
            );
            outcome.summary.suc_cnt += 1;
        }

        outcome.records = records;
        outcome
    }
}
