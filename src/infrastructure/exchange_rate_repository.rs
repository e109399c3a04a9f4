//! Repository for extracted exchange-rate records
//!
//! SQLite-backed persistence keyed on the record's natural key
//! (base_date, currency_code, announcement_sequence). Re-running the crawl
//! for the same publication replaces the previous row.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::domain::exchange_rate::ExchangeRateRecord;

/// Repository for the exchange_rates table
#[derive(Clone)]
pub struct ExchangeRateRepository {
    pool: SqlitePool,
}

impl ExchangeRateRepository {
    /// Wrap an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (and create if missing) a database file and bootstrap the schema
    pub async fn connect(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", path.display()))
            .with_context(|| format!("Invalid database path {}", path.display()))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {}", path.display()))?;

        let repository = Self::new(pool);
        repository.init_schema().await?;
        Ok(repository)
    }

    /// Create the exchange_rates table when it does not exist yet
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS exchange_rates (
                base_date TEXT NOT NULL,
                currency_code TEXT NOT NULL,
                announcement_sequence INTEGER NOT NULL,
                announcement_type TEXT NOT NULL,
                cash_buy REAL NOT NULL,
                cash_buy_spread REAL NOT NULL,
                cash_sell REAL NOT NULL,
                cash_sell_spread REAL NOT NULL,
                remit_send REAL NOT NULL,
                remit_receive REAL NOT NULL,
                check_sell REAL NOT NULL,
                rate REAL NOT NULL,
                exchange_fee_rate REAL NOT NULL,
                conversion_rate REAL NOT NULL,
                announcement_datetime TEXT,
                query_datetime TEXT,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (base_date, currency_code, announcement_sequence)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create exchange_rates table")?;
        Ok(())
    }

    /// Insert or replace one record on its natural key
    pub async fn upsert_rate(&self, record: &ExchangeRateRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO exchange_rates
            (base_date, currency_code, announcement_sequence, announcement_type,
             cash_buy, cash_buy_spread, cash_sell, cash_sell_spread,
             remit_send, remit_receive, check_sell, rate,
             exchange_fee_rate, conversion_rate,
             announcement_datetime, query_datetime, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.base_date)
        .bind(&record.currency_code)
        .bind(record.announcement_sequence)
        .bind(&record.announcement_type)
        .bind(record.cash_buy)
        .bind(record.cash_buy_spread)
        .bind(record.cash_sell)
        .bind(record.cash_sell_spread)
        .bind(record.remit_send)
        .bind(record.remit_receive)
        .bind(record.check_sell)
        .bind(record.rate)
        .bind(record.exchange_fee_rate)
        .bind(record.conversion_rate)
        .bind(record.announcement_datetime)
        .bind(record.query_datetime)
        .bind(chrono::Utc::now().naive_utc())
        .execute(&self.pool)
        .await
        .context("Failed to upsert exchange-rate record")?;

        debug!(
            currency = %record.currency_code,
            base_date = %record.base_date,
            "Upserted exchange-rate record"
        );
        Ok(())
    }

    /// Fetch one record by its natural key
    pub async fn get_rate(
        &self,
        base_date: chrono::NaiveDate,
        currency_code: &str,
        announcement_sequence: i32,
    ) -> Result<Option<ExchangeRateRecord>> {
        let row = sqlx::query(
            r#"
            SELECT base_date, currency_code, announcement_sequence, announcement_type,
                   cash_buy, cash_buy_spread, cash_sell, cash_sell_spread,
                   remit_send, remit_receive, check_sell, rate,
                   exchange_fee_rate, conversion_rate,
                   announcement_datetime, query_datetime
            FROM exchange_rates
            WHERE base_date = ? AND currency_code = ? AND announcement_sequence = ?
            "#,
        )
        .bind(base_date)
        .bind(currency_code)
        .bind(announcement_sequence)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to query exchange_rates")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(ExchangeRateRecord {
            base_date: row.try_get("base_date")?,
            currency_code: row.try_get("currency_code")?,
            announcement_sequence: row.try_get("announcement_sequence")?,
            announcement_type: row.try_get("announcement_type")?,
            cash_buy: row.try_get("cash_buy")?,
            cash_buy_spread: row.try_get("cash_buy_spread")?,
            cash_sell: row.try_get("cash_sell")?,
            cash_sell_spread: row.try_get("cash_sell_spread")?,
            remit_send: row.try_get("remit_send")?,
            remit_receive: row.try_get("remit_receive")?,
            check_sell: row.try_get("check_sell")?,
            rate: row.try_get("rate")?,
            exchange_fee_rate: row.try_get("exchange_fee_rate")?,
            conversion_rate: row.try_get("conversion_rate")?,
            announcement_datetime: row.try_get("announcement_datetime")?,
            query_datetime: row.try_get("query_datetime")?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> ExchangeRateRecord {
        ExchangeRateRecord {
            base_date: NaiveDate::from_ymd_opt(2025, 8, 29).unwrap(),
            currency_code: "USD".to_string(),
            announcement_sequence: 1,
            announcement_type: "FIRST".to_string(),
            cash_buy: 1426.89,
            cash_buy_spread: 1.75,
            cash_sell: 1377.85,
            cash_sell_spread: 1.75,
            remit_send: 1416.0,
            remit_receive: 1388.74,
            check_sell: 1385.74,
            rate: 1402.37,
            exchange_fee_rate: 2.58169,
            conversion_rate: 1.0,
            announcement_datetime: NaiveDate::from_ymd_opt(2025, 8, 29)
                .and_then(|d| d.and_hms_opt(10, 30, 0)),
            query_datetime: None,
        }
    }

    async fn memory_repository() -> ExchangeRateRepository {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        let repository = ExchangeRateRepository::new(pool);
        repository.init_schema().await.unwrap();
        repository
    }

    #[tokio::test]
    async fn upsert_then_fetch_round_trips() {
        let repository = memory_repository().await;
        let record = sample_record();
        repository.upsert_rate(&record).await.unwrap();

        let fetched = repository
            .get_rate(record.base_date, "USD", 1)
            .await
            .unwrap()
            .expect("record should exist");
        assert_eq!(fetched, record);
    }

    #[tokio::test]
    async fn upsert_replaces_on_natural_key() {
        let repository = memory_repository().await;
        let mut record = sample_record();
        repository.upsert_rate(&record).await.unwrap();

        record.rate = 1405.00;
        repository.upsert_rate(&record).await.unwrap();

        let fetched = repository
            .get_rate(record.base_date, "USD", 1)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.rate, 1405.00);
    }

    #[tokio::test]
    async fn get_rate_on_empty_table_returns_none() {
        let repository = memory_repository().await;
        let missing = repository
            .get_rate(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), "USD", 1)
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
