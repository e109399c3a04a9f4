//! One-shot handler entry point
//!
//! Runs a single crawl and emits a machine-readable JSON summary on stdout,
//! for schedulers that only care about success/error counts:
//!
//!   {"statusCode":200,"suc_cnt":1,"err_cnt":0}
//!
//! A run that extracts nothing still exits 0 with zero counts; only setup
//! failures (config, database, fetch) exit non-zero.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use hana_fx_crawler::application::CrawlingService;
use hana_fx_crawler::infrastructure::config::AppConfig;
use hana_fx_crawler::infrastructure::http_client::{read_snapshot_file, PageSnapshotClient};
use hana_fx_crawler::infrastructure::logging;

#[derive(Serialize)]
struct HandlerResponse {
    #[serde(rename = "statusCode")]
    status_code: u16,
    suc_cnt: u32,
    err_cnt: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let config_path = std::env::var("HANA_FX_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config = AppConfig::load(&PathBuf::from(config_path)).await?;
    let service = CrawlingService::from_config(&config).await?;

    let html = match std::env::var("HANA_FX_SNAPSHOT_FILE") {
        Ok(path) => read_snapshot_file(&PathBuf::from(path)).await?,
        Err(_) => PageSnapshotClient::new(&config.crawler)?.fetch_snapshot().await?,
    };

    let outcome = service.run_on_snapshot(&html).await;
    let response = HandlerResponse {
        status_code: 200,
        suc_cnt: outcome.summary.suc_cnt,
        err_cnt: outcome.summary.err_cnt,
    };

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
