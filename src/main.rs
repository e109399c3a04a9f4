//! Local CLI run: fetch or load one page snapshot, extract the configured
//! currency's record, print it, and persist when a database is configured.
//!
//! Usage:
//!   hana-fx-crawler [--config <path>] [--file <snapshot.html>]
//!
//! Without `--file` the page is fetched over HTTP. Note that the bank
//! renders the rate sheet inside an iframe after form interaction, so HTTP
//! fetch only works against an already-addressable snapshot URL; saved
//! snapshots from the browser-automation collaborator go through `--file`.

use anyhow::Result;
use std::path::PathBuf;

use hana_fx_crawler::application::CrawlingService;
use hana_fx_crawler::infrastructure::config::AppConfig;
use hana_fx_crawler::infrastructure::http_client::{read_snapshot_file, PageSnapshotClient};
use hana_fx_crawler::infrastructure::logging;

struct CliArgs {
    config_path: PathBuf,
    snapshot_file: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = CliArgs {
        config_path: PathBuf::from("config.json"),
        snapshot_file: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                args.config_path = PathBuf::from(value);
            }
            "--file" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--file requires a path"))?;
                args.snapshot_file = Some(PathBuf::from(value));
            }
            other => anyhow::bail!("Unknown argument: {other}"),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let args = parse_args()?;
    let config = AppConfig::load(&args.config_path).await?;
    let service = CrawlingService::from_config(&config).await?;

    let html = match &args.snapshot_file {
        Some(path) => read_snapshot_file(path).await?,
        None => PageSnapshotClient::new(&config.crawler)?.fetch_snapshot().await?,
    };

    let outcome = service.run_on_snapshot(&html).await;

    for record in &outcome.records {
        println!("{}", serde_json::to_string_pretty(record)?);
    }
    if outcome.records.is_empty() {
        println!(
            "No rate published for {} in this snapshot",
            config.target.currency_code
        );
    }

    Ok(())
}
