//! Application configuration
//!
//! Configuration for the crawl target, the extraction context and the
//! optional database sink. Everything has a working default matching the
//! bank's current page; a JSON config file can override any part.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::info;

use super::parsing::ParsingConfig;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Page fetch settings
    pub crawler: CrawlerConfig,

    /// Which currency/publication to extract
    pub target: TargetConfig,

    /// Optional persistence sink
    pub database: DatabaseConfig,

    /// Selector/label configuration for the extraction core
    pub parsing: ParsingConfig,
}

/// Page fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Rate-lookup page URL
    pub page_url: String,

    /// User agent sent with the snapshot request
    pub user_agent: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_url: "https://www.kebhana.com/cont/mall/mall15/mall1501/index.jsp".to_string(),
            user_agent:
                "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

/// Which currency/publication to extract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Currency code to look for in the rate table
    pub currency_code: String,

    /// 고시회차 - announcement sequence number
    pub announcement_sequence: i32,

    /// Announcement type label
    pub announcement_type: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            currency_code: "USD".to_string(),
            announcement_sequence: 1,
            announcement_type: "FIRST".to_string(),
        }
    }
}

/// Optional persistence sink
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// SQLite database path; `None` disables persistence
    pub path: Option<String>,
}

impl AppConfig {
    /// Load configuration from a JSON file, or fall back to defaults when no
    /// file exists at `path`.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_first_usd_announcement() {
        let config = AppConfig::default();
        assert_eq!(config.target.currency_code, "USD");
        assert_eq!(config.target.announcement_sequence, 1);
        assert_eq!(config.target.announcement_type, "FIRST");
        assert!(config.database.path.is_none());
    }

    #[tokio::test]
    async fn missing_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.json")).await.unwrap();
        assert_eq!(config.crawler.request_timeout_seconds, 30);
    }

    #[tokio::test]
    async fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = AppConfig::default();
        config.target.currency_code = "JPY".to_string();
        tokio::fs::write(&path, serde_json::to_string(&config).unwrap())
            .await
            .unwrap();

        let loaded = AppConfig::load(&path).await.unwrap();
        assert_eq!(loaded.target.currency_code, "JPY");
    }
}
