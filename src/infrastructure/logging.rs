//! Logging initialization
//!
//! Console logging via tracing with env-filter control and timestamps in
//! KST (Korea Standard Time), matching the bank's publication times.

use anyhow::Result;
use chrono::{FixedOffset, Utc};
use tracing_subscriber::{
    fmt::{self, time::FormatTime},
    EnvFilter,
};

/// Time formatter for KST (UTC+9)
struct KstTimeFormatter;

impl FormatTime for KstTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        let kst_offset = FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset");
        let kst_time = Utc::now().with_timezone(&kst_offset);
        write!(w, "{}", kst_time.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize console logging. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(KstTimeFormatter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
