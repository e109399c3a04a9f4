//! Application layer module
//!
//! Orchestrates the extraction core and routes its output to the
//! configured sinks.

pub mod crawling_service;

pub use crawling_service::{CrawlOutcome, CrawlSummary, CrawlingService};
