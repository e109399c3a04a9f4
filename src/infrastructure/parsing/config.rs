//! Parsing configuration for rate-sheet extraction
//!
//! Centralized configuration for the CSS selectors and label markers used to
//! locate the metadata header and the rate table. Defaults match the current
//! markup of the bank's rate-lookup page.

use serde::{Deserialize, Serialize};

/// Main parsing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Selectors for the metadata header (기준일/고시일시/조회시각)
    pub metadata_selectors: MetadataSelectors,

    /// Selectors for the rate table
    pub rate_table_selectors: RateTableSelectors,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            metadata_selectors: MetadataSelectors::default(),
            rate_table_selectors: RateTableSelectors::default(),
        }
    }
}

/// CSS selectors and text markers for the metadata header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataSelectors {
    /// Root container of the search-result pane
    pub container: String,

    /// Header paragraph holding all three metadata entries
    pub rate_box: String,

    /// Left region: base date and announcement datetime
    pub left_region: String,

    /// Right region: query timestamp
    pub right_region: String,

    /// Label elements within a region
    pub label: String,

    /// Element tag carrying the value text next to a label
    pub value_tag: String,

    /// Label marker for the base date (기준일)
    pub base_date_label: String,

    /// Label marker for the announcement datetime (고시일시)
    pub announcement_label: String,

    /// Label marker for the query timestamp (조회시각)
    pub query_label: String,
}

impl Default for MetadataSelectors {
    fn default() -> Self {
        Self {
            container: "div#searchContentDiv".to_string(),
            rate_box: "p.txtRateBox".to_string(),
            left_region: "span.fl".to_string(),
            right_region: "span.fr".to_string(),
            label: "em".to_string(),
            value_tag: "strong".to_string(),
            base_date_label: "기준일".to_string(),
            announcement_label: "고시일시".to_string(),
            query_label: "조회시각".to_string(),
        }
    }
}

/// CSS selectors for the rate table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTableSelectors {
    /// The rate table itself
    pub table: String,

    /// Table body holding the currency rows
    pub body: String,

    /// One currency row
    pub row: String,

    /// Cells within a row
    pub cell: String,

    /// Currency link inside the first cell, preferred over raw cell text
    pub currency_link: String,
}

impl Default for RateTableSelectors {
    fn default() -> Self {
        Self {
            table: "table.tblBasic".to_string(),
            body: "tbody".to_string(),
            row: "tr".to_string(),
            cell: "td".to_string(),
            currency_link: "a".to_string(),
        }
    }
}
