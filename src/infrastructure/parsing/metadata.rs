//! Label-anchored metadata extraction from the rate-sheet header
//!
//! The header paragraph carries three labelled values: the base date and the
//! announcement datetime on the left, the query timestamp on the right. Each
//! value sits in `<strong>` elements that follow the `<em>` label, with
//! arbitrary whitespace/text nodes in between. Every lookup step degrades
//! individually: a missing label or value loses that one field only.

use chrono::{Local, NaiveDate, NaiveDateTime};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::config::MetadataSelectors;
use super::datetime::{parse_date_kr, parse_datetime_kr, parse_time_kr};
use super::error::{ParsingError, ParsingResult};

/// Date/time metadata extracted from the rate-sheet header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSheetMetadata {
    /// Calendar date the published rates are effective for. Falls back to
    /// today's local date when the header is missing.
    pub base_date: NaiveDate,

    /// When this rate sheet was published, if the header carried it
    pub announcement_datetime: Option<NaiveDateTime>,

    /// When the page itself was queried, if the header carried it
    pub query_datetime: Option<NaiveDateTime>,
}

impl RateSheetMetadata {
    /// Metadata with all fallbacks applied: today's date, no datetimes.
    pub fn fallback() -> Self {
        Self {
            base_date: Local::now().date_naive(),
            announcement_datetime: None,
            query_datetime: None,
        }
    }
}

/// Return up to `limit` following siblings of `element` that are elements of
/// the given tag kind, skipping intervening text nodes and other tags. The
/// scan stops as soon as `limit` matches have been collected.
pub fn following_siblings_of_kind<'a>(
    element: ElementRef<'a>,
    tag: &str,
    limit: usize,
) -> Vec<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == tag)
        .take(limit)
        .collect()
}

/// Locator for the three labelled metadata values
pub struct MetadataLocator {
    container: Selector,
    rate_box: Selector,
    left_region: Selector,
    right_region: Selector,
    label: Selector,
    value_tag: String,
    base_date_label: String,
    announcement_label: String,
    query_label: String,
}

impl MetadataLocator {
    /// Create a locator with the default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&MetadataSelectors::default())
    }

    /// Create a locator from selector configuration
    pub fn with_config(selectors: &MetadataSelectors) -> ParsingResult<Self> {
        Ok(Self {
            container: compile(&selectors.container)?,
            rate_box: compile(&selectors.rate_box)?,
            left_region: compile(&selectors.left_region)?,
            right_region: compile(&selectors.right_region)?,
            label: compile(&selectors.label)?,
            value_tag: selectors.value_tag.clone(),
            base_date_label: selectors.base_date_label.clone(),
            announcement_label: selectors.announcement_label.clone(),
            query_label: selectors.query_label.clone(),
        })
    }

    /// Extract header metadata from a page snapshot. Never fails: a missing
    /// header yields the fallback metadata, missing individual labels lose
    /// only their own field.
    pub fn extract(&self, document: &Html) -> RateSheetMetadata {
        let mut metadata = RateSheetMetadata::fallback();

        let rate_box = document
            .select(&self.container)
            .next()
            .and_then(|container| container.select(&self.rate_box).next());

        let Some(rate_box) = rate_box else {
            warn!("Rate-sheet header not found, using today as base date");
            return metadata;
        };

        if let Some(left) = rate_box.select(&self.left_region).next() {
            if let Some(base_date) = self.locate_base_date(left) {
                metadata.base_date = base_date;
            }
            metadata.announcement_datetime = self.locate_announcement(left);
        }

        if let Some(right) = rate_box.select(&self.right_region).next() {
            metadata.query_datetime = self.locate_query(right);
        }

        debug!(
            base_date = %metadata.base_date,
            announcement = ?metadata.announcement_datetime,
            query = ?metadata.query_datetime,
            "Extracted rate-sheet metadata"
        );
        metadata
    }

    /// 기준일: single value element after the label
    fn locate_base_date(&self, region: ElementRef<'_>) -> Option<NaiveDate> {
        let label = self.find_label(region, &self.base_date_label)?;
        let values = following_siblings_of_kind(label, &self.value_tag, 1);
        values.first().and_then(|value| parse_date_kr(&text_of(*value)))
    }

    /// 고시일시: date, time and sequence-number value elements after the
    /// label. The sequence number is ignored; the datetime is only formed
    /// when both the date and the time parse.
    fn locate_announcement(&self, region: ElementRef<'_>) -> Option<NaiveDateTime> {
        let label = self.find_label(region, &self.announcement_label)?;
        let values = following_siblings_of_kind(label, &self.value_tag, 3);

        let date = values.first().and_then(|value| parse_date_kr(&text_of(*value)))?;
        let time = values.get(1).and_then(|value| parse_time_kr(&text_of(*value)))?;
        Some(NaiveDateTime::new(date, time))
    }

    /// 조회시각: one value element carrying date and time in a single string
    fn locate_query(&self, region: ElementRef<'_>) -> Option<NaiveDateTime> {
        let label = self.find_label(region, &self.query_label)?;
        let values = following_siblings_of_kind(label, &self.value_tag, 1);
        values.first().and_then(|value| parse_datetime_kr(&text_of(*value)))
    }

    fn find_label<'a>(&self, region: ElementRef<'a>, marker: &str) -> Option<ElementRef<'a>> {
        region
            .select(&self.label)
            .find(|candidate| text_of(*candidate).contains(marker))
    }
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn compile(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| ParsingError::invalid_selector(selector, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
        <div id="searchContentDiv">
          <p class="txtRateBox">
            <span class="fl">
              <em>기준일 : </em><strong>2025년 08월 29일</strong>
              <em>고시일시 : </em><strong>2025년 08월 29일</strong>
              <strong>10시 30분 00초</strong> <strong>152회차</strong>
            </span>
            <span class="fr">
              <em>조회시각 : </em><strong>2025년 08월 29일 11시 02분 33초</strong>
            </span>
          </p>
        </div>
    "#;

    fn expect_datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, mo, d).and_then(|date| date.and_hms_opt(h, mi, s))
    }

    #[test]
    fn extracts_all_three_metadata_values() {
        let locator = MetadataLocator::new().unwrap();
        let document = Html::parse_document(HEADER);
        let metadata = locator.extract(&document);

        assert_eq!(metadata.base_date, NaiveDate::from_ymd_opt(2025, 8, 29).unwrap());
        assert_eq!(
            metadata.announcement_datetime,
            expect_datetime(2025, 8, 29, 10, 30, 0)
        );
        assert_eq!(
            metadata.query_datetime,
            expect_datetime(2025, 8, 29, 11, 2, 33)
        );
    }

    #[test]
    fn missing_header_falls_back_to_today() {
        let locator = MetadataLocator::new().unwrap();
        let document = Html::parse_document("<div><p>다른 내용</p></div>");
        let metadata = locator.extract(&document);

        assert_eq!(metadata.base_date, Local::now().date_naive());
        assert_eq!(metadata.announcement_datetime, None);
        assert_eq!(metadata.query_datetime, None);
    }

    #[test]
    fn announcement_without_time_value_stays_absent() {
        // Only the date <strong> is present after the announcement label.
        let html = r#"
            <div id="searchContentDiv"><p class="txtRateBox">
              <span class="fl">
                <em>기준일 : </em><strong>2025년 08월 29일</strong>
                <em>고시일시 : </em><strong>2025년 08월 29일</strong>
              </span>
            </p></div>
        "#;
        let locator = MetadataLocator::new().unwrap();
        let metadata = locator.extract(&Html::parse_document(html));

        assert_eq!(metadata.base_date, NaiveDate::from_ymd_opt(2025, 8, 29).unwrap());
        assert_eq!(metadata.announcement_datetime, None);
    }

    #[test]
    fn sibling_scan_skips_intervening_nodes_and_stops_early() {
        let html = r#"
            <p><em id="anchor">라벨</em> text <span>skip</span>
               <strong>one</strong> more <strong>two</strong>
               <strong>three</strong> <strong>four</strong></p>
        "#;
        let document = Html::parse_document(html);
        let anchor_sel = Selector::parse("em#anchor").unwrap();
        let anchor = document.select(&anchor_sel).next().unwrap();

        let values = following_siblings_of_kind(anchor, "strong", 3);
        let texts: Vec<String> = values.into_iter().map(text_of).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn query_value_with_date_only_stays_absent() {
        let html = r#"
            <div id="searchContentDiv"><p class="txtRateBox">
              <span class="fr">
                <em>조회시각 : </em><strong>2025년 08월 29일</strong>
              </span>
            </p></div>
        "#;
        let locator = MetadataLocator::new().unwrap();
        let metadata = locator.extract(&Html::parse_document(html));
        assert_eq!(metadata.query_datetime, None);
    }
}
