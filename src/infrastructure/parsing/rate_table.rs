//! Currency row scanning in the rate table
//!
//! Finds the single row of the rate table belonging to the target currency
//! and hands back its raw cell texts. Row layout: currency label plus ten
//! data columns; shorter rows are decorative and get skipped.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::config::RateTableSelectors;
use super::error::{ParsingError, ParsingResult};

/// Minimum cells a data row must expose: currency label + ten rate columns.
pub const MIN_ROW_CELLS: usize = 11;

/// Scanner for the rate table
pub struct RateTableScanner {
    table: Selector,
    body: Selector,
    row: Selector,
    cell: Selector,
    currency_link: Selector,
}

impl RateTableScanner {
    /// Create a scanner with the default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&RateTableSelectors::default())
    }

    /// Create a scanner from selector configuration
    pub fn with_config(selectors: &RateTableSelectors) -> ParsingResult<Self> {
        Ok(Self {
            table: compile(&selectors.table)?,
            body: compile(&selectors.body)?,
            row: compile(&selectors.row)?,
            cell: compile(&selectors.cell)?,
            currency_link: compile(&selectors.currency_link)?,
        })
    }

    /// Scan for the first row whose label cell contains `currency_code` and
    /// return its cell texts in document order. A missing table, body or row
    /// yields `None`, never an error.
    pub fn find_currency_row(&self, document: &Html, currency_code: &str) -> Option<Vec<String>> {
        let body = document
            .select(&self.table)
            .next()?
            .select(&self.body)
            .next()?;

        for row in body.select(&self.row) {
            let cells: Vec<ElementRef<'_>> = row.select(&self.cell).collect();
            if cells.len() < MIN_ROW_CELLS {
                continue;
            }

            let label = self.currency_label(cells[0]);
            if label.contains(currency_code) {
                debug!(currency = currency_code, label = %label, "Found currency row");
                return Some(
                    cells
                        .iter()
                        .map(|cell| cell.text().collect::<String>())
                        .collect(),
                );
            }
        }

        None
    }

    /// Displayed text of the label cell, preferring an embedded link's text.
    fn currency_label(&self, cell: ElementRef<'_>) -> String {
        let text = match cell.select(&self.currency_link).next() {
            Some(link) => link.text().collect::<String>(),
            None => cell.text().collect::<String>(),
        };
        text.trim().to_string()
    }
}

fn compile(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| ParsingError::invalid_selector(selector, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, cells: usize) -> String {
        let mut html = format!("<tr><td><a href=\"#\">{label}</a></td>");
        for i in 1..cells {
            html.push_str(&format!("<td>{i}.00</td>"));
        }
        html.push_str("</tr>");
        html
    }

    fn table(rows: &[String]) -> String {
        format!(
            "<table class=\"tblBasic\"><tbody>{}</tbody></table>",
            rows.join("")
        )
    }

    #[test]
    fn finds_first_matching_row_only() {
        let html = table(&[
            row("유럽연합 EUR", 11),
            row("미국 USD", 11),
            row("미국 USD (두번째)", 11),
        ]);
        let scanner = RateTableScanner::new().unwrap();
        let cells = scanner
            .find_currency_row(&Html::parse_document(&html), "USD")
            .unwrap();

        assert_eq!(cells.len(), 11);
        assert!(cells[0].contains("미국 USD"));
        assert!(!cells[0].contains("두번째"));
    }

    #[test]
    fn skips_rows_with_too_few_cells() {
        let html = table(&[row("미국 USD", 5), row("미국 USD", 11)]);
        let scanner = RateTableScanner::new().unwrap();
        let cells = scanner
            .find_currency_row(&Html::parse_document(&html), "USD")
            .unwrap();
        assert_eq!(cells.len(), 11);
    }

    #[test]
    fn uses_cell_text_when_link_is_absent() {
        let mut html = String::from("<table class=\"tblBasic\"><tbody><tr><td>미국 USD</td>");
        for i in 1..11 {
            html.push_str(&format!("<td>{i}.00</td>"));
        }
        html.push_str("</tr></tbody></table>");

        let scanner = RateTableScanner::new().unwrap();
        let cells = scanner.find_currency_row(&Html::parse_document(&html), "USD");
        assert!(cells.is_some());
    }

    #[test]
    fn no_match_yields_none() {
        let html = table(&[row("유럽연합 EUR", 11)]);
        let scanner = RateTableScanner::new().unwrap();
        assert!(
            scanner
                .find_currency_row(&Html::parse_document(&html), "USD")
                .is_none()
        );
    }

    #[test]
    fn missing_table_yields_none() {
        let scanner = RateTableScanner::new().unwrap();
        let document = Html::parse_document("<div>환율 없음</div>");
        assert!(scanner.find_currency_row(&document, "USD").is_none());
    }
}
