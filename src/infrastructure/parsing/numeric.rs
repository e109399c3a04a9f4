//! Safe numeric coercion for rate-table cells
//!
//! The rate table mixes real numbers with placeholder tokens when a column is
//! not published for a currency. Everything that is not a parseable number
//! collapses to 0.0, which intentionally makes "not provided" and a genuine
//! zero indistinguishable downstream.

/// Placeholder tokens the bank uses for an empty rate column.
const EMPTY_TOKENS: [&str; 6] = ["-", "N/A", "null", "None", "0.00", "0"];

/// Coerce a cell's text into a rate value.
///
/// Missing cell, empty text, placeholder tokens, and unparsable garbage all
/// return 0.0. Thousands-separator commas are stripped before parsing.
pub fn coerce_rate(cell_text: Option<&str>) -> f64 {
    let Some(text) = cell_text else {
        return 0.0;
    };

    let trimmed = text.trim();
    if trimmed.is_empty() || EMPTY_TOKENS.contains(&trimmed) {
        return 0.0;
    }

    let cleaned = trimmed.replace(',', "");
    cleaned.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("-")]
    #[case("N/A")]
    #[case("null")]
    #[case("None")]
    #[case("0.00")]
    #[case("0")]
    #[case("abc")]
    #[case("1.2.3")]
    fn placeholder_and_garbage_coerce_to_zero(#[case] input: &str) {
        assert_eq!(coerce_rate(Some(input)), 0.0);
    }

    #[test]
    fn missing_cell_coerces_to_zero() {
        assert_eq!(coerce_rate(None), 0.0);
    }

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(coerce_rate(Some("1,234.56")), 1234.56);
        assert_eq!(coerce_rate(Some("1,402.35")), 1402.35);
    }

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(coerce_rate(Some("24.54")), 24.54);
        assert_eq!(coerce_rate(Some(" 1.75 ")), 1.75);
        assert_eq!(coerce_rate(Some("0.5")), 0.5);
    }
}
