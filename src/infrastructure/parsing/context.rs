//! Parsing context for rate-sheet extraction
//!
//! Carries the fixed configuration values that end up in the extracted
//! record but are never derived from the page itself.

/// Context information for one extraction run
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Target currency code (e.g. "USD")
    pub currency_code: String,

    /// Which same-day publication is being recorded (고시회차)
    pub announcement_sequence: i32,

    /// Publication type label (e.g. "FIRST")
    pub announcement_type: String,
}

impl ParseContext {
    /// Create a new parse context
    pub fn new(currency_code: impl Into<String>, announcement_sequence: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            announcement_sequence,
            announcement_type: "FIRST".to_string(),
        }
    }

    /// Set the announcement type label
    pub fn with_announcement_type(mut self, announcement_type: impl Into<String>) -> Self {
        self.announcement_type = announcement_type.into();
        self
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new("USD", 1)
    }
}
