//! Korean-format date/time parsing for the rate-sheet header
//!
//! The bank renders its metadata as `YYYY년 MM월 DD일` and `HH시 MM분 SS초`.
//! All parsers are substring matchers: the pattern may appear anywhere in the
//! text, and anything that does not match is a normal `None`, never an error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})년\s*(\d{2})월\s*(\d{2})일").expect("valid date pattern"));

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})시\s*(\d{2})분\s*(\d{2})초").expect("valid time pattern"));

/// Extract a calendar date from text containing `YYYY년 MM월 DD일`.
///
/// Out-of-range components (month 13, day 32) fall through
/// `NaiveDate::from_ymd_opt` and come back as `None`.
pub fn parse_date_kr(text: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(text)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Extract a time of day from text containing `HH시 MM분 SS초`.
pub fn parse_time_kr(text: &str) -> Option<NaiveTime> {
    let caps = TIME_RE.captures(text)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    let second = caps[3].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Extract a combined datetime from a single text that carries both the date
/// and the time pattern. Either one missing means `None`.
pub fn parse_datetime_kr(text: &str) -> Option<NaiveDateTime> {
    let date = parse_date_kr(text)?;
    let time = parse_time_kr(text)?;
    Some(NaiveDateTime::new(date, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_matches_anywhere_in_text() {
        let date = parse_date_kr("기준일 : 2025년 08월 29일 (금)");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 29));
    }

    #[test]
    fn date_absent_returns_none() {
        assert_eq!(parse_date_kr("고시회차 152회"), None);
        assert_eq!(parse_date_kr(""), None);
    }

    #[test]
    fn date_with_invalid_month_returns_none() {
        assert_eq!(parse_date_kr("2025년 13월 01일"), None);
    }

    #[test]
    fn time_matches_anywhere_in_text() {
        let time = parse_time_kr("10시 30분 00초 고시");
        assert_eq!(time, NaiveTime::from_hms_opt(10, 30, 0));
    }

    #[test]
    fn time_absent_returns_none() {
        assert_eq!(parse_time_kr("2025년 08월 29일"), None);
    }

    #[test]
    fn datetime_requires_both_patterns() {
        let both = parse_datetime_kr("2025년 08월 29일 11시 02분 33초");
        assert_eq!(
            both,
            NaiveDate::from_ymd_opt(2025, 8, 29)
                .and_then(|d| d.and_hms_opt(11, 2, 33))
        );

        assert_eq!(parse_datetime_kr("2025년 08월 29일"), None);
        assert_eq!(parse_datetime_kr("11시 02분 33초"), None);
    }
}
