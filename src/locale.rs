//! Certificate date formatting in English and Hindi.
//!
//! Dates are stored as `YYYY-MM-DD`; RFC 3339 timestamps and the legacy
//! `Month D, YYYY` form are also understood. Unparseable input is returned
//! unchanged.

use crate::models::Language;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub const HINDI_MONTHS: [&str; 12] = [
    "जनवरी", "फ़रवरी", "मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त", "सितंबर", "अक्टूबर",
    "नवंबर", "दिसंबर",
];

pub const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Canonical storage format of certificate dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the date forms a certificate may carry.
pub fn parse_date_like(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, ISO_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(input, "%B %d, %Y").ok()
}

/// Replaces ASCII digits with Devanagari digits; other characters pass through.
pub fn to_devanagari_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => DEVANAGARI_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// `"March 15, 2024"`.
pub fn format_date_english(input: &str) -> String {
    match parse_date_like(input) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => {
            tracing::warn!("Could not parse certificate date: {}", input);
            input.to_string()
        }
    }
}

/// `"१५ मार्च, २०२४"`.
pub fn format_date_hindi(input: &str) -> String {
    match parse_date_like(input) {
        Some(date) => {
            let day = to_devanagari_digits(&date.day().to_string());
            let month = HINDI_MONTHS[date.month0() as usize];
            let year = to_devanagari_digits(&format!("{:04}", date.year()));
            format!("{} {}, {}", day, month, year)
        }
        None => {
            tracing::warn!("Could not format date to Hindi: {}", input);
            input.to_string()
        }
    }
}

pub fn format_date(lang: Language, input: &str) -> String {
    match lang {
        Language::En => format_date_english(input),
        Language::Hi => format_date_hindi(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_in_both_languages() {
        assert_eq!(format_date_english("2024-03-15"), "March 15, 2024");
        assert_eq!(format_date_hindi("2024-03-15"), "१५ मार्च, २०२४");
    }

    #[test]
    fn test_single_digit_day_is_not_padded() {
        assert_eq!(format_date_english("2025-01-05"), "January 5, 2025");
        assert_eq!(format_date_hindi("2025-01-05"), "५ जनवरी, २०२५");
    }

    #[test]
    fn test_accepts_timestamps_and_legacy_form() {
        assert_eq!(
            format_date_hindi("2024-12-31T23:10:00Z"),
            "३१ दिसंबर, २०२४"
        );
        assert_eq!(format_date_hindi("February 9, 2024"), "९ फ़रवरी, २०२४");
        assert_eq!(format_date_english("February 9, 2024"), "February 9, 2024");
    }

    #[test]
    fn test_unparseable_input_is_returned_unchanged() {
        assert_eq!(format_date_hindi("someday"), "someday");
        assert_eq!(format_date_english("2024-13-45"), "2024-13-45");
    }

    #[test]
    fn test_digit_mapping() {
        assert_eq!(to_devanagari_digits("0123456789"), "०१२३४५६७८९");
        assert_eq!(to_devanagari_digits("3/3"), "३/३");
    }
}
