//! Date utility functions
//!
//! Content records carry loosely formatted dates (`2021-03-01`, `2021-03`, or a
//! full RFC 3339 timestamp). Everything is normalised to `NaiveDate` here.

use chrono::{DateTime, Datelike, NaiveDate};

/// Canonical date format for content files
pub const CONTENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a content date string to NaiveDate
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM` (first day of the month).
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or the error of the last attempted format
pub fn parse_content_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = date_str.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, CONTENT_DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    NaiveDate::parse_from_str(&format!("{}-01", trimmed), CONTENT_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(CONTENT_DATE_FORMAT).to_string()
}

/// Format the year of a date, e.g. "2023"
pub fn format_year(d: NaiveDate) -> String {
    d.year().to_string()
}

/// Format an experience span as "2021 - 2023", or "2021 - " while still ongoing
pub fn format_year_span(start: NaiveDate, end: Option<NaiveDate>) -> String {
    match end {
        Some(end) => format!("{} - {}", format_year(start), format_year(end)),
        None => format!("{} - ", format_year(start)),
    }
}
