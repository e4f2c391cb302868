//! Date helper functions

use chrono::NaiveDate;
use std::fmt::Write;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM DD, YYYY") // -> "March 01, 2020"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&moment_to_chrono_format(format))).is_err() {
        return date_iso(date);
    }
    out
}

/// Parse a string produced by [`format_date`] with the same pattern
pub fn parse_formatted_date(s: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, &moment_to_chrono_format(format)).ok()
}

/// Format a date in ISO 8601 form, for `<time datetime>` attributes
pub fn date_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each family
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("Do", "%-d"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // A literal `%` must not start a chrono specifier
    let mut result = format.replace('%', "%%");
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}
