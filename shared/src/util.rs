//! Date helpers
//!
//! Dates cross the shell boundary as `DD/MM/YYYY` text; everything past
//! that boundary works with `chrono::NaiveDate`.

use chrono::NaiveDate;

/// External date format used at the shell boundary.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` string supplied by the shell.
pub fn parse_display_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DISPLAY_DATE_FORMAT)
}

/// Render a date back into the `DD/MM/YYYY` shell format.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
