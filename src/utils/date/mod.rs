// Date utility functions
// Day-key formatting for the schedule store

use chrono::NaiveDate;

/// Format a date as the store's day key, e.g. "2026-03-09".
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a day key back into a date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}
