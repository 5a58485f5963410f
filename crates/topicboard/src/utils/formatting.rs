//! Formatting utilities for human-readable output.
//!
//! Dates are shown in ISO form (`2024-03-05`) so they read the same in
//! every supported language.

use chrono::DateTime;

/// Formats a creation timestamp (epoch milliseconds, UTC) as `YYYY-MM-DD`.
///
/// Timestamps outside chrono's range format as an empty string.
///
/// # Examples
///
/// ```
/// use topicboard::utils::formatting::format_date;
///
/// assert_eq!(format_date(0), "1970-01-01");
/// assert_eq!(format_date(1_709_600_000_000), "2024-03-05");
/// ```
pub fn format_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
