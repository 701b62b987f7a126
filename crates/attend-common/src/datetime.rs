//! Tolerant check-in timestamp parsing.
//!
//! Exports from registration desks and badge scanners disagree on date
//! formats. [`parse_or_null`] tries a fixed list of layouts and gives up
//! with `None` instead of an error: an unparseable check-in is treated the
//! same as a missing one.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Date + time layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    // 12-hour clock, as written by spreadsheets and form tools
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    // Month names; `%B` also accepts the abbreviated form
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
];

/// Date-only layouts; these resolve to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"];

/// Parses a check-in value, returning `None` for blank or unrecognised input.
///
/// RFC 3339 values keep their local wall-clock time; the offset is dropped.
///
/// # Examples
///
/// ```
/// use attend_common::parse_or_null;
///
/// assert!(parse_or_null("2024-05-01 09:15:00").is_some());
/// assert!(parse_or_null("").is_none());
/// assert!(parse_or_null("not a time").is_none());
/// ```
pub fn parse_or_null(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
