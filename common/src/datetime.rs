//! Timestamp display in one fixed locale and timezone.
//!
//! Both server timestamps and client-generated ones go through
//! [`format_date`], so every stamp on the page reads the same way
//! regardless of the visitor's own timezone.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// en-US numeric date with 12 hour clock and seconds, e.g. `1/1/2024, 3:00:00 AM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Naive layouts the server is known to emit. All are UTC.
const SERVER_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M %p",
];

pub fn format_date(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(DISPLAY_FORMAT).to_string()
}

/// Converts milliseconds since the epoch (what `Date.now()` returns) to UTC.
pub fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis as i64)
}

pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    SERVER_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Formats a server timestamp for display, or returns it untouched when it
/// is in a layout we do not recognise.
pub fn display_timestamp(raw: &str, tz: Tz) -> String {
    match parse_server_timestamp(raw) {
        Some(instant) => format_date(instant, tz),
        None => raw.to_string(),
    }
}
