//! Parsing and display of the timestamps the backend attaches to readings.

use chrono::{DateTime, NaiveDateTime};

/// Format used when showing when a reading was taken.
pub const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (offset is dropped, the wall-clock time is kept as the
/// backend reported it) and naive ISO 8601 with either `T` or a space as
/// separator. Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Render a timestamp with [`DISPLAY_FORMAT`].
#[must_use]
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}
