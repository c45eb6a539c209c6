//! Date helper functions

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Parse a post date in one of the ISO-ish formats found in catalogs
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Format a post date for display, falling back to the raw string
///
/// # Examples
/// ```ignore
/// format_post_date("2024-01-15", "%B %-d, %Y") // -> "January 15, 2024"
/// format_post_date("someday", "%B %-d, %Y")    // -> "someday"
/// ```
pub fn format_post_date(raw: &str, format: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format(format).to_string(),
        None => raw.to_string(),
    }
}
