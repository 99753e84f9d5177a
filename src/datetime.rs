//! Datetime parsing and display formatting for post frontmatter.
//!
//! Frontmatter carries the publish instant as a string. Accepted forms, tried
//! in order:
//!
//! 1. RFC 3339 (`2023-01-15T09:30:00Z`, `2023-01-15T09:30:00+02:00`)
//! 2. Naive datetime (`2023-01-15T09:30:00`), assumed UTC
//! 3. Bare date (`2023-01-15`), midnight UTC
//!
//! Anything else is a content error. Content errors are not fatal: the
//! display formatter degrades to the literal `"Invalid Date"` string and
//! callers that need a real instant (feed, selector) get `None`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Parse a frontmatter datetime string into an instant.
pub fn parse_datetime(input: &str) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    None
}

/// Format a datetime string as "Month DD, YYYY" (long month name, unpadded
/// day, numeric year), e.g. `"January 15, 2023"`.
///
/// Returns `"Invalid Date"` when the input does not parse. That is display
/// output, not an error — upstream content validation is the author's job.
pub fn format_datetime(input: &str) -> String {
    match parse_datetime(input) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Unix timestamp (whole seconds) of a datetime string, used as the post
/// sort key. Sub-second precision is floored away on purpose so two posts
/// stamped within the same second compare equal.
pub fn epoch_seconds(input: &str) -> Option<i64> {
    parse_datetime(input).map(|dt| dt.timestamp())
}

/// RFC 2822 rendering of a datetime string, the form RSS `pubDate` expects.
pub fn to_rfc2822(input: &str) -> Option<String> {
    parse_datetime(input).map(|dt| dt.to_rfc2822())
}
