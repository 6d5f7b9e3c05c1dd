//! Lenient parsers for data attributes
//!
//! Listing markup is not a stable contract, so a value that does not parse
//! is reported as `None` and the caller keeps the field's zero value.

use chrono::{DateTime, Utc};

/// Boolean spellings accepted by the listing's `data-*` flags
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Unix time in milliseconds to an absolute UTC time
#[must_use]
pub fn parse_millis(value: &str) -> Option<DateTime<Utc>> {
    let millis = value.parse::<i64>().ok()?;
    DateTime::from_timestamp_millis(millis)
}
