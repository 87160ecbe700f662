//! Timestamp parsing shared by cards and actions

use chrono::{DateTime, FixedOffset};

use crate::error::{Result, Trello2mdError};

/// `strftime` format used for every date in the rendered document
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an RFC3339 timestamp, keeping the offset it was sent with
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|source| Trello2mdError::TimestampParse {
        value: value.to_string(),
        source,
    })
}
