use chrono::{DateTime, Utc};
use thiserror::Error;

/// `nextCursor` value signalling the end of the stream. Clients stop
/// paginating when they receive it (or an empty page).
pub const END_OF_STREAM: &str = "0";

/// The `after` query parameter did not parse as an i64 nanosecond
/// timestamp. Message wording is part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("after should be a string convertable to int64")]
pub struct CursorParseError;

/// Decode an `after` cursor into the listing window's upper bound.
pub fn parse_after(raw: &str) -> Result<DateTime<Utc>, CursorParseError> {
    let nanos: i64 = raw.parse().map_err(|_| CursorParseError)?;
    Ok(DateTime::from_timestamp_nanos(nanos))
}

/// Encode a post timestamp as a cursor: nanoseconds since epoch, stringified.
pub fn encode(ts: DateTime<Utc>) -> String {
    ts.timestamp_nanos_opt().unwrap_or(0).to_string()
}

/// Cursor for the page after one ending at `oldest`; `"0"` on an empty page.
pub fn next_cursor(oldest: Option<DateTime<Utc>>) -> String {
    match oldest {
        Some(ts) => encode(ts),
        None => END_OF_STREAM.to_string(),
    }
}
