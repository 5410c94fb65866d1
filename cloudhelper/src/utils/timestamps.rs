//! Timestamp utilities for log records.
//!
//! Log entries carry their creation time as an RFC3339 string with
//! nanosecond precision, e.g. `2024-05-01T12:30:45.123456789Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Represents a timestamp that can be serialized/deserialized.
pub type Timestamp = DateTime<Utc>;

/// Errors that can occur during timestamp parsing.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The timestamp string is empty.
    #[error("Empty timestamp string")]
    EmptyString,

    /// The timestamp value is invalid.
    #[error("Invalid timestamp: {0}")]
    InvalidFormat(String),
}

/// Returns the current UTC timestamp.
#[must_use]
pub fn now_utc() -> Timestamp {
    Utc::now()
}

/// Formats a timestamp as RFC3339 with nine fractional digits and a `Z` suffix.
///
/// Unlike Go's `time.RFC3339Nano` layout, trailing fractional zeros are kept
/// and the offset is always UTC, so compare parsed values rather than strings
/// when the other side may trim digits or use a local offset.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cloudhelper::utils::rfc3339_nanos;
///
/// let ts = Utc.timestamp_opt(0, 5).unwrap();
/// assert_eq!(rfc3339_nanos(&ts), "1970-01-01T00:00:00.000000005Z");
/// ```
#[must_use]
pub fn rfc3339_nanos(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Returns the current UTC time formatted by [`rfc3339_nanos`].
#[must_use]
pub fn iso_timestamp() -> String {
    rfc3339_nanos(&now_utc())
}

/// Parses an RFC3339 timestamp of any fractional precision into UTC.
///
/// # Errors
///
/// Returns `TimestampError` if the input is empty or not RFC3339.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, TimestampError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(TimestampError::EmptyString);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TimestampError::InvalidFormat(trimmed.to_string()))
}

/// Serde adapter that writes timestamps through [`rfc3339_nanos`].
///
/// Use with `#[serde(with = "crate::utils::timestamps::rfc3339_nanos_serde")]`.
pub mod rfc3339_nanos_serde {
    use super::{parse_timestamp, rfc3339_nanos, Timestamp};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    /// Serializes a timestamp as an RFC3339Nano string.
    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&rfc3339_nanos(ts))
    }

    /// Deserializes an RFC3339 string of any precision.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(D::Error::custom)
    }
}
