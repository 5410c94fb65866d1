//! Utility functions for UUID generation and timestamp handling.

pub mod timestamps;
mod uuid_utils;

pub use timestamps::{iso_timestamp, now_utc, parse_timestamp, rfc3339_nanos, Timestamp};
pub use uuid_utils::generate_uuid;
