//! Log records produced by user code.

use crate::utils::{now_utc, rfc3339_nanos, Timestamp};
use serde::{Deserialize, Serialize};

/// Flag used by [`ExecutionContext::log`](super::ExecutionContext::log).
pub const INFO_FLAG: &str = "info";

/// One entry of an invocation's audit trail.
///
/// Serializes as `{"content", "flag", "createdAt"}` with `createdAt` in
/// RFC3339 nanosecond form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudLog {
    /// The logged message.
    pub content: String,
    /// Severity flag, e.g. `"info"` or `"warn"`.
    pub flag: String,
    /// When the entry was appended.
    #[serde(with = "crate::utils::timestamps::rfc3339_nanos_serde")]
    pub created_at: Timestamp,
}

impl CloudLog {
    /// Creates a log entry stamped with the current time.
    #[must_use]
    pub fn new(content: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            flag: flag.into(),
            created_at: now_utc(),
        }
    }

    /// Returns `created_at` as it appears on the wire.
    #[must_use]
    pub fn created_at_string(&self) -> String {
        rfc3339_nanos(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_shape() {
        let log = CloudLog {
            content: "saved".to_string(),
            flag: "warn".to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000, 7).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&log).unwrap(),
            serde_json::json!({
                "content": "saved",
                "flag": "warn",
                "createdAt": "2023-11-14T22:13:20.000000007Z",
            })
        );
    }

    #[test]
    fn test_deserialize_accepts_coarser_precision() {
        let log: CloudLog = serde_json::from_value(serde_json::json!({
            "content": "x",
            "flag": "info",
            "createdAt": "2023-11-14T22:13:20Z",
        }))
        .unwrap();

        assert_eq!(log.created_at_string(), "2023-11-14T22:13:20.000000000Z");
    }
}
