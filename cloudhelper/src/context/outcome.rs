//! Final state read back by the platform after an invocation.

use super::{CloudLog, InvocationKind};
use crate::dispatch::Args;
use crate::errors::{CloudError, HelperError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Everything an [`ExecutionContext`](super::ExecutionContext) accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationOutcome {
    /// The invocation identifier.
    pub invocation_id: Uuid,
    /// The invocation kind.
    pub kind: InvocationKind,
    /// Whether this was a function-style invocation.
    pub is_function: bool,
    /// Fields to hide, in call order.
    pub hide_fields: Vec<String>,
    /// Fields to protect, in call order.
    pub protect_fields: Vec<String>,
    /// Rendered result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Working data.
    pub data: Args,
    /// Log entries in append order.
    pub logs: Vec<CloudLog>,
    /// Cancellation record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CloudError>,
}

impl InvocationOutcome {
    /// Returns true if user code cancelled the invocation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.error.is_some()
    }

    /// Resolves the outcome into a response.
    ///
    /// A recorded cancellation takes precedence over a rendered result.
    pub fn into_result(self) -> Result<Option<Value>, CloudError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result),
        }
    }

    /// Serializes the outcome to a JSON string.
    pub fn to_json(&self) -> Result<String, HelperError> {
        Ok(serde_json::to_string(self)?)
    }
}
