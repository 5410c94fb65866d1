//! Error types for the cloudhelper crate.
//!
//! Two kinds of failure exist here. [`HelperError`] is a Rust error returned
//! by the function registry, outcome serialization and tracing setup.
//! [`CloudError`] is the cancellation record user code leaves on an
//! [`ExecutionContext`](crate::context::ExecutionContext); it is state, not a
//! control-flow error, until the platform decides to propagate it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Code used when a cancellation does not specify one.
pub const DEFAULT_ERROR_CODE: i64 = -1;

/// The main error type for cloudhelper operations.
#[derive(Debug, Error)]
pub enum HelperError {
    /// No function is registered under the requested name.
    #[error("Function not found: {name}")]
    FunctionNotFound {
        /// The requested function name.
        name: String,
    },

    /// A registered function returned an error.
    #[error("Function '{name}' failed: {source}")]
    Function {
        /// The function name.
        name: String,
        /// The handler's error.
        #[source]
        source: anyhow::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("Tracing setup error: {0}")]
    Tracing(String),
}

impl HelperError {
    /// Creates a function not found error.
    #[must_use]
    pub fn function_not_found(name: impl Into<String>) -> Self {
        Self::FunctionNotFound { name: name.into() }
    }

    /// Creates a function failure error.
    #[must_use]
    pub fn function(name: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Function {
            name: name.into(),
            source,
        }
    }

    /// Returns the function name this error refers to, if any.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::FunctionNotFound { name } | Self::Function { name, .. } => Some(name),
            Self::Serialization(_) | Self::Tracing(_) => None,
        }
    }
}

/// A cancellation record in the platform's REST error shape.
///
/// Serializes as `{"code": <int>, "message": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudError {
    /// Error code, [`DEFAULT_ERROR_CODE`] when unspecified.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

impl CloudError {
    /// Creates an error record with an explicit code.
    #[must_use]
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates an error record with the default code.
    #[must_use]
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(DEFAULT_ERROR_CODE, message)
    }
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CloudError {}
