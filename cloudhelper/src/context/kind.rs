//! Invocation kind discriminator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// How the platform entered user code for this invocation.
///
/// Serialized as its plain string form so unknown kinds survive a round trip.
/// Equality and hashing compare that string form, so `Other("hook")` is the
/// same kind as `Hook`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvocationKind {
    /// An explicit cloud function call (`"function"`).
    Function,
    /// A data-layer hook such as before/after save (`"hook"`).
    Hook,
    /// Any other kind, including the unset empty string.
    Other(String),
}

impl InvocationKind {
    /// Returns the string form of the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Function => "function",
            Self::Hook => "hook",
            Self::Other(kind) => kind,
        }
    }

    /// Returns true when the kind is `"hook"`, however it was constructed.
    #[must_use]
    pub fn is_hook(&self) -> bool {
        self.as_str() == "hook"
    }
}

impl PartialEq for InvocationKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for InvocationKind {}

impl Hash for InvocationKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Default for InvocationKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for InvocationKind {
    fn from(kind: &str) -> Self {
        match kind {
            "function" => Self::Function,
            "hook" => Self::Hook,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for InvocationKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "function" => Self::Function,
            "hook" => Self::Hook,
            _ => Self::Other(kind),
        }
    }
}

impl From<InvocationKind> for String {
    fn from(kind: InvocationKind) -> Self {
        match kind {
            InvocationKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}
