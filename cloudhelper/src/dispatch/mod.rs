//! Function dispatch.
//!
//! [`FunctionDispatcher`] is the only capability an
//! [`ExecutionContext`] calls out to. How a name maps to behavior is entirely
//! up to the implementation; [`FunctionRegistry`] covers the common case of a
//! name → closure table.

mod registry;

pub use registry::{FunctionHandler, FunctionRegistry};

use crate::context::ExecutionContext;

/// String-keyed map of JSON values used for function arguments and results.
pub type Args = serde_json::Map<String, serde_json::Value>;

/// Resolves a function name to behavior and runs it.
///
/// The dispatched function gets the calling context by mutable reference and
/// may change it (logs, hidden/protected fields, cancellation) independently
/// of the map it returns. A dispatcher shared by concurrent invocations must
/// be `Send + Sync`; contexts themselves are never shared.
pub trait FunctionDispatcher: Sized {
    /// Opaque request handle passed through from the platform.
    type Request;
    /// Opaque application handle passed through from the platform.
    type App;
    /// Error returned to the caller of [`ExecutionContext::invoke`] unchanged.
    type Error;

    /// Runs the function registered as `name`.
    fn call(
        &self,
        ctx: &mut ExecutionContext<Self>,
        request: &Self::Request,
        app: &Self::App,
        name: &str,
        args: Args,
    ) -> Result<Args, Self::Error>;
}
