//! # Cloudhelper
//!
//! The per-invocation helper handed to cloud code functions and hooks.
//!
//! An [`ExecutionContext`](context::ExecutionContext) lets user code:
//!
//! - **Respond**: render a result (ignored for hooks) and set working data
//! - **Shape records**: hide fields from API output, protect fields from updates
//! - **Log**: append timestamped, flagged entries to the invocation's audit trail
//! - **Cancel**: record a `{code, message}` error for the platform to return
//! - **Call other functions**: through a pluggable [`FunctionDispatcher`](dispatch::FunctionDispatcher)
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudhelper::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(FunctionRegistry::<(), ()>::new());
//! registry.register("hello", |ctx, _req, _app, _args| {
//!     ctx.log("saying hello");
//!     ctx.render("hello world");
//!     Ok(Args::new())
//! });
//!
//! let mut ctx = ExecutionContext::new(registry).with_kind(InvocationKind::Function);
//! ctx.invoke(&(), &(), "hello", Args::new())?;
//!
//! let outcome = ctx.into_outcome();
//! assert_eq!(outcome.logs.len(), 1);
//! assert_eq!(outcome.into_result()?, Some("hello world".into()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod context;
pub mod dispatch;
pub mod errors;
pub mod observability;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{
        CloudLog, ExecutionContext, InvocationKind, InvocationOutcome, INFO_FLAG,
    };
    pub use crate::dispatch::{Args, FunctionDispatcher, FunctionHandler, FunctionRegistry};
    pub use crate::errors::{CloudError, HelperError, DEFAULT_ERROR_CODE};
    pub use crate::observability::{init_tracing, TracingConfig};
    pub use crate::utils::{generate_uuid, iso_timestamp, Timestamp};
}
