//! Per-invocation context management.
//!
//! This module provides:
//! - The mutable execution context user code works against
//! - Log records and the invocation kind discriminator
//! - The outcome the platform reads back once user code returns

mod execution;
mod kind;
mod log;
mod outcome;

pub use execution::ExecutionContext;
pub use kind::InvocationKind;
pub use log::{CloudLog, INFO_FLAG};
pub use outcome::InvocationOutcome;
