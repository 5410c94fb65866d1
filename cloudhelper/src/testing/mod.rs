//! Testing utilities for code built on cloudhelper.
//!
//! This module provides a recording dispatcher so that functions and hooks
//! can be exercised without a real function table.

mod mocks;

pub use mocks::{DispatchFailure, RecordedCall, RecordingDispatcher};
