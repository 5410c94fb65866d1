//! Mock dispatchers for testing.

use parking_lot::Mutex;
use std::collections::HashMap;
use thiserror::Error;

use crate::context::ExecutionContext;
use crate::dispatch::{Args, FunctionDispatcher};

/// Error returned by [`RecordingDispatcher`] for names set up to fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dispatch failed: {0}")]
pub struct DispatchFailure(
    /// The failure message.
    pub String,
);

/// A single recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// The function name.
    pub name: String,
    /// The request handle.
    pub request: serde_json::Value,
    /// The app handle.
    pub app: String,
    /// The arguments.
    pub args: Args,
}

/// A dispatcher that records calls and returns configurable responses.
///
/// Unknown names echo their arguments back. Every call appends a `"debug"`
/// log entry to the calling context.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    responses: Mutex<HashMap<String, Result<Args, DispatchFailure>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingDispatcher {
    /// Creates a new dispatcher that echoes arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result returned for `name`.
    pub fn respond_with(&self, name: impl Into<String>, result: Args) {
        self.responses.lock().insert(name.into(), Ok(result));
    }

    /// Makes calls to `name` fail.
    pub fn fail_with(&self, name: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .insert(name.into(), Err(DispatchFailure(message.into())));
    }

    /// Returns the number of calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns the recorded calls.
    #[must_use]
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl FunctionDispatcher for RecordingDispatcher {
    type Request = serde_json::Value;
    type App = String;
    type Error = DispatchFailure;

    fn call(
        &self,
        ctx: &mut ExecutionContext<Self>,
        request: &serde_json::Value,
        app: &String,
        name: &str,
        args: Args,
    ) -> Result<Args, DispatchFailure> {
        self.calls.lock().push(RecordedCall {
            name: name.to_string(),
            request: request.clone(),
            app: app.clone(),
            args: args.clone(),
        });
        ctx.log_with_flag(format!("dispatched {name}"), "debug");

        self.responses
            .lock()
            .get(name)
            .cloned()
            .unwrap_or(Ok(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_records_calls_and_echoes() {
        let dispatcher = Arc::new(RecordingDispatcher::new());
        let mut ctx = ExecutionContext::new(Arc::clone(&dispatcher));
        let mut args = Args::new();
        args.insert("n".to_string(), serde_json::json!(1));

        let out = ctx
            .invoke(&serde_json::json!({"path": "/"}), &"app-1".to_string(), "echo", args.clone())
            .unwrap();

        assert_eq!(out, args);
        assert_eq!(dispatcher.call_count(), 1);
        let call = &dispatcher.recorded_calls()[0];
        assert_eq!(call.name, "echo");
        assert_eq!(call.app, "app-1");
        assert_eq!(ctx.logs()[0].flag, "debug");

        dispatcher.reset();
        assert_eq!(dispatcher.call_count(), 0);
    }

    #[test]
    fn test_configured_failure() {
        let dispatcher = Arc::new(RecordingDispatcher::new());
        dispatcher.fail_with("bad", "nope");
        let mut ctx = ExecutionContext::new(dispatcher);

        let err = ctx
            .invoke(&serde_json::Value::Null, &String::new(), "bad", Args::new())
            .unwrap_err();
        assert_eq!(err, DispatchFailure("nope".to_string()));
    }
}
