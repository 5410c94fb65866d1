//! The per-invocation execution context handed to cloud functions and hooks.

use super::{CloudLog, InvocationKind, InvocationOutcome, INFO_FLAG};
use crate::dispatch::{Args, FunctionDispatcher};
use crate::errors::{CloudError, DEFAULT_ERROR_CODE};
use crate::utils::generate_uuid;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use uuid::Uuid;

/// Mutable state threaded through a single function or hook invocation.
///
/// The platform creates one context per invocation, lends it to user code as
/// `&mut`, and reads the final state back with [`into_outcome`](Self::into_outcome).
/// Every mutating operation is infallible: cancellation is recorded as state
/// rather than returned as an error, so logs and data written before the
/// cancel stay inspectable.
pub struct ExecutionContext<D> {
    /// Identifier attached to tracing events.
    invocation_id: Uuid,
    /// Invocation mode; gates [`render`](Self::render).
    kind: InvocationKind,
    /// Whether this is a function-style invocation.
    is_function: bool,
    /// Fields to drop from the outward-facing record.
    hide_fields: Vec<String>,
    /// Fields the persistence layer must refuse to update.
    protect_fields: Vec<String>,
    /// Response payload.
    result: Option<Value>,
    /// Working data accumulated by user code.
    data: Args,
    /// Audit trail in append order.
    logs: Vec<CloudLog>,
    /// Cancellation record, last write wins.
    error: Option<CloudError>,
    /// Capability used by [`invoke`](Self::invoke).
    dispatcher: Arc<D>,
}

impl<D> ExecutionContext<D> {
    /// Creates a fresh context backed by `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: Arc<D>) -> Self {
        Self {
            invocation_id: generate_uuid(),
            kind: InvocationKind::default(),
            is_function: false,
            hide_fields: Vec::new(),
            protect_fields: Vec::new(),
            result: None,
            data: Args::new(),
            logs: Vec::new(),
            error: None,
            dispatcher,
        }
    }

    /// Sets the invocation kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<InvocationKind>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Marks the invocation as function-style.
    #[must_use]
    pub fn with_function(mut self, is_function: bool) -> Self {
        self.is_function = is_function;
        self
    }

    /// Sets the response payload, unless this is a hook invocation.
    ///
    /// Hooks may not produce a response; in hook mode the call is a silent
    /// no-op and any previously stored result is left as it was.
    pub fn render(&mut self, value: impl Into<Value>) {
        if self.kind.is_hook() {
            debug!(
                invocation_id = %self.invocation_id,
                "Ignoring render in hook invocation"
            );
            return;
        }
        self.result = Some(value.into());
    }

    /// Upserts a working data field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(field.into(), value.into());
    }

    /// Records a cancellation with the default code.
    pub fn cancel(&mut self, message: impl Into<String>) {
        self.cancel_with_code(message, DEFAULT_ERROR_CODE);
    }

    /// Records a cancellation, replacing any earlier one.
    ///
    /// Execution continues; callers that want to stop must return themselves.
    pub fn cancel_with_code(&mut self, message: impl Into<String>, code: i64) {
        let error = CloudError::new(code, message);
        debug!(
            invocation_id = %self.invocation_id,
            code = error.code,
            message = %error.message,
            "Invocation cancelled"
        );
        self.error = Some(error);
    }

    /// Hides a field from the API-facing record. Duplicates are kept.
    pub fn hide(&mut self, field: impl Into<String>) {
        self.hide_fields.push(field.into());
    }

    /// Protects a field from later updates. Duplicates are kept.
    pub fn protect(&mut self, field: impl Into<String>) {
        self.protect_fields.push(field.into());
    }

    /// Appends an `"info"` log entry.
    pub fn log(&mut self, message: impl Into<String>) {
        self.log_with_flag(message, INFO_FLAG);
    }

    /// Appends a log entry with a caller-chosen flag.
    pub fn log_with_flag(&mut self, message: impl Into<String>, flag: impl Into<String>) {
        let entry = CloudLog::new(message, flag);
        trace!(
            invocation_id = %self.invocation_id,
            flag = %entry.flag,
            content = %entry.content,
            "Cloud log"
        );
        self.logs.push(entry);
    }

    /// Returns the invocation identifier.
    #[must_use]
    pub const fn invocation_id(&self) -> Uuid {
        self.invocation_id
    }

    /// Returns the invocation kind.
    #[must_use]
    pub const fn kind(&self) -> &InvocationKind {
        &self.kind
    }

    /// Returns true for hook invocations.
    #[must_use]
    pub fn is_hook(&self) -> bool {
        self.kind.is_hook()
    }

    /// Returns true for function-style invocations.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        self.is_function
    }

    /// Returns the hidden fields in call order.
    #[must_use]
    pub fn hide_fields(&self) -> &[String] {
        &self.hide_fields
    }

    /// Returns the protected fields in call order.
    #[must_use]
    pub fn protect_fields(&self) -> &[String] {
        &self.protect_fields
    }

    /// Returns the rendered result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// Returns the working data.
    #[must_use]
    pub const fn data(&self) -> &Args {
        &self.data
    }

    /// Gets a single working data field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Returns the log entries in append order.
    #[must_use]
    pub fn logs(&self) -> &[CloudLog] {
        &self.logs
    }

    /// Returns the live cancellation record, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&CloudError> {
        self.error.as_ref()
    }

    /// Returns true once a cancellation has been recorded.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Arc<D> {
        &self.dispatcher
    }

    /// Consumes the context and returns its final state.
    #[must_use]
    pub fn into_outcome(self) -> InvocationOutcome {
        InvocationOutcome {
            invocation_id: self.invocation_id,
            kind: self.kind,
            is_function: self.is_function,
            hide_fields: self.hide_fields,
            protect_fields: self.protect_fields,
            result: self.result,
            data: self.data,
            logs: self.logs,
            error: self.error,
        }
    }
}

impl<D: FunctionDispatcher> ExecutionContext<D> {
    /// Calls a named function through the dispatcher.
    ///
    /// The dispatcher receives this context by mutable reference, so the
    /// called function may log, hide, protect or cancel here in addition to
    /// returning its own result map. Dispatcher errors are returned as-is and
    /// never recorded as a cancellation.
    pub fn invoke(
        &mut self,
        request: &D::Request,
        app: &D::App,
        name: &str,
        args: Args,
    ) -> Result<Args, D::Error> {
        debug!(
            invocation_id = %self.invocation_id,
            function = %name,
            kind = %self.kind,
            "Invoking function"
        );

        let dispatcher = Arc::clone(&self.dispatcher);
        let outcome = dispatcher.call(self, request, app, name, args);

        debug!(
            invocation_id = %self.invocation_id,
            function = %name,
            success = outcome.is_ok(),
            "Function returned"
        );
        outcome
    }
}

impl<D> fmt::Debug for ExecutionContext<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("invocation_id", &self.invocation_id)
            .field("kind", &self.kind)
            .field("is_function", &self.is_function)
            .field("hide_fields", &self.hide_fields)
            .field("protect_fields", &self.protect_fields)
            .field("result", &self.result)
            .field("data", &self.data)
            .field("logs", &self.logs)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
