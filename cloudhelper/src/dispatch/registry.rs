//! Name-keyed registry of function handlers.

use super::{Args, FunctionDispatcher};
use crate::context::ExecutionContext;
use crate::errors::HelperError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A registered function.
pub type FunctionHandler<R, A> = Arc<
    dyn Fn(&mut ExecutionContext<FunctionRegistry<R, A>>, &R, &A, Args) -> anyhow::Result<Args>
        + Send
        + Sync,
>;

/// Thread-safe table mapping function names to handlers.
///
/// One registry can back any number of contexts. Handlers run outside the
/// registry lock, so a handler may call `ctx.invoke` on another function or
/// register new functions.
pub struct FunctionRegistry<R, A> {
    functions: RwLock<HashMap<String, FunctionHandler<R, A>>>,
}

impl<R, A> FunctionRegistry<R, A> {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler, replacing any handler with the same name.
    pub fn register<F>(&self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut ExecutionContext<Self>, &R, &A, Args) -> anyhow::Result<Args>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        if self
            .functions
            .write()
            .insert(name.clone(), Arc::new(handler))
            .is_some()
        {
            debug!(function = %name, "Replaced registered function");
        }
    }

    /// Removes a handler. Returns true if one was registered.
    pub fn unregister(&self, name: &str) -> bool {
        self.functions.write().remove(name).is_some()
    }

    /// Checks if a function is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.read().contains_key(name)
    }

    /// Lists registered function names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.read().is_empty()
    }
}

impl<R, A> Default for FunctionRegistry<R, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, A> fmt::Debug for FunctionRegistry<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}

impl<R, A> FunctionDispatcher for FunctionRegistry<R, A> {
    type Request = R;
    type App = A;
    type Error = HelperError;

    fn call(
        &self,
        ctx: &mut ExecutionContext<Self>,
        request: &R,
        app: &A,
        name: &str,
        args: Args,
    ) -> Result<Args, HelperError> {
        let handler = self.functions.read().get(name).cloned();
        let Some(handler) = handler else {
            debug!(function = %name, "Function not registered");
            return Err(HelperError::function_not_found(name));
        };

        handler(ctx, request, app, args).map_err(|source| HelperError::function(name, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Registry = FunctionRegistry<(), ()>;

    fn args(value: serde_json::Value) -> Args {
        match value {
            serde_json::Value::Object(map) => map,
            _ => Args::new(),
        }
    }

    #[test]
    fn test_register_and_list() {
        let registry = Registry::new();
        registry.register("b", |_, _, _, args| Ok(args));
        registry.register("a", |_, _, _, args| Ok(args));

        assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("a"));
        assert!(!registry.contains("c"));
    }

    #[test]
    fn test_register_replaces_handler() {
        let registry = Arc::new(Registry::new());
        registry.register("greet", |_, _, _, _| Ok(args(json!({"v": 1}))));
        registry.register("greet", |_, _, _, _| Ok(args(json!({"v": 2}))));

        let mut ctx = ExecutionContext::new(Arc::clone(&registry));
        let out = ctx.invoke(&(), &(), "greet", Args::new()).unwrap();
        assert_eq!(out.get("v"), Some(&json!(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let registry = Registry::default();
        registry.register("gone", |_, _, _, args| Ok(args));

        assert!(registry.unregister("gone"));
        assert!(!registry.unregister("gone"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_handler_error_is_wrapped_with_name() {
        let registry = Arc::new(Registry::new());
        registry.register("explode", |_, _, _, _| Err(anyhow::anyhow!("kaboom")));

        let mut ctx = ExecutionContext::new(registry);
        let err = ctx.invoke(&(), &(), "explode", Args::new()).unwrap_err();

        assert!(matches!(err, HelperError::Function { ref name, .. } if name == "explode"));
        assert!(err.to_string().contains("kaboom"));
        assert!(ctx.error().is_none());
    }

    #[test]
    fn test_handler_can_register_more_functions() {
        let registry = Arc::new(Registry::new());
        registry.register("install", |ctx, _, _, _| {
            ctx.dispatcher()
                .register("late", |_, _, _, _| Ok(args(json!({"late": true}))));
            Ok(Args::new())
        });

        let mut ctx = ExecutionContext::new(Arc::clone(&registry));
        ctx.invoke(&(), &(), "install", Args::new()).unwrap();
        let out = ctx.invoke(&(), &(), "late", Args::new()).unwrap();

        assert_eq!(out.get("late"), Some(&json!(true)));
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = Registry::new();
        registry.register("sum", |_, _, _, args| Ok(args));
        assert_eq!(format!("{registry:?}"), r#"FunctionRegistry { functions: ["sum"] }"#);
    }
}
