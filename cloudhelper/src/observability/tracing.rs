//! Tracing subscriber setup for hosts embedding cloudhelper.
//!
//! The crate itself only emits `tracing` events (invocation ids, function
//! names, cancellations). Hosts that do not already install a subscriber can
//! call [`init_tracing`] once at startup.

use crate::errors::HelperError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default filter when neither the config nor `RUST_LOG` provides one.
pub const DEFAULT_FILTER: &str = "info";

/// Subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Explicit filter directives, e.g. `"cloudhelper=debug"`.
    pub filter: Option<String>,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Include the event target in each line.
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            json: false,
            with_target: true,
        }
    }
}

impl TracingConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets explicit filter directives.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Switches to JSON output.
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Sets whether targets are printed.
    #[must_use]
    pub const fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Builds the env filter: explicit directives, then `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub fn env_filter(&self) -> Result<EnvFilter, HelperError> {
        match &self.filter {
            Some(directives) => {
                EnvFilter::try_new(directives).map_err(|e| HelperError::Tracing(e.to_string()))
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }
}

/// Installs a global `tracing_subscriber` fmt subscriber.
///
/// # Errors
///
/// Returns `HelperError::Tracing` if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> Result<(), HelperError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(config.with_target);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| HelperError::Tracing(e.to_string()))
}
