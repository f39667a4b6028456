//! # logbridge
//!
//! Native side of a hybrid app logging plugin.
//!
//! logbridge provides:
//! - A [`Logger`] with ordered severities, per-level labels, tags and named timers
//! - Host sinks: C callback, `tracing`, or in-memory
//! - A [`ConsoleInterceptor`] that routes WebView console output through the logger
//! - A [`LoggerBridge`] that decodes plugin method calls into logger operations
//!
//! ## Quick Start
//!
//! ```ignore
//! use logbridge::prelude::*;
//! use std::sync::Arc;
//!
//! let config = HostConfig::from_json(config_bytes).unwrap_or_default();
//! let logger = Arc::new(Logger::configure(
//!     Some("Shop"),
//!     LoggerOptions::default(),
//!     Some(&config),
//!     CallbackSink::global(),
//! ));
//!
//! logger.info("ready");
//! logger.time("load");
//! // ...
//! logger.time_end("load");
//!
//! let bridge = LoggerBridge::new(logger.clone());
//! bridge.handle("log", br#"{"level": "warn", "message": "from js"}"#)?;
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`logbridge_core`] - Severities, labels, configuration, errors
//! - [`logbridge_logging`] - The logger, sinks and timers

mod bridge;
mod console;

pub use bridge::{LoggerBridge, SUPPORTED_METHODS};
pub use console::{
    ConsoleInterceptor, InlineExecutor, UiExecutor, install_console_handler,
    normalize_console_level,
};

// Re-export core types
pub use logbridge_core::{
    HostConfig, LOGGER_CONFIG_NAME, LabelTable, LoggerError, LoggerResult, LoggerSettings,
    Severity,
};

// Re-export logging types
pub use logbridge_logging::{
    BufferSink, CallbackSink, Clock, DEFAULT_TAG, DEFAULT_TIMER_LABEL, LogCallback, LogRecord,
    LogSink, Logger, LoggerOptions, ReloadHandle, SystemClock, TracingSink,
    format_duration, init_logging,
};

// Re-export common dependencies that host integrations need
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use logbridge::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        CallbackSink, ConsoleInterceptor, HostConfig, LogSink, Logger, LoggerBridge, LoggerError,
        LoggerOptions, LoggerResult, Severity, TracingSink, UiExecutor,
    };
}
