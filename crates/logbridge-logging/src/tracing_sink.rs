//! Sink that forwards lines into `tracing`

use crate::sink::LogSink;
use logbridge_core::Severity;
use tracing::Level;

/// Sink that re-emits every line as a `tracing` event.
///
/// The tag is recorded in the `tag` field so an existing subscriber stack
/// can route on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink
    pub fn new() -> Self {
        Self
    }

    /// Convert a severity to a tracing level, `None` for `Silent`
    pub fn convert_level(level: Severity) -> Option<Level> {
        match level {
            Severity::Silent => None,
            Severity::Error => Some(Level::ERROR),
            Severity::Warn => Some(Level::WARN),
            Severity::Info => Some(Level::INFO),
            Severity::Debug => Some(Level::DEBUG),
            Severity::Trace => Some(Level::TRACE),
        }
    }
}

impl LogSink for TracingSink {
    fn write(&self, level: Severity, tag: &str, message: &str) {
        match level {
            Severity::Silent => {}
            Severity::Error => tracing::error!(tag = %tag, "{}", message),
            Severity::Warn => tracing::warn!(tag = %tag, "{}", message),
            Severity::Info => tracing::info!(tag = %tag, "{}", message),
            Severity::Debug => tracing::debug!(tag = %tag, "{}", message),
            Severity::Trace => tracing::trace!(tag = %tag, "{}", message),
        }
    }
}

#[cfg(test)]
#[path = "tracing_sink/tracing_sink_tests.rs"]
mod tracing_sink_tests;
