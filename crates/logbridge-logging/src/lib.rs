//! logbridge-logging - Level-filtered labeled logger
//!
//! This crate provides:
//! - [`Logger`] with severity filtering, per-level labels, tags and named timers
//! - [`LogSink`] seam to the host log facility, with [`CallbackSink`],
//!   [`TracingSink`] and [`BufferSink`] implementations
//! - [`format_duration`] for human-facing timer output
//! - [`init_logging`] and [`ReloadHandle`] for the process-wide tracing subscriber

mod callback;
mod logger;
mod reload;
mod render;
mod sink;
mod timer;
mod tracing_sink;

pub use callback::{CallbackSink, LogCallback};
pub use logger::{DEFAULT_TAG, Logger, LoggerOptions};
pub use logbridge_core::{HostConfig, LabelTable, Severity};
pub use reload::{ReloadHandle, init_logging};
pub use render::{format_line, render_display, render_value};
pub use sink::{BufferSink, LogRecord, LogSink};
pub use timer::{Clock, DEFAULT_TIMER_LABEL, SystemClock, TimerTable, format_duration};
#[cfg(any(test, feature = "test-util"))]
pub use timer::ManualClock;
pub use tracing_sink::TracingSink;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BufferSink, CallbackSink, LogSink, Logger, LoggerOptions, Severity, TracingSink,
        init_logging,
    };
}
