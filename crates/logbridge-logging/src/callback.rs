//! Host FFI log callback sink

use crate::sink::LogSink;
use logbridge_core::Severity;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

/// FFI callback function type for the host log facility
///
/// # Parameters
/// - `level`: Severity ordinal (1=Error, 2=Warn, 3=Info, 4=Debug, 5=Trace)
/// - `tag`: Log tag, null-terminated C string
/// - `message`: Formatted line, pointer to UTF-8 bytes
/// - `message_len`: Length of the message in bytes
///
/// # Safety
/// The `tag` string is null-terminated. The `message` pointer is valid for
/// `message_len` bytes during the callback only.
pub type LogCallback = extern "C" fn(
    level: u8,
    tag: *const std::ffi::c_char,
    message: *const u8,
    message_len: usize,
);

/// Process-wide callback sink
static CALLBACK_SINK: OnceCell<Arc<CallbackSink>> = OnceCell::new();

/// Sink that forwards lines to a host-registered C callback
pub struct CallbackSink {
    callback: RwLock<Option<LogCallback>>,
}

impl CallbackSink {
    /// Create a sink with no callback registered
    pub fn new() -> Self {
        Self {
            callback: RwLock::new(None),
        }
    }

    /// Create a sink with a callback already registered
    pub fn with_callback(callback: LogCallback) -> Self {
        Self {
            callback: RwLock::new(Some(callback)),
        }
    }

    /// Get the process-wide sink the host registers its callback on
    pub fn global() -> Arc<CallbackSink> {
        CALLBACK_SINK
            .get_or_init(|| Arc::new(CallbackSink::new()))
            .clone()
    }

    /// Set or clear the callback
    pub fn set_callback(&self, callback: Option<LogCallback>) {
        *self.callback.write() = callback;
    }

    /// Get the current callback
    pub fn get_callback(&self) -> Option<LogCallback> {
        *self.callback.read()
    }
}

impl Default for CallbackSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for CallbackSink {
    fn write(&self, level: Severity, tag: &str, message: &str) {
        if level == Severity::Silent {
            return;
        }

        let Some(callback) = self.get_callback() else {
            return;
        };

        // Tags with interior NULs cannot cross the boundary
        let Ok(tag) = std::ffi::CString::new(tag) else {
            return;
        };

        callback(level as u8, tag.as_ptr(), message.as_ptr(), message.len());
    }
}
