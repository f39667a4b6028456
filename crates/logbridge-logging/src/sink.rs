//! Host log sink seam

use logbridge_core::Severity;
use parking_lot::Mutex;

/// Destination for formatted log lines.
///
/// The logger calls [`LogSink::write`] only for lines that passed filtering,
/// never with `Severity::Silent`, and never inspects the outcome.
pub trait LogSink: Send + Sync {
    /// Write one formatted line under `tag`
    fn write(&self, level: Severity, tag: &str, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(Severity, &str, &str) + Send + Sync,
{
    fn write(&self, level: Severity, tag: &str, message: &str) {
        self(level, tag, message)
    }
}

/// A line captured by [`BufferSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Severity,
    pub tag: String,
    pub message: String,
}

/// In-memory sink that records every line it receives
#[derive(Debug, Default)]
pub struct BufferSink {
    records: Mutex<Vec<LogRecord>>,
}

impl BufferSink {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Recorded message texts, in order
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    /// Most recent record
    pub fn last(&self) -> Option<LogRecord> {
        self.records.lock().last().cloned()
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return all recorded lines
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl LogSink for BufferSink {
    fn write(&self, level: Severity, tag: &str, message: &str) {
        self.records.lock().push(LogRecord {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}
