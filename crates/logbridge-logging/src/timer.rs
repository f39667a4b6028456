//! Named stopwatch timers and duration formatting

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Timer label used when none (or an empty one) is given
pub const DEFAULT_TIMER_LABEL: &str = "default";

/// Millisecond clock used to stamp timers
pub trait Clock: Send + Sync {
    /// Current time in milliseconds
    fn now_millis(&self) -> u64;
}

/// Wall clock, milliseconds since the Unix epoch
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

#[cfg(any(test, feature = "test-util"))]
pub use manual::ManualClock;

/// Test clock, available with the `test-util` feature
#[cfg(any(test, feature = "test-util"))]
mod manual {
    use super::Clock;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Clock that only moves when told to
    #[derive(Debug, Default)]
    pub struct ManualClock {
        now: AtomicU64,
    }

    impl ManualClock {
        /// Create a clock reading `start` milliseconds
        pub fn new(start: u64) -> Self {
            Self {
                now: AtomicU64::new(start),
            }
        }

        /// Move the clock forward
        pub fn advance(&self, millis: u64) {
            self.now.fetch_add(millis, Ordering::SeqCst);
        }

        /// Set the clock to an absolute reading
        pub fn set(&self, millis: u64) {
            self.now.store(millis, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> u64 {
            self.now.load(Ordering::SeqCst)
        }
    }
}

/// Map an empty label to [`DEFAULT_TIMER_LABEL`]
pub fn resolve_timer_label(label: &str) -> &str {
    if label.is_empty() {
        DEFAULT_TIMER_LABEL
    } else {
        label
    }
}

/// Start timestamps keyed by timer label
#[derive(Debug, Default, Clone)]
pub struct TimerTable {
    starts: HashMap<String, u64>,
}

impl TimerTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a start time, replacing any unfinished timer with the same label
    pub fn start(&mut self, label: &str, now: u64) {
        self.starts.insert(label.to_string(), now);
    }

    /// Milliseconds since `label` was started, `None` if it never was
    pub fn elapsed(&self, label: &str, now: u64) -> Option<u64> {
        self.starts
            .get(label)
            .map(|start| now.saturating_sub(*start))
    }

    /// Remove a timer, returning its start time if it existed
    pub fn remove(&mut self, label: &str) -> Option<u64> {
        self.starts.remove(label)
    }

    /// Whether a timer with this label is running
    pub fn contains(&self, label: &str) -> bool {
        self.starts.contains_key(label)
    }

    /// Number of running timers
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether no timers are running
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

/// Format a millisecond duration for display.
///
/// | range          | format                       | example                   |
/// |----------------|------------------------------|---------------------------|
/// | < 1s           | `<ms>ms`                     | `500ms`                   |
/// | < 1min         | `<s>.<ms>s`                  | `1.500s`                  |
/// | < 1h           | `<m>:<ss>.<mmm> (min:sec.ms)`| `1:01.000 (min:sec.ms)`   |
/// | otherwise      | `<h>:<mm>:<ss> (hr:min:sec)` | `1:01:01 (hr:min:sec)`    |
///
/// In the seconds form the millisecond remainder is printed as a raw
/// integer, not a decimal fraction: 1005ms is `1.5s`.
pub fn format_duration(millis: u64) -> String {
    let seconds = millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let remainder = millis % 1000;

    if seconds < 1 {
        return format!("{}ms", millis);
    }

    if minutes < 1 {
        return format!("{}.{}s", seconds, remainder);
    }

    if hours < 1 {
        return format!(
            "{}:{:02}.{:03} (min:sec.ms)",
            minutes,
            seconds % 60,
            remainder
        );
    }

    format!(
        "{}:{:02}:{:02} (hr:min:sec)",
        hours,
        minutes % 60,
        seconds % 60
    )
}
