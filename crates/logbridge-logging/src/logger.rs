//! Level-filtered labeled logger with named timers

use crate::render::{format_line, panic_to_string, render_display, render_value};
use crate::sink::LogSink;
use crate::timer::{Clock, SystemClock, TimerTable, format_duration, resolve_timer_label};
use logbridge_core::{HostConfig, LOGGER_CONFIG_NAME, LabelTable, Severity};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Tag used when the host application's name is unavailable
pub const DEFAULT_TAG: &str = "App";

/// Options supplied by the code that creates the logger
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    /// Initial threshold
    pub level: Severity,

    /// Label overrides keyed by severity name
    pub labels: BTreeMap<String, String>,
}

impl LoggerOptions {
    /// Options with a specific initial threshold
    pub fn with_level(level: Severity) -> Self {
        Self {
            level,
            labels: BTreeMap::new(),
        }
    }
}

/// Logger that filters by severity, labels each line and forwards it to a
/// [`LogSink`].
///
/// All operations take `&self` and are safe to call from several threads.
/// None of them can fail or panic: bad names are ignored, missing timers
/// produce a warning line, and a panicking sink is contained.
pub struct Logger {
    level: AtomicU8,
    tag: RwLock<String>,
    labels: RwLock<LabelTable>,
    timers: Mutex<TimerTable>,
    hide_logs: AtomicBool,
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
}

impl Logger {
    /// Create a logger at the default threshold with built-in labels
    pub fn new(tag: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self::with_options(tag, LoggerOptions::default(), sink)
    }

    /// Create a logger from explicit options, without host configuration
    pub fn with_options(
        tag: impl Into<String>,
        options: LoggerOptions,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        let mut labels = LabelTable::new();
        labels.apply_named(&options.labels);

        let tag = tag.into();
        Self {
            level: AtomicU8::new(options.level as u8),
            tag: RwLock::new(if tag.is_empty() {
                DEFAULT_TAG.to_string()
            } else {
                tag
            }),
            labels: RwLock::new(labels),
            timers: Mutex::new(TimerTable::new()),
            hide_logs: AtomicBool::new(false),
            sink,
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a logger the way a plugin does at load time.
    ///
    /// The tag comes from the host application's display name, falling back
    /// to [`DEFAULT_TAG`]. The `Logger` section of `config`, when given,
    /// overrides the level and labels from `options` and decides the hide
    /// flag. Never fails.
    pub fn configure(
        app_name: Option<&str>,
        options: LoggerOptions,
        config: Option<&HostConfig>,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        let logger = Self::with_options(Self::resolve_tag(app_name), options, sink);

        if let Some(config) = config {
            let settings = config.plugin(LOGGER_CONFIG_NAME);
            if let Some(level) = settings.level {
                logger.set_severity(level);
            }
            logger.labels.write().apply(&settings.labels);
            logger.set_hide_logs(config.hide_logs(LOGGER_CONFIG_NAME));
        }

        tracing::debug!(
            tag = %logger.tag(),
            level = logger.level_name(),
            hide_logs = logger.hide_logs(),
            "logger configured"
        );
        logger
    }

    /// Like [`Logger::configure`], parsing the host configuration from JSON.
    ///
    /// A malformed document is reported through `tracing` and the logger is
    /// built as if no configuration had been given.
    pub fn from_json_config(
        app_name: Option<&str>,
        options: LoggerOptions,
        config_json: &[u8],
        sink: Arc<dyn LogSink>,
    ) -> Self {
        match HostConfig::from_json(config_json) {
            Ok(config) => Self::configure(app_name, options, Some(&config), sink),
            Err(err) => {
                tracing::warn!("ignoring host configuration: {}", err);
                Self::configure(app_name, options, None, sink)
            }
        }
    }

    /// Replace the clock used to stamp timers
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Tag derived from the host application name
    pub fn resolve_tag(app_name: Option<&str>) -> String {
        match app_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_TAG.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Level, labels, tag
    // ------------------------------------------------------------------

    /// Current threshold
    pub fn level(&self) -> Severity {
        Severity::from_ordinal(self.level.load(Ordering::SeqCst))
    }

    /// Name of the current threshold
    pub fn level_name(&self) -> &'static str {
        self.level().name()
    }

    /// Set the threshold by name; unrecognized names are ignored
    pub fn set_level(&self, name: &str) {
        match Severity::try_from_name(name) {
            Some(level) => self.set_severity(level),
            None => tracing::debug!("ignoring unknown level '{}'", name),
        }
    }

    /// Set the threshold
    pub fn set_severity(&self, level: Severity) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Whether a message at `level` would currently be emitted
    pub fn is_enabled(&self, level: Severity) -> bool {
        level != Severity::Silent && !self.hide_logs() && self.level().allows(level)
    }

    /// Labels keyed by severity name
    pub fn labels(&self) -> BTreeMap<String, String> {
        self.labels.read().to_map()
    }

    /// Label for one severity
    pub fn label(&self, level: Severity) -> String {
        self.labels.read().get(level).to_string()
    }

    /// Override labels by severity name; unknown names and empty labels are ignored
    pub fn set_labels<I, K, V>(&self, labels: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.labels.write().apply_named(labels);
    }

    /// Current tag
    pub fn tag(&self) -> String {
        self.tag.read().clone()
    }

    /// Set the tag; an empty tag is ignored
    pub fn set_tag(&self, tag: &str) {
        if !tag.is_empty() {
            *self.tag.write() = tag.to_string();
        }
    }

    /// Whether every emission is suppressed
    pub fn hide_logs(&self) -> bool {
        self.hide_logs.load(Ordering::SeqCst)
    }

    /// Suppress or re-enable every emission
    pub fn set_hide_logs(&self, hide: bool) {
        self.hide_logs.store(hide, Ordering::SeqCst);
    }

    // ------------------------------------------------------------------
    // Emit
    // ------------------------------------------------------------------

    pub fn error(&self, message: &str) {
        self.log_with_tag_at_level(Severity::Error, None, None, message);
    }

    pub fn warn(&self, message: &str) {
        self.log_with_tag_at_level(Severity::Warn, None, None, message);
    }

    pub fn info(&self, message: &str) {
        self.log_with_tag_at_level(Severity::Info, None, None, message);
    }

    /// Alias for [`Logger::info`]
    pub fn log(&self, message: &str) {
        self.info(message);
    }

    pub fn debug(&self, message: &str) {
        self.log_with_tag_at_level(Severity::Debug, None, None, message);
    }

    /// Log with the logger's own tag and the level's label
    pub fn log_at_level(&self, level: Severity, message: &str) {
        self.log_with_tag_at_level(level, None, None, message);
    }

    /// Log at a level given by name; unrecognized names log at `info`
    pub fn log_at_level_name(&self, level: &str, message: &str) {
        self.log_at_level(Severity::resolve(level), message);
    }

    /// Filter, label, tag and dispatch one message.
    ///
    /// A non-empty `label` replaces the level's label; a non-empty `tag`
    /// replaces the logger's tag.
    pub fn log_with_tag_at_level(
        &self,
        level: Severity,
        label: Option<&str>,
        tag: Option<&str>,
        message: &str,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        let line = {
            let labels = self.labels.read();
            format_line(labels.resolve(level, label), message)
        };

        let tag = match tag {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => self.tag(),
        };

        self.dispatch(level, &tag, &line);
    }

    fn dispatch(&self, level: Severity, tag: &str, line: &str) {
        let sink = &self.sink;
        let result = panic::catch_unwind(AssertUnwindSafe(|| sink.write(level, tag, line)));
        if let Err(payload) = result {
            tracing::warn!("log sink panicked: {}", panic_to_string(&payload));
        }
    }

    /// Log a rendering of a JSON value at `info`
    pub fn dir(&self, value: &Value) {
        if self.is_enabled(Severity::Info) {
            self.info(&render_value(value));
        }
    }

    /// Log a rendering of any displayable value at `info`
    pub fn dir_display(&self, value: Option<&dyn fmt::Display>) {
        if self.is_enabled(Severity::Info) {
            self.info(&render_display(value));
        }
    }

    /// Log the current call stack at `info`
    pub fn trace(&self) {
        if !self.is_enabled(Severity::Info) {
            return;
        }
        let backtrace = std::backtrace::Backtrace::force_capture();
        self.info(&format!("trace\n{}", backtrace));
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Start (or restart) a timer; an empty label means `"default"`
    pub fn time(&self, label: &str) {
        let label = resolve_timer_label(label);
        let now = self.clock.now_millis();
        self.timers.lock().start(label, now);
    }

    /// Log the time elapsed on a timer without stopping it
    pub fn time_log(&self, label: &str) {
        let label = resolve_timer_label(label);
        let now = self.clock.now_millis();
        let elapsed = self.timers.lock().elapsed(label, now);
        self.report_timer(label, elapsed);
    }

    /// Log the time elapsed on a timer and remove it.
    ///
    /// The timer is taken out of the table in one step, so a restart racing
    /// with this call survives it.
    pub fn time_end(&self, label: &str) {
        let label = resolve_timer_label(label);
        let now = self.clock.now_millis();
        let start = self.timers.lock().remove(label);
        self.report_timer(label, start.map(|start| now.saturating_sub(start)));
    }

    // Called with the timer lock released; the sink may re-enter the logger.
    fn report_timer(&self, label: &str, elapsed: Option<u64>) {
        match elapsed {
            Some(millis) => self.info(&format!("{}: {}", label, format_duration(millis))),
            None => self.warn(&format!("timer '{}' does not exist", label)),
        }
    }

    /// Whether a timer with this label is running
    pub fn has_timer(&self, label: &str) -> bool {
        self.timers.lock().contains(resolve_timer_label(label))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("tag", &self.tag())
            .field("hide_logs", &self.hide_logs())
            .finish_non_exhaustive()
    }
}
