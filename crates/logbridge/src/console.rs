//! WebView console capture

use logbridge_core::Severity;
use logbridge_logging::Logger;
use std::sync::Arc;

/// Map a console message level name onto a severity.
///
/// Case-insensitive: `log` becomes `info`, `warning` becomes `warn`, other
/// severity names map to themselves and anything else (e.g. `tip`) to `info`.
pub fn normalize_console_level(name: &str) -> Severity {
    match name.to_ascii_lowercase().as_str() {
        "log" => Severity::Info,
        "warning" => Severity::Warn,
        other => Severity::resolve(other),
    }
}

/// Receives console messages from the WebView and logs them natively
#[derive(Debug, Clone)]
pub struct ConsoleInterceptor {
    logger: Arc<Logger>,
}

impl ConsoleInterceptor {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// The logger messages are routed to
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Handle one console message.
    ///
    /// Always returns `true`: the message is consumed so the WebView does not
    /// print it a second time. Absent or blank messages are dropped.
    pub fn on_console_message(&self, message: Option<&str>, level_name: &str) -> bool {
        if let Some(message) = message.filter(|m| !m.trim().is_empty()) {
            self.logger
                .log_at_level(normalize_console_level(level_name), message);
        }
        true
    }
}

/// Runs work on the host's UI thread
pub trait UiExecutor {
    /// Schedule `task` on the UI thread
    fn execute_on_main_thread(&self, task: Box<dyn FnOnce() + Send + 'static>);
}

/// Executor that runs tasks immediately on the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl UiExecutor for InlineExecutor {
    fn execute_on_main_thread(&self, task: Box<dyn FnOnce() + Send + 'static>) {
        task()
    }
}

/// Build an interceptor for `logger` and hand it to `install` on the UI thread.
///
/// `install` is where the host swaps its WebView console handler for one
/// that calls [`ConsoleInterceptor::on_console_message`].
pub fn install_console_handler<E, F>(executor: &E, logger: Arc<Logger>, install: F)
where
    E: UiExecutor + ?Sized,
    F: FnOnce(ConsoleInterceptor) + Send + 'static,
{
    let interceptor = ConsoleInterceptor::new(logger);
    executor.execute_on_main_thread(Box::new(move || {
        tracing::debug!("installing console interceptor");
        install(interceptor)
    }));
}
