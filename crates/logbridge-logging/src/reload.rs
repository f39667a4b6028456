//! Process-wide tracing subscriber whose level follows the logger's threshold

use logbridge_core::{LoggerError, LoggerResult, Severity};
use once_cell::sync::OnceCell;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

type FilterHandle = reload::Handle<LevelFilter, Registry>;

/// Level filter of the subscriber installed by [`init_logging`].
///
/// A plugin that changes its logger's threshold at runtime calls
/// [`ReloadHandle::reload_level`] with the same severity so that `tracing`
/// output (including the logger's own diagnostics) is filtered alike. Until a
/// subscriber is installed there is nothing to follow and reloading is a
/// no-op.
#[derive(Default)]
pub struct ReloadHandle {
    filter: OnceCell<FilterHandle>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the subscriber installed by [`init_logging`]
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Attach the filter handle of an installed subscriber.
    ///
    /// Only the first handle is kept; returns whether this one was.
    pub fn install(&self, filter: FilterHandle) -> bool {
        self.filter.set(filter).is_ok()
    }

    /// Whether a subscriber is attached
    pub fn is_installed(&self) -> bool {
        self.filter.get().is_some()
    }

    /// Set the subscriber's filter to `level`.
    ///
    /// Returns `Ok(false)` when no subscriber is attached, `Ok(true)` once the
    /// filter was replaced.
    pub fn reload_level(&self, level: Severity) -> LoggerResult<bool> {
        let Some(filter) = self.filter.get() else {
            return Ok(false);
        };
        filter
            .reload(level_filter(level))
            .map_err(|e| LoggerError::Config(format!("failed to reload level filter: {}", e)))?;
        Ok(true)
    }

    /// Severity the subscriber currently filters at, if one is attached
    pub fn level(&self) -> Option<Severity> {
        let filter = self.filter.get()?.clone_current()?;
        Some(severity_of(filter))
    }
}

/// Filter that lets through exactly what a logger at `level` emits
pub(crate) fn level_filter(level: Severity) -> LevelFilter {
    match level {
        Severity::Silent => LevelFilter::OFF,
        Severity::Error => LevelFilter::ERROR,
        Severity::Warn => LevelFilter::WARN,
        Severity::Info => LevelFilter::INFO,
        Severity::Debug => LevelFilter::DEBUG,
        Severity::Trace => LevelFilter::TRACE,
    }
}

pub(crate) fn severity_of(filter: LevelFilter) -> Severity {
    if filter == LevelFilter::OFF {
        Severity::Silent
    } else if filter == LevelFilter::ERROR {
        Severity::Error
    } else if filter == LevelFilter::WARN {
        Severity::Warn
    } else if filter == LevelFilter::INFO {
        Severity::Info
    } else if filter == LevelFilter::DEBUG {
        Severity::Debug
    } else {
        Severity::Trace
    }
}

/// Install a global `fmt` subscriber filtered at `level`.
///
/// Pairs with [`crate::TracingSink`] when the host has no log facility of its
/// own. Returns whether this call installed the subscriber; when another
/// global subscriber already exists it is left in place and
/// [`ReloadHandle::global`] stays detached.
pub fn init_logging(level: Severity) -> bool {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = reload::Layer::new(level_filter(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false));

    tracing::subscriber::set_global_default(subscriber).is_ok()
        && ReloadHandle::global().install(handle)
}
