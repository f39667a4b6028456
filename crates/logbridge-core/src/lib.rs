//! logbridge-core - Severity model, labels and configuration
//!
//! This crate provides the foundational types shared by the logger and its
//! host adapters:
//! - [`Severity`] ordered log levels used for filtering
//! - [`LabelTable`] per-severity display labels
//! - [`HostConfig`] and [`LoggerSettings`] for configuration resolution
//! - [`LoggerError`] for the few fallible parse steps

mod config;
mod error;
mod labels;

pub use config::{HostConfig, LOGGER_CONFIG_NAME, LoggerSettings};
pub use error::{LoggerError, LoggerResult};
pub use labels::LabelTable;

use std::str::FromStr;

/// Log severities, ordered from most suppressive to most verbose.
///
/// A message at severity `S` passes a threshold `T` iff `T >= S`. `Silent`
/// as a threshold suppresses everything; `Trace` lets everything through.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Silent = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Severity {
    /// Number of severities
    pub const COUNT: usize = 6;

    /// Every severity in ordinal order
    pub const ALL: [Severity; Self::COUNT] = [
        Severity::Silent,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// The restricted three-level profile (`info`, `warn`, `error`)
    pub const BASIC: [Severity; 3] = [Severity::Info, Severity::Warn, Severity::Error];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Severity::Silent => "silent",
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Trace => "trace",
        }
    }

    /// Position in [`Severity::ALL`]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Resolve an ordinal received across the host boundary.
    ///
    /// Out-of-range values resolve to `Info`.
    pub fn from_ordinal(value: u8) -> Self {
        match value {
            0 => Severity::Silent,
            1 => Severity::Error,
            2 => Severity::Warn,
            3 => Severity::Info,
            4 => Severity::Debug,
            5 => Severity::Trace,
            _ => Severity::Info,
        }
    }

    /// Case-sensitive lookup by name, `None` when unrecognized.
    ///
    /// `off` is accepted as another name for `Silent`. Use this when the
    /// caller needs to know whether a level was actually given, e.g. when
    /// reading configuration.
    pub fn try_from_name(name: &str) -> Option<Self> {
        match name {
            "silent" | "off" => Some(Severity::Silent),
            "error" => Some(Severity::Error),
            "warn" => Some(Severity::Warn),
            "info" => Some(Severity::Info),
            "debug" => Some(Severity::Debug),
            "trace" => Some(Severity::Trace),
            _ => None,
        }
    }

    /// Lookup by name that never fails: unrecognized names resolve to `Info`.
    pub fn resolve(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or(Severity::Info)
    }

    /// Whether a message at `level` passes this threshold
    pub fn allows(self, level: Severity) -> bool {
        self >= level
    }

    /// Whether this severity belongs to the restricted three-level profile
    pub fn is_basic(self) -> bool {
        Self::BASIC.contains(&self)
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_name(s).ok_or_else(|| LoggerError::UnknownSeverity(s.to_string()))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        HostConfig, LOGGER_CONFIG_NAME, LabelTable, LoggerError, LoggerResult, LoggerSettings,
        Severity,
    };
}
