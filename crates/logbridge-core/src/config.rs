//! Host configuration types
//!
//! The host app hands over its configuration document once, when the
//! plugin loads. [`HostConfig::from_json`] is the only fallible step; every
//! lookup afterwards degrades to a default instead of failing.

use crate::{LoggerError, LoggerResult, Severity};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Name of the logger's section under `plugins`
pub const LOGGER_CONFIG_NAME: &str = "Logger";

/// Host application configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostConfig {
    data: Value,
}

impl HostConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the default configuration. The root must be a
    /// JSON object.
    pub fn from_json(bytes: &[u8]) -> LoggerResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let data: Value =
            serde_json::from_slice(bytes).map_err(|e| LoggerError::Config(e.to_string()))?;
        match data {
            Value::Object(_) | Value::Null => Ok(Self { data }),
            other => Err(LoggerError::Config(format!(
                "expected a JSON object at the root, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Wrap an already parsed document
    pub fn from_value(data: Value) -> Self {
        Self { data }
    }

    /// Get a typed value by key path, `None` if missing or mistyped
    pub fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Option<T> {
        let mut node = &self.data;
        for key in path {
            node = node.get(key)?;
        }
        serde_json::from_value(node.clone()).ok()
    }

    /// Platform-wide hide flag: `android.hideLogs`, then `hideLogs`, then `false`
    pub fn platform_hide_logs(&self) -> bool {
        self.get::<bool>(&["android", "hideLogs"])
            .or_else(|| self.get::<bool>(&["hideLogs"]))
            .unwrap_or(false)
    }

    /// Raw section for a plugin under `plugins.<name>`
    pub fn plugin_section(&self, name: &str) -> Option<&Value> {
        self.data.get("plugins")?.get(name)
    }

    /// Typed settings for a plugin section; empty when the section is absent
    pub fn plugin(&self, name: &str) -> LoggerSettings {
        self.plugin_section(name)
            .map(LoggerSettings::from_value)
            .unwrap_or_default()
    }

    /// Resolved hide flag: the plugin-scoped value overrides the platform one
    pub fn hide_logs(&self, name: &str) -> bool {
        self.plugin(name)
            .hide
            .unwrap_or_else(|| self.platform_hide_logs())
    }
}

/// Settings recognized in the logger's configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerSettings {
    /// Threshold, only when a recognized severity name was given
    pub level: Option<Severity>,

    /// Label overrides; unknown severities and empty labels are dropped
    pub labels: BTreeMap<Severity, String>,

    /// Plugin-scoped hide flag (`hide` wins over `hideLogs`)
    pub hide: Option<bool>,
}

impl LoggerSettings {
    /// Read settings from a configuration section, ignoring malformed entries
    pub fn from_value(section: &Value) -> Self {
        let level = match section.get("level") {
            Some(Value::String(name)) => {
                let level = Severity::try_from_name(name);
                if level.is_none() {
                    tracing::debug!("ignoring unknown configured level '{}'", name);
                }
                level
            }
            Some(other) => {
                tracing::debug!("ignoring non-string level of type {}", json_type_name(other));
                None
            }
            None => None,
        };

        let mut labels = BTreeMap::new();
        let label_section = section.get("labels").or_else(|| section.get("prefixes"));
        if let Some(Value::Object(entries)) = label_section {
            for (name, value) in entries {
                match (Severity::try_from_name(name), value.as_str()) {
                    (Some(level), Some(label)) if !label.is_empty() => {
                        labels.insert(level, label.to_string());
                    }
                    _ => tracing::debug!("ignoring label entry '{}'", name),
                }
            }
        }

        let hide = section
            .get("hide")
            .and_then(Value::as_bool)
            .or_else(|| section.get("hideLogs").and_then(Value::as_bool));

        Self {
            level,
            labels,
            hide,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
