//! Per-severity display labels

use crate::Severity;
use std::collections::BTreeMap;

/// Display labels indexed by severity ordinal.
///
/// Every severity always has an entry. Empty overrides are ignored, so
/// only `Silent` (which is never dispatched) carries an empty label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: [String; Severity::COUNT],
}

impl LabelTable {
    /// Built-in labels in ordinal order
    pub const DEFAULTS: [&'static str; Severity::COUNT] = ["", "🔴", "🟠", "🟢", "👉", "🔎"];

    /// Create a table seeded with the built-in labels
    pub fn new() -> Self {
        Self {
            labels: Self::DEFAULTS.map(String::from),
        }
    }

    /// Label for a severity
    pub fn get(&self, level: Severity) -> &str {
        &self.labels[level.ordinal()]
    }

    /// Replace the label for a severity. Returns `false` if `label` is empty.
    pub fn set(&mut self, level: Severity, label: &str) -> bool {
        if label.is_empty() {
            return false;
        }
        self.labels[level.ordinal()] = label.to_string();
        true
    }

    /// Apply overrides keyed by severity name.
    ///
    /// Unrecognized names and empty labels are skipped. Returns the number of
    /// entries applied.
    pub fn apply_named<I, K, V>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut applied = 0;
        for (name, label) in entries {
            let Some(level) = Severity::try_from_name(name.as_ref()) else {
                tracing::debug!("ignoring label for unknown severity '{}'", name.as_ref());
                continue;
            };
            if self.set(level, label.as_ref()) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply already-resolved overrides
    pub fn apply(&mut self, overrides: &BTreeMap<Severity, String>) {
        for (level, label) in overrides {
            self.set(*level, label);
        }
    }

    /// Effective label for a message: a non-empty caller label wins,
    /// otherwise the table entry for `level`.
    pub fn resolve<'a>(&'a self, level: Severity, caller: Option<&'a str>) -> &'a str {
        match caller {
            Some(label) if !label.is_empty() => label,
            _ => self.get(level),
        }
    }

    /// Labels keyed by canonical severity name
    pub fn to_map(&self) -> BTreeMap<String, String> {
        Severity::ALL
            .iter()
            .map(|level| (level.name().to_string(), self.get(*level).to_string()))
            .collect()
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "labels/labels_tests.rs"]
mod labels_tests;
