//! Plugin method dispatch
//!
//! Decodes calls arriving from the app side (method name + JSON arguments)
//! into logger operations and encodes the JSON answer.

use logbridge_core::{LoggerError, LoggerResult, Severity};
use logbridge_logging::{Logger, ReloadHandle};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Method names understood by [`LoggerBridge::handle`]
pub const SUPPORTED_METHODS: &[&str] = &[
    "log",
    "error",
    "warn",
    "info",
    "debug",
    "trace",
    "setLevel",
    "getLevel",
    "setLabels",
    "getLabels",
    "setTag",
    "getTag",
    "time",
    "timeLog",
    "timeEnd",
    "dir",
    "stackTrace",
];

/// Level argument: an ordinal or a severity name
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LevelArg {
    Ordinal(u64),
    Name(String),
}

impl LevelArg {
    fn resolve(&self) -> Severity {
        match self {
            LevelArg::Ordinal(n) => Severity::from_ordinal(u8::try_from(*n).unwrap_or(u8::MAX)),
            LevelArg::Name(name) => Severity::resolve(name),
        }
    }
}

/// Arguments of `log`
#[derive(Debug, Default, Deserialize)]
struct LogCall {
    #[serde(default)]
    level: Option<LevelArg>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Arguments of the per-level methods
#[derive(Debug, Default, Deserialize)]
struct MessageCall {
    #[serde(default)]
    message: Option<String>,
    /// Scope of the message; routed as the tag
    #[serde(default)]
    context: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SetLevelCall {
    #[serde(default)]
    level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SetLabelsCall {
    #[serde(default)]
    labels: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct SetTagCall {
    #[serde(default)]
    tag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TimerCall {
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DirCall {
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Serialize)]
struct LevelResponse {
    level: &'static str,
}

#[derive(Debug, Serialize)]
struct LabelsResponse {
    labels: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct TagResponse {
    tag: String,
}

/// Dispatches plugin method calls onto a [`Logger`]
#[derive(Debug, Clone)]
pub struct LoggerBridge {
    logger: Arc<Logger>,
}

impl LoggerBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Handle one method call, answering failures in-band.
    ///
    /// Same as [`LoggerBridge::handle`], except that an error is encoded as
    /// `{"error": {"code": <n>, "message": "..."}}` using
    /// [`LoggerError::error_code`], so the host can reject the call without
    /// inspecting Rust types.
    pub fn call(&self, method: &str, payload: &[u8]) -> Vec<u8> {
        match self.handle(method, payload) {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(method, code = err.error_code(), "rejecting call: {}", err);
                error_response(&err)
            }
        }
    }

    /// Handle one method call.
    ///
    /// - `method`: one of [`SUPPORTED_METHODS`]
    /// - `payload`: JSON object with the call's arguments; empty means `{}`
    ///
    /// Returns the JSON-encoded answer. Getters answer an object holding the
    /// value, everything else answers `{}`. Errors only come from an unknown
    /// method or a payload that is not a JSON object of the expected shape;
    /// the logging itself never fails.
    pub fn handle(&self, method: &str, payload: &[u8]) -> LoggerResult<Vec<u8>> {
        let logger = &self.logger;
        match method {
            "log" => {
                let call: LogCall = decode(payload)?;
                let level = call
                    .level
                    .as_ref()
                    .map(LevelArg::resolve)
                    .unwrap_or(Severity::Info);
                logger.log_with_tag_at_level(
                    level,
                    call.label.as_deref(),
                    call.tag.as_deref(),
                    call.message.as_deref().unwrap_or_default(),
                );
                empty()
            }
            "error" => self.message_at(Severity::Error, payload),
            "warn" => self.message_at(Severity::Warn, payload),
            "info" => self.message_at(Severity::Info, payload),
            "debug" => self.message_at(Severity::Debug, payload),
            "trace" => self.message_at(Severity::Trace, payload),
            "setLevel" => {
                let call: SetLevelCall = decode(payload)?;
                let name = call.level.unwrap_or_default();
                match Severity::try_from_name(&name) {
                    Some(level) => self.set_level(level),
                    None => tracing::debug!("ignoring unknown level '{}'", name),
                }
                empty()
            }
            "getLevel" => encode(&LevelResponse {
                level: logger.level_name(),
            }),
            "setLabels" => {
                let call: SetLabelsCall = decode(payload)?;
                logger.set_labels(
                    call.labels
                        .iter()
                        .filter_map(|(name, value)| Some((name.as_str(), value.as_str()?))),
                );
                empty()
            }
            "getLabels" => encode(&LabelsResponse {
                labels: logger.labels(),
            }),
            "setTag" => {
                let call: SetTagCall = decode(payload)?;
                logger.set_tag(call.tag.as_deref().unwrap_or_default());
                empty()
            }
            "getTag" => encode(&TagResponse { tag: logger.tag() }),
            "time" => {
                let call: TimerCall = decode(payload)?;
                logger.time(call.label.as_deref().unwrap_or_default());
                empty()
            }
            "timeLog" => {
                let call: TimerCall = decode(payload)?;
                logger.time_log(call.label.as_deref().unwrap_or_default());
                empty()
            }
            "timeEnd" => {
                let call: TimerCall = decode(payload)?;
                logger.time_end(call.label.as_deref().unwrap_or_default());
                empty()
            }
            "dir" => {
                let call: DirCall = decode(payload)?;
                logger.dir(&call.value);
                empty()
            }
            "stackTrace" => {
                logger.trace();
                empty()
            }
            _ => Err(LoggerError::UnknownMethod(method.to_string())),
        }
    }

    fn message_at(&self, level: Severity, payload: &[u8]) -> LoggerResult<Vec<u8>> {
        let call: MessageCall = decode(payload)?;
        self.logger.log_with_tag_at_level(
            level,
            None,
            call.context.as_deref(),
            call.message.as_deref().unwrap_or_default(),
        );
        empty()
    }

    /// Set the logger's threshold and the process-wide subscriber's filter
    pub fn set_level(&self, level: Severity) {
        self.logger.set_severity(level);

        if let Err(e) = ReloadHandle::global().reload_level(level) {
            tracing::warn!("failed to reload tracing filter: {}", e);
        }
    }
}

fn decode<T: DeserializeOwned + Default>(payload: &[u8]) -> LoggerResult<T> {
    if payload.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(payload)
        .map_err(|e| LoggerError::InvalidArgument(format!("malformed call arguments: {}", e)))
}

fn encode<T: Serialize>(value: &T) -> LoggerResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

fn empty() -> LoggerResult<Vec<u8>> {
    Ok(b"{}".to_vec())
}

fn error_response(err: &LoggerError) -> Vec<u8> {
    serde_json::json!({
        "error": {
            "code": err.error_code(),
            "message": err.to_string(),
        }
    })
    .to_string()
    .into_bytes()
}
