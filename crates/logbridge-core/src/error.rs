//! Error types for logbridge

use thiserror::Error;

/// Result type alias for the fallible parse steps
pub type LoggerResult<T> = Result<T, LoggerError>;

/// Error type for configuration and bridge call decoding.
///
/// Logging operations themselves never fail; these errors only come out of
/// explicit parse steps so a host can decide what to do with bad input.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Name does not match any severity
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    /// Configuration document could not be parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Bridge method is not recognized
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// Bridge call carried an unusable argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl LoggerError {
    /// Stable code reported to the host when a bridge call is rejected
    pub fn error_code(&self) -> u32 {
        match self {
            LoggerError::UnknownSeverity(_) => 1,
            LoggerError::Config(_) => 2,
            LoggerError::Serialization(_) => 3,
            LoggerError::UnknownMethod(_) => 4,
            LoggerError::InvalidArgument(_) => 5,
        }
    }
}

impl From<serde_json::Error> for LoggerError {
    fn from(err: serde_json::Error) -> Self {
        LoggerError::Serialization(err.to_string())
    }
}
