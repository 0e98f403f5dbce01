use thiserror::Error;

/// Errors that can occur while decoding the tracker's payloads.
#[derive(Error, Debug, Clone)]
pub enum PayloadError {
    #[error("Failed to parse payload JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur while loading the notifier configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    Unreadable { path: String, message: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}
