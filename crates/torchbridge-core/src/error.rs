//! Error types for torchbridge plugins

use thiserror::Error;

/// Result type alias for plugin operations
pub type PluginResult<T> = Result<T, PluginError>;

/// Error type for plugin operations
#[derive(Error, Debug)]
pub enum PluginError {
    /// Plugin is not in a valid state for the requested operation
    #[error("invalid lifecycle state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// Failed to load the plugin
    #[error("initialization failed: {0}")]
    InitializationFailed(String),

    /// Failed to shutdown the plugin
    #[error("shutdown failed: {0}")]
    ShutdownFailed(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// The plugin does not expose the requested method
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// The plugin method rejected the call
    ///
    /// The message is delivered to the caller verbatim, without a prefix.
    #[error("{0}")]
    Rejected(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl PluginError {
    /// Returns a stable numeric code for the host
    pub fn error_code(&self) -> u32 {
        match self {
            PluginError::InvalidState { .. } => 1,
            PluginError::InitializationFailed(_) => 2,
            PluginError::ShutdownFailed(_) => 3,
            PluginError::ConfigError(_) => 4,
            PluginError::SerializationError(_) => 5,
            PluginError::UnknownMethod(_) => 6,
            PluginError::Rejected(_) => 7,
            PluginError::Internal(_) => 8,
        }
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(err: serde_json::Error) -> Self {
        PluginError::SerializationError(err.to_string())
    }
}
