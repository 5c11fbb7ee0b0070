//! Error types for core module
//!
//! Covers settings persistence: reading, writing and (de)serializing the
//! settings file.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// No usable configuration directory on this platform
    #[error("No configuration directory available")]
    ConfigDirUnavailable,
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
