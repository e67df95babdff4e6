//! Error types for tomatui.

use thiserror::Error;

/// Errors that can occur in tomatui.
///
/// None of these are fatal to the timer engine: persistence failures are
/// logged and the engine continues with in-memory state. Variants here
/// surface only at the CLI and terminal boundaries.
#[derive(Debug, Error)]
pub enum TomatuiError {
    /// Configuration problem (missing home directory, bad paths, etc.).
    #[error("configuration error: {0}")]
    Config(String),

    /// The settings record exists but could not be read.
    #[error("could not read settings file: {0}")]
    SettingsRead(String),

    /// The settings record could not be written.
    #[error("could not write settings file: {0}")]
    SettingsWrite(String),

    /// The settings record was readable but not a valid five-field record.
    #[error("malformed settings record: {0}")]
    SettingsParse(String),

    /// Terminal setup, teardown, or event polling failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
