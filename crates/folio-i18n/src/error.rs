//! Error types for internationalization operations

use thiserror::Error;

/// Errors that can occur while persisting or parsing language state
#[derive(Error, Debug)]
pub enum I18nError {
    /// A stored or requested tag is not one of the configured pair
    #[error("Unknown language tag: {0}")]
    UnknownLanguage(String),

    /// The session file could not be read or written
    #[error("Session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file is not valid JSON
    #[error("Session store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
