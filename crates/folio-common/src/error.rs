//! Error types and utilities for folio

use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Main error type for folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network related errors (HTTP requests, etc.)
    #[error("Network error: {message}")]
    Network {
        /// Human readable description
        message: String,
        /// HTTP status, when the server answered
        status_code: Option<u16>,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Document lookup errors (unknown key, missing static entry)
    #[error("Document not found: {path}")]
    NotFound {
        /// Path or key that was requested
        path: String,
    },

    /// Validation errors for configuration or input data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },
}

impl FolioError {
    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error for a non-success HTTP status
    pub fn network_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Network {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            status_code: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new not-found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// HTTP status attached to a network error, if any
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Network { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

// Error conversion implementations for external types

/// Convert from `reqwest::Error` to `FolioError`
impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err)
        } else if let Some(status) = err.status() {
            Self::Network {
                message: format!("HTTP error: {}", status.as_u16()),
                status_code: Some(status.as_u16()),
                source: Some(Box::new(err)),
            }
        } else {
            Self::network_with_source("Network request failed", err)
        }
    }
}

/// Convert from `url::ParseError` to `FolioError`
impl From<url::ParseError> for FolioError {
    fn from(err: url::ParseError) -> Self {
        Self::config_with_source("Invalid URL", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let network_error = FolioError::network_with_status("Server error", 503);
        assert!(network_error.to_string().contains("Network error"));
        assert_eq!(network_error.status_code(), Some(503));

        let validation_error = FolioError::validation_field("Invalid tag", "language.primary");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("Invalid tag"));
    }

    #[test]
    fn test_error_with_source() {
        let config_source_error = FolioError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(config_source_error.to_string().contains("Configuration error"));
        assert!(config_source_error.source().is_some());

        let network_source_error = FolioError::network_with_source(
            "Failed to build HTTP client",
            io::Error::new(io::ErrorKind::Other, "tls"),
        );
        assert!(network_source_error.source().is_some());
        assert_eq!(network_source_error.status_code(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let folio_error: FolioError = io_error.into();

        assert!(folio_error.to_string().contains("I/O error"));
        assert!(folio_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let invalid_json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let folio_error: FolioError = serde_error.into();

        assert!(folio_error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_url_error_conversion() {
        let url_error = url::Url::parse("not a url").unwrap_err();
        let folio_error: FolioError = url_error.into();
        assert_eq!(folio_error.to_string(), "Configuration error: Invalid URL");
    }

    #[test]
    fn test_error_display_formatting() {
        assert_eq!(
            FolioError::network_with_status("HTTP 404", 404).to_string(),
            "Network error: HTTP 404"
        );
        assert_eq!(
            FolioError::not_found("data/profile.json").to_string(),
            "Document not found: data/profile.json"
        );
    }

    #[test]
    fn test_status_code_only_on_network_errors() {
        assert_eq!(FolioError::validation_field("bad", "x").status_code(), None);
        assert_eq!(FolioError::not_found("x").status_code(), None);
    }
}
