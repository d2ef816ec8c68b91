//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use folio_common::{FolioError, Result};

/// Longest accepted per-item animation stagger, in milliseconds.
pub const MAX_STAGGER_MS: u64 = 10_000;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        let language = &config.language;
        if language.primary.code.trim().is_empty() {
            return Err(FolioError::validation_field(
                "Primary language code cannot be empty",
                "language.primary.code",
            ));
        }
        if language.secondary.code.trim().is_empty() {
            return Err(FolioError::validation_field(
                "Secondary language code cannot be empty",
                "language.secondary.code",
            ));
        }
        if language.primary.code == language.secondary.code {
            return Err(FolioError::validation_field(
                "Primary and secondary languages must differ",
                "language.secondary.code",
            ));
        }
        if language.storage_key.trim().is_empty() {
            return Err(FolioError::validation_field(
                "Storage key cannot be empty",
                "language.storage_key",
            ));
        }

        let sources = &config.sources;
        if sources.base.trim().is_empty() {
            return Err(FolioError::validation_field(
                "Source base cannot be empty",
                "sources.base",
            ));
        }
        if sources.documents.is_empty() {
            return Err(FolioError::validation_field(
                "At least one content document must be configured",
                "sources.documents",
            ));
        }
        if let Some((key, _)) = sources
            .documents
            .iter()
            .find(|(key, path)| key.trim().is_empty() || path.trim().is_empty())
        {
            return Err(FolioError::validation_field(
                format!("Document '{key}' needs a non-empty key and path"),
                "sources.documents",
            ));
        }
        if sources.translations.trim().is_empty() {
            return Err(FolioError::validation_field(
                "Translation path cannot be empty",
                "sources.translations",
            ));
        }
        if !(1..=300).contains(&sources.request_timeout_seconds) {
            return Err(FolioError::validation_field(
                "Timeout must be between 1 and 300 seconds",
                "sources.request_timeout_seconds",
            ));
        }

        if config.render.animation.stagger_ms > MAX_STAGGER_MS {
            return Err(FolioError::validation_field(
                format!("Stagger cannot exceed {MAX_STAGGER_MS} ms"),
                "render.animation.stagger_ms",
            ));
        }

        Ok(())
    }
}
