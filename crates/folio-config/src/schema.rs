//! Configuration schema definitions using serde.
//!
//! Every section is `#[serde(default)]`, so a configuration file only needs
//! to mention the values it changes.

use folio_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for folio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where documents are fetched from.
    pub sources: SourcesConfig,
    /// Language pair and session persistence.
    pub language: LanguageConfig,
    /// Output and animation settings.
    pub render: RenderConfig,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Document source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Base URL (`http://`, `https://`) or directory all paths are relative to.
    pub base: String,
    /// Content documents, store key to relative path.
    pub documents: BTreeMap<String, String>,
    /// Relative path of the translation document.
    pub translations: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_seconds: u64,
}

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOptionConfig {
    /// Language tag, e.g. `vi`.
    pub code: String,
    /// Short label shown on the toggle control, e.g. `VN`.
    pub label: String,
    /// Flag shown next to the label.
    pub flag: String,
}

/// Language configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Language the content documents are written in.
    pub primary: LanguageOptionConfig,
    /// Language provided by the translation document.
    pub secondary: LanguageOptionConfig,
    /// Session storage key holding the current language tag.
    pub storage_key: String,
    /// File backing the session store. In-memory when unset.
    pub session_file: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Path the rendered HTML page is written to.
    pub output: PathBuf,
    /// Progress bar animation timing.
    pub animation: AnimationConfig,
}

/// Staggered progress bar animation timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay before the first bar animates, in milliseconds.
    pub initial_delay_ms: u64,
    /// Additional delay per bar, in milliseconds.
    pub stagger_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level or `EnvFilter` directive.
    pub level: String,
    /// Emit JSON lines.
    pub json: bool,
    /// Pretty, colored output.
    pub pretty: bool,
    /// Log file; stderr when unset.
    pub file: Option<PathBuf>,
}

impl SourcesConfig {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl AnimationConfig {
    /// Initial delay as a `Duration`.
    #[must_use]
    pub const fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Per-item stagger as a `Duration`.
    #[must_use]
    pub const fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

impl LoggingSettings {
    /// Converts to the logging bootstrap configuration.
    #[must_use]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json,
            pretty_format: self.pretty,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
