//! Configuration loading utilities

use crate::validator::ConfigValidator;
use crate::Config;
use folio_common::FolioError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Files probed, in order, when no explicit path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["folio.yaml", "folio.yml", "folio.toml"];

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::config_with_source("Failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file (by extension) with
    /// environment variable overrides, then validate it.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(path, &content)?;

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit path, `FOLIO_CONFIG_PATH`, one of
    /// the default files in the working directory, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_config(path);
        }

        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::load_config(path);
        }

        if let Some(path) = Self::find_default_file() {
            return Self::load_config(path);
        }

        debug!("no configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Parse configuration text, TOML for `.toml` files and YAML otherwise.
    pub fn parse(path: &Path, content: &str) -> Result<Config, ConfigError> {
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(toml::from_str(content)?)
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }

    fn find_default_file() -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    fn validate(config: &Config) -> Result<(), ConfigError> {
        ConfigValidator::validate(config).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup`.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup("FOLIO_SOURCE_BASE") {
            config.sources.base = base;
        }

        if let Some(timeout) = lookup("FOLIO_REQUEST_TIMEOUT") {
            config.sources.request_timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "FOLIO_REQUEST_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(output) = lookup("FOLIO_OUTPUT") {
            config.render.output = PathBuf::from(output);
        }

        if let Some(session_file) = lookup("FOLIO_SESSION_FILE") {
            config.language.session_file = Some(PathBuf::from(session_file));
        }

        if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("FOLIO_LOG_JSON") {
            config.logging.json = json.parse().map_err(|e| ConfigError::EnvParseError {
                var: "FOLIO_LOG_JSON".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config_file(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_parse_partial_yaml_keeps_defaults() {
        let yaml = "sources:\n  base: \"https://an.dev\"\nrender:\n  animation:\n    stagger_ms: 200\n";
        let config = ConfigLoader::parse(Path::new("folio.yaml"), yaml).unwrap();

        assert_eq!(config.sources.base, "https://an.dev");
        assert_eq!(config.sources.documents.len(), 4);
        assert_eq!(config.render.animation.stagger_ms, 200);
        assert_eq!(config.render.animation.initial_delay_ms, 100);
        assert_eq!(config.language.primary.code, "vi");
    }

    #[test]
    fn test_parse_toml_by_extension() {
        let toml = "[sources]\nbase = \"./site\"\ntranslations = \"i18n.json\"\n\n[language]\nstorage_key = \"lang\"\n";
        let config = ConfigLoader::parse(Path::new("folio.toml"), toml).unwrap();

        assert_eq!(config.sources.base, "./site");
        assert_eq!(config.sources.translations, "i18n.json");
        assert_eq!(config.language.storage_key, "lang");
    }

    #[test]
    fn test_load_config_from_file() {
        let file = create_test_config_file("sources:\n  base: \"./public\"\n", ".yaml");
        let config = ConfigLoader::load_config(file.path()).unwrap();
        assert_eq!(config.language.secondary.code, "en");
    }

    #[test]
    fn test_invalid_yaml() {
        let file = create_test_config_file("sources: [unclosed", ".yaml");
        let result = ConfigLoader::load_config(file.path());
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_validation_error() {
        let yaml = "language:\n  primary: { code: \"en\", label: \"EN\", flag: \"\" }\n  secondary: { code: \"en\", label: \"EN\", flag: \"\" }\n";
        let file = create_test_config_file(yaml, ".yml");
        let result = ConfigLoader::load_config(file.path());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config("/nonexistent/path/folio.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("FOLIO_SOURCE_BASE", "https://cdn.example.com"),
            ("FOLIO_OUTPUT", "out/page.html"),
            ("FOLIO_SESSION_FILE", "/tmp/folio-session.json"),
            ("FOLIO_REQUEST_TIMEOUT", "5"),
            ("FOLIO_LOG_LEVEL", "debug"),
        ]);

        ConfigLoader::apply_overrides_from(&mut config, lookup).unwrap();

        assert_eq!(config.sources.base, "https://cdn.example.com");
        assert_eq!(config.render.output, PathBuf::from("out/page.html"));
        assert_eq!(
            config.language.session_file,
            Some(PathBuf::from("/tmp/folio-session.json"))
        );
        assert_eq!(config.sources.request_timeout_seconds, 5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_override_parse_error() {
        let mut config = Config::default();
        let lookup = lookup_from(&[("FOLIO_REQUEST_TIMEOUT", "soon")]);

        let result = ConfigLoader::apply_overrides_from(&mut config, lookup);
        assert!(matches!(result, Err(ConfigError::EnvParseError { .. })));
    }
}
