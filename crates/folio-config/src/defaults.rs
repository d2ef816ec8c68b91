//! Default values for every configuration section.

use crate::schema::*;
use folio_common::DocumentKind;
use std::path::PathBuf;

/// Default translation document path.
pub const DEFAULT_TRANSLATIONS_PATH: &str = "data/translations.json";

/// Default session storage key.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-language";

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: SourcesConfig::default(),
            language: LanguageConfig::default(),
            render: RenderConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            base: ".".to_string(),
            documents: DocumentKind::all()
                .into_iter()
                .map(|kind| (kind.key().to_string(), kind.default_path()))
                .collect(),
            translations: DEFAULT_TRANSLATIONS_PATH.to_string(),
            request_timeout_seconds: 30,
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            primary: LanguageOptionConfig {
                code: "vi".to_string(),
                label: "VN".to_string(),
                flag: "🇻🇳".to_string(),
            },
            secondary: LanguageOptionConfig {
                code: "en".to_string(),
                label: "EN".to_string(),
                flag: "🇺🇸".to_string(),
            },
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            session_file: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist/index.html"),
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 100,
            stagger_ms: 150,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            pretty: false,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_documents_cover_every_kind() {
        let config = Config::default();
        assert_eq!(config.sources.documents.len(), 4);
        assert_eq!(
            config.sources.documents.get("projects").map(String::as_str),
            Some("data/projects.json")
        );
    }

    #[test]
    fn test_default_language_pair() {
        let language = LanguageConfig::default();
        assert_eq!(language.primary.code, "vi");
        assert_eq!(language.secondary.code, "en");
        assert_eq!(language.storage_key, "portfolio-language");
        assert!(language.session_file.is_none());
    }

    #[test]
    fn test_default_animation_timing() {
        let animation = AnimationConfig::default();
        assert_eq!(animation.initial_delay().as_millis(), 100);
        assert_eq!(animation.stagger().as_millis(), 150);
    }
}
