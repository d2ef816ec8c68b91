//! Integration tests for folio-config crate.

use folio_config::{Config, ConfigLoader, ConfigValidator};
use std::path::Path;

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();
    assert!(ConfigValidator::validate(&config).is_ok());

    config.language.primary.code = String::new();
    assert!(ConfigValidator::validate(&config).is_err());
}

#[test]
fn test_yaml_document_map_replaces_defaults() {
    let yaml = r#"
sources:
  base: "https://an.dev"
  documents:
    profile: "api/me.json"
    projects: "api/work.json"
language:
  session_file: "/tmp/folio-session.json"
logging:
  level: "folio_render=debug"
"#;
    let config = ConfigLoader::parse(Path::new("site.yaml"), yaml).unwrap();

    assert_eq!(config.sources.documents.len(), 2);
    assert_eq!(config.sources.documents["profile"], "api/me.json");
    assert_eq!(config.sources.translations, "data/translations.json");
    assert!(config.language.session_file.is_some());
    assert_eq!(config.logging.to_logging_config().level, "folio_render=debug");
    assert!(ConfigValidator::validate(&config).is_ok());
}

#[test]
fn test_load_explicit_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    std::fs::write(
        &path,
        "[render]\noutput = \"public/index.html\"\n\n[render.animation]\ninitial_delay_ms = 0\n",
    )
    .unwrap();

    let config = ConfigLoader::load(Some(path.as_path())).unwrap();
    assert_eq!(config.render.output, Path::new("public/index.html"));
    assert_eq!(config.render.animation.initial_delay_ms, 0);
    assert_eq!(config.render.animation.stagger_ms, 150);
}
