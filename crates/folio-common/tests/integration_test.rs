//! Integration tests for folio-common crate.

use folio_common::{
    escape_html, last_path_segment, source_for, DocumentKind, DocumentSource, FileSource,
    FolioError,
};
use std::time::Duration;

#[test]
fn test_document_kinds_render_order() {
    let keys: Vec<_> = DocumentKind::all().iter().map(|k| k.key()).collect();
    assert_eq!(keys, vec!["profile", "skills", "projects", "contact"]);
}

#[test]
fn test_string_helpers() {
    assert_eq!(escape_html("<b>"), "&lt;b&gt;");
    assert_eq!(
        last_path_segment("https://linkedin.com/in/someone"),
        Some("someone")
    );
}

#[tokio::test]
async fn test_file_source_via_source_for() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(
        dir.path().join("data/profile.json"),
        r#"{"personal": {"name": "An"}}"#,
    )
    .unwrap();

    let base = dir.path().to_string_lossy().to_string();
    let source = source_for(&base, Duration::from_secs(5)).unwrap();

    let profile = source.fetch("data/profile.json").await.unwrap();
    assert_eq!(profile["personal"]["name"], "An");

    let missing = source.fetch("data/skills.json").await;
    assert!(matches!(missing, Err(FolioError::NotFound { .. })));
}

#[test]
fn test_file_source_base_dir() {
    let source = FileSource::new("site");
    assert_eq!(source.base_dir(), std::path::Path::new("site"));
}
