//! Document sources: where the JSON documents and translations come from.
//!
//! Every fetch in the workspace goes through [`DocumentSource`]. Callers are
//! expected to treat any error as "data unavailable" rather than fatal.

use crate::error::{FolioError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Asynchronous provider of JSON documents addressed by relative path.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches and parses the document at `path`.
    async fn fetch(&self, path: &str) -> Result<Value>;

    /// Short description used in log lines.
    fn describe(&self) -> String;
}

/// Fetches documents over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSource {
    /// Creates a source rooted at `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last segment unless the base ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FolioError::network_with_source("Failed to build HTTP client", e))?;
        Ok(Self { client, base_url })
    }

    /// Resolves a relative document path against the base URL.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path)?;
        debug!(%url, "fetching document");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::network_with_status(
                format!("GET {url} returned {status}"),
                status.as_u16(),
            ));
        }

        Ok(response.json::<Value>().await?)
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

/// Reads documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    /// Creates a source rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Base directory documents are read from.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn fetch(&self, path: &str) -> Result<Value> {
        let full_path = self.base_dir.join(path);
        debug!(path = %full_path.display(), "reading document");

        let content = match tokio::fs::read_to_string(&full_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FolioError::not_found(full_path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        self.base_dir.display().to_string()
    }
}

/// In-memory documents, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, Value>,
}

impl StaticSource {
    /// Creates an empty source; every fetch fails with `NotFound`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document under `path`.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<String>, document: Value) -> Self {
        self.documents.insert(path.into(), document);
        self
    }

    /// Adds or replaces a document under `path`.
    pub fn insert(&mut self, path: impl Into<String>, document: Value) {
        self.documents.insert(path.into(), document);
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<Value> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| FolioError::not_found(path))
    }

    fn describe(&self) -> String {
        format!("static ({} documents)", self.documents.len())
    }
}

/// Picks the source implementation for a configured base location.
///
/// `http://` and `https://` bases are fetched over HTTP, anything else is
/// treated as a directory.
pub fn source_for(base: &str, timeout: Duration) -> Result<Arc<dyn DocumentSource>> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(Arc::new(HttpSource::new(base, timeout)?))
    } else {
        Ok(Arc::new(FileSource::new(base)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_source_roundtrip_and_miss() {
        let source = StaticSource::new().with_document("data/profile.json", json!({"a": 1}));

        assert_eq!(source.fetch("data/profile.json").await.unwrap(), json!({"a": 1}));
        assert!(matches!(
            source.fetch("data/skills.json").await,
            Err(FolioError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_file_source_reads_and_reports_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ok.json"), r#"{"name": "x"}"#).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let source = FileSource::new(dir.path());

        assert_eq!(source.fetch("ok.json").await.unwrap(), json!({"name": "x"}));
        assert!(matches!(
            source.fetch("bad.json").await,
            Err(FolioError::Serialization(_))
        ));
        assert!(matches!(
            source.fetch("missing.json").await,
            Err(FolioError::NotFound { .. })
        ));
    }

    #[test]
    fn test_http_source_joins_relative_paths() {
        let source = HttpSource::new("https://example.com/site", Duration::from_secs(5)).unwrap();
        assert_eq!(
            source.url_for("data/profile.json").unwrap().as_str(),
            "https://example.com/site/data/profile.json"
        );
        assert_eq!(
            source.url_for("/data/contact.json").unwrap().as_str(),
            "https://example.com/site/data/contact.json"
        );
    }

    #[test]
    fn test_source_for_picks_implementation() {
        let http = source_for("http://localhost:8080", Duration::from_secs(1)).unwrap();
        assert!(http.describe().starts_with("http://localhost:8080"));

        let file = source_for("./site", Duration::from_secs(1)).unwrap();
        assert_eq!(file.describe(), "./site");

        assert!(source_for("https://", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_mock_source_through_trait_object() {
        let mut mock = MockDocumentSource::new();
        mock.expect_fetch()
            .withf(|path| path.to_string() == "data/translations.json")
            .times(1)
            .returning(|_| Ok(json!({"en": {}})));

        let source: Arc<dyn DocumentSource> = Arc::new(mock);
        assert_eq!(
            source.fetch("data/translations.json").await.unwrap(),
            json!({"en": {}})
        );
    }
}
