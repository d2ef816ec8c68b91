//! In-memory content documents, loaded once and read by every section.

use folio_common::{DocumentKind, DocumentSource};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, instrument, warn};

/// Outcome of [`ContentStore::load_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Keys that loaded, in configuration order.
    pub loaded: Vec<String>,
    /// Keys whose fetch failed, in configuration order.
    pub failed: Vec<String>,
}

impl LoadReport {
    /// Whether every document loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Content documents addressed by key.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    documents: HashMap<String, Value>,
}

impl ContentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches every document in `documents` (key to path) concurrently.
    ///
    /// A failed fetch is logged and leaves that key absent; it never fails
    /// the load as a whole.
    #[instrument(skip_all, fields(source = %source.describe(), count = documents.len()))]
    pub async fn load_all(
        source: &dyn DocumentSource,
        documents: &BTreeMap<String, String>,
    ) -> (Self, LoadReport) {
        let fetches = documents.iter().map(|(key, path)| async move {
            let result = source.fetch(path).await;
            (key, path, result)
        });

        let mut store = Self::new();
        let mut report = LoadReport::default();
        for (key, path, result) in join_all(fetches).await {
            match result {
                Ok(document) => {
                    if DocumentKind::from_key(key).is_none() {
                        debug!(key = %key, "loaded document is not read by any section");
                    }
                    store.insert(key.clone(), document);
                    report.loaded.push(key.clone());
                }
                Err(e) => {
                    warn!(key = %key, path = %path, error = %e, "could not load document");
                    report.failed.push(key.clone());
                }
            }
        }

        info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "content documents loaded"
        );
        (store, report)
    }

    /// Stores a document under `key`.
    pub fn insert(&mut self, key: impl Into<String>, document: Value) {
        self.documents.insert(key.into(), document);
    }

    /// Raw document under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.documents.get(key)
    }

    /// Whether a document is present for `kind`.
    #[must_use]
    pub fn contains(&self, kind: DocumentKind) -> bool {
        self.documents.contains_key(kind.key())
    }

    /// Typed view of the document for `kind`.
    ///
    /// `None` when the document is absent or its top level does not match
    /// `T`; a mismatch is logged. Mistyped fields inside degrade on their own.
    #[must_use]
    pub fn typed<T: DeserializeOwned>(&self, kind: DocumentKind) -> Option<T> {
        let document = self.get(kind.key())?;
        match T::deserialize(document) {
            Ok(typed) => Some(typed),
            Err(e) => {
                warn!(document = %kind, error = %e, "document is malformed");
                None
            }
        }
    }

    /// Number of documents held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, ProjectsDocument};
    use folio_common::test_utils::document_fixtures;
    use folio_common::{FolioError, MockDocumentSource, StaticSource};
    use serde_json::json;

    fn default_documents() -> BTreeMap<String, String> {
        DocumentKind::all()
            .into_iter()
            .map(|kind| (kind.key().to_string(), kind.default_path()))
            .collect()
    }

    #[tokio::test]
    async fn test_load_all_from_fixtures() {
        let source = document_fixtures::sample_source();
        let (store, report) = ContentStore::load_all(&source, &default_documents()).await;

        assert!(report.is_complete());
        assert_eq!(report.loaded, vec!["contact", "profile", "projects", "skills"]);
        assert_eq!(store.len(), 4);
        let profile: Profile = store.typed(DocumentKind::Profile).unwrap();
        assert!(profile.hero.is_some());
    }

    #[tokio::test]
    async fn test_one_failure_does_not_block_others() {
        let mut source = MockDocumentSource::new();
        source.expect_describe().return_const("mock".to_string());
        source.expect_fetch().returning(|path| {
            if path == "data/projects.json" {
                Err(FolioError::network_with_status("HTTP 500", 500))
            } else {
                Ok(json!({}))
            }
        });

        let (store, report) = ContentStore::load_all(&source, &default_documents()).await;
        assert_eq!(report.failed, vec!["projects"]);
        assert_eq!(report.loaded.len(), 3);
        assert!(!store.contains(DocumentKind::Projects));
        assert!(store.contains(DocumentKind::Skills));
    }

    #[test]
    fn test_typed_view_rejects_malformed() {
        let mut store = ContentStore::new();
        store.insert("projects", json!(42));
        assert!(store.typed::<ProjectsDocument>(DocumentKind::Projects).is_none());
        assert!(store.typed::<Profile>(DocumentKind::Profile).is_none());
    }

    #[test]
    fn test_typed_view_keeps_document_with_mistyped_field() {
        let mut store = ContentStore::new();
        store.insert("projects", json!({ "projects": [{ "title": "A", "technologies": null }] }));
        let projects: ProjectsDocument = store.typed(DocumentKind::Projects).unwrap();
        assert_eq!(projects.projects[0].title.as_deref(), Some("A"));
        assert!(projects.projects[0].technologies.is_empty());
    }

    #[tokio::test]
    async fn test_extra_documents_are_kept() {
        let source = StaticSource::new().with_document("data/blog.json", json!({ "posts": [] }));
        let mut documents = BTreeMap::new();
        documents.insert("blog".to_string(), "data/blog.json".to_string());

        let (store, report) = ContentStore::load_all(&source, &documents).await;
        assert_eq!(report.loaded, vec!["blog"]);
        assert!(store.get("blog").is_some());
    }
}
