//! Language resolution and translation lookup.
//!
//! The resolver owns the swappable [`Dictionary`] and answers every
//! translation request made by the renderer. Lookups never fail: a miss, a
//! falsy value, or a value of the wrong shape yields the caller's fallback.

use crate::context::LanguageContext;
use crate::dictionary::{merge_shallow, Dictionary};
use crate::language::{Language, LanguageOption};
use arc_swap::ArcSwap;
use folio_common::DocumentSource;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, trace, warn};

/// Translation seam used by the renderer.
pub trait Translate: Send + Sync {
    /// Current language.
    fn language(&self) -> Language;

    /// Resolves `key_path` against the dictionary, returning `fallback` on a
    /// miss or when the current language is primary.
    fn translate(&self, key_path: &str, fallback: Value) -> Value;
}

/// Typed helpers over any [`Translate`] implementation.
pub trait TranslateExt: Translate {
    /// Translates a text value. Non-string scalars are rendered as JSON.
    fn translate_text(&self, key_path: &str, fallback: &str) -> String {
        if self.language().is_primary() {
            return fallback.to_string();
        }
        match self.translate(key_path, Value::String(fallback.to_string())) {
            Value::String(text) => text,
            other => other.to_string(),
        }
    }

    /// Translates a compound value, merging the dictionary entry over the
    /// serialized fallback. A result that does not deserialize back into `T`
    /// yields the fallback.
    fn translate_as<T>(&self, key_path: &str, fallback: &T) -> T
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        if self.language().is_primary() {
            return fallback.clone();
        }
        let Ok(original) = serde_json::to_value(fallback) else {
            return fallback.clone();
        };
        serde_json::from_value(self.translate(key_path, original)).unwrap_or_else(|e| {
            debug!(key_path, error = %e, "translated value has the wrong shape");
            fallback.clone()
        })
    }
}

impl<T: Translate + ?Sized> TranslateExt for T {}

/// Resolves the current language and translates against the loaded
/// dictionary.
pub struct LanguageResolver {
    context: Arc<LanguageContext>,
    dictionary: ArcSwap<Dictionary>,
    source: Arc<dyn DocumentSource>,
    translations_path: String,
}

impl std::fmt::Debug for LanguageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageResolver")
            .field("context", &self.context)
            .field("source", &self.source.describe())
            .field("translations_path", &self.translations_path)
            .finish_non_exhaustive()
    }
}

impl LanguageResolver {
    /// Creates a resolver with an empty dictionary.
    pub fn new(
        context: Arc<LanguageContext>,
        source: Arc<dyn DocumentSource>,
        translations_path: impl Into<String>,
    ) -> Self {
        Self {
            context,
            dictionary: ArcSwap::from_pointee(Dictionary::empty()),
            source,
            translations_path: translations_path.into(),
        }
    }

    /// Current language.
    #[must_use]
    pub fn get_current(&self) -> Language {
        self.context.current()
    }

    /// Sets and persists the current language.
    pub fn set(&self, language: Language) {
        debug!(language = self.context.pair().code(language), "setting language");
        self.context.set_current(language);
    }

    /// Switches to the other language and returns it.
    pub fn toggle(&self) -> Language {
        let next = self.get_current().toggled();
        self.set(next);
        info!(language = self.context.pair().code(next), "language toggled");
        next
    }

    /// Fetches the translation document and installs the secondary
    /// language's subtree.
    ///
    /// Failures are logged and leave the previous dictionary in place.
    /// Returns whether a dictionary was installed.
    #[instrument(skip(self), fields(path = %self.translations_path))]
    pub async fn load_dictionary(&self) -> bool {
        let document = match self.source.fetch(&self.translations_path).await {
            Ok(document) => document,
            Err(e) => {
                warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "failed to load translations"
                );
                return false;
            }
        };

        let tag = &self.context.pair().secondary.code;
        let dictionary = Dictionary::from_document(document, tag).unwrap_or_else(|| {
            warn!(language = %tag, "translation document has no entry for language");
            Dictionary::empty()
        });
        self.install(dictionary);
        true
    }

    /// Replaces the dictionary atomically.
    pub fn install(&self, dictionary: Dictionary) {
        self.dictionary.store(Arc::new(dictionary));
    }

    /// Snapshot of the current dictionary.
    #[must_use]
    pub fn dictionary(&self) -> Arc<Dictionary> {
        self.dictionary.load_full()
    }

    /// Label and flag for the language toggle control.
    #[must_use]
    pub fn toggle_label(&self) -> LanguageOption {
        self.context.current_option().clone()
    }

    /// The shared language context.
    #[must_use]
    pub const fn context(&self) -> &Arc<LanguageContext> {
        &self.context
    }
}

impl Translate for LanguageResolver {
    fn language(&self) -> Language {
        self.get_current()
    }

    fn translate(&self, key_path: &str, fallback: Value) -> Value {
        if self.get_current().is_primary() {
            return fallback;
        }
        let dictionary = self.dictionary.load();
        let Some(found) = dictionary.lookup(key_path) else {
            trace!(key_path, "translation miss");
            return fallback;
        };
        resolve(found, fallback)
    }
}

/// Combines a dictionary hit with the caller's fallback.
fn resolve(found: &Value, fallback: Value) -> Value {
    match (found, fallback) {
        (Value::Object(overlay), Value::Object(base)) => {
            Value::Object(merge_shallow(&base, overlay))
        }
        (Value::Object(_) | Value::Array(_), Value::Null) => found.clone(),
        (Value::Object(_) | Value::Array(_), fallback) => fallback,
        (scalar, _) => scalar.clone(),
    }
}
