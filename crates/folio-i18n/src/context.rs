//! Explicit language context shared by the resolver and the renderer.

use crate::language::{Language, LanguageOption, LanguagePair};
use crate::session::{MemorySessionStore, SessionStore};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Current language plus its session persistence.
///
/// `current` and `set_current` are the only accessors of the mutable state.
pub struct LanguageContext {
    pair: LanguagePair,
    current: RwLock<Language>,
    store: Arc<dyn SessionStore>,
    storage_key: String,
}

impl std::fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("pair", &self.pair)
            .field("current", &*self.current.read())
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

impl LanguageContext {
    /// Creates a context, restoring the language stored under `storage_key`.
    ///
    /// A missing, unreadable or unknown stored tag falls back to primary.
    pub fn new(
        pair: LanguagePair,
        store: Arc<dyn SessionStore>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let current = match store.get(&storage_key) {
            Ok(Some(tag)) => pair.parse(&tag).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring stored language");
                Language::Primary
            }),
            Ok(None) => Language::Primary,
            Err(e) => {
                warn!(error = %e, "could not read session store");
                Language::Primary
            }
        };
        debug!(language = pair.code(current), "language context restored");

        Self {
            pair,
            current: RwLock::new(current),
            store,
            storage_key,
        }
    }

    /// Context with the default pair and a fresh in-memory session.
    #[must_use]
    pub fn in_memory(pair: LanguagePair) -> Self {
        Self::new(
            pair,
            Arc::new(MemorySessionStore::new()),
            "portfolio-language",
        )
    }

    /// Current language.
    #[must_use]
    pub fn current(&self) -> Language {
        *self.current.read()
    }

    /// Sets and persists the current language. A failed write is logged and
    /// the in-memory value still changes.
    pub fn set_current(&self, language: Language) {
        *self.current.write() = language;
        let tag = self.pair.code(language);
        if let Err(e) = self.store.set(&self.storage_key, tag) {
            warn!(error = %e, language = tag, "could not persist language");
        }
    }

    /// The configured pair.
    #[must_use]
    pub const fn pair(&self) -> &LanguagePair {
        &self.pair
    }

    /// Tag of the current language.
    #[must_use]
    pub fn current_code(&self) -> &str {
        self.pair.code(self.current())
    }

    /// Option of the current language.
    #[must_use]
    pub fn current_option(&self) -> &LanguageOption {
        self.pair.option(self.current())
    }

    /// Session key the language is stored under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Raw stored value, for diagnostics.
    #[must_use]
    pub fn stored_value(&self) -> Option<String> {
        self.store.get(&self.storage_key).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{I18nError, I18nResult};

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> I18nResult<Option<String>> {
            Err(I18nError::Io(std::io::Error::other("denied")))
        }

        fn set(&self, _key: &str, _value: &str) -> I18nResult<()> {
            Err(I18nError::Io(std::io::Error::other("denied")))
        }

        fn clear(&self) -> I18nResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restores_stored_language() {
        let store = Arc::new(MemorySessionStore::new());
        store.set("lang", "en").unwrap();

        let context = LanguageContext::new(LanguagePair::default(), store, "lang");
        assert_eq!(context.current(), Language::Secondary);
        assert_eq!(context.current_code(), "en");
    }

    #[test]
    fn test_unknown_stored_tag_defaults_to_primary() {
        let store = Arc::new(MemorySessionStore::new());
        store.set("lang", "klingon").unwrap();

        let context = LanguageContext::new(LanguagePair::default(), store, "lang");
        assert_eq!(context.current(), Language::Primary);
    }

    #[test]
    fn test_set_current_persists() {
        let store = Arc::new(MemorySessionStore::new());
        let context = LanguageContext::new(LanguagePair::default(), store.clone(), "lang");

        context.set_current(Language::Secondary);
        assert_eq!(store.get("lang").unwrap().as_deref(), Some("en"));
        assert_eq!(context.stored_value().as_deref(), Some("en"));
    }

    #[test]
    fn test_broken_store_degrades() {
        let context = LanguageContext::new(LanguagePair::default(), Arc::new(BrokenStore), "lang");
        assert_eq!(context.current(), Language::Primary);

        context.set_current(Language::Secondary);
        assert_eq!(context.current(), Language::Secondary);
        assert_eq!(context.stored_value(), None);
    }
}
