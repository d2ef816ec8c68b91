//! Application wiring: startup sequence, language toggle and page output.

use crate::error::{SiteError, SiteResult};
use chrono::{DateTime, Utc};
use folio_common::{source_for, DocumentSource};
use folio_config::{Config, LanguageConfig, LanguageOptionConfig};
use folio_i18n::{
    FileSessionStore, Language, LanguageContext, LanguageOption, LanguagePair, LanguageResolver,
    MemorySessionStore, SessionStore, Translate,
};
use folio_render::{
    standard_page, Action, AnimationReport, ContentStore, Event, LoadReport, Page,
    PortfolioRenderer, ProgressAnimator, RenderReport,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// What happened while the site started.
#[derive(Debug, Clone)]
pub struct StartupReport {
    /// Documents loaded and failed.
    pub documents: LoadReport,
    /// Whether a dictionary was installed.
    pub dictionary_loaded: bool,
    /// Sections rendered and skipped.
    pub render: RenderReport,
    /// Progress bars animated.
    pub animation: AnimationReport,
    /// When the startup finished.
    pub finished_at: DateTime<Utc>,
}

/// Builds the language pair from its configuration.
#[must_use]
pub fn language_pair(config: &LanguageConfig) -> LanguagePair {
    let option = |c: &LanguageOptionConfig| LanguageOption::new(&c.code, &c.label, &c.flag);
    LanguagePair::new(option(&config.primary), option(&config.secondary))
}

/// Session store backing the language context: the configured file, or
/// process memory.
#[must_use]
pub fn session_store(config: &LanguageConfig) -> Arc<dyn SessionStore> {
    match &config.session_file {
        Some(path) => Arc::new(FileSessionStore::new(path)),
        None => Arc::new(MemorySessionStore::new()),
    }
}

/// The portfolio application.
pub struct PortfolioApp {
    config: Arc<Config>,
    source: Arc<dyn DocumentSource>,
    resolver: Arc<LanguageResolver>,
}

impl std::fmt::Debug for PortfolioApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioApp")
            .field("source", &self.source.describe())
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl PortfolioApp {
    /// Creates the application, reading documents from the configured base.
    pub fn new(config: Config) -> SiteResult<Self> {
        let source = source_for(&config.sources.base, config.sources.request_timeout())?;
        Ok(Self::with_source(config, source))
    }

    /// Creates the application over an explicit document source.
    #[must_use]
    pub fn with_source(config: Config, source: Arc<dyn DocumentSource>) -> Self {
        let context = Arc::new(LanguageContext::new(
            language_pair(&config.language),
            session_store(&config.language),
            config.language.storage_key.as_str(),
        ));
        let resolver = Arc::new(LanguageResolver::new(
            context,
            source.clone(),
            config.sources.translations.as_str(),
        ));
        Self {
            config: Arc::new(config),
            source,
            resolver,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Language resolver shared with the renderer.
    #[must_use]
    pub const fn resolver(&self) -> &Arc<LanguageResolver> {
        &self.resolver
    }

    /// Sets and persists the language by tag.
    pub fn set_language(&self, code: &str) -> SiteResult<Language> {
        let language = self.resolver.context().pair().parse(code)?;
        self.resolver.set(language);
        Ok(language)
    }

    /// Loads the dictionary and translates one key, for inspection.
    pub async fn translate(&self, key_path: &str, fallback: serde_json::Value) -> serde_json::Value {
        self.resolver.load_dictionary().await;
        self.resolver.translate(key_path, fallback)
    }

    /// Loads every document, then the dictionary, renders every section,
    /// labels and binds the language toggle and animates the skill bars.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn start(&self) -> (Site, StartupReport) {
        let (content, documents) =
            ContentStore::load_all(self.source.as_ref(), &self.config.sources.documents).await;
        if !documents.is_complete() {
            warn!(failed = ?documents.failed, "rendering without some documents");
        }
        let dictionary_loaded = self.resolver.load_dictionary().await;

        let translator: Arc<dyn Translate> = self.resolver.clone();
        let renderer = PortfolioRenderer::new(content, translator);
        let mut page = standard_page(self.resolver.context().current_code());

        let render = renderer.render_all(&mut page);
        renderer.update_language_toggle(&mut page, &self.resolver.toggle_label());
        renderer.bind_language_toggle(&mut page);

        let timing = &self.config.render.animation;
        let animator = ProgressAnimator::new(timing.initial_delay(), timing.stagger());
        let animation = animator.run(&mut page).await;

        let report = StartupReport {
            documents,
            dictionary_loaded,
            render,
            animation,
            finished_at: Utc::now(),
        };
        info!(
            sections = report.render.rendered.len(),
            bars = report.animation.len(),
            "site started"
        );

        let site = Site {
            page,
            renderer,
            resolver: self.resolver.clone(),
            animator,
        };
        (site, report)
    }
}

/// A started site: the rendered page and what drives it.
#[derive(Debug)]
pub struct Site {
    page: Page,
    renderer: PortfolioRenderer,
    resolver: Arc<LanguageResolver>,
    animator: ProgressAnimator,
}

impl Site {
    /// The rendered page.
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Current language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.resolver.get_current()
    }

    /// Tag of the current language.
    #[must_use]
    pub fn language_code(&self) -> &str {
        self.resolver.context().current_code()
    }

    /// Switches language and re-renders every section from the documents
    /// already in memory. The rebuilt skill bars are animated again.
    #[instrument(skip(self))]
    pub async fn toggle_language(&mut self) -> Language {
        let next = self.resolver.toggle();
        self.renderer.render_all(&mut self.page);
        self.renderer
            .update_language_toggle(&mut self.page, &self.resolver.toggle_label());
        let animation = self.animator.run(&mut self.page).await;
        info!(language = %self.language_code(), bars = animation.len(), "language switched");
        next
    }

    /// Routes a user event: modal actions are handled by the renderer and a
    /// toggle click switches language.
    pub async fn handle_event(&mut self, event: &Event) {
        for action in self.renderer.handle_event(&mut self.page, event) {
            if action == Action::ToggleLanguage {
                self.toggle_language().await;
            }
        }
    }

    /// The page serialized as HTML.
    #[must_use]
    pub fn html(&self) -> String {
        self.page.to_html()
    }

    /// Writes the page to `path`, creating missing parent directories.
    pub async fn write(&self, path: &Path) -> SiteResult<PathBuf> {
        let output_error = |source| SiteError::Output {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(output_error)?;
        }
        tokio::fs::write(path, self.html())
            .await
            .map_err(output_error)?;
        info!(path = %path.display(), "page written");
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::test_utils::{create_temp_dir, document_fixtures};

    fn app(config: Config) -> PortfolioApp {
        PortfolioApp::with_source(config, Arc::new(document_fixtures::sample_source()))
    }

    fn text(site: &Site, selector: &str) -> String {
        let doc = site.page().document();
        doc.text_content(doc.query(selector).unwrap())
    }

    fn bar_widths(site: &Site) -> Vec<Option<String>> {
        let doc = site.page().document();
        doc.query_all(".skill-progress")
            .into_iter()
            .map(|bar| doc.style_property(bar, "width"))
            .collect()
    }

    #[test]
    fn test_language_pair_from_config() {
        let pair = language_pair(&LanguageConfig::default());
        assert_eq!(pair, LanguagePair::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_renders_everything() {
        let (site, report) = app(Config::default()).start().await;

        assert!(report.documents.is_complete());
        assert!(report.dictionary_loaded);
        assert!(report.render.is_complete());
        assert_eq!(report.animation.len(), 3);
        assert_eq!(site.language(), Language::Primary);
        assert_eq!(text(&site, "#language-text"), "VN");
        assert_eq!(site.page().document().query_all(".project-card").len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_rerenders_without_refetching() {
        let app = app(Config::default());
        let (mut site, _) = app.start().await;

        let toggle = site.page().document().query("#language-toggle").unwrap();
        site.handle_event(&Event::click(toggle)).await;
        assert_eq!(site.language(), Language::Secondary);
        assert_eq!(text(&site, "#language-text"), "EN");
        assert_eq!(text(&site, ".hero-title .gradient-text"), "Game Developer");

        assert_eq!(site.toggle_language().await, Language::Primary);
        assert_eq!(text(&site, ".hero-title .gradient-text"), "Lập trình viên Game");
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_keeps_bar_widths() {
        let (mut site, _) = app(Config::default()).start().await;
        let before = bar_widths(&site);
        assert_eq!(
            before,
            vec![
                Some("90%".to_string()),
                Some("85%".to_string()),
                Some("80%".to_string())
            ]
        );

        site.toggle_language().await;
        assert_eq!(bar_widths(&site), before);

        site.toggle_language().await;
        assert_eq!(bar_widths(&site), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_file_restores_language() {
        let dir = create_temp_dir();
        let mut config = Config::default();
        config.language.session_file = Some(dir.path().join("session.json"));

        let first = app(config.clone());
        assert_eq!(first.set_language("EN").unwrap(), Language::Secondary);

        let (site, _) = app(config).start().await;
        assert_eq!(site.language(), Language::Secondary);
        let doc = site.page().document();
        assert_eq!(doc.attr(doc.query("html").unwrap(), "lang"), Some("en"));
    }

    #[test]
    fn test_unknown_language_tag() {
        let app = app(Config::default());
        assert!(matches!(
            app.set_language("fr"),
            Err(SiteError::Language(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_creates_directories() {
        let dir = create_temp_dir();
        let path = dir.path().join("dist").join("index.html");
        let (site, _) = app(Config::default()).start().await;

        assert_eq!(site.write(&path).await.unwrap(), path);
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Nguyễn Văn An"));
    }

    #[tokio::test]
    async fn test_translate_command() {
        let app = app(Config::default());
        app.set_language("en").unwrap();
        assert_eq!(
            app.translate("navigation.home", serde_json::json!("Trang chủ")).await,
            serde_json::json!("Home")
        );
    }
}
