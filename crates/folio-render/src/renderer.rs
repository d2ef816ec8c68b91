//! Portfolio renderer orchestrating every section over one page.

use crate::events::{Action, Event, ListenerSpec};
use crate::modal::{close_modal, open_project_modal};
use crate::models::ProjectsDocument;
use crate::page::{ApplyStats, Page};
use crate::patch::{Patch, Target};
use crate::sections::{language_toggle_patches, standard_sections};
use crate::store::ContentStore;
use crate::traits::SectionRenderer;
use folio_common::DocumentKind;
use folio_i18n::{LanguageOption, Translate};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Listener group of the language toggle control.
pub const LANGUAGE_TOGGLE_GROUP: &str = "language-toggle";

/// Outcome of one full render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Sections that produced patches.
    pub rendered: Vec<&'static str>,
    /// Sections skipped for lack of content.
    pub skipped: Vec<&'static str>,
    /// Patch counts over all sections.
    pub stats: ApplyStats,
}

impl RenderReport {
    /// Whether every section rendered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Renders loaded content into a page and handles its interactions.
pub struct PortfolioRenderer {
    content: ContentStore,
    translator: Arc<dyn Translate>,
    sections: Vec<Box<dyn SectionRenderer>>,
}

impl fmt::Debug for PortfolioRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortfolioRenderer")
            .field("documents", &self.content.len())
            .field("language", &self.translator.language())
            .field(
                "sections",
                &self.sections.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PortfolioRenderer {
    /// Renderer with the standard sections.
    #[must_use]
    pub fn new(content: ContentStore, translator: Arc<dyn Translate>) -> Self {
        Self::with_sections(content, translator, standard_sections())
    }

    /// Renderer with a custom section list, rendered in order.
    #[must_use]
    pub fn with_sections(
        content: ContentStore,
        translator: Arc<dyn Translate>,
        sections: Vec<Box<dyn SectionRenderer>>,
    ) -> Self {
        Self {
            content,
            translator,
            sections,
        }
    }

    /// Loaded documents.
    #[must_use]
    pub const fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Renders every section into `page`. Sections whose documents are
    /// missing leave their region untouched.
    #[instrument(skip(self, page), fields(language = ?self.translator.language()))]
    pub fn render_all(&self, page: &mut Page) -> RenderReport {
        let mut report = RenderReport::default();
        for section in &self.sections {
            match section.render(&self.content, self.translator.as_ref()) {
                Some(patches) => {
                    let stats = page.apply(patches);
                    debug!(
                        section = section.name(),
                        applied = stats.applied,
                        skipped = stats.skipped,
                        "section rendered"
                    );
                    report.stats += stats;
                    report.rendered.push(section.name());
                }
                None => {
                    warn!(section = section.name(), "section skipped: content unavailable");
                    report.skipped.push(section.name());
                }
            }
        }
        info!(
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            "render pass complete"
        );
        report
    }

    /// Shows `current` on the language toggle control.
    pub fn update_language_toggle(&self, page: &mut Page, current: &LanguageOption) -> ApplyStats {
        page.apply(language_toggle_patches(current))
    }

    /// Attaches the toggle control's click listener, replacing any earlier one.
    pub fn bind_language_toggle(&self, page: &mut Page) -> bool {
        page.apply_one(Patch::Unlisten {
            group: LANGUAGE_TOGGLE_GROUP.to_string(),
        });
        page.apply_one(Patch::listen(
            Target::first("#language-toggle"),
            ListenerSpec::on_click(Action::ToggleLanguage).in_group(LANGUAGE_TOGGLE_GROUP),
        ))
    }

    /// Opens the detail modal for the project at `index` in the projects
    /// document. Returns `false` when there is no such project.
    pub fn open_project(&self, page: &mut Page, index: usize) -> bool {
        let Some(project) = self
            .content
            .typed::<ProjectsDocument>(DocumentKind::Projects)
            .and_then(|document| document.projects.into_iter().nth(index))
        else {
            warn!(index, "no project at index");
            return false;
        };
        page.apply(open_project_modal(&project, self.translator.as_ref()));
        debug!(index, "project modal opened");
        true
    }

    /// Hides the detail modal.
    pub fn close_modal(&self, page: &mut Page) {
        page.apply(close_modal());
        debug!("project modal closed");
    }

    /// Dispatches `event` and carries out the modal actions it triggers.
    /// Actions the renderer cannot perform on its own, such as switching
    /// language, are returned to the caller.
    pub fn handle_event(&self, page: &mut Page, event: &Event) -> Vec<Action> {
        let mut pending = Vec::new();
        for action in page.dispatch(event) {
            match action {
                Action::OpenProject(index) => {
                    self.open_project(page, index);
                }
                Action::CloseModal => self.close_modal(page),
                Action::ToggleLanguage => pending.push(action),
            }
        }
        pending
    }
}
