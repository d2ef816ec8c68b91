//! Section renderer trait definitions for the page sections.

use crate::patch::Patch;
use crate::store::ContentStore;
use folio_i18n::Translate;

/// Trait for section renderers that turn content into page patches.
///
/// Rendering is pure: the same store, language and dictionary always yield
/// the same patches.
pub trait SectionRenderer: Send + Sync {
    /// Builds the patches for this section, or `None` when the documents it
    /// needs are absent or malformed.
    fn render(&self, content: &ContentStore, translator: &dyn Translate) -> Option<Vec<Patch>>;

    /// Gets the name of this section.
    fn name(&self) -> &'static str;

    /// Gets the description of this section.
    fn description(&self) -> &'static str;
}
