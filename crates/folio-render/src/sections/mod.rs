//! Page sections. Each one is a pure builder from content to patches.

mod contact;
mod navigation;
mod profile;
mod projects;
mod skills;

pub use contact::ContactSection;
pub use navigation::{language_toggle_patches, NavigationSection};
pub use profile::ProfileSection;
pub use projects::{ProjectsSection, CARD_SELECTOR};
pub use skills::SkillsSection;

use crate::models::{LocalizedItem, Project};
use crate::traits::SectionRenderer;
use folio_i18n::{Translate, TranslateExt};
use serde_json::Value;

/// Every section in render order.
#[must_use]
pub fn standard_sections() -> Vec<Box<dyn SectionRenderer>> {
    vec![
        Box::new(NavigationSection),
        Box::new(ProfileSection),
        Box::new(SkillsSection),
        Box::new(ProjectsSection),
        Box::new(ContactSection),
    ]
}

/// Translates an optional text. A missing fallback still picks up a
/// dictionary entry in the secondary language.
pub(crate) fn localized(
    translator: &dyn Translate,
    key_path: &str,
    fallback: Option<&str>,
) -> Option<String> {
    let original = fallback.map_or(Value::Null, |text| Value::String(text.to_string()));
    match translator.translate(key_path, original) {
        Value::String(text) => Some(text),
        Value::Null | Value::Object(_) | Value::Array(_) => fallback.map(str::to_string),
        other => Some(other.to_string()),
    }
}

/// Text of a project field, translated under `projects.items.<id>` when the
/// project has an id.
pub(crate) fn project_field(
    translator: &dyn Translate,
    project: &Project,
    field: &str,
    value: Option<&str>,
) -> Option<String> {
    match project.id.as_deref() {
        Some(id) => localized(translator, &format!("projects.items.{id}.{field}"), value),
        None => value.map(str::to_string),
    }
}

/// Text of a feature, achievement or skill entry of list `list`.
pub(crate) fn item_text(translator: &dyn Translate, list: &str, item: &LocalizedItem) -> String {
    match item.key() {
        Some(key) => translator.translate_text(&format!("projects.{list}.{key}"), item.text()),
        None => item.text().to_string(),
    }
}
