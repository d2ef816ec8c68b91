use crate::labels;
use crate::patch::{Patch, Target};
use crate::store::ContentStore;
use crate::traits::SectionRenderer;
use folio_i18n::{LanguageOption, Translate, TranslateExt};

const NAV_ITEMS: [(&str, &str); 5] = [
    ("navigation.home", labels::NAV_HOME),
    ("navigation.about", labels::NAV_ABOUT),
    ("navigation.projects", labels::NAV_PROJECTS),
    ("navigation.skills", labels::NAV_SKILLS),
    ("navigation.contact", labels::NAV_CONTACT),
];

/// Navigation link labels. Needs no document.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationSection;

impl SectionRenderer for NavigationSection {
    fn render(&self, _content: &ContentStore, translator: &dyn Translate) -> Option<Vec<Patch>> {
        let patches = NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(index, (key, label))| Patch::SetText {
                target: Target::nth(".nav-link", index),
                text: translator.translate_text(key, label),
            })
            .collect();
        Some(patches)
    }

    fn name(&self) -> &'static str {
        "navigation"
    }

    fn description(&self) -> &'static str {
        "Navigation link labels"
    }
}

/// Flag and label of the language toggle, plus the document language.
#[must_use]
pub fn language_toggle_patches(current: &LanguageOption) -> Vec<Patch> {
    vec![
        Patch::text("#language-flag", current.flag.as_str()),
        Patch::text("#language-text", current.label.as_str()),
        Patch::attr("html", "lang", current.code.as_str()),
    ]
}
