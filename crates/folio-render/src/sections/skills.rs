use super::localized;
use crate::labels;
use crate::models::{Skill, SkillCategory, SkillsDocument};
use crate::node::{el, icon, Element, Node};
use crate::patch::Patch;
use crate::store::ContentStore;
use crate::traits::SectionRenderer;
use folio_common::DocumentKind;
use folio_i18n::{Translate, TranslateExt};

const PROGRESS_CSS: &str = "\
.skill-progress { height: 100%; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
border-radius: 10px; transition: width 1s ease-in-out; }
.skill-bar { width: 100%; height: 8px; background: #e0e0e0; border-radius: 10px; overflow: hidden; }";

/// Skill categories with one progress bar per skill.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillsSection;

impl SectionRenderer for SkillsSection {
    fn render(&self, content: &ContentStore, translator: &dyn Translate) -> Option<Vec<Patch>> {
        let skills: SkillsDocument = content.typed(DocumentKind::Skills)?;

        let categories: Vec<Node> = skills
            .categories
            .iter()
            .enumerate()
            .map(|(index, category)| Node::from(category_block(index, category, translator)))
            .collect();

        Some(vec![
            Patch::text(
                "#skills .section-title",
                translator.translate_text("skills.title", labels::SKILLS_TITLE),
            ),
            Patch::children(".skills-content", categories),
            Patch::EnsureStyle {
                id: "skill-progress-styles".to_string(),
                css: PROGRESS_CSS.to_string(),
            },
        ])
    }

    fn name(&self) -> &'static str {
        "skills"
    }

    fn description(&self) -> &'static str {
        "Skill categories and progress bars"
    }
}

/// Dictionary key of a category: its `id`, or a name chosen by position.
fn category_key(index: usize, category: &SkillCategory) -> &str {
    category.id.as_deref().unwrap_or_else(|| {
        let keys = labels::SKILL_CATEGORY_KEYS;
        keys[index.min(keys.len() - 1)]
    })
}

fn category_block(index: usize, category: &SkillCategory, translator: &dyn Translate) -> Element {
    let key = format!("skills.categories.{}", category_key(index, category));
    let title = localized(translator, &key, category.title.as_deref()).unwrap_or_default();

    let mut heading = el("h3");
    if let Some(class) = &category.icon {
        heading = heading.child(icon(class.as_str()));
    }
    heading = heading.text(format!(" {title}"));

    let items: Vec<Node> = category
        .skills
        .iter()
        .filter(|skill| skill.name.is_some())
        .map(|skill| Node::from(skill_item(skill)))
        .collect();

    el("div")
        .class("skills-category")
        .child(heading)
        .child(el("div").class("skills-grid").children(items))
}

fn skill_item(skill: &Skill) -> Element {
    let mut badge = el("div").class("skill-icon");
    if let Some(class) = &skill.icon {
        badge = badge.child(icon(class.as_str()));
    }
    el("div").class("skill-item").child(badge).child(
        el("div")
            .class("skill-info")
            .child(el("h4").text(skill.name.clone().unwrap_or_default()))
            .child(
                el("div").class("skill-bar").child(
                    el("div")
                        .class("skill-progress")
                        .attr("data-width", skill.width()),
                ),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{content, resolver};
    use crate::template::standard_page;
    use folio_i18n::Language;
    use serde_json::json;

    #[test]
    fn test_category_keys() {
        let unnamed = SkillCategory::default();
        assert_eq!(category_key(0, &unnamed), "gameDevelopment");
        assert_eq!(category_key(1, &unnamed), "toolsTechnologies");
        assert_eq!(category_key(2, &unnamed), "softSkills");
        assert_eq!(category_key(7, &unnamed), "softSkills");

        let named = SkillCategory {
            id: Some("languages".to_string()),
            ..SkillCategory::default()
        };
        assert_eq!(category_key(0, &named), "languages");
    }

    #[test]
    fn test_render_is_idempotent() {
        let store = content();
        let translator = resolver(Language::Secondary);
        let mut page = standard_page("vi");

        page.apply(SkillsSection.render(&store, &translator).unwrap());
        let first = page.document().inner_html(page.document().query(".skills-content").unwrap());
        page.apply(SkillsSection.render(&store, &translator).unwrap());
        let doc = page.document();
        let region = doc.query(".skills-content").unwrap();

        assert_eq!(doc.inner_html(region), first);
        assert_eq!(doc.element_children(region).len(), 2);
        assert_eq!(doc.query_all(".skill-item").len(), 3);
        assert_eq!(doc.query_all("style#skill-progress-styles").len(), 1);
    }

    #[test]
    fn test_titles_and_bars() {
        let mut page = standard_page("vi");
        page.apply(
            SkillsSection
                .render(&content(), &resolver(Language::Secondary))
                .unwrap(),
        );
        let doc = page.document();
        assert_eq!(
            doc.text_content(doc.query("#skills .section-title").unwrap()),
            "Technical skills"
        );
        let headings = doc.query_all(".skills-category h3");
        assert_eq!(doc.text_content(headings[0]), " Game Development");
        assert_eq!(doc.text_content(headings[1]), " Công cụ");

        let bars = doc.query_all(".skill-progress");
        let widths: Vec<_> = bars.iter().map(|b| doc.attr(*b, "data-width")).collect();
        assert_eq!(widths, vec![Some("90%"), Some("85%"), Some("80%")]);
    }

    #[test]
    fn test_skills_without_name_are_skipped() {
        let mut store = ContentStore::new();
        store.insert(
            "skills",
            json!({ "categories": [ { "title": "X", "skills": [ { "percentage": 10 }, { "name": "Y" } ] } ] }),
        );
        let mut page = standard_page("vi");
        page.apply(
            SkillsSection
                .render(&store, &resolver(Language::Primary))
                .unwrap(),
        );
        assert_eq!(page.document().query_all(".skill-item").len(), 1);
        assert_eq!(
            page.document()
                .text_content(page.document().query("#skills .section-title").unwrap()),
            "Kỹ năng kỹ thuật"
        );
    }

    #[test]
    fn test_mistyped_percentage_keeps_section() {
        let mut store = ContentStore::new();
        store.insert(
            "skills",
            json!({ "categories": [ { "title": "X", "skills": [
                { "name": "A", "percentage": 90 },
                { "name": "B", "percentage": "85" }
            ] } ] }),
        );
        let patches = SkillsSection.render(&store, &resolver(Language::Primary));
        let mut page = standard_page("vi");
        page.apply(patches.unwrap());

        let doc = page.document();
        let widths: Vec<_> = doc
            .query_all(".skill-progress")
            .into_iter()
            .map(|bar| doc.attr(bar, "data-width"))
            .collect();
        assert_eq!(widths, vec![Some("90%"), Some("85%")]);
    }
}
