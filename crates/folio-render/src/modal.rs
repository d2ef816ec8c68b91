//! Project detail modal.
//!
//! Opening shows the modal and attaches three close listeners as one group:
//! the close control, a click on the backdrop itself, and the Escape key.
//! Any of them closes the modal and drops the whole group, and opening first
//! drops whatever group is still attached, so listeners never pile up.

use crate::events::{Action, ListenerFilter, ListenerSpec};
use crate::labels;
use crate::models::{LocalizedItem, Project};
use crate::node::{el, icon, Element, Node};
use crate::patch::{Patch, Target};
use crate::sections::{item_text, project_field};
use folio_common::join_non_empty;
use folio_i18n::{Translate, TranslateExt};

/// Listener group of the close handlers.
pub const MODAL_LISTENER_GROUP: &str = "project-modal-close";

const MODAL: &str = "#project-modal";
const MODAL_TITLE: &str = "#modal-title";
const MODAL_BODY: &str = "#modal-body";
const MODAL_CLOSE: &str = "#modal-close";

/// Patches that fill and show the modal for `project`.
#[must_use]
pub fn open_project_modal(project: &Project, translator: &dyn Translate) -> Vec<Patch> {
    let title = project_field(translator, project, "title", project.title.as_deref())
        .unwrap_or_default();
    let subtitle = project_field(translator, project, "subtitle", project.subtitle.as_deref())
        .unwrap_or_default();

    vec![
        Patch::Unlisten {
            group: MODAL_LISTENER_GROUP.to_string(),
        },
        Patch::text(MODAL_TITLE, join_non_empty(&[title.as_str(), subtitle.as_str()], " - ")),
        Patch::children(MODAL_BODY, body(project, &title, translator)),
        Patch::style(MODAL, "display", "block"),
        Patch::listen(
            Target::first(MODAL_CLOSE),
            ListenerSpec::on_click(Action::CloseModal).in_group(MODAL_LISTENER_GROUP),
        ),
        Patch::listen(
            Target::first(MODAL),
            ListenerSpec::on_click(Action::CloseModal)
                .with_filter(ListenerFilter::TargetIsSelf)
                .in_group(MODAL_LISTENER_GROUP),
        ),
        Patch::listen(
            Target::Document,
            ListenerSpec::on_key("Escape", Action::CloseModal).in_group(MODAL_LISTENER_GROUP),
        ),
    ]
}

/// Patches that hide the modal and detach its close listeners.
#[must_use]
pub fn close_modal() -> Vec<Patch> {
    vec![
        Patch::style(MODAL, "display", "none"),
        Patch::Unlisten {
            group: MODAL_LISTENER_GROUP.to_string(),
        },
    ]
}

fn body(project: &Project, title: &str, translator: &dyn Translate) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(media) = media(project, title) {
        nodes.push(media.into());
    }

    let mut details = el("div").class("modal-details");

    let description =
        project_field(translator, project, "description", project.description.as_deref());
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        details = details.child(block(
            translator.translate_text("projects.modal.description", labels::MODAL_DESCRIPTION),
            el("p").text(description),
        ));
    }
    if let Some(status) = project_field(translator, project, "status", project.status.as_deref())
        .filter(|s| !s.is_empty())
    {
        details = details.child(block(
            translator.translate_text("projects.modal.status", labels::MODAL_STATUS),
            el("p").class("modal-status").text(status),
        ));
    }
    if let Some(role) = project_field(translator, project, "role", project.role.as_deref())
        .filter(|r| !r.is_empty())
    {
        details = details.child(block(
            translator.translate_text("projects.modal.role", labels::MODAL_ROLE),
            el("p").text(role),
        ));
    }
    if !project.technologies.is_empty() {
        details = details.child(block(
            translator.translate_text("projects.modal.technologies", labels::MODAL_TECHNOLOGIES),
            tags(project.technologies.iter().cloned()),
        ));
    }
    if !project.features.is_empty() {
        details = details.child(block(
            translator.translate_text("projects.modal.features", labels::MODAL_FEATURES),
            list(translator, "features", &project.features),
        ));
    }
    if !project.achievements.is_empty() {
        details = details.child(block(
            translator.translate_text("projects.modal.achievements", labels::MODAL_ACHIEVEMENTS),
            list(translator, "achievements", &project.achievements),
        ));
    }
    if !project.skills.is_empty() {
        details = details.child(block(
            translator.translate_text("projects.modal.skills", labels::MODAL_SKILLS),
            tags(project.skills.iter().map(|s| item_text(translator, "skills", s))),
        ));
    }

    let mut buttons = el("div").class("modal-buttons");
    if let Some(github) = &project.links.github {
        buttons = buttons.child(modal_button(
            github,
            "fab fa-github",
            translator.translate_text("projects.modal.buttons.github", labels::MODAL_GITHUB),
        ));
    }
    if let Some(demo) = &project.links.demo {
        buttons = buttons.child(modal_button(
            demo,
            "fas fa-play",
            translator.translate_text("projects.modal.buttons.demo", labels::MODAL_DEMO),
        ));
    }
    if !buttons.children.is_empty() {
        details = details.child(buttons);
    }

    nodes.push(details.into());
    nodes
}

fn media(project: &Project, title: &str) -> Option<Element> {
    if let Some(url) = project.media.as_ref().and_then(|m| m.video_url()) {
        return Some(
            el("div").class("modal-media").child(
                el("iframe")
                    .attr("src", url)
                    .attr("title", format!("{title} video"))
                    .attr("frameborder", "0")
                    .attr(
                        "allow",
                        "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    )
                    .attr("allowfullscreen", "true"),
            ),
        );
    }
    let src = project.image.as_deref()?;
    Some(
        el("img")
            .class("modal-media")
            .attr("src", src)
            .attr("alt", title),
    )
}

fn block(heading: String, content: Element) -> Element {
    el("div")
        .class("modal-section")
        .child(el("h4").text(heading))
        .child(content)
}

fn tags(values: impl Iterator<Item = String>) -> Element {
    el("div")
        .class("modal-tags")
        .children(values.map(|value| el("span").class("tech-tag").text(value)))
}

fn list(translator: &dyn Translate, name: &str, items: &[LocalizedItem]) -> Element {
    el("ul").children(
        items
            .iter()
            .map(|item| el("li").text(item_text(translator, name, item))),
    )
}

fn modal_button(href: &str, icon_class: &str, label: String) -> Element {
    el("a")
        .class("project-btn")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(icon(icon_class))
        .text(format!(" {label}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::models::ProjectsDocument;
    use crate::page::Page;
    use crate::sections::test_support::resolver;
    use crate::template::standard_page;
    use folio_common::test_utils::document_fixtures;
    use folio_i18n::Language;
    use serde_json::json;

    fn projects() -> Vec<Project> {
        serde_json::from_value::<ProjectsDocument>(document_fixtures::projects())
            .unwrap()
            .projects
    }

    fn is_open(page: &Page) -> bool {
        let doc = page.document();
        doc.style_property(doc.query(MODAL).unwrap(), "display").as_deref() == Some("block")
    }

    fn section_headings(page: &Page) -> Vec<String> {
        let doc = page.document();
        doc.query_all("#modal-body .modal-section h4")
            .into_iter()
            .map(|id| doc.text_content(id))
            .collect()
    }

    #[test]
    fn test_full_project_body() {
        let mut page = standard_page("vi");
        page.apply(open_project_modal(&projects()[0], &resolver(Language::Primary)));

        assert!(is_open(&page));
        let doc = page.document();
        assert_eq!(doc.text_content(doc.query(MODAL_TITLE).unwrap()), "A - Tu tiên");
        assert_eq!(
            section_headings(&page),
            vec![
                "Mô tả dự án",
                "Trạng thái",
                "Vai trò",
                "Công nghệ sử dụng",
                "Tính năng chính",
                "Thành quả đạt được",
                "Kỹ năng áp dụng"
            ]
        );
        assert_eq!(doc.query_all("#modal-body .modal-buttons .project-btn").len(), 2);
        assert!(doc.query("#modal-body iframe").is_none());
    }

    #[test]
    fn test_empty_blocks_are_omitted() {
        let mut page = standard_page("vi");
        page.apply(open_project_modal(&projects()[1], &resolver(Language::Primary)));

        assert_eq!(section_headings(&page), vec!["Mô tả dự án"]);
        let doc = page.document();
        assert_eq!(doc.text_content(doc.query(MODAL_TITLE).unwrap()), "B");
        assert!(doc.query("#modal-body img.modal-media").is_some());
    }

    #[test]
    fn test_secondary_language_items() {
        let mut page = standard_page("vi");
        page.apply(open_project_modal(&projects()[0], &resolver(Language::Secondary)));
        let doc = page.document();

        let items: Vec<String> = doc
            .query_all("#modal-body li")
            .into_iter()
            .map(|id| doc.text_content(id))
            .collect();
        assert_eq!(
            items,
            vec![
                "Cultivation system with 7 stats",
                "Bản đồ Tilemap",
                "Completed the event-driven architecture"
            ]
        );
        assert_eq!(section_headings(&page)[0], "Project description");
        assert!(doc
            .query_all("#modal-body .tech-tag")
            .into_iter()
            .any(|id| doc.text_content(id) == "Unity 2D (EN)"));
    }

    #[test]
    fn test_video_media() {
        let project: Project = serde_json::from_value(json!({
            "title": "V",
            "image": "poster.png",
            "media": { "type": "video", "url": "https://www.youtube.com/embed/x" }
        }))
        .unwrap();
        let mut page = standard_page("vi");
        page.apply(open_project_modal(&project, &resolver(Language::Primary)));
        let doc = page.document();
        let frame = doc.query("#modal-body iframe").unwrap();
        assert_eq!(doc.attr(frame, "title"), Some("V video"));
        assert!(doc.query("#modal-body img").is_none());
    }

    #[test]
    fn test_repeated_opens_do_not_accumulate_listeners() {
        let translator = resolver(Language::Primary);
        let mut page = standard_page("vi");
        for project in projects().iter().cycle().take(5) {
            page.apply(open_project_modal(project, &translator));
        }
        assert_eq!(page.listeners().count_group(MODAL_LISTENER_GROUP), 3);

        page.apply(close_modal());
        assert_eq!(page.listeners().count_group(MODAL_LISTENER_GROUP), 0);
        assert!(!is_open(&page));
    }

    #[test]
    fn test_each_close_trigger() {
        let translator = resolver(Language::Primary);
        let project = &projects()[0];
        let mut page = standard_page("vi");

        page.apply(open_project_modal(project, &translator));
        let close = page.document().query(MODAL_CLOSE).unwrap();
        assert_eq!(page.dispatch(&Event::click(close)), vec![Action::CloseModal]);

        let backdrop = page.document().query(MODAL).unwrap();
        assert_eq!(page.dispatch(&Event::click(backdrop)), vec![Action::CloseModal]);

        let inside = page.document().query("#modal-body h4").unwrap();
        assert!(page.dispatch(&Event::click(inside)).is_empty());

        assert_eq!(
            page.dispatch(&Event::key_down("Escape")),
            vec![Action::CloseModal]
        );

        page.apply(close_modal());
        assert!(page.dispatch(&Event::key_down("Escape")).is_empty());
        assert!(page.dispatch(&Event::click(close)).is_empty());
    }
}
