use super::project_field;
use crate::events::{Action, ListenerFilter, ListenerSpec};
use crate::labels;
use crate::models::{Project, ProjectsDocument};
use crate::node::{el, icon, Element, Node};
use crate::patch::{Patch, Target};
use crate::selector::Selector;
use crate::store::ContentStore;
use crate::traits::SectionRenderer;
use folio_common::DocumentKind;
use folio_i18n::{Translate, TranslateExt};

/// Selector of the rendered project cards, in source order.
pub const CARD_SELECTOR: &str = ".projects-grid .project-card";
const OVERLAY_SELECTOR: &str = ".projects-grid .project-card .project-link";

/// Project cards. Clicking a card opens its detail modal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectsSection;

impl SectionRenderer for ProjectsSection {
    fn render(&self, content: &ContentStore, translator: &dyn Translate) -> Option<Vec<Patch>> {
        let document: ProjectsDocument = content.typed(DocumentKind::Projects)?;

        // (source index, card) for every project with a title
        let cards: Vec<(usize, Element)> = document
            .projects
            .iter()
            .enumerate()
            .filter_map(|(index, project)| Some((index, card(project, translator)?)))
            .collect();

        let mut patches = vec![
            Patch::text(
                "#projects .section-title",
                translator.translate_text("projects.title", labels::PROJECTS_TITLE),
            ),
            Patch::children(
                ".projects-grid",
                cards.iter().map(|(_, card)| Node::from(card.clone())).collect(),
            ),
        ];

        for (position, (index, _)) in cards.iter().enumerate() {
            patches.push(Patch::listen(
                Target::nth(CARD_SELECTOR, position),
                ListenerSpec::on_click(Action::OpenProject(*index))
                    .with_filter(ListenerFilter::Except(Selector::class("project-btn"))),
            ));
            patches.push(Patch::listen(
                Target::nth(OVERLAY_SELECTOR, position),
                ListenerSpec::on_click(Action::OpenProject(*index)),
            ));
        }

        Some(patches)
    }

    fn name(&self) -> &'static str {
        "projects"
    }

    fn description(&self) -> &'static str {
        "Project cards"
    }
}

fn card(project: &Project, translator: &dyn Translate) -> Option<Element> {
    let title = project_field(translator, project, "title", project.title.as_deref())?;
    let description =
        project_field(translator, project, "description", project.description.as_deref())
            .unwrap_or_default();

    let visual: Node = match (&project.image, &project.icon) {
        (Some(src), _) => el("img")
            .attr("src", src.as_str())
            .attr("alt", title.as_str())
            .attr("style", "width: 100%; height: 100%; object-fit: cover")
            .into(),
        (None, Some(class)) => icon(class.as_str()).into(),
        (None, None) => icon("fas fa-folder").into(),
    };

    let image = el("div")
        .class("project-image")
        .child(el("div").class("image-placeholder").child(visual))
        .child(
            el("div").class("project-overlay").child(
                el("a")
                    .class("project-link")
                    .attr("href", project.links.external.as_deref().unwrap_or("#"))
                    .child(icon("fas fa-external-link-alt")),
            ),
        );

    let tags = project
        .technologies
        .iter()
        .map(|tech| el("span").class("tech-tag").text(tech.as_str()));

    let mut links = el("div").class("project-links");
    if let Some(github) = &project.links.github {
        links = links.child(card_button(github, "fab fa-github", labels::CARD_CODE));
    }
    if let Some(demo) = &project.links.demo {
        links = links.child(card_button(demo, "fas fa-play", labels::CARD_DEMO));
    }

    Some(
        el("div").class("project-card").child(image).child(
            el("div")
                .class("project-content")
                .child(el("h3").text(title))
                .child(el("p").text(description))
                .child(el("div").class("project-tech").children(tags))
                .child(links),
        ),
    )
}

fn card_button(href: &str, icon_class: &str, label: &str) -> Element {
    el("a")
        .class("project-btn")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(icon(icon_class))
        .text(format!(" {label}"))
}
