//! The standard page skeleton every section writes into.

use crate::dom::Document;
use crate::labels;
use crate::node::{el, icon, Element};
use crate::page::Page;

/// Builds the skeleton page in the primary language with placeholder copy.
#[must_use]
pub fn standard_page(language_code: &str) -> Page {
    let mut document = Document::new();
    let root = document.root();
    let html = el("html")
        .attr("lang", language_code)
        .child(head())
        .child(body());
    document.append(root, &html.into());
    Page::new(document)
}

fn head() -> Element {
    el("head")
        .child(el("meta").attr("charset", "UTF-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(el("title").text("Portfolio"))
        .child(el("link").attr("rel", "stylesheet").attr("href", "styles.css"))
}

fn body() -> Element {
    el("body")
        .child(navbar())
        .child(hero())
        .child(about())
        .child(section("skills").child(el("div").class("skills-content")))
        .child(section("projects").child(el("div").class("projects-grid")))
        .child(contact())
        .child(footer())
        .child(modal())
}

fn section(id: &str) -> Element {
    el("section").id(id).class("section").child(
        el("h2").class("section-title"),
    )
}

fn navbar() -> Element {
    let links = [
        ("#home", labels::NAV_HOME),
        ("#about", labels::NAV_ABOUT),
        ("#projects", labels::NAV_PROJECTS),
        ("#skills", labels::NAV_SKILLS),
        ("#contact", labels::NAV_CONTACT),
    ];
    el("nav").class("navbar").child(
        el("div")
            .class("nav-container")
            .child(el("div").class("nav-logo").child(el("span")))
            .child(el("ul").class("nav-menu").children(links.into_iter().map(|(href, label)| {
                el("li").child(el("a").class("nav-link").attr("href", href).text(label))
            })))
            .child(
                el("button")
                    .id("language-toggle")
                    .class("language-toggle")
                    .child(el("span").id("language-flag").class("flag"))
                    .text(" ")
                    .child(el("span").id("language-text")),
            ),
    )
}

fn hero() -> Element {
    el("section").id("home").class("hero").child(
        el("div")
            .class("hero-content")
            .child(
                el("h1")
                    .class("hero-title")
                    .child(el("span").class("gradient-text"))
                    .child(el("br"))
                    .child(el("span").class("hero-subtitle")),
            )
            .child(el("p").class("hero-description"))
            .child(
                el("div")
                    .class("hero-buttons")
                    .child(el("a").class("btn btn-primary").attr("href", "#projects"))
                    .child(el("a").class("btn btn-secondary").attr("href", "#contact")),
            ),
    )
}

fn about() -> Element {
    let stat = || el("div").class("stat").child(el("h4")).child(el("p"));
    section("about").child(
        el("div")
            .class("about-content")
            .child(
                el("div")
                    .class("about-text")
                    .child(el("h3"))
                    .child(el("p"))
                    .child(
                        el("div")
                            .class("about-stats")
                            .child(stat())
                            .child(stat())
                            .child(stat()),
                    ),
            )
            .child(
                el("div")
                    .class("about-image")
                    .child(el("div").class("image-placeholder").child(icon("fas fa-user"))),
            ),
    )
}

fn contact() -> Element {
    section("contact").child(
        el("div")
            .class("contact-content")
            .child(
                el("div")
                    .class("contact-info")
                    .child(el("h3"))
                    .child(el("p"))
                    .child(el("div").class("contact-methods")),
            )
            .child(
                el("form")
                    .class("contact-form")
                    .child(el("input").attr("type", "text").attr("name", "name"))
                    .child(el("input").attr("type", "email").attr("name", "email"))
                    .child(el("textarea").attr("name", "message"))
                    .child(el("button").attr("type", "submit").class("btn btn-primary")),
            ),
    )
}

fn footer() -> Element {
    el("footer").class("footer").child(
        el("div")
            .class("footer-content")
            .child(el("div").class("footer-text").child(el("p")))
            .child(el("div").class("footer-social")),
    )
}

fn modal() -> Element {
    el("div")
        .id("project-modal")
        .class("modal")
        .attr("style", "display: none")
        .child(
            el("div")
                .class("modal-content")
                .child(
                    el("div")
                        .class("modal-header")
                        .child(el("h2").id("modal-title"))
                        .child(el("span").id("modal-close").class("modal-close").text("×")),
                )
                .child(el("div").id("modal-body").class("modal-body")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_has_every_mount_point() {
        let page = standard_page("vi");
        let doc = page.document();
        for selector in [
            "title",
            "head",
            ".nav-logo span",
            "#language-toggle",
            "#language-flag",
            "#language-text",
            ".hero-title .gradient-text",
            ".hero-title .hero-subtitle",
            ".hero-description",
            ".hero-buttons .btn-primary",
            ".hero-buttons .btn-secondary",
            ".about-text h3",
            ".about-text p",
            ".about-image .image-placeholder",
            "#skills .section-title",
            ".skills-content",
            "#projects .section-title",
            ".projects-grid",
            "#contact .section-title",
            ".contact-info h3",
            ".contact-info p",
            ".contact-methods",
            ".contact-content",
            ".contact-form",
            ".footer-text p",
            ".footer-social",
            "#project-modal",
            "#modal-title",
            "#modal-body",
            "#modal-close",
        ] {
            assert!(doc.query(selector).is_some(), "missing {selector}");
        }
        assert_eq!(doc.query_all(".nav-link").len(), 5);
        assert_eq!(doc.query_all(".stat").len(), 3);
    }

    #[test]
    fn test_first_about_paragraph_is_the_description() {
        let page = standard_page("vi");
        let doc = page.document();
        let description = doc.query(".about-text p").unwrap();
        assert_eq!(doc.parent(description), doc.query(".about-text"));
    }

    #[test]
    fn test_modal_starts_hidden() {
        let page = standard_page("vi");
        let doc = page.document();
        let modal = doc.query("#project-modal").unwrap();
        assert_eq!(doc.style_property(modal, "display").as_deref(), Some("none"));
    }
}
