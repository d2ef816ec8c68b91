use super::localized;
use crate::models::{AboutImage, Button, Personal, Profile};
use crate::node::{el, icon, Node};
use crate::patch::{Patch, Target};
use crate::store::ContentStore;
use crate::traits::SectionRenderer;
use folio_common::DocumentKind;
use folio_i18n::{Translate, TranslateExt};

/// Logo, page title, hero, about, and footer, all from the profile document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileSection;

impl SectionRenderer for ProfileSection {
    fn render(&self, content: &ContentStore, translator: &dyn Translate) -> Option<Vec<Patch>> {
        let profile: Profile = content.typed(DocumentKind::Profile)?;
        let mut patches = Vec::new();

        if let Some(personal) = &profile.personal {
            identity(personal, &mut patches);
        }
        if let Some(hero) = &profile.hero {
            push_text(
                &mut patches,
                ".hero-title .gradient-text",
                localized(translator, "hero.title", hero.title.as_deref()),
            );
            push_text(
                &mut patches,
                ".hero-title .hero-subtitle",
                localized(translator, "hero.subtitle", hero.subtitle.as_deref()),
            );
            push_text(
                &mut patches,
                ".hero-description",
                localized(translator, "hero.description", hero.description.as_deref()),
            );
            if let Some(buttons) = &hero.buttons {
                let pairs = [
                    (".hero-buttons .btn-primary", "hero.buttons.primary", &buttons.primary),
                    (".hero-buttons .btn-secondary", "hero.buttons.secondary", &buttons.secondary),
                ];
                for (selector, key, button) in pairs {
                    if let Some(button) = button {
                        hero_button(selector, &translator.translate_as(key, button), &mut patches);
                    }
                }
            }
        }
        if let Some(about) = &profile.about {
            push_text(
                &mut patches,
                ".about-text h3",
                localized(translator, "about.title", about.title.as_deref()),
            );
            push_text(
                &mut patches,
                ".about-text p",
                localized(translator, "about.description", about.description.as_deref()),
            );
            for (index, stat) in about.stats.iter().enumerate() {
                if let Some(number) = stat.number_text() {
                    patches.push(Patch::SetText {
                        target: Target::nth(".stat h4", index),
                        text: number,
                    });
                }
                let key = format!("about.stats.{index}.label");
                if let Some(label) = localized(translator, &key, stat.label.as_deref()) {
                    patches.push(Patch::SetText {
                        target: Target::nth(".stat p", index),
                        text: label,
                    });
                }
            }
            if let Some(image) = &about.image {
                let name = profile.personal.as_ref().and_then(|p| p.name.as_deref());
                if let Some(children) = about_image(image, name) {
                    patches.push(Patch::children(".about-image .image-placeholder", children));
                }
            }
        }
        if let Some(footer) = &profile.footer {
            if let Some(copyright) =
                localized(translator, "footer.copyright", footer.copyright.as_deref())
            {
                patches.push(Patch::text(".footer-text p", format!("© {copyright}")));
            }
        }
        if let Some(personal) = &profile.personal {
            patches.push(Patch::children(".footer-social", social_links(personal)));
        }

        Some(patches)
    }

    fn name(&self) -> &'static str {
        "profile"
    }

    fn description(&self) -> &'static str {
        "Logo, page title, hero, about and footer"
    }
}

fn push_text(patches: &mut Vec<Patch>, selector: &str, text: Option<String>) {
    if let Some(text) = text {
        patches.push(Patch::text(selector, text));
    }
}

fn identity(personal: &Personal, patches: &mut Vec<Patch>) {
    let name = personal.name.as_deref().unwrap_or_default();
    let title = personal.title.as_deref().unwrap_or_default();
    if !name.is_empty() {
        patches.push(Patch::text(".nav-logo span", name));
    }
    patches.push(Patch::text("title", format!("{name} - {title} Portfolio")));
}

fn hero_button(selector: &str, button: &Button, patches: &mut Vec<Patch>) {
    let mut children: Vec<Node> = Vec::new();
    if let Some(class) = &button.icon {
        children.push(icon(class.as_str()).into());
    }
    if let Some(text) = &button.text {
        children.push(format!(" {text}").into());
    }
    patches.push(Patch::children(selector, children));
    if let Some(link) = &button.link {
        patches.push(Patch::attr(selector, "href", link.as_str()));
    }
}

fn about_image(image: &AboutImage, name: Option<&str>) -> Option<Vec<Node>> {
    if image.placeholder {
        let mut children: Vec<Node> = Vec::new();
        if let Some(class) = &image.icon {
            children.push(icon(class.as_str()).into());
        }
        children.push(el("p").text(image.text.clone().unwrap_or_default()).into());
        return Some(children);
    }
    let src = image.src.as_deref()?;
    let alt = image.alt.as_deref().or(name).unwrap_or_default();
    Some(vec![el("img")
        .attr("src", src)
        .attr("alt", alt)
        .attr(
            "style",
            "width: 100%; height: 100%; object-fit: cover; border-radius: 50%",
        )
        .into()])
}

fn social_links(personal: &Personal) -> Vec<Node> {
    [
        (&personal.github, "fab fa-github"),
        (&personal.linkedin, "fab fa-linkedin"),
        (&personal.facebook, "fab fa-facebook"),
        (&personal.zalo, "fab fa-facebook-messenger"),
    ]
    .into_iter()
    .filter_map(|(url, class)| {
        let url = url.as_deref().filter(|u| !u.is_empty())?;
        Some(Node::from(
            el("a")
                .class("social-link")
                .attr("href", url)
                .attr("target", "_blank")
                .child(icon(class)),
        ))
    })
    .collect()
}
