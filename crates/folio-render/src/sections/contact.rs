use super::localized;
use crate::labels;
use crate::models::{ContactDocument, Personal, Profile};
use crate::node::{el, icon, Node};
use crate::patch::Patch;
use crate::store::ContentStore;
use crate::traits::SectionRenderer;
use folio_common::{last_path_segment, DocumentKind};
use folio_i18n::{Translate, TranslateExt};

const METHODS_STYLE: &str =
    "display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; max-width: 800px; margin: 0 auto";
const CONTENT_STYLE: &str = "display: block; width: 100%; max-width: 800px; margin: 0 auto";
const RESPONSIVE_CSS: &str = "\
@media (max-width: 768px) {
  .contact-methods { grid-template-columns: 1fr !important; max-width: 100% !important; padding: 0 1rem !important; }
}";

/// Contact copy and contact methods derived from the profile's handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSection;

impl SectionRenderer for ContactSection {
    fn render(&self, content: &ContentStore, translator: &dyn Translate) -> Option<Vec<Patch>> {
        let contact: ContactDocument = content.typed(DocumentKind::Contact)?;
        let info = contact.info.unwrap_or_default();

        let mut patches = vec![Patch::text(
            "#contact .section-title",
            translator.translate_text("navigation.contact", labels::NAV_CONTACT),
        )];
        if let Some(title) = localized(translator, "contact.title", info.title.as_deref()) {
            patches.push(Patch::text(".contact-info h3", title));
        }
        if let Some(description) =
            localized(translator, "contact.description", info.description.as_deref())
        {
            patches.push(Patch::text(".contact-info p", description));
        }

        let personal = content
            .typed::<Profile>(DocumentKind::Profile)
            .and_then(|profile| profile.personal);
        if let Some(personal) = personal {
            patches.push(Patch::attr(".contact-methods", "style", METHODS_STYLE));
            patches.push(Patch::children(
                ".contact-methods",
                contact_methods(&personal, translator),
            ));
        }

        patches.push(Patch::attr(".contact-content", "style", CONTENT_STYLE));
        patches.push(Patch::remove(".contact-form"));
        patches.push(Patch::EnsureStyle {
            id: "contact-responsive-styles".to_string(),
            css: RESPONSIVE_CSS.to_string(),
        });
        Some(patches)
    }

    fn name(&self) -> &'static str {
        "contact"
    }

    fn description(&self) -> &'static str {
        "Contact copy and contact methods"
    }
}

struct Method {
    icon: &'static str,
    key: &'static str,
    label: &'static str,
    value: String,
    href: String,
    new_tab: bool,
}

fn methods(personal: &Personal) -> Vec<Method> {
    let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
    let handle = |url: &str, fallback: &str| {
        last_path_segment(url).map_or_else(|| fallback.to_string(), str::to_string)
    };
    let mut out = Vec::new();

    if let Some(email) = present(&personal.email) {
        out.push(Method {
            icon: "fas fa-envelope",
            key: "contact.methods.email",
            label: labels::CONTACT_EMAIL,
            href: format!("mailto:{email}"),
            value: email,
            new_tab: true,
        });
    }
    if let Some(url) = present(&personal.linkedin) {
        out.push(Method {
            icon: "fab fa-linkedin",
            key: "contact.methods.linkedin",
            label: labels::CONTACT_LINKEDIN,
            value: handle(&url, labels::LINKEDIN_PROFILE),
            href: url,
            new_tab: true,
        });
    }
    if let Some(url) = present(&personal.github) {
        out.push(Method {
            icon: "fab fa-github",
            key: "contact.methods.github",
            label: labels::CONTACT_GITHUB,
            value: format!("@{}", handle(&url, labels::GITHUB_PROFILE)),
            href: url,
            new_tab: true,
        });
    }
    if let Some(phone) = present(&personal.phone) {
        out.push(Method {
            icon: "fas fa-phone",
            key: "contact.methods.phone",
            label: labels::CONTACT_PHONE,
            href: format!("tel:{phone}"),
            value: phone,
            new_tab: false,
        });
    }
    if let Some(url) = present(&personal.zalo) {
        out.push(Method {
            icon: "fab fa-facebook-messenger",
            key: "contact.methods.zalo",
            label: labels::CONTACT_ZALO,
            value: present(&personal.phone).unwrap_or_else(|| labels::ZALO_CHAT.to_string()),
            href: url,
            new_tab: true,
        });
    }
    if let Some(url) = present(&personal.facebook) {
        out.push(Method {
            icon: "fab fa-facebook",
            key: "contact.methods.facebook",
            label: labels::CONTACT_FACEBOOK,
            value: handle(&url, labels::FACEBOOK_PROFILE),
            href: url,
            new_tab: true,
        });
    }
    out
}

fn contact_methods(personal: &Personal, translator: &dyn Translate) -> Vec<Node> {
    methods(personal)
        .into_iter()
        .map(|method| {
            let mut link = el("a")
                .class("contact-method")
                .attr("href", method.href);
            if method.new_tab {
                link = link.attr("target", "_blank");
            }
            Node::from(
                link.child(icon(method.icon)).child(
                    el("div")
                        .child(el("h4").text(translator.translate_text(method.key, method.label)))
                        .child(el("p").text(method.value)),
                ),
            )
        })
        .collect()
}
