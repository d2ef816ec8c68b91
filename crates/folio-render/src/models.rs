//! Typed views over the content documents.
//!
//! Every field is optional: a document only has to carry what the page
//! shows. A field of the wrong JSON type reads as absent, and a list entry
//! of the wrong shape is dropped, so one bad value never costs a section.
//! Numbers given as strings (`"85"`) are read as numbers.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `profile` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Identity and contact handles.
    #[serde(deserialize_with = "lenient::value")]
    pub personal: Option<Personal>,
    /// Hero banner.
    #[serde(deserialize_with = "lenient::value")]
    pub hero: Option<Hero>,
    /// About section.
    #[serde(deserialize_with = "lenient::value")]
    pub about: Option<About>,
    /// Footer.
    #[serde(deserialize_with = "lenient::value")]
    pub footer: Option<Footer>,
}

/// Identity and contact handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub facebook: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub zalo: Option<String>,
}

/// Hero banner copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub buttons: Option<HeroButtons>,
}

/// The two hero call-to-action buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroButtons {
    #[serde(deserialize_with = "lenient::value")]
    pub primary: Option<Button>,
    #[serde(deserialize_with = "lenient::value")]
    pub secondary: Option<Button>,
}

/// A link rendered as an icon plus label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "lenient::text")]
    pub link: Option<String>,
}

/// About section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub stats: Vec<Stat>,
    #[serde(deserialize_with = "lenient::value")]
    pub image: Option<AboutImage>,
}

/// One headline number with its label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    /// Shown verbatim; may be a number or a string such as `"3+"`.
    pub number: Option<Value>,
    #[serde(deserialize_with = "lenient::text")]
    pub label: Option<String>,
}

impl Stat {
    /// Display text of the number.
    #[must_use]
    pub fn number_text(&self) -> Option<String> {
        match self.number.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Portrait in the about section: a placeholder icon or an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutImage {
    #[serde(deserialize_with = "lenient::value")]
    pub placeholder: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub src: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub alt: Option<String>,
}

/// Footer copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    #[serde(deserialize_with = "lenient::text")]
    pub copyright: Option<String>,
}

/// `skills` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsDocument {
    #[serde(deserialize_with = "lenient::list")]
    pub categories: Vec<SkillCategory>,
}

/// A titled group of skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    /// Dictionary key under `skills.categories`.
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub skills: Vec<Skill>,
}

/// One skill with its proficiency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub percentage: Option<f64>,
}

impl Skill {
    /// Progress bar target width, e.g. `85%`.
    #[must_use]
    pub fn width(&self) -> String {
        let value = self.percentage.unwrap_or(0.0).clamp(0.0, 100.0);
        if value.fract() == 0.0 {
            format!("{value:.0}%")
        } else {
            format!("{value}%")
        }
    }
}

/// `projects` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsDocument {
    #[serde(deserialize_with = "lenient::list")]
    pub projects: Vec<Project>,
}

/// One portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Dictionary key under `projects.items`.
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub features: Vec<LocalizedItem>,
    #[serde(deserialize_with = "lenient::list")]
    pub achievements: Vec<LocalizedItem>,
    #[serde(deserialize_with = "lenient::list")]
    pub skills: Vec<LocalizedItem>,
    #[serde(deserialize_with = "lenient::value")]
    pub links: ProjectLinks,
    #[serde(deserialize_with = "lenient::value")]
    pub media: Option<Media>,
}

/// Outbound links of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    #[serde(deserialize_with = "lenient::text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub demo: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub external: Option<String>,
}

/// Embedded media shown at the top of the detail modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

impl Media {
    /// Video URL, when this is a video with a URL.
    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        match (self.kind.as_deref(), self.url.as_deref()) {
            (Some("video"), Some(url)) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}

/// A feature, achievement or skill entry of a project.
///
/// Plain strings are shown as written. Keyed entries are looked up under
/// `projects.<list>.<key>` in the secondary language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedItem {
    Keyed { key: String, text: String },
    Plain(String),
}

impl LocalizedItem {
    /// Dictionary key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Keyed { key, .. } => Some(key),
            Self::Plain(_) => None,
        }
    }

    /// Primary-language text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Keyed { text, .. } | Self::Plain(text) => text,
        }
    }
}

/// `contact` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDocument {
    #[serde(deserialize_with = "lenient::value")]
    pub info: Option<ContactInfo>,
}

/// Contact section copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

mod lenient {
    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;
    use tracing::debug;

    /// Any value that fits `T`, else `T::default()`.
    pub fn value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let raw = Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(T::default());
        }
        Ok(T::deserialize(&raw).unwrap_or_else(|e| {
            debug!(error = %e, "ignoring mistyped field");
            T::default()
        }))
    }

    /// Strings as is, numbers and booleans as their text.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Numbers, or strings holding one such as `"85"` or `"85%"`.
    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().trim_end_matches('%').trim_end().parse().ok(),
            _ => None,
        };
        Ok(number.filter(|n: &f64| n.is_finite()))
    }

    /// Entries that fit `T`; anything that is not an array is empty.
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let Value::Array(entries) = Value::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };
        Ok(entries
            .iter()
            .filter_map(|entry| match T::deserialize(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    debug!(error = %e, "dropping malformed list entry");
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::test_utils::document_fixtures;
    use serde_json::json;

    #[test]
    fn test_fixture_documents_parse() {
        let profile: Profile = serde_json::from_value(document_fixtures::profile()).unwrap();
        let personal = profile.personal.unwrap();
        assert_eq!(personal.name.as_deref(), Some("Nguyễn Văn An"));
        assert_eq!(profile.about.unwrap().stats[0].number_text().as_deref(), Some("3+"));

        let projects: ProjectsDocument =
            serde_json::from_value(document_fixtures::projects()).unwrap();
        let first = &projects.projects[0];
        assert_eq!(first.features[0].key(), Some("cultivation"));
        assert_eq!(first.features[1], LocalizedItem::Plain("Bản đồ Tilemap".to_string()));
        assert_eq!(projects.projects[1].links.demo, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let profile: Profile = serde_json::from_value(json!({})).unwrap();
        assert_eq!(profile, Profile::default());

        let skills: SkillsDocument = serde_json::from_value(json!({ "extra": 1 })).unwrap();
        assert!(skills.categories.is_empty());
    }

    #[test]
    fn test_wrong_document_shape_is_malformed() {
        let result: Result<ProjectsDocument, _> = serde_json::from_value(json!("none"));
        assert!(result.is_err());
    }

    #[test]
    fn test_mistyped_fields_degrade_alone() {
        let skills: SkillsDocument = serde_json::from_value(json!({
            "categories": [{
                "title": "Engines",
                "icon": 7,
                "skills": [
                    { "name": "A", "percentage": 90 },
                    { "name": "B", "percentage": "85" },
                    { "name": "C", "percentage": [1] },
                    "not a skill"
                ]
            }]
        }))
        .unwrap();
        let category = &skills.categories[0];
        assert_eq!(category.title.as_deref(), Some("Engines"));
        assert_eq!(category.icon.as_deref(), Some("7"));
        let widths: Vec<String> = category.skills.iter().map(Skill::width).collect();
        assert_eq!(widths, vec!["90%", "85%", "0%"]);

        let projects: ProjectsDocument = serde_json::from_value(json!({
            "projects": [{
                "title": "A",
                "technologies": null,
                "features": ["Combat", 3, { "key": "save", "text": "Lưu game" }],
                "links": "https://example.com",
                "media": { "type": "video", "url": false }
            }]
        }))
        .unwrap();
        let project = &projects.projects[0];
        assert_eq!(project.title.as_deref(), Some("A"));
        assert!(project.technologies.is_empty());
        assert_eq!(project.features.len(), 2);
        assert_eq!(project.features[1].key(), Some("save"));
        assert_eq!(project.links, ProjectLinks::default());
        assert_eq!(project.media.as_ref().and_then(Media::video_url), None);

        let empty: ProjectsDocument =
            serde_json::from_value(json!({ "projects": "none" })).unwrap();
        assert!(empty.projects.is_empty());
    }

    #[test]
    fn test_skill_width_and_stat_number() {
        let skill = Skill {
            percentage: Some(85.0),
            ..Skill::default()
        };
        assert_eq!(skill.width(), "85%");
        assert_eq!(
            Skill {
                percentage: Some(72.5),
                ..Skill::default()
            }
            .width(),
            "72.5%"
        );
        assert_eq!(Skill::default().width(), "0%");

        let stat = Stat {
            number: Some(json!(12)),
            label: None,
        };
        assert_eq!(stat.number_text().as_deref(), Some("12"));
    }

    #[test]
    fn test_media_video_url() {
        let media: Media =
            serde_json::from_value(json!({ "type": "video", "url": "https://v/1" })).unwrap();
        assert_eq!(media.video_url(), Some("https://v/1"));

        let image: Media = serde_json::from_value(json!({ "type": "image", "url": "x" })).unwrap();
        assert_eq!(image.video_url(), None);
    }
}
