//! Common type definitions shared by the renderer and the application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The content documents the portfolio is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Personal details, hero, about and footer.
    Profile,
    /// Skill categories.
    Skills,
    /// Project list.
    Projects,
    /// Contact section copy.
    Contact,
}

impl DocumentKind {
    /// Store key of this document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Conventional location relative to the source base.
    #[must_use]
    pub fn default_path(self) -> String {
        format!("data/{}.json", self.key())
    }

    /// Every document kind, in render order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Profile, Self::Skills, Self::Projects, Self::Contact]
    }

    /// Parses a store key back into a kind.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
