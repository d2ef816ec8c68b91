//! The two-language model: primary content language and its translation.

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};

/// Which side of the language pair is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// The language the content documents are written in.
    #[default]
    Primary,
    /// The language supplied by the translation dictionary.
    Secondary,
}

impl Language {
    /// The other side of the pair.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }

    /// Whether this is the primary language.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// Tag, label and flag of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    /// Language tag, e.g. `vi`.
    pub code: String,
    /// Toggle control label, e.g. `VN`.
    pub label: String,
    /// Toggle control flag.
    pub flag: String,
}

impl LanguageOption {
    /// Creates an option from its parts.
    pub fn new(code: impl Into<String>, label: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            flag: flag.into(),
        }
    }
}

/// The configured primary/secondary pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Primary language.
    pub primary: LanguageOption,
    /// Secondary language.
    pub secondary: LanguageOption,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            primary: LanguageOption::new("vi", "VN", "🇻🇳"),
            secondary: LanguageOption::new("en", "EN", "🇺🇸"),
        }
    }
}

impl LanguagePair {
    /// Creates a pair.
    #[must_use]
    pub const fn new(primary: LanguageOption, secondary: LanguageOption) -> Self {
        Self { primary, secondary }
    }

    /// The option describing `language`.
    #[must_use]
    pub const fn option(&self, language: Language) -> &LanguageOption {
        match language {
            Language::Primary => &self.primary,
            Language::Secondary => &self.secondary,
        }
    }

    /// The tag of `language`.
    #[must_use]
    pub fn code(&self, language: Language) -> &str {
        &self.option(language).code
    }

    /// Parses a tag into a side of the pair. Matching ignores ASCII case.
    pub fn parse(&self, code: &str) -> I18nResult<Language> {
        let code = code.trim();
        if code.eq_ignore_ascii_case(&self.primary.code) {
            Ok(Language::Primary)
        } else if code.eq_ignore_ascii_case(&self.secondary.code) {
            Ok(Language::Secondary)
        } else {
            Err(I18nError::UnknownLanguage(code.to_string()))
        }
    }
}
