//! A small CSS selector subset: `tag`, `#id`, `.class`, compounds of those,
//! and the descendant combinator.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Selector text that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selector `{selector}`: {reason}")]
pub struct SelectorError {
    /// The offending selector.
    pub selector: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

/// One compound selector, e.g. `a.project-btn` or `#modal-close`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    /// Required tag name, lowercase.
    pub tag: Option<String>,
    /// Required id.
    pub id: Option<String>,
    /// Required classes.
    pub classes: Vec<String>,
}

impl Compound {
    /// Whether an element with these properties matches.
    #[must_use]
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[&str]) -> bool {
        self.tag.as_deref().map_or(true, |t| t.eq_ignore_ascii_case(tag))
            && self.id.as_deref().map_or(true, |i| id == Some(i))
            && self.classes.iter().all(|c| classes.contains(&c.as_str()))
    }
}

/// A chain of compounds joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    /// Parses selector text.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let error = |reason| SelectorError {
            selector: input.to_string(),
            reason,
        };

        let parts = input
            .split_whitespace()
            .map(|part| parse_compound(part).map_err(error))
            .collect::<Result<Vec<_>, _>>()?;
        if parts.is_empty() {
            return Err(error("empty selector"));
        }
        Ok(Self { parts })
    }

    /// Selector matching any element with class `name`.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            parts: vec![Compound {
                classes: vec![name.into()],
                ..Compound::default()
            }],
        }
    }

    /// Compounds from outermost to innermost.
    #[must_use]
    pub fn parts(&self) -> &[Compound] {
        &self.parts
    }

    /// The compound the matched element itself must satisfy.
    #[must_use]
    pub fn subject(&self) -> &Compound {
        // parse() never yields an empty chain
        &self.parts[self.parts.len() - 1]
    }

    /// Compounds its ancestors must satisfy, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Compound> {
        self.parts.iter().rev().skip(1)
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if let Some(tag) = &part.tag {
                f.write_str(tag)?;
            }
            if let Some(id) = &part.id {
                write!(f, "#{id}")?;
            }
            for class in &part.classes {
                write!(f, ".{class}")?;
            }
        }
        Ok(())
    }
}

fn parse_compound(text: &str) -> Result<Compound, &'static str> {
    let mut compound = Compound::default();
    let mut rest = text;

    let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
    if tag_end > 0 {
        let tag = &rest[..tag_end];
        if !is_name(tag) {
            return Err("bad tag name");
        }
        compound.tag = Some(tag.to_ascii_lowercase());
        rest = &rest[tag_end..];
    }

    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let name = &body[..end];
        if !is_name(name) {
            return Err("bad id or class name");
        }
        if marker == '#' {
            if compound.id.is_some() {
                return Err("more than one id");
            }
            compound.id = Some(name.to_string());
        } else {
            compound.classes.push(name.to_string());
        }
        rest = &body[end..];
    }

    Ok(compound)
}

fn is_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
