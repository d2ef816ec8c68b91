//! Page mutations produced by section builders.

use crate::events::ListenerSpec;
use crate::node::Node;

/// Which nodes a patch applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The document root; key listeners live here.
    Document,
    /// First element matching the selector.
    First(String),
    /// Every element matching the selector.
    All(String),
    /// The n-th element (zero-based) matching the selector.
    Nth(String, usize),
}

impl Target {
    /// First match of `selector`.
    pub fn first(selector: impl Into<String>) -> Self {
        Self::First(selector.into())
    }

    /// Every match of `selector`.
    pub fn all(selector: impl Into<String>) -> Self {
        Self::All(selector.into())
    }

    /// The `index`-th match of `selector`.
    pub fn nth(selector: impl Into<String>, index: usize) -> Self {
        Self::Nth(selector.into(), index)
    }
}

/// One mutation. Applying a patch whose target is absent does nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Replace the target's children with a text node.
    SetText { target: Target, text: String },
    /// Set an attribute.
    SetAttr {
        target: Target,
        name: String,
        value: String,
    },
    /// Set one inline style property.
    SetStyle {
        target: Target,
        property: String,
        value: String,
    },
    /// Replace the target's children.
    ReplaceChildren { target: Target, children: Vec<Node> },
    /// Detach the target from the page.
    Remove { target: Target },
    /// Append a `<style id=...>` to the head unless one with that id exists.
    EnsureStyle { id: String, css: String },
    /// Attach a listener.
    Listen {
        target: Target,
        listener: ListenerSpec,
    },
    /// Detach every listener of a group.
    Unlisten { group: String },
}

impl Patch {
    /// [`Patch::SetText`] on the first match of `selector`.
    pub fn text(selector: impl Into<String>, text: impl Into<String>) -> Self {
        Self::SetText {
            target: Target::first(selector),
            text: text.into(),
        }
    }

    /// [`Patch::SetAttr`] on the first match of `selector`.
    pub fn attr(
        selector: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::SetAttr {
            target: Target::first(selector),
            name: name.into(),
            value: value.into(),
        }
    }

    /// [`Patch::SetStyle`] on the first match of `selector`.
    pub fn style(
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::SetStyle {
            target: Target::first(selector),
            property: property.into(),
            value: value.into(),
        }
    }

    /// [`Patch::ReplaceChildren`] on the first match of `selector`.
    pub fn children(selector: impl Into<String>, children: Vec<Node>) -> Self {
        Self::ReplaceChildren {
            target: Target::first(selector),
            children,
        }
    }

    /// [`Patch::Remove`] on the first match of `selector`.
    pub fn remove(selector: impl Into<String>) -> Self {
        Self::Remove {
            target: Target::first(selector),
        }
    }

    /// [`Patch::Listen`] on `target`.
    #[must_use]
    pub const fn listen(target: Target, listener: ListenerSpec) -> Self {
        Self::Listen { target, listener }
    }
}
