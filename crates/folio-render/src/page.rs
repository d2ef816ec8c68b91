//! The page adapter: applies patches to a document and dispatches events.

use crate::dom::{Document, NodeId};
use crate::events::{Action, Event, ListenerRegistry};
use crate::node::el;
use crate::patch::{Patch, Target};
use std::ops::AddAssign;
use tracing::{debug, trace};

/// Counts from applying a batch of patches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Patches that found their target.
    pub applied: usize,
    /// Patches skipped because their target was missing.
    pub skipped: usize,
}

impl AddAssign for ApplyStats {
    fn add_assign(&mut self, other: Self) {
        self.applied += other.applied;
        self.skipped += other.skipped;
    }
}

/// A document plus the listeners attached to it.
#[derive(Debug, Clone, Default)]
pub struct Page {
    document: Document,
    listeners: ListenerRegistry,
}

impl Page {
    /// Wraps `document` with no listeners.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: ListenerRegistry::new(),
        }
    }

    /// The underlying document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access to the underlying document.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Attached listeners.
    #[must_use]
    pub const fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Nodes `target` currently resolves to.
    #[must_use]
    pub fn resolve(&self, target: &Target) -> Vec<NodeId> {
        match target {
            Target::Document => vec![self.document.root()],
            Target::First(selector) => self.document.query(selector).into_iter().collect(),
            Target::All(selector) => self.document.query_all(selector),
            Target::Nth(selector, index) => self
                .document
                .query_all(selector)
                .get(*index)
                .copied()
                .into_iter()
                .collect(),
        }
    }

    /// Applies `patches` in order.
    pub fn apply(&mut self, patches: impl IntoIterator<Item = Patch>) -> ApplyStats {
        let mut stats = ApplyStats::default();
        for patch in patches {
            if self.apply_one(patch) {
                stats.applied += 1;
            } else {
                stats.skipped += 1;
            }
        }
        stats
    }

    /// Applies one patch. Returns `false` when its target was missing.
    pub fn apply_one(&mut self, patch: Patch) -> bool {
        match patch {
            Patch::SetText { target, text } => self.each(&target, |doc, id| doc.set_text(id, &text)),
            Patch::SetAttr {
                target,
                name,
                value,
            } => self.each(&target, |doc, id| doc.set_attr(id, &name, &value)),
            Patch::SetStyle {
                target,
                property,
                value,
            } => self.each(&target, |doc, id| {
                doc.set_style_property(id, &property, &value);
            }),
            Patch::ReplaceChildren { target, children } => {
                let found = self.each(&target, |doc, id| doc.replace_children(id, &children));
                self.prune_listeners();
                found
            }
            Patch::Remove { target } => {
                let found = self.each(&target, Document::detach);
                self.prune_listeners();
                found
            }
            Patch::EnsureStyle { id, css } => self.ensure_style(&id, &css),
            Patch::Listen { target, listener } => {
                let nodes = self.resolve(&target);
                for node in &nodes {
                    self.listeners.add(*node, listener.clone());
                }
                self.found(&target, !nodes.is_empty())
            }
            Patch::Unlisten { group } => {
                let removed = self.listeners.remove_group(&group);
                trace!(group = %group, removed, "listeners removed");
                true
            }
        }
    }

    fn each(&mut self, target: &Target, mut f: impl FnMut(&mut Document, NodeId)) -> bool {
        let nodes = self.resolve(target);
        for node in &nodes {
            f(&mut self.document, *node);
        }
        self.found(target, !nodes.is_empty())
    }

    fn found(&self, target: &Target, found: bool) -> bool {
        if !found {
            debug!(target = ?target, "patch target missing, skipped");
        }
        found
    }

    fn ensure_style(&mut self, id: &str, css: &str) -> bool {
        if self.document.query(&format!("style#{id}")).is_some() {
            return true;
        }
        let Some(head) = self.document.query("head") else {
            return self.found(&Target::first("head"), false);
        };
        self.document
            .append(head, &el("style").id(id).text(css).into());
        true
    }

    fn prune_listeners(&mut self) {
        let document = &self.document;
        let pruned = self.listeners.retain_nodes(|node| document.is_attached(node));
        if pruned > 0 {
            trace!(pruned, "listeners on detached nodes dropped");
        }
    }

    /// Actions the listeners produce for `event`.
    #[must_use]
    pub fn dispatch(&self, event: &Event) -> Vec<Action> {
        self.listeners.dispatch(&self.document, event)
    }

    /// Serializes the page as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.document.to_html()
    }
}
