//! Arena-backed document tree with selector queries and HTML output.
//!
//! Nodes are never freed: removing a subtree only detaches it from its
//! parent. Detached ids stay valid but are no longer reachable from the
//! root, which is what [`Document::is_attached`] reports.

use crate::node::Node;
use crate::selector::Selector;
use folio_common::{escape_attribute, escape_html};
use std::fmt::Write as _;
use tracing::warn;

/// Handle of a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum Kind {
    Root,
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Slot {
    kind: Kind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A mutable HTML document.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only its root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                kind: Kind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn slot(&self, id: NodeId) -> &Slot {
        &self.slots[id.0]
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Slot {
        &mut self.slots[id.0]
    }

    fn push(&mut self, kind: Kind) -> NodeId {
        self.slots.push(Slot {
            kind,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.slots.len() - 1)
    }

    /// Materializes a render tree as a detached subtree.
    pub fn create(&mut self, node: &Node) -> NodeId {
        match node {
            Node::Text(text) => self.push(Kind::Text(text.clone())),
            Node::Element(element) => {
                let id = self.push(Kind::Element {
                    tag: element.tag.clone(),
                    attrs: element.attrs.clone(),
                });
                for child in &element.children {
                    let child_id = self.create(child);
                    self.append_child(id, child_id);
                }
                id
            }
        }
    }

    /// Appends `child` to `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.slot_mut(child).parent = Some(parent);
        self.slot_mut(parent).children.push(child);
    }

    /// Materializes `node` and appends it to `parent`.
    pub fn append(&mut self, parent: NodeId, node: &Node) -> NodeId {
        let id = self.create(node);
        self.append_child(parent, id);
        id
    }

    /// Detaches `id` from its parent.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.slot_mut(id).parent.take() {
            self.slot_mut(parent).children.retain(|c| *c != id);
        }
    }

    /// Detaches every child of `id`.
    pub fn clear_children(&mut self, id: NodeId) {
        for child in std::mem::take(&mut self.slot_mut(id).children) {
            self.slot_mut(child).parent = None;
        }
    }

    /// Replaces the children of `id` with `nodes`.
    pub fn replace_children(&mut self, id: NodeId, nodes: &[Node]) {
        self.clear_children(id);
        for node in nodes {
            self.append(id, node);
        }
    }

    /// Replaces the children of `id` with one text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        let text_id = self.push(Kind::Text(text.to_string()));
        self.append_child(id, text_id);
    }

    /// Parent of `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).parent
    }

    /// Children of `id`.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slot(id).children
    }

    /// Element children of `id`.
    #[must_use]
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.tag(*c).is_some())
            .collect()
    }

    /// Whether `id` is reachable from the root.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root() {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Tag name of an element.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.slot(id).kind {
            Kind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Attribute value of an element.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.slot(id).kind {
            Kind::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Sets an attribute. Ignored on non-elements.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Kind::Element { attrs, .. } = &mut self.slot_mut(id).kind {
            if let Some(slot) = attrs.iter_mut().find(|(n, _)| n == name) {
                slot.1 = value.to_string();
            } else {
                attrs.push((name.to_string(), value.to_string()));
            }
        }
    }

    /// Removes an attribute.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Kind::Element { attrs, .. } = &mut self.slot_mut(id).kind {
            attrs.retain(|(n, _)| n != name);
        }
    }

    /// Sets one property in the inline `style` attribute, keeping the others.
    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) {
        let mut declarations: Vec<(String, String)> = self
            .attr(id, "style")
            .unwrap_or_default()
            .split(';')
            .filter_map(|decl| {
                let (name, value) = decl.split_once(':')?;
                Some((name.trim().to_string(), value.trim().to_string()))
            })
            .filter(|(name, _)| !name.is_empty())
            .collect();

        match declarations.iter_mut().find(|(name, _)| name == property) {
            Some(slot) => slot.1 = value.to_string(),
            None => declarations.push((property.to_string(), value.to_string())),
        }

        let style = declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attr(id, "style", &style);
    }

    /// One property of the inline `style` attribute.
    #[must_use]
    pub fn style_property(&self, id: NodeId, property: &str) -> Option<String> {
        self.attr(id, "style")?
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .find(|(name, _)| name.trim() == property)
            .map(|(_, value)| value.trim().to_string())
    }

    /// Whether the element's class list contains `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Concatenated text of `id` and its descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Kind::Text(text) = &self.slot(id).kind {
            out.push_str(text);
        }
        for child in self.children(id) {
            self.collect_text(*child, out);
        }
    }

    /// Elements below `scope` in document order, `scope` excluded.
    #[must_use]
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.tag(id).is_some() {
                out.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Whether element `id` matches `selector`.
    #[must_use]
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        if !self.matches_compound(id, selector.subject()) {
            return false;
        }
        let mut ancestor = self.parent(id);
        for compound in selector.ancestors() {
            loop {
                match ancestor {
                    Some(candidate) if self.matches_compound(candidate, compound) => {
                        ancestor = self.parent(candidate);
                        break;
                    }
                    Some(candidate) => ancestor = self.parent(candidate),
                    None => return false,
                }
            }
        }
        true
    }

    fn matches_compound(&self, id: NodeId, compound: &crate::selector::Compound) -> bool {
        let Some(tag) = self.tag(id) else {
            return false;
        };
        let classes: Vec<&str> = self
            .attr(id, "class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default();
        compound.matches(tag, self.attr(id, "id"), &classes)
    }

    /// Every element under `scope` matching `selector`, in document order.
    #[must_use]
    pub fn select_all_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.matches(*id, selector))
            .collect()
    }

    /// Every attached element matching `selector` text. Invalid selectors
    /// are logged and match nothing.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(selector) => self.select_all_within(self.root(), &selector),
            Err(e) => {
                warn!(error = %e, "ignoring invalid selector");
                Vec::new()
            }
        }
    }

    /// First attached element matching `selector` text.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// Nearest element from `id` upward (inclusive) matching `selector`.
    #[must_use]
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(candidate) = current {
            if self.matches(candidate, selector) {
                return Some(candidate);
            }
            current = self.parent(candidate);
        }
        None
    }

    /// Serializes the children of `id`.
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_html(*child, false, &mut out);
        }
        out
    }

    /// Serializes `id` itself.
    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, false, &mut out);
        out
    }

    /// Serializes the whole document with a doctype.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.inner_html(self.root()))
    }

    fn write_html(&self, id: NodeId, raw_text: bool, out: &mut String) {
        match &self.slot(id).kind {
            Kind::Root => {
                for child in self.children(id) {
                    self.write_html(*child, false, out);
                }
            }
            Kind::Text(text) if raw_text => out.push_str(text),
            Kind::Text(text) => out.push_str(&escape_html(text)),
            Kind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                let raw = RAW_TEXT_ELEMENTS.contains(&tag.as_str());
                for child in self.children(id) {
                    self.write_html(*child, raw, out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}
