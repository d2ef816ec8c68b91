//! Event listeners attached to page nodes.
//!
//! Listeners carry an [`Action`] instead of a callback; the renderer decides
//! what an action does. Dispatch walks from the event target towards the
//! root and stops at the first node whose listeners produced an action.

use crate::dom::{Document, NodeId};
use crate::selector::Selector;

/// Event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer click.
    Click,
    /// Key press delivered to the document.
    KeyDown,
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on a node.
    Click {
        /// Innermost node clicked.
        target: NodeId,
    },
    /// Key press, e.g. `Escape`.
    KeyDown {
        /// Key name.
        key: String,
    },
}

impl Event {
    /// Click on `target`.
    #[must_use]
    pub const fn click(target: NodeId) -> Self {
        Self::Click { target }
    }

    /// Key press of `key`.
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    /// Category of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::KeyDown { .. } => EventKind::KeyDown,
        }
    }
}

/// What a listener asks the renderer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the detail modal for the project at this index.
    OpenProject(usize),
    /// Close the detail modal.
    CloseModal,
    /// Switch language and re-render.
    ToggleLanguage,
}

/// Condition a listener checks before firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerFilter {
    /// Always fires.
    Any,
    /// Fires only when the event target is the listener's own node.
    TargetIsSelf,
    /// Fires unless the target is inside an element matching the selector.
    Except(Selector),
    /// Fires only for this key.
    Key(String),
}

/// Listener description, attached to a node by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerSpec {
    /// Event category listened for.
    pub event: EventKind,
    /// Action produced.
    pub action: Action,
    /// Firing condition.
    pub filter: ListenerFilter,
    /// Group name for bulk removal.
    pub group: Option<String>,
}

impl ListenerSpec {
    /// Click listener without conditions.
    #[must_use]
    pub const fn on_click(action: Action) -> Self {
        Self {
            event: EventKind::Click,
            action,
            filter: ListenerFilter::Any,
            group: None,
        }
    }

    /// Key listener for `key`.
    pub fn on_key(key: impl Into<String>, action: Action) -> Self {
        Self {
            event: EventKind::KeyDown,
            action,
            filter: ListenerFilter::Key(key.into()),
            group: None,
        }
    }

    /// Replaces the firing condition.
    #[must_use]
    pub fn with_filter(mut self, filter: ListenerFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Puts the listener in `group`.
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Handle returned when a listener is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Registered {
    id: ListenerId,
    node: NodeId,
    spec: ListenerSpec,
}

/// Every listener attached to a page.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<Registered>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `spec` to `node`.
    pub fn add(&mut self, node: NodeId, spec: ListenerSpec) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Registered { id, node, spec });
        id
    }

    /// Detaches one listener.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Detaches every listener in `group`, returning how many were removed.
    pub fn remove_group(&mut self, group: &str) -> usize {
        let before = self.listeners.len();
        self.listeners
            .retain(|l| l.spec.group.as_deref() != Some(group));
        before - self.listeners.len()
    }

    /// Keeps only listeners whose node satisfies `keep`.
    pub fn retain_nodes(&mut self, mut keep: impl FnMut(NodeId) -> bool) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| keep(l.node));
        before - self.listeners.len()
    }

    /// Total listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Listeners in `group`.
    #[must_use]
    pub fn count_group(&self, group: &str) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.spec.group.as_deref() == Some(group))
            .count()
    }

    /// Listeners attached to `node`.
    pub fn on(&self, node: NodeId) -> impl Iterator<Item = &ListenerSpec> {
        self.listeners
            .iter()
            .filter(move |l| l.node == node)
            .map(|l| &l.spec)
    }

    /// Actions triggered by `event`.
    #[must_use]
    pub fn dispatch(&self, document: &Document, event: &Event) -> Vec<Action> {
        let (start, target) = match event {
            Event::Click { target } => (*target, Some(*target)),
            Event::KeyDown { .. } => (document.root(), None),
        };

        let mut current = Some(start);
        while let Some(node) = current {
            let actions: Vec<Action> = self
                .on(node)
                .filter(|spec| spec.event == event.kind())
                .filter(|spec| passes(document, spec, node, target, event))
                .map(|spec| spec.action.clone())
                .collect();
            if !actions.is_empty() {
                return actions;
            }
            current = document.parent(node);
        }
        Vec::new()
    }
}

fn passes(
    document: &Document,
    spec: &ListenerSpec,
    node: NodeId,
    target: Option<NodeId>,
    event: &Event,
) -> bool {
    match &spec.filter {
        ListenerFilter::Any => true,
        ListenerFilter::TargetIsSelf => target == Some(node),
        ListenerFilter::Except(selector) => {
            target.map_or(true, |t| document.closest(t, selector).is_none())
        }
        ListenerFilter::Key(key) => matches!(event, Event::KeyDown { key: k } if k == key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::el;

    fn card_document() -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        doc.append(
            root,
            &el("div")
                .class("project-card")
                .child(el("h3").text("A"))
                .child(el("a").class("project-btn").child(el("i")))
                .into(),
        );
        doc
    }

    #[test]
    fn test_click_bubbles_to_card_but_not_from_buttons() {
        let doc = card_document();
        let card = doc.query(".project-card").unwrap();
        let mut registry = ListenerRegistry::new();
        registry.add(
            card,
            ListenerSpec::on_click(Action::OpenProject(0))
                .with_filter(ListenerFilter::Except(Selector::parse(".project-btn").unwrap())),
        );

        let title = doc.query("h3").unwrap();
        assert_eq!(
            registry.dispatch(&doc, &Event::click(title)),
            vec![Action::OpenProject(0)]
        );

        let button_icon = doc.query(".project-btn i").unwrap();
        assert!(registry.dispatch(&doc, &Event::click(button_icon)).is_empty());
    }

    #[test]
    fn test_target_is_self_and_keys() {
        let doc = card_document();
        let card = doc.query(".project-card").unwrap();
        let mut registry = ListenerRegistry::new();
        registry.add(
            card,
            ListenerSpec::on_click(Action::CloseModal).with_filter(ListenerFilter::TargetIsSelf),
        );
        registry.add(doc.root(), ListenerSpec::on_key("Escape", Action::CloseModal));

        assert!(registry
            .dispatch(&doc, &Event::click(doc.query("h3").unwrap()))
            .is_empty());
        assert_eq!(
            registry.dispatch(&doc, &Event::click(card)),
            vec![Action::CloseModal]
        );
        assert_eq!(
            registry.dispatch(&doc, &Event::key_down("Escape")),
            vec![Action::CloseModal]
        );
        assert!(registry.dispatch(&doc, &Event::key_down("Enter")).is_empty());
    }

    #[test]
    fn test_groups_and_pruning() {
        let doc = card_document();
        let card = doc.query(".project-card").unwrap();
        let mut registry = ListenerRegistry::new();
        let single = registry.add(card, ListenerSpec::on_click(Action::ToggleLanguage));
        registry.add(card, ListenerSpec::on_click(Action::CloseModal).in_group("modal"));
        registry.add(
            doc.root(),
            ListenerSpec::on_key("Escape", Action::CloseModal).in_group("modal"),
        );

        assert_eq!(registry.count_group("modal"), 2);
        assert_eq!(registry.remove_group("modal"), 2);
        assert!(registry.remove(single));
        assert!(!registry.remove(single));
        assert!(registry.is_empty());

        registry.add(card, ListenerSpec::on_click(Action::OpenProject(1)));
        assert_eq!(registry.retain_nodes(|node| node != card), 1);
        assert_eq!(registry.len(), 0);
    }
}
