//! Translation dictionary: a JSON tree addressed by dotted key paths.

use serde_json::{Map, Value};

/// Translation table for the secondary language.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// An empty dictionary; every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps an already-selected translation tree.
    #[must_use]
    pub const fn new(root: Value) -> Self {
        Self { root }
    }

    /// Selects the subtree for `tag` from a translation document shaped like
    /// `{"en": {...}}`. Returns `None` when there is no object under `tag`.
    #[must_use]
    pub fn from_document(mut document: Value, tag: &str) -> Option<Self> {
        match document.get_mut(tag).map(Value::take) {
            Some(subtree @ Value::Object(_)) => Some(Self::new(subtree)),
            _ => None,
        }
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Walks `key_path` segment by segment.
    ///
    /// Objects are indexed by name, arrays by decimal position. The walk
    /// stops with `None` at the first absent or falsy segment.
    #[must_use]
    pub fn lookup(&self, key_path: &str) -> Option<&Value> {
        let segments: Vec<&str> = key_path.split('.').collect();
        descend(&self.root, &segments)
    }
}

fn descend<'a>(node: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    let Some((head, rest)) = segments.split_first() else {
        return Some(node);
    };

    let child = match node {
        Value::Object(map) => map.get(*head),
        Value::Array(items) => head.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }?;

    if is_truthy(child) {
        descend(child, rest)
    } else {
        None
    }
}

/// Truthiness of a JSON value: `null`, `false`, `0` and `""` are falsy;
/// every object and array, even empty, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Shallow merge: every field of `overlay` replaces the field of the same
/// name in `base`; fields only in `base` are kept.
#[must_use]
pub fn merge_shallow(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
