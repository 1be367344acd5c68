use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::core::ItemId;

/// Top-level keys that belong to the item structure and are never written through a path.
const RESERVED_KEYS: [&str; 3] = ["id", "shape", "childItems"];

/// Diagram element: identity, shape kind and a tree of mutable properties.
///
/// Properties are addressed with dotted paths such as `opacity` or `shapeProps.fill`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id within the scheme.
    pub id: ItemId,
    /// Shape kind, used to look up the property schema.
    #[serde(default)]
    pub shape: String,
    /// Nested items.
    #[serde(
        rename = "childItems",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub child_items: Vec<Item>,
    /// Every other stored property.
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl Item {
    /// Create an item without properties.
    pub fn new(id: impl Into<ItemId>, shape: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shape: shape.into(),
            child_items: Vec::new(),
            props: Map::new(),
        }
    }

    /// Builder-style [`Item::set_property`]; invalid paths are ignored.
    pub fn with_property(mut self, path: &str, value: Value) -> Self {
        self.set_property(path, value);
        self
    }

    /// Builder-style child attachment.
    pub fn with_child(mut self, child: Item) -> Self {
        self.child_items.push(child);
        self
    }

    /// Read the value stored at `path`.
    pub fn get_property(&self, path: &str) -> Option<&Value> {
        let segments = split_path(path)?;
        let (first, rest) = segments.split_first()?;
        let mut current = self.props.get(*first)?;
        for segment in rest {
            current = current.as_object()?.get(*segment)?;
        }
        Some(current)
    }

    /// Mutable access to the value stored at `path`.
    pub fn get_property_mut(&mut self, path: &str) -> Option<&mut Value> {
        let segments = split_path(path)?;
        let (first, rest) = segments.split_first()?;
        let mut current = self.props.get_mut(*first)?;
        for segment in rest {
            current = current.as_object_mut()?.get_mut(*segment)?;
        }
        Some(current)
    }

    /// Store `value` at `path`, creating intermediate objects as needed.
    ///
    /// Intermediate values that are not objects are replaced. Returns `false` (and changes
    /// nothing) for empty segments or paths that start with a structural key.
    pub fn set_property(&mut self, path: &str, value: Value) -> bool {
        let Some(segments) = split_path(path) else {
            return false;
        };
        let Some((last, parents)) = segments.split_last() else {
            return false;
        };

        let mut target = &mut self.props;
        for segment in parents {
            let slot = target
                .entry((*segment).to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(next) = slot else {
                return false;
            };
            target = next;
        }
        target.insert((*last).to_owned(), value);
        true
    }
}

fn split_path(path: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    if RESERVED_KEYS.contains(&segments[0]) {
        return None;
    }
    Some(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/scheme/item.rs"]
mod tests;
