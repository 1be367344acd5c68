use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::core::ItemId;
use crate::foundation::error::{SchemeError, SchemeResult};
use crate::scheme::item::Item;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SchemeDef {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Document holding the item tree, indexed by item id.
#[derive(Debug, Clone, Default)]
pub struct SchemeContainer {
    def: SchemeDef,
    // Child-index path from the top-level list down to each item.
    index: HashMap<ItemId, Vec<usize>>,
}

impl SchemeContainer {
    /// Build a container from top-level items; ids must be unique across the whole tree.
    pub fn new(items: Vec<Item>) -> SchemeResult<Self> {
        Self::from_def(SchemeDef {
            items,
            extra: Map::new(),
        })
    }

    /// Parse a scheme from a JSON reader.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: Read>(r: R) -> SchemeResult<Self> {
        let def: SchemeDef = serde_json::from_reader(r)
            .map_err(|e| SchemeError::validation(format!("parse scheme JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a scheme from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SchemeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open scheme JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write the scheme as pretty-printed JSON.
    pub fn to_writer<W: Write>(&self, w: W) -> SchemeResult<()> {
        serde_json::to_writer_pretty(w, &self.def)
            .map_err(|e| SchemeError::serde(format!("write scheme JSON: {e}")))
    }

    /// The scheme as a JSON value.
    pub fn to_value(&self) -> SchemeResult<Value> {
        serde_json::to_value(&self.def)
            .map_err(|e| SchemeError::serde(format!("serialize scheme: {e}")))
    }

    fn from_def(def: SchemeDef) -> SchemeResult<Self> {
        let mut index = HashMap::new();
        let mut path = Vec::new();
        index_items(&def.items, &mut path, &mut index)?;
        tracing::debug!(items = index.len(), "indexed scheme");
        Ok(Self { def, index })
    }

    /// Top-level items.
    pub fn items(&self) -> &[Item] {
        &self.def.items
    }

    /// Number of items in the whole tree.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Return `true` if the scheme has no items.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Return `true` if an item with `id` exists anywhere in the tree.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// Find an item anywhere in the tree.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        let path = self.index.get(id)?;
        let (first, rest) = path.split_first()?;
        let mut item = self.def.items.get(*first)?;
        for idx in rest {
            item = item.child_items.get(*idx)?;
        }
        Some(item)
    }

    /// Find an item anywhere in the tree for mutation.
    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        let path = self.index.get(id)?;
        let (first, rest) = path.split_first()?;
        let mut item = self.def.items.get_mut(*first)?;
        for idx in rest {
            item = item.child_items.get_mut(*idx)?;
        }
        Some(item)
    }
}

fn index_items(
    items: &[Item],
    path: &mut Vec<usize>,
    index: &mut HashMap<ItemId, Vec<usize>>,
) -> SchemeResult<()> {
    for (i, item) in items.iter().enumerate() {
        path.push(i);
        if index.insert(item.id.clone(), path.clone()).is_some() {
            return Err(SchemeError::validation(format!(
                "duplicate item id \"{}\"",
                item.id
            )));
        }
        index_items(&item.child_items, path, index)?;
        path.pop();
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scheme/container.rs"]
mod tests;
