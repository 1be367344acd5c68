use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SchemeError, SchemeResult};

/// Prefix of property paths that address shape-specific properties.
pub const SHAPE_PROPS_PREFIX: &str = "shapeProps.";

/// Declared value type of an item property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    /// Plain number.
    Number,
    /// Encoded color string.
    Color,
    /// Solid color or gradient object.
    AdvancedColor,
    /// Free text.
    Text,
    /// Boolean flag.
    Boolean,
    /// One of a fixed set of options.
    Choice,
    /// Image reference.
    Image,
    /// Anything this crate does not interpret.
    #[serde(other)]
    Other,
}

/// Static schema entry for one property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Human readable name.
    pub name: String,
    /// Declared value type.
    #[serde(rename = "type")]
    pub kind: PropertyType,
}

impl PropertyDescriptor {
    /// Build a descriptor.
    pub fn new(name: impl Into<String>, kind: PropertyType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

type PropertyTable = BTreeMap<String, PropertyDescriptor>;

const COMMON_PROPERTIES: &[(&str, &str, PropertyType)] = &[
    ("name", "Name", PropertyType::Text),
    ("visible", "Visible", PropertyType::Boolean),
    ("opacity", "Opacity", PropertyType::Number),
    ("selfOpacity", "Self Opacity", PropertyType::Number),
    ("area.x", "X", PropertyType::Number),
    ("area.y", "Y", PropertyType::Number),
    ("area.w", "Width", PropertyType::Number),
    ("area.h", "Height", PropertyType::Number),
    ("area.r", "Rotation", PropertyType::Number),
    ("area.px", "Pivot X", PropertyType::Number),
    ("area.py", "Pivot Y", PropertyType::Number),
    ("area.sx", "Scale X", PropertyType::Number),
    ("area.sy", "Scale Y", PropertyType::Number),
];

const BUILTIN_SHAPES: &[(&str, &[(&str, &str, PropertyType)])] = &[
    (
        "rect",
        &[
            ("fill", "Fill", PropertyType::AdvancedColor),
            ("strokeColor", "Stroke color", PropertyType::Color),
            ("strokeSize", "Stroke size", PropertyType::Number),
            ("strokePattern", "Stroke pattern", PropertyType::Choice),
            ("cornerRadius", "Corner radius", PropertyType::Number),
        ],
    ),
    (
        "ellipse",
        &[
            ("fill", "Fill", PropertyType::AdvancedColor),
            ("strokeColor", "Stroke color", PropertyType::Color),
            ("strokeSize", "Stroke size", PropertyType::Number),
            ("strokePattern", "Stroke pattern", PropertyType::Choice),
        ],
    ),
    (
        "curve",
        &[
            ("fill", "Fill", PropertyType::AdvancedColor),
            ("strokeColor", "Stroke color", PropertyType::Color),
            ("strokeSize", "Stroke size", PropertyType::Number),
            ("closed", "Closed", PropertyType::Boolean),
        ],
    ),
    (
        "image",
        &[
            ("image", "Image", PropertyType::Image),
            ("strokeColor", "Stroke color", PropertyType::Color),
            ("strokeSize", "Stroke size", PropertyType::Number),
        ],
    ),
];

fn table(entries: &[(&str, &str, PropertyType)]) -> PropertyTable {
    entries
        .iter()
        .map(|(key, name, kind)| ((*key).to_owned(), PropertyDescriptor::new(*name, *kind)))
        .collect()
}

/// Per-shape property schema, read-only once built.
#[derive(Clone, Debug)]
pub struct ShapeRegistry {
    common: PropertyTable,
    shapes: BTreeMap<String, PropertyTable>,
}

impl ShapeRegistry {
    /// Registry with the common item properties and no shapes.
    pub fn empty() -> Self {
        Self {
            common: table(COMMON_PROPERTIES),
            shapes: BTreeMap::new(),
        }
    }

    /// Registry with the built-in shapes (`rect`, `ellipse`, `curve`, `image`).
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (shape, props) in BUILTIN_SHAPES {
            registry.shapes.insert((*shape).to_owned(), table(props));
        }
        registry
    }

    /// Add or extend the schema of `shape`.
    pub fn register<I>(&mut self, shape: impl Into<String>, props: I)
    where
        I: IntoIterator<Item = (String, PropertyDescriptor)>,
    {
        self.shapes.entry(shape.into()).or_default().extend(props);
    }

    /// Merge shape schemas from JSON: `{ "<shape>": { "<prop>": {"name": .., "type": ..} } }`.
    pub fn extend_from_reader<R: Read>(&mut self, r: R) -> SchemeResult<()> {
        let parsed: BTreeMap<String, PropertyTable> = serde_json::from_reader(r)
            .map_err(|e| SchemeError::validation(format!("parse shape schema JSON: {e}")))?;
        for (shape, props) in parsed {
            self.register(shape, props);
        }
        Ok(())
    }

    /// Return `true` if `shape` has a registered schema.
    pub fn contains_shape(&self, shape: &str) -> bool {
        self.shapes.contains_key(shape)
    }

    /// Look up the descriptor of `path` for an item of kind `shape`.
    ///
    /// `shapeProps.*` paths resolve against the shape schema; everything else against the
    /// common item properties, which apply even to unknown shapes.
    pub fn property(&self, shape: &str, path: &str) -> Option<&PropertyDescriptor> {
        match path.strip_prefix(SHAPE_PROPS_PREFIX) {
            Some(name) => self.shapes.get(shape)?.get(name),
            None => self.common.get(path),
        }
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheme/shape.rs"]
mod tests;
