use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fill value that is either a single color or a multi-stop gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdvancedColor {
    /// Single encoded color.
    Solid {
        /// Encoded color string.
        color: String,
    },
    /// Multi-stop gradient.
    Gradient {
        /// Gradient definition.
        gradient: Gradient,
    },
}

impl AdvancedColor {
    /// Try to read an advanced color from a raw property value.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    /// Convert back into a raw property value.
    pub fn to_value(&self) -> Value {
        // Keys are strings and non-finite floats become null, so this cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Gradient geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// Colors progress along `direction`.
    #[default]
    Linear,
    /// Colors progress outwards from the center.
    Radial,
}

/// Gradient definition as stored in item properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Geometry of the gradient.
    #[serde(rename = "type", default)]
    pub kind: GradientKind,
    /// Direction in degrees (linear gradients).
    #[serde(default)]
    pub direction: f64,
    /// Color stops in order.
    #[serde(default)]
    pub colors: Vec<GradientStop>,
    /// Any other keys present in the stored object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Single gradient stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Encoded color.
    pub c: String,
    /// Position, as a percentage along the gradient.
    pub p: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/color/advanced.rs"]
mod tests;
