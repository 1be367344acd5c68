//! Color encoding and the advanced (solid or gradient) fill model.

pub(crate) mod advanced;
pub(crate) mod codec;

pub use advanced::{AdvancedColor, Gradient, GradientKind, GradientStop};
pub use codec::{Rgba, encode_color, parse_color};
