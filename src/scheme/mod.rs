//! Document model: items, the scheme container, shape schemas and the item event bus.

pub(crate) mod container;
pub(crate) mod events;
pub(crate) mod item;
pub(crate) mod shape;

pub use container::SchemeContainer;
pub use events::{EventBus, SchemeEvent};
pub use item::Item;
pub use shape::{PropertyDescriptor, PropertyType, SHAPE_PROPS_PREFIX, ShapeRegistry};
