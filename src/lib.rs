//! Behavioural core of an interactive scheme (diagram) editor.
//!
//! Items in a scheme react to events by running named *event functions*. This crate provides:
//!
//! - the function registry ([`FunctionRegistry`], [`FunctionRef`]) and the `Set` function, which
//!   assigns or animates one item property (numbers, colors, solid fills and gradients)
//! - the collaborators those functions run against: [`SchemeContainer`], [`ShapeRegistry`],
//!   [`EventBus`] and the frame-driven [`AnimationRegistry`]
//! - the server configuration loader ([`ServerConfig`])
//!
//! Event functions never fail. Malformed input degrades to a no-op or an immediate assignment,
//! and the completion callback still runs exactly once.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing, interpolation and the animation scheduler.
pub mod animation;
/// Color codec and advanced fills.
pub mod color;
pub mod config;
/// Event function registry and implementations.
pub mod functions;
/// Items, documents, shape schemas and notifications.
pub mod scheme;

pub use crate::foundation::core::{AnimationId, ItemId, SubscriptionId};
pub use crate::foundation::error::{SchemeError, SchemeResult};

pub use crate::animation::{AnimationRegistry, FrameCtx, Transition, ValueAnimation};
pub use crate::color::{AdvancedColor, Gradient, GradientKind, GradientStop, Rgba};
pub use crate::config::ServerConfig;
pub use crate::functions::{
    Category, ExecCtx, FunctionArgs, FunctionDescriptor, FunctionRef, FunctionRegistry,
    ResultCallback,
};
pub use crate::scheme::{
    EventBus, Item, PropertyDescriptor, PropertyType, SchemeContainer, SchemeEvent, ShapeRegistry,
};
