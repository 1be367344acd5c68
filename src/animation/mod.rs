//! Easing, interpolation helpers and the frame-driven animation scheduler.

pub(crate) mod ease;
pub(crate) mod lerp;
pub(crate) mod registry;
pub(crate) mod tween;

pub use ease::Transition;
pub use lerp::Lerp;
pub use registry::{AnimationRegistry, FrameCtx, ValueAnimation};
pub use tween::{ColorTween, GradientTween, NumberTween};
