use std::fmt;

use crate::animation::ease::Transition;
use crate::foundation::core::{AnimationId, ItemId};
use crate::scheme::{EventBus, SchemeContainer};

/// State an animation frame may touch.
pub struct FrameCtx<'a> {
    /// Document whose items are animated.
    pub container: &'a mut SchemeContainer,
    /// Bus receiving change notifications.
    pub events: &'a mut EventBus,
}

type UpdateFn = Box<dyn FnMut(f64, &mut FrameCtx<'_>)>;
type DestroyFn = Box<dyn FnOnce(&mut FrameCtx<'_>)>;

/// Time-driven animation: eased progress is fed to `update` every frame, and `destroy` runs once
/// when the animation completes or is stopped.
pub struct ValueAnimation {
    duration_millis: f64,
    transition: Transition,
    elapsed_millis: f64,
    update: UpdateFn,
    destroy: Option<DestroyFn>,
}

impl fmt::Debug for ValueAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueAnimation")
            .field("duration_millis", &self.duration_millis)
            .field("transition", &self.transition)
            .field("elapsed_millis", &self.elapsed_millis)
            .finish_non_exhaustive()
    }
}

impl ValueAnimation {
    /// Animation lasting `duration_millis` with the given easing.
    pub fn new(
        duration_millis: f64,
        transition: Transition,
        update: impl FnMut(f64, &mut FrameCtx<'_>) + 'static,
    ) -> Self {
        Self {
            duration_millis,
            transition,
            elapsed_millis: 0.0,
            update: Box::new(update),
            destroy: None,
        }
    }

    /// Attach the hook run once when the animation ends.
    pub fn on_destroy(mut self, destroy: impl FnOnce(&mut FrameCtx<'_>) + 'static) -> Self {
        self.destroy = Some(Box::new(destroy));
        self
    }

    /// Advance by `dt_millis`, run one update and report whether the animation has finished.
    fn advance(&mut self, dt_millis: f64, ctx: &mut FrameCtx<'_>) -> bool {
        self.elapsed_millis += dt_millis.max(0.0);
        let progress = if self.duration_millis > 0.0 {
            (self.elapsed_millis / self.duration_millis).min(1.0)
        } else {
            1.0
        };
        (self.update)(self.transition.apply(progress), ctx);
        progress >= 1.0
    }

    fn finish(mut self, ctx: &mut FrameCtx<'_>) {
        if let Some(destroy) = self.destroy.take() {
            destroy(ctx);
        }
    }
}

#[derive(Debug)]
struct Entry {
    id: AnimationId,
    item_id: ItemId,
    animation: ValueAnimation,
}

/// Cooperative, single-threaded scheduler for item animations.
///
/// Nothing happens between calls to [`AnimationRegistry::tick`]; the caller owns the clock.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    next_id: u64,
    active: Vec<Entry>,
}

impl AnimationRegistry {
    /// Create an idle registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit an animation for `item_id`. Existing animations of the item keep running.
    pub fn play(&mut self, animation: ValueAnimation, item_id: ItemId) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        tracing::debug!(animation = id.0, item = %item_id, "animation started");
        self.active.push(Entry {
            id,
            item_id,
            animation,
        });
        id
    }

    /// Advance every active animation by `dt_millis` and destroy the finished ones.
    ///
    /// Returns the number of animations that finished during this tick.
    #[tracing::instrument(level = "trace", skip(self, ctx))]
    pub fn tick(&mut self, dt_millis: f64, ctx: &mut FrameCtx<'_>) -> usize {
        let mut finished = Vec::new();
        for (idx, entry) in self.active.iter_mut().enumerate() {
            if entry.animation.advance(dt_millis, ctx) {
                finished.push(idx);
            }
        }

        let mut done = Vec::with_capacity(finished.len());
        for idx in finished.into_iter().rev() {
            done.push(self.active.remove(idx));
        }
        let count = done.len();
        for entry in done.into_iter().rev() {
            tracing::debug!(animation = entry.id.0, item = %entry.item_id, "animation finished");
            entry.animation.finish(ctx);
        }
        count
    }

    /// Stop every animation of `item_id` without a final frame. Their destroy hooks still run.
    pub fn stop_item(&mut self, item_id: &ItemId, ctx: &mut FrameCtx<'_>) -> usize {
        let (stopped, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|e| &e.item_id == item_id);
        self.active = kept;
        Self::finish_all(stopped, ctx)
    }

    /// Stop every animation. Destroy hooks still run.
    pub fn stop_all(&mut self, ctx: &mut FrameCtx<'_>) -> usize {
        let stopped = std::mem::take(&mut self.active);
        Self::finish_all(stopped, ctx)
    }

    fn finish_all(entries: Vec<Entry>, ctx: &mut FrameCtx<'_>) -> usize {
        let count = entries.len();
        for entry in entries {
            tracing::debug!(animation = entry.id.0, item = %entry.item_id, "animation stopped");
            entry.animation.finish(ctx);
        }
        count
    }

    /// Return `true` when no animation is running.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of running animations.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Return `true` if `id` is still running.
    pub fn is_active(&self, id: AnimationId) -> bool {
        self.active.iter().any(|e| e.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/registry.rs"]
mod tests;
