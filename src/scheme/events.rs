use std::collections::HashMap;
use std::fmt;

use crate::foundation::core::{ItemId, SubscriptionId};

/// Notification published on the [`EventBus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemeEvent {
    /// Some property of the item changed and views should refresh it.
    ItemChanged(ItemId),
}

type Listener = Box<dyn FnMut(&SchemeEvent)>;

/// Synchronous publish surface for item notifications.
///
/// Listeners run in subscription order during `emit_*`. The bus also counts emissions per item
/// so callers without a listener can observe activity.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    changed: HashMap<ItemId, u64>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("changed", &self.changed)
            .finish()
    }
}

impl EventBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every event.
    pub fn subscribe(&mut self, listener: impl FnMut(&SchemeEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Announce that `item_id` changed.
    pub fn emit_item_changed(&mut self, item_id: &ItemId) {
        tracing::trace!(item = %item_id, "item changed");
        *self.changed.entry(item_id.clone()).or_insert(0) += 1;
        let event = SchemeEvent::ItemChanged(item_id.clone());
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Number of change notifications emitted for `item_id` so far.
    pub fn changed_count(&self, item_id: &ItemId) -> u64 {
        self.changed.get(item_id).copied().unwrap_or(0)
    }

    /// Number of change notifications emitted for all items.
    pub fn total_changes(&self) -> u64 {
        self.changed.values().sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheme/events.rs"]
mod tests;
