// SPDX-License-Identifier: MPL-2.0
//! Ownership of the current player item and its observers.

use crate::application::port::{ItemId, Player};
use std::time::Duration;

/// Tracks which item is current and keeps at most one set of observers
/// attached to the player.
///
/// Replacing an item always detaches the previous item's observers before
/// the new item is loaded, so no callback for an old item can land after
/// the switch.
#[derive(Debug)]
pub struct ItemSlot {
    current: Option<ItemId>,
    next_id: ItemId,
}

impl ItemSlot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: None,
            next_id: ItemId::new(1),
        }
    }

    /// Detaches the current item, loads `source` under a fresh id, and
    /// attaches observers for it.
    pub fn replace<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
        source: &str,
        time_interval: Duration,
    ) -> ItemId {
        self.release(player);
        let id = self.next_id;
        self.next_id = id.next();
        player.load(source, id);
        player.attach_observers(id, time_interval);
        self.current = Some(id);
        id
    }

    /// Detaches the current item's observers, if any.
    pub fn release<P: Player + ?Sized>(&mut self, player: &mut P) {
        if let Some(old) = self.current.take() {
            player.detach_observers(old);
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<ItemId> {
        self.current
    }

    /// Whether an event tagged with `item` belongs to the current item.
    #[must_use]
    pub fn accepts(&self, item: ItemId) -> bool {
        self.current == Some(item)
    }
}

impl Default for ItemSlot {
    fn default() -> Self {
        Self::new()
    }
}
