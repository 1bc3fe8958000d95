//! The board: authoritative partition of items across containers.
//!
//! Every item label belongs to exactly one container at every observable
//! instant. The single mutating operation is [`Board::move_item`]; it
//! validates both endpoints and the item's membership before touching any
//! sequence, so a failed move leaves the partition untouched and a
//! successful move is observed only in its completed form.

use crate::constants::{
    LEFT_KEY, LEFT_SEED_ITEMS, LEFT_TITLE, RIGHT_KEY, RIGHT_SEED_ITEMS, RIGHT_TITLE,
};
use crate::error::{BoardError, BoardResult};
use crate::notify::{ChangeEvent, ChangeHub, SubscriptionId};
use crate::settings::BoardConfig;
use crate::types::Container;

/// Ordered set of containers plus the change hub announcing mutations.
#[derive(Debug, Default)]
pub struct Board {
    containers: Vec<Container>,
    hub: ChangeHub,
}

impl Board {
    /// Build a board from validated configuration seeds.
    ///
    /// Fails if the configuration seeds duplicate container keys,
    /// duplicates an item label across the union of containers, or seeds
    /// fewer than two containers.
    pub fn from_config(config: &BoardConfig) -> BoardResult<Self> {
        config.validate()?;
        Ok(Self {
            containers: config.containers.clone(),
            hub: ChangeHub::new(),
        })
    }

    /// Board seeded with the default left/right containers.
    pub fn new_for_test() -> Self {
        Self {
            containers: vec![
                Container::new(LEFT_KEY, LEFT_TITLE).with_items(LEFT_SEED_ITEMS),
                Container::new(RIGHT_KEY, RIGHT_TITLE).with_items(RIGHT_SEED_ITEMS),
            ],
            hub: ChangeHub::new(),
        }
    }

    // ==================== Queries ====================

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container(&self, key: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.key == key)
    }

    /// Ordered item labels of `key`, or `UnknownContainer`.
    pub fn container_items(&self, key: &str) -> BoardResult<&[String]> {
        self.container(key)
            .map(|c| c.items.as_slice())
            .ok_or_else(|| BoardError::UnknownContainer { key: key.into() })
    }

    /// Returns true if `key` names a container holding `label`.
    pub fn contains_item(&self, key: &str, label: &str) -> bool {
        self.container(key).is_some_and(|c| c.contains(label))
    }

    /// Total item count across all containers.
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(|c| c.items.len()).sum()
    }

    // ==================== Mutation ====================

    /// Relocate `item` from `from` to the tail of `to`.
    ///
    /// `from == to` relocates the item to the tail of its own container;
    /// the item is never duplicated. On any error nothing is mutated and
    /// no observers fire.
    pub fn move_item(&mut self, item: &str, from: &str, to: &str) -> BoardResult<()> {
        // Validate everything before the first mutation.
        let from_idx = self
            .containers
            .iter()
            .position(|c| c.key == from)
            .ok_or_else(|| BoardError::UnknownContainer { key: from.into() })?;
        let to_idx = self
            .containers
            .iter()
            .position(|c| c.key == to)
            .ok_or_else(|| BoardError::UnknownContainer { key: to.into() })?;
        let item_idx =
            self.containers[from_idx]
                .position_of(item)
                .ok_or_else(|| BoardError::ItemNotFound {
                    item: item.into(),
                    container: from.into(),
                })?;

        // Remove first, then append: correct for from == to as well, and
        // the label passes through exactly once.
        let label = self.containers[from_idx].items.remove(item_idx);
        self.containers[to_idx].items.push(label);

        tracing::debug!(item, from, to, "item moved");

        let keys = if from == to {
            vec![from.to_string()]
        } else {
            vec![from.to_string(), to.to_string()]
        };
        self.hub.emit(&ChangeEvent::ContainersChanged { keys });
        Ok(())
    }

    // ==================== Observers ====================

    /// Subscribe to change events from this board.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ChangeEvent) + 'static,
    ) -> SubscriptionId {
        self.hub.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.hub.unsubscribe(id)
    }

    /// Announce a non-store event (a drag-session transition) to the same
    /// subscribers that observe store mutations.
    pub(crate) fn emit(&mut self, event: &ChangeEvent) {
        self.hub.emit(event);
    }
}
