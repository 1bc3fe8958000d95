//! Drop-target acceptance policy.
//!
//! Decides whether a hovered container may accept the currently dragged
//! item, and the visual affordance a renderer should show for it. Pure
//! queries only: acceptance never mutates the board or the drag session.

use serde::{Deserialize, Serialize};

/// Configurable acceptance policy.
///
/// Every container accepts every item, with one configurable exception:
/// a drop back into the item's own origin container. The original
/// behavior (and the default here) allows it, relocating the item to the
/// container's tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropPolicy {
    /// Whether a container accepts an item whose origin it is.
    pub allow_same_container_drop: bool,
}

impl Default for DropPolicy {
    fn default() -> Self {
        Self {
            allow_same_container_drop: true,
        }
    }
}

impl DropPolicy {
    /// Policy that rejects drops back into the origin container.
    pub fn reject_same_container() -> Self {
        Self {
            allow_same_container_drop: false,
        }
    }

    /// May `target` accept the dragged item that originated in `origin`?
    ///
    /// Cheap check, called on every hover transition.
    pub fn can_accept(&self, _item: &str, origin: &str, target: &str) -> bool {
        self.allow_same_container_drop || origin != target
    }

    /// The affordance a renderer should show on `target` while the drag
    /// is active.
    pub fn affordance(&self, item: &str, origin: &str, target: &str) -> DropAffordance {
        if self.can_accept(item, origin, target) {
            DropAffordance::WouldAccept
        } else {
            DropAffordance::WouldReject
        }
    }
}

/// Visual accept/reject affordance for a container during a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropAffordance {
    /// No drag active; no affordance to show
    None,
    /// Dropping here would relocate the item
    WouldAccept,
    /// Dropping here is rejected by policy
    WouldReject,
}

impl DropAffordance {
    pub fn is_accepting(&self) -> bool {
        matches!(self, DropAffordance::WouldAccept)
    }
}
