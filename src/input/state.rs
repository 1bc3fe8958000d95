//! Drag session state machine - unified state for one in-progress gesture.
//!
//! A single explicit state machine replaces scattered boolean flags and
//! optional fields, making impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle           -> Dragging        (drag_start on an item)
//! Dragging       -> HoveringTarget  (pointer enters an accepting container)
//! HoveringTarget -> Dragging        (pointer leaves the hovered container)
//! Dragging | HoveringTarget -> Idle (drop or cancel - finalizes the gesture)
//! ```
//!
//! Exactly one session exists process-wide; the machine is reused across
//! gestures rather than destroyed. Events arriving outside their valid
//! source state are ignored by the handlers, never queued.

/// State of the one in-progress drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    /// No gesture active
    Idle,

    /// An item is being dragged, not currently over any container
    Dragging {
        /// Label of the dragged item
        item: String,
        /// Key of the container the item was picked up from
        origin: String,
    },

    /// The dragged item is over a container that would accept it
    HoveringTarget {
        /// Label of the dragged item
        item: String,
        /// Key of the container the item was picked up from
        origin: String,
        /// Key of the accepting container under the pointer
        target: String,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragState {
    /// Returns true if no gesture is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a gesture is active (dragging or hovering)
    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true if the drag is over an accepting container
    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::HoveringTarget { .. })
    }

    /// Label of the dragged item, if a gesture is active
    pub fn dragged_item(&self) -> Option<&str> {
        match self {
            Self::Dragging { item, .. } | Self::HoveringTarget { item, .. } => Some(item),
            Self::Idle => None,
        }
    }

    /// Origin container key, if a gesture is active
    pub fn origin(&self) -> Option<&str> {
        match self {
            Self::Dragging { origin, .. } | Self::HoveringTarget { origin, .. } => Some(origin),
            Self::Idle => None,
        }
    }

    /// Key of the accepting container under the pointer, if hovering
    pub fn hover_target(&self) -> Option<&str> {
        match self {
            Self::HoveringTarget { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Start a gesture: `Idle -> Dragging`
    pub fn start(&mut self, item: impl Into<String>, origin: impl Into<String>) {
        *self = Self::Dragging {
            item: item.into(),
            origin: origin.into(),
        };
    }

    /// Enter an accepting container: `Dragging -> HoveringTarget`.
    /// Also retargets an existing hover.
    pub fn enter_target(&mut self, target: impl Into<String>) {
        match std::mem::replace(self, Self::Idle) {
            Self::Dragging { item, origin } | Self::HoveringTarget { item, origin, .. } => {
                *self = Self::HoveringTarget {
                    item,
                    origin,
                    target: target.into(),
                };
            }
            Self::Idle => {}
        }
    }

    /// Leave the hovered container: `HoveringTarget -> Dragging`
    pub fn leave_target(&mut self) {
        match std::mem::replace(self, Self::Idle) {
            Self::HoveringTarget { item, origin, .. } | Self::Dragging { item, origin } => {
                *self = Self::Dragging { item, origin };
            }
            Self::Idle => {}
        }
    }

    /// Finalize the gesture: any state -> `Idle`
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
