//! Container enter/leave handling - acceptance-gated hover tracking.
//!
//! ## Performance Notes
//!
//! Enter/leave fire on every container boundary crossing during a drag,
//! potentially many times per second. The handlers are early-exit for
//! non-drag states and do a single policy check per event.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::Sortboard;
use crate::profile_scope;

impl Sortboard {
    /// Pointer moved over a container while dragging.
    ///
    /// Transitions to `HoveringTarget` only if the container exists and
    /// the policy accepts the dragged item there; a rejecting container
    /// leaves the session in `Dragging`, and the view layer paints the
    /// reject affordance from the policy instead.
    pub fn handle_container_enter(&mut self, key: &str) {
        profile_scope!("handle_container_enter");

        let (Some(item), Some(origin)) = (self.input.dragged_item(), self.input.origin()) else {
            return;
        };

        if self.board.container(key).is_none() {
            tracing::warn!(key, "container_enter for unknown container");
            return;
        }
        if !self.policy.can_accept(item, origin, key) {
            // Not an error: the pointer is simply over a non-target.
            if self.input.is_hovering() {
                self.input.leave_target();
                self.notify_drag_changed();
            }
            return;
        }

        if self.input.hover_target() != Some(key) {
            tracing::debug!(key, "hover target entered");
            self.input.enter_target(key);
            self.notify_drag_changed();
        }
    }

    /// Pointer left a container while dragging.
    ///
    /// Only a leave naming the current hover target transitions back to
    /// `Dragging`; stale leaves from reordered pointer streams are
    /// dropped.
    pub fn handle_container_leave(&mut self, key: &str) {
        if self.input.hover_target() != Some(key) {
            return;
        }
        tracing::debug!(key, "hover target left");
        self.input.leave_target();
        self.notify_drag_changed();
    }
}
