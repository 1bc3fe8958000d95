//! Drop and cancel handling - finalize the gesture, feed the board.

use crate::app::Sortboard;
use crate::notifications::Notice;
use crate::profile_scope;

impl Sortboard {
    /// Pointer-up over a container: complete the gesture.
    ///
    /// The target is re-evaluated at drop time; a drop on a container the
    /// policy rejects (or one the board does not know) finalizes the
    /// gesture with no mutation, exactly like a cancel. Either way the
    /// session ends `Idle`.
    pub fn handle_drop(&mut self, key: &str) {
        profile_scope!("handle_drop");

        let (Some(item), Some(origin)) = (
            self.input.dragged_item().map(str::to_owned),
            self.input.origin().map(str::to_owned),
        ) else {
            tracing::debug!(key, "drop ignored: no gesture active");
            return;
        };

        if !self.policy.can_accept(&item, &origin, key) {
            tracing::debug!(item = %item, key, "drop on rejecting container; no move");
            self.finish_gesture();
            return;
        }

        match self.board.move_item(&item, &origin, key) {
            Ok(()) => {}
            Err(e) => {
                // Recovered locally: the board is unchanged and the UI
                // simply does not reflect a move.
                tracing::warn!(item = %item, origin = %origin, key, "move failed: {e}");
                self.notices.push(Notice::error(format!("Move failed: {e}")));
            }
        }
        self.finish_gesture();
    }

    /// Drag released outside any container, or interrupted: end the
    /// gesture with no mutation.
    pub fn handle_cancel(&mut self) {
        if self.input.is_idle() {
            return;
        }
        tracing::debug!(item = ?self.input.dragged_item(), "drag cancelled");
        self.finish_gesture();
    }

    fn finish_gesture(&mut self) {
        self.input.reset();
        self.notify_drag_changed();
    }
}
