//! Gesture start handling - pick-up validation and session creation.

use crate::app::Sortboard;
use crate::error::BoardError;
use crate::notifications::Notice;
use crate::profile_scope;

impl Sortboard {
    /// Pointer-down on a rendered item: start a drag gesture.
    ///
    /// Only one gesture may be active process-wide. A `drag_start` while
    /// another gesture is in progress is rejected and ignored; the active
    /// session is untouched. The claimed origin and membership are checked
    /// against the board up front so a stale claim from the pointer layer
    /// leaves the machine `Idle`.
    pub fn handle_drag_start(&mut self, item: &str, origin: &str) {
        profile_scope!("handle_drag_start");

        if self.input.is_dragging() {
            let err = BoardError::DragInProgress;
            tracing::warn!(item, origin, "drag_start rejected: {err}");
            self.notices.push(Notice::warning(err.to_string()));
            return;
        }

        let Some(container) = self.board.container(origin) else {
            let err = BoardError::UnknownContainer { key: origin.into() };
            tracing::warn!(item, "drag_start rejected: {err}");
            self.notices.push(Notice::error(err.to_string()));
            return;
        };
        if !container.contains(item) {
            let err = BoardError::ItemNotFound {
                item: item.into(),
                container: origin.into(),
            };
            tracing::warn!("drag_start rejected: {err}");
            self.notices.push(Notice::error(err.to_string()));
            return;
        }

        tracing::debug!(item, origin, "drag started");
        self.input.start(item, origin);
        self.notify_drag_changed();
    }
}
