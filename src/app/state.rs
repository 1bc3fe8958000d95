//! Application state - the Sortboard struct definition.

use crate::accept::DropPolicy;
use crate::board::Board;
use crate::error::BoardResult;
use crate::input::DragState;
use crate::notifications::NoticeLog;
use crate::notify::{ChangeEvent, SubscriptionId};

/// Main application state.
///
/// Owns the authoritative board explicitly (no ambient globals); view
/// adapters read it by reference and feed completed drops back through
/// the input handlers. Single-threaded by design: every mutation is a
/// direct, synchronous reaction to one inbound event.
pub struct Sortboard {
    /// Authoritative container contents
    pub board: Board,
    /// Drag session state machine
    pub input: DragState,
    /// Drop acceptance policy
    pub policy: DropPolicy,
    /// Non-fatal notice log
    pub notices: NoticeLog,
}

impl Sortboard {
    /// Ordered item labels of the container `key`.
    ///
    /// An unknown key surfaces as an error for the caller to report; the
    /// board is left untouched.
    pub fn container_items(&self, key: &str) -> BoardResult<&[String]> {
        self.board.container_items(key)
    }

    /// Subscribe to change events: board mutations and drag transitions.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ChangeEvent) + 'static,
    ) -> SubscriptionId {
        self.board.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.board.unsubscribe(id)
    }

    /// Announce a drag-session transition to subscribers.
    pub(crate) fn notify_drag_changed(&mut self) {
        self.board.emit(&ChangeEvent::DragChanged);
    }
}
