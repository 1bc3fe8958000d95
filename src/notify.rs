//! Change notification hub.
//!
//! The board and the drag session have no knowledge of the rendering
//! layer; instead, every store mutation and every gesture transition is
//! announced through this hub so that container views can re-render.
//! Subscriptions are id-keyed and individually removable.

/// What changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The listed containers' contents changed (a completed move names
    /// the origin and destination; a same-container move names one key).
    ContainersChanged { keys: Vec<String> },
    /// The drag session transitioned (start, hover change, drop, cancel).
    DragChanged,
}

/// Id handed out by [`ChangeHub::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

type Subscriber = Box<dyn FnMut(&ChangeEvent)>;

/// Registry of change subscribers.
///
/// Single-threaded by design: events are emitted synchronously, in
/// subscription order, as part of the mutation that caused them.
#[derive(Default)]
pub struct ChangeHub {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: SubscriptionId,
}

impl std::fmt::Debug for ChangeHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeHub")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ChangeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback fired on every change event. Returns an id
    /// for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns true if it was present.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `event` to every subscriber, in subscription order.
    pub fn emit(&mut self, event: &ChangeEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}
