//! Sortboard - a headless drag-and-drop core for relocating named items
//! between containers.
//!
//! The crate owns the authoritative item partition (every item belongs to
//! exactly one container at all times), the drag-gesture state machine,
//! and the drop-acceptance policy. Pointer capture, rendering, and
//! styling belong to the embedding UI layer, which drives this core
//! through five inbound events (`handle_drag_start`,
//! `handle_container_enter`, `handle_container_leave`, `handle_drop`,
//! `handle_cancel`) and reads it back through view descriptions and
//! change notifications.
//!
//! ## Modules
//!
//! - `app` - The Sortboard application state and lifecycle
//! - `board` - The partition store and its single mutating operation
//! - `input` - Drag session state machine and per-event handlers
//! - `accept` - Drop-target acceptance policy and affordances
//! - `view` - Renderable container/item/drag descriptions
//! - `settings` - Startup configuration with JSON load and validation
//! - `notifications` - Bounded log of recovered, non-fatal failures
//! - `notify` - Change-notification hub for re-render scheduling
//! - `error` - Unified error types
//! - `logging` - One-shot tracing initialization
//! - `perf` - Optional timing instrumentation (`profiling` feature)

pub mod accept;
pub mod app;
pub mod board;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod notifications;
pub mod notify;
pub mod perf;
pub mod settings;
pub mod types;
pub mod view;

pub use accept::{DropAffordance, DropPolicy};
pub use app::Sortboard;
pub use board::Board;
pub use error::{BoardError, BoardResult};
pub use input::DragState;
pub use settings::BoardConfig;
pub use types::Container;
pub use view::{ContainerView, DragVisual, ItemView};
