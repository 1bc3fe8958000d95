//! Container view adapter - renderable descriptions of board state.
//!
//! Translates the authoritative board plus the transient drag session
//! into plain description structs a renderer can consume: which items
//! each container shows, which item should be dimmed as the drag source,
//! and which container should be highlighted as a drop target. The
//! descriptions are serde-serializable so a front-end can ship them
//! across a process boundary.

use serde::{Deserialize, Serialize};

use crate::accept::DropAffordance;
use crate::app::Sortboard;

/// One renderable item row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    /// Item label, also the displayed text
    pub label: String,
    /// True while this item is the active drag source (render dimmed)
    pub is_dragging: bool,
}

/// One renderable container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerView {
    pub key: String,
    pub title: String,
    pub items: Vec<ItemView>,
    /// True while this container is the current accepting hover target
    /// (render the hover highlight)
    pub is_hovered: bool,
    /// Accept/reject affordance while a drag is active
    pub affordance: DropAffordance,
}

/// Summary of the drag session for rendering a ghost/preview.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragVisual {
    /// Label of the dragged item, if a gesture is active
    pub dragged_item: Option<String>,
    /// True when the pointer is over a container that would accept it
    pub is_over_accepting_target: bool,
}

impl Sortboard {
    /// Renderable descriptions of every container, in board order.
    pub fn container_views(&self) -> Vec<ContainerView> {
        let dragged = self.input.dragged_item();
        let origin = self.input.origin();
        let hover = self.input.hover_target();

        self.board
            .containers()
            .iter()
            .map(|container| {
                let affordance = match (dragged, origin) {
                    (Some(item), Some(origin)) => {
                        self.policy.affordance(item, origin, &container.key)
                    }
                    _ => DropAffordance::None,
                };
                ContainerView {
                    key: container.key.clone(),
                    title: container.title.clone(),
                    items: container
                        .items
                        .iter()
                        .map(|label| ItemView {
                            label: label.clone(),
                            is_dragging: dragged == Some(label.as_str())
                                && origin == Some(container.key.as_str()),
                        })
                        .collect(),
                    is_hovered: hover == Some(container.key.as_str()),
                    affordance,
                }
            })
            .collect()
    }

    /// Drag summary for rendering: the dragged item and whether the
    /// pointer currently sits over an accepting target.
    pub fn drag_visual(&self) -> DragVisual {
        DragVisual {
            dragged_item: self.input.dragged_item().map(str::to_owned),
            is_over_accepting_target: self.input.is_hovering(),
        }
    }
}
