//! Core types for the Sortboard container system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: the container record and its membership helpers. Items are plain
//! string labels, unique across the union of all containers.

use serde::{Deserialize, Serialize};

/// A named, ordered holder of items.
///
/// Containers double as configuration seeds: the same serde shape is used
/// in `BoardConfig` and as the live board state. Order is insertion order;
/// items moved in are appended to the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Stable key identifying this container (e.g. "left", "right")
    pub key: String,
    /// Human-readable title shown above the container
    pub title: String,
    /// Ordered item labels currently held
    pub items: Vec<String>,
}

impl Container {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Seed the container with initial item labels.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if this container currently holds `label`.
    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|i| i == label)
    }

    /// Index of the first occurrence of `label`, if present.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|i| i == label)
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the container holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
