//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBoardBuilder` - Builder pattern for creating app states with
//!   seeded containers
//! - Assertion helpers like `assert_container_items()` and
//!   `assert_partition_intact()`
//! - Common fixtures matching the default two-list layout

use sortboard::settings::BoardConfig;
use sortboard::types::Container;
use sortboard::Sortboard;
use std::collections::BTreeMap;

// ============================================================================
// TestBoardBuilder - Builder pattern for creating test app states
// ============================================================================

/// Builder for creating test app states with seeded containers.
///
/// # Example
/// ```ignore
/// let app = TestBoardBuilder::new()
///     .with_container("left", "Left List", &["Item 1", "Item 2"])
///     .with_container("right", "Right List", &["Item 3"])
///     .allow_same_container_drop(false)
///     .build();
/// ```
pub struct TestBoardBuilder {
    containers: Vec<Container>,
    allow_same_container_drop: bool,
}

impl Default for TestBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoardBuilder {
    /// Create a new builder with no containers seeded.
    pub fn new() -> Self {
        Self {
            containers: Vec::new(),
            allow_same_container_drop: true,
        }
    }

    /// Seed a container with the given key, title, and item labels.
    pub fn with_container(mut self, key: &str, title: &str, items: &[&str]) -> Self {
        self.containers
            .push(Container::new(key, title).with_items(items.iter().copied()));
        self
    }

    /// Set the same-container drop policy.
    pub fn allow_same_container_drop(mut self, allow: bool) -> Self {
        self.allow_same_container_drop = allow;
        self
    }

    /// Build just the configuration.
    pub fn build_config(self) -> BoardConfig {
        BoardConfig {
            containers: self.containers,
            allow_same_container_drop: self.allow_same_container_drop,
        }
    }

    /// Build the app state with all configured containers.
    pub fn build(self) -> Sortboard {
        Sortboard::from_config(&self.build_config()).expect("test config should be valid")
    }
}

// ============================================================================
// Standalone fixtures
// ============================================================================

/// App state matching the default layout:
/// left = Item 1..3, right = Item 4..5.
pub fn default_app() -> Sortboard {
    TestBoardBuilder::new()
        .with_container("left", "Left List", &["Item 1", "Item 2", "Item 3"])
        .with_container("right", "Right List", &["Item 4", "Item 5"])
        .build()
}

/// Same layout with same-container drops rejected.
pub fn strict_app() -> Sortboard {
    TestBoardBuilder::new()
        .with_container("left", "Left List", &["Item 1", "Item 2", "Item 3"])
        .with_container("right", "Right List", &["Item 4", "Item 5"])
        .allow_same_container_drop(false)
        .build()
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert a container holds exactly the given labels, in order.
pub fn assert_container_items(app: &Sortboard, key: &str, expected: &[&str]) {
    let items = app
        .container_items(key)
        .unwrap_or_else(|e| panic!("container {key} not found: {e}"));
    assert_eq!(
        items, expected,
        "container {key} has wrong contents: {items:?}"
    );
}

/// Assert the multiset union of all containers equals `expected` labels:
/// no loss, no duplication.
pub fn assert_partition_intact(app: &Sortboard, expected: &[&str]) {
    let mut actual: BTreeMap<&str, usize> = BTreeMap::new();
    for container in app.board.containers() {
        for label in &container.items {
            *actual.entry(label.as_str()).or_default() += 1;
        }
    }
    let mut wanted: BTreeMap<&str, usize> = BTreeMap::new();
    for label in expected {
        *wanted.entry(label).or_default() += 1;
    }
    assert_eq!(actual, wanted, "partition invariant violated");
}

// ============================================================================
// Tests for the helpers themselves
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_seeds_containers_in_order() {
        let app = default_app();
        let keys: Vec<&str> = app
            .board
            .containers()
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, ["left", "right"]);
    }

    #[test]
    fn test_default_app_matches_seed_layout() {
        let app = default_app();
        assert_container_items(&app, "left", &["Item 1", "Item 2", "Item 3"]);
        assert_container_items(&app, "right", &["Item 4", "Item 5"]);
        assert_partition_intact(&app, &["Item 1", "Item 2", "Item 3", "Item 4", "Item 5"]);
    }

    #[test]
    fn test_strict_app_rejects_same_container_drop() {
        let app = strict_app();
        assert!(!app.policy.allow_same_container_drop);
    }
}
