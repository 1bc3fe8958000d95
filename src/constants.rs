//! Application-wide constants.
//!
//! Centralizes default container configuration and limits to make the
//! codebase more maintainable and self-documenting.

// ============================================================================
// Default Containers
// ============================================================================

/// Stable key of the default left container
pub const LEFT_KEY: &str = "left";

/// Stable key of the default right container
pub const RIGHT_KEY: &str = "right";

/// Display title of the default left container
pub const LEFT_TITLE: &str = "Left List";

/// Display title of the default right container
pub const RIGHT_TITLE: &str = "Right List";

/// Seed items for the default left container
pub const LEFT_SEED_ITEMS: [&str; 3] = ["Item 1", "Item 2", "Item 3"];

/// Seed items for the default right container
pub const RIGHT_SEED_ITEMS: [&str; 2] = ["Item 4", "Item 5"];

// ============================================================================
// Notifications
// ============================================================================

/// Maximum number of notices retained in the notice log.
/// Older notices are evicted first.
pub const MAX_NOTICES: usize = 32;

// ============================================================================
// Configuration
// ============================================================================

/// Directory name under the platform config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "sortboard";

/// File name of the board configuration file
pub const CONFIG_FILE_NAME: &str = "config.json";
