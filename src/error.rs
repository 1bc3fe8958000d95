//! Error types for board operations
//!
//! Provides unified error handling for moves, queries, and configuration
//! loading. None of these errors is fatal to the application: move and
//! drag failures are recovered locally as no-ops and surfaced through the
//! notice log.

use thiserror::Error;

/// Errors that can occur during board operations
#[derive(Error, Debug)]
pub enum BoardError {
    /// Move or query against a container key the board does not know
    #[error("unknown container: {key}")]
    UnknownContainer { key: String },

    /// Move requested for an item absent from the claimed origin
    #[error("item {item:?} not found in container {container:?}")]
    ItemNotFound { item: String, container: String },

    /// A drag gesture was started while another is still active
    #[error("a drag gesture is already in progress")]
    DragInProgress,

    /// Two containers in the configuration share a key
    #[error("duplicate container key: {key}")]
    DuplicateContainer { key: String },

    /// The same item label appears in more than one seeded container
    #[error("duplicate item label across containers: {label}")]
    DuplicateItem { label: String },

    /// The configuration seeds fewer than two containers
    #[error("configuration must seed at least two containers, got {count}")]
    TooFewContainers { count: usize },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;

impl From<String> for BoardError {
    fn from(s: String) -> Self {
        BoardError::Other(s)
    }
}

impl From<&str> for BoardError {
    fn from(s: &str) -> Self {
        BoardError::Other(s.to_string())
    }
}
