//! Board configuration - container seeds and behavior toggles.
//!
//! Configuration is supplied once at startup. The built-in defaults seed
//! the classic two-list layout; a JSON config file, when present, replaces
//! them. Item *placement* is never persisted - only configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, LEFT_KEY, LEFT_SEED_ITEMS, LEFT_TITLE, RIGHT_KEY,
    RIGHT_SEED_ITEMS, RIGHT_TITLE,
};
use crate::error::{BoardError, BoardResult};
use crate::types::Container;

/// Startup configuration: container seeds plus the drop policy toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Containers with their initial ordered item labels
    pub containers: Vec<Container>,
    /// Whether a container accepts an item it already holds
    pub allow_same_container_drop: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            containers: vec![
                Container::new(LEFT_KEY, LEFT_TITLE).with_items(LEFT_SEED_ITEMS),
                Container::new(RIGHT_KEY, RIGHT_TITLE).with_items(RIGHT_SEED_ITEMS),
            ],
            allow_same_container_drop: true,
        }
    }
}

impl BoardConfig {
    /// Parse a configuration from its JSON form.
    pub fn from_json(json: &str) -> BoardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON for writing a config file.
    pub fn to_json(&self) -> BoardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from the default config path, falling back to the built-in
    /// defaults when the file is missing or unreadable. A broken file is
    /// reported via tracing, never fatal.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load {}: {e:#}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Load and validate a configuration file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Platform config-file location, e.g.
    /// `~/.config/sortboard/config.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Reject configurations that would break the partition invariant:
    /// duplicate container keys, the same item label seeded into more
    /// than one place, or fewer than two containers.
    pub fn validate(&self) -> BoardResult<()> {
        if self.containers.len() < 2 {
            return Err(BoardError::TooFewContainers {
                count: self.containers.len(),
            });
        }
        let mut keys = std::collections::HashSet::new();
        let mut labels = std::collections::HashSet::new();
        for container in &self.containers {
            if !keys.insert(container.key.as_str()) {
                return Err(BoardError::DuplicateContainer {
                    key: container.key.clone(),
                });
            }
            for label in &container.items {
                if !labels.insert(label.as_str()) {
                    return Err(BoardError::DuplicateItem {
                        label: label.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
