//! Application lifecycle - construction from configuration.

use super::Sortboard;
use crate::accept::DropPolicy;
use crate::board::Board;
use crate::error::BoardResult;
use crate::input::DragState;
use crate::notifications::NoticeLog;
use crate::settings::BoardConfig;

impl Sortboard {
    /// Build the application state from a validated configuration.
    pub fn from_config(config: &BoardConfig) -> BoardResult<Self> {
        let board = Board::from_config(config)?;
        tracing::info!(
            containers = board.containers().len(),
            items = board.item_count(),
            allow_same_container_drop = config.allow_same_container_drop,
            "board initialized"
        );
        Ok(Self {
            board,
            input: DragState::default(),
            policy: DropPolicy {
                allow_same_container_drop: config.allow_same_container_drop,
            },
            notices: NoticeLog::new(),
        })
    }

    /// Build from the configuration file if present, falling back to the
    /// built-in defaults. Never fails: a broken config file is reported
    /// and the defaults are used instead.
    pub fn new() -> Self {
        let config = BoardConfig::load();
        match Self::from_config(&config) {
            Ok(app) => app,
            Err(e) => {
                tracing::error!("invalid board configuration: {e}; using defaults");
                let mut app = Self::from_config(&BoardConfig::default())
                    .unwrap_or_else(|_| Self::empty_fallback());
                app.notices.push(crate::notifications::Notice::error(format!(
                    "Invalid board configuration: {e}"
                )));
                app
            }
        }
    }

    /// Last-resort state when even the built-in defaults fail validation.
    /// The defaults are static and valid, so this is unreachable in
    /// practice, but it keeps construction panic-free.
    fn empty_fallback() -> Self {
        Self {
            board: Board::new_for_test(),
            input: DragState::default(),
            policy: DropPolicy::default(),
            notices: NoticeLog::new(),
        }
    }
}
