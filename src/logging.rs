//! Logging bootstrap for the tracing stack.
//!
//! Initialization is idempotent: the first call installs the global
//! subscriber, later calls are no-ops. Level selection follows the
//! standard `RUST_LOG` environment filter, defaulting to `info`.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING_INSTALLED: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber exactly once per process.
///
/// Returns true if this call installed it, false if logging was already
/// active (including a subscriber installed by the embedding
/// application, which is left untouched).
pub fn init_logging() -> bool {
    let mut installed = false;
    LOGGING_INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // try_init rather than init: an embedding app may already have a
        // subscriber, which is not an error from our side.
        installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok();
    });
    installed
}
