//! Performance instrumentation for the hot input paths.
//!
//! Hover evaluation and drop finalization run once per pointer event,
//! potentially many times per second during a drag. The `profile_scope!`
//! macro times a block with an RAII timer and is zero-cost unless the
//! `profiling` feature is enabled.
//!
//! ## Usage
//!
//! ```ignore
//! use sortboard::profile_scope;
//!
//! fn handle_container_enter() {
//!     profile_scope!("handle_container_enter");
//!     // ... event handling ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "profiling")]
use std::time::Instant;

/// Default threshold above which a timed scope is logged at warn level,
/// in milliseconds. Input handlers are expected to complete well inside
/// a frame.
pub const SLOW_SCOPE_MS: f64 = 1.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Enable or disable profiling output at runtime.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns true if profiling output is currently enabled.
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Profile a scope with the given name. Zero-cost when the `profiling`
/// feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::SLOW_SCOPE_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer: records the elapsed time of a scope on drop.
#[cfg(feature = "profiling")]
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

#[cfg(feature = "profiling")]
impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > self.threshold_ms {
            tracing::warn!(scope = self.name, elapsed_ms, "slow scope");
        } else {
            tracing::trace!(scope = self.name, elapsed_ms, "scope timed");
        }
    }
}
