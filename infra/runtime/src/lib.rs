//! # Runtime
//!
//! Standardized [Tokio](https://tokio.rs) runtime profiles, so every binary
//! in the workspace boots with predictable thread counts, stack sizes, and
//! keep-alive behavior instead of ad-hoc `Builder` calls.
//!
//! ```rust,no_run
//! use wsite_runtime::{RuntimeConfig, build_runtime_with_config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let runtime = build_runtime_with_config(&RuntimeConfig::high_performance())?;
//! runtime.block_on(async {
//!     // application entry point
//! });
//! # Ok(())
//! # }
//! ```

pub use anyhow::Result;

use anyhow::Context;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const DEFAULT_WORKER_THREADS: usize = 4;
const DEFAULT_STACK_SIZE: usize = 3 * 1024 * 1024;
// Stack sizes outside this window are clamped rather than rejected.
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(60);

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

/// Worker count: `TOKIO_WORKER_THREADS` if set and sane, otherwise the
/// detected hardware parallelism, otherwise a fixed fallback.
fn detect_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0 && n <= 1024)
            .unwrap_or_else(|| {
                available_parallelism()
                    .map(std::num::NonZero::get)
                    .unwrap_or(DEFAULT_WORKER_THREADS)
            })
    })
}

const fn clamp_stack_size(stack_size: usize) -> usize {
    if stack_size < MIN_STACK_SIZE {
        MIN_STACK_SIZE
    } else if stack_size > MAX_STACK_SIZE {
        MAX_STACK_SIZE
    } else {
        stack_size
    }
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detect_worker_threads(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: "thread-worker".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }
}

impl RuntimeConfig {
    /// Server preset: full parallelism, roomy stacks, long keep-alive.
    #[must_use = "Use this configuration for high-performance server applications"]
    pub fn high_performance() -> Self {
        Self {
            worker_threads: detect_worker_threads(),
            stack_size: 4 * 1024 * 1024,
            thread_name: "thread-hp".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
        }
    }

    /// Tooling preset: half the workers, smaller stacks, quick thread reap.
    #[must_use = "Use this configuration for low-footprint processes"]
    pub fn memory_efficient() -> Self {
        Self {
            worker_threads: (detect_worker_threads() / 2).max(1),
            stack_size: 2 * 1024 * 1024,
            thread_name: "thread-mem".to_owned(),
            thread_keep_alive: Duration::from_secs(30),
        }
    }

    #[must_use = "Customize the number of worker threads for the runtime"]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, 1024);
        self
    }

    #[must_use = "Customize the stack size for worker threads"]
    pub const fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = clamp_stack_size(size);
        self
    }

    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { "thread-worker".to_owned() } else { name };
        self
    }

    #[must_use = "Customize how long idle threads stay alive"]
    pub const fn with_thread_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.thread_keep_alive = keep_alive;
        self
    }
}

/// Builds a multithreaded Tokio runtime (all features enabled) from a
/// [`RuntimeConfig`].
///
/// # Errors
///
/// Fails only if the OS refuses the runtime, typically thread-creation
/// limits or resource exhaustion.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(
        workers = config.worker_threads,
        stack = config.stack_size,
        name = %config.thread_name,
        "Building Tokio runtime"
    );

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads.clamp(1, 1024))
        .thread_stack_size(clamp_stack_size(config.stack_size))
        .thread_name(&config.thread_name)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_size_is_clamped() {
        assert_eq!(clamp_stack_size(0), MIN_STACK_SIZE);
        assert_eq!(clamp_stack_size(64 * 1024 * 1024), MAX_STACK_SIZE);
        assert_eq!(clamp_stack_size(DEFAULT_STACK_SIZE), DEFAULT_STACK_SIZE);
    }

    #[test]
    fn blank_thread_name_falls_back() {
        let config = RuntimeConfig::default().with_thread_name("  ");
        assert_eq!(config.thread_name, "thread-worker");
    }

    #[test]
    fn presets_differ() {
        let hp = RuntimeConfig::high_performance();
        let mem = RuntimeConfig::memory_efficient();
        assert!(hp.stack_size > mem.stack_size);
        assert!(hp.worker_threads >= mem.worker_threads);
    }
}
