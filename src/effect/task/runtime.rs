//! Runtime sharing mechanism for [`Task`](super::Task).
//!
//! This module provides a global tokio runtime and utilities for running a
//! task to settlement from synchronous code, without creating a new runtime
//! per call.
//!
//! # Design Philosophy
//!
//! The task engine itself is scheduler-agnostic: a `Task` is a plain
//! `Future`, and any executor upholds the settlement contract. This module
//! only serves the synchronous edge of a program:
//!
//! 1. **Global Runtime**: a lazily-initialized multi-thread runtime shared
//!    across all blocking entries. It is created once and never dropped.
//! 2. **Blocking Execution**: [`run_blocking`]/[`try_run_blocking`] execute
//!    a future to completion, using `block_in_place` when already inside a
//!    multi-thread runtime to avoid nested-runtime panics.
//!
//! # Runtime Flavor Considerations
//!
//! - **Multi-thread runtime**: `block_in_place` allows blocking without
//!   starving the scheduler.
//! - **Current-thread runtime**: blocking is not supported;
//!   [`try_run_blocking`] reports [`BlockingError::CurrentThreadRuntime`]
//!   instead of panicking deep inside tokio.
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::Task;
//! use kindling::effect::task::runtime;
//!
//! let task: Task<i32, String> = Task::pure(21).fmap(|x| x * 2);
//! assert_eq!(runtime::run_blocking(task), Ok(42));
//! ```

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

// =============================================================================
// Global Runtime
// =============================================================================

/// Global tokio runtime initialized lazily on first access.
///
/// Configured with a multi-thread scheduler, worker threads equal to the
/// number of CPU cores, and all features enabled. The runtime has static
/// lifetime and is never dropped.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .enable_all()
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns a reference to the global runtime.
///
/// The runtime is lazily initialized on first call and shared across all
/// subsequent calls, from any thread.
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

// =============================================================================
// Blocking Errors
// =============================================================================

/// Error returned when a future cannot be run to completion blockingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BlockingError {
    /// The caller is inside a current-thread tokio runtime, where blocking
    /// execution would deadlock the only worker thread.
    CurrentThreadRuntime,
}

impl fmt::Display for BlockingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentThreadRuntime => write!(
                formatter,
                "cannot block on a future inside a current-thread tokio runtime; \
                 await the task directly instead"
            ),
        }
    }
}

impl Error for BlockingError {}

// =============================================================================
// Blocking Execution
// =============================================================================

/// Runs a future to completion from synchronous code.
///
/// Behavior depends on where the caller is:
///
/// - Inside a multi-thread runtime: uses `block_in_place` on the current
///   runtime's handle, preserving its tracing context and settings.
/// - Inside a current-thread runtime: returns
///   [`BlockingError::CurrentThreadRuntime`].
/// - Outside any runtime: blocks on the shared [`global`] runtime.
///
/// # Errors
///
/// Returns [`BlockingError::CurrentThreadRuntime`] when called from inside
/// a current-thread runtime.
///
/// # Examples
///
/// ```rust
/// use kindling::effect::Task;
/// use kindling::effect::task::runtime;
///
/// let task: Task<i32, String> = Task::pure(7);
/// assert_eq!(runtime::try_run_blocking(task), Ok(Ok(7)));
/// ```
pub fn try_run_blocking<F, T>(future: F) -> Result<T, BlockingError>
where
    F: Future<Output = T>,
{
    match Handle::try_current() {
        Ok(handle) => match handle.runtime_flavor() {
            RuntimeFlavor::CurrentThread => Err(BlockingError::CurrentThreadRuntime),
            _ => Ok(tokio::task::block_in_place(|| handle.block_on(future))),
        },
        Err(_) => Ok(global().block_on(future)),
    }
}

/// Runs a future to completion from synchronous code, panicking where
/// [`try_run_blocking`] would report an error.
///
/// # Panics
///
/// Panics when called from inside a current-thread tokio runtime.
///
/// # Examples
///
/// ```rust
/// use kindling::effect::Task;
/// use kindling::effect::task::runtime;
///
/// let task: Task<i32, String> = Task::rejected("missing".to_string());
/// assert_eq!(runtime::run_blocking(task), Err("missing".to_string()));
/// ```
pub fn run_blocking<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    match try_run_blocking(future) {
        Ok(value) => value,
        Err(error) => panic!("run_blocking failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::super::Task;
    use super::*;

    #[test]
    fn run_blocking_outside_runtime_uses_global() {
        let task: Task<i32, String> = Task::pure(20).fmap(|x| x + 1);
        assert_eq!(run_blocking(task), Ok(21));
    }

    #[test]
    fn run_blocking_surfaces_rejection() {
        let task: Task<i32, String> = Task::rejected("missing".to_string());
        assert_eq!(run_blocking(task), Err("missing".to_string()));
    }

    #[test]
    fn global_runtime_is_shared() {
        let first = global() as *const Runtime;
        let second = global() as *const Runtime;
        assert_eq!(first, second);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn try_run_blocking_inside_multi_thread_runtime() {
        let result = try_run_blocking(Task::<i32, String>::pure(5));
        assert_eq!(result, Ok(Ok(5)));
    }

    #[tokio::test]
    async fn try_run_blocking_inside_current_thread_runtime_is_an_error() {
        let task: Task<i32, String> = Task::pure(5);
        assert_eq!(
            try_run_blocking(task),
            Err(BlockingError::CurrentThreadRuntime)
        );
    }

    #[test]
    fn blocking_error_displays_guidance() {
        let message = BlockingError::CurrentThreadRuntime.to_string();
        assert!(message.contains("current-thread"));
    }
}
