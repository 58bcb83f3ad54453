//! # Task abstraction.
//!
//! This module defines the [`Task`] trait (the author-facing surface for a
//! unit of boot-time work) and the shared handle type [`TaskRef`], an
//! `Arc<dyn Task>` suitable for sharing with the registry.
//!
//! A task's `run()` is invoked **at most once** by the scheduler, and only
//! after every one of its declared dependencies reported fulfilled at the
//! moment of the check. Implementations therefore do not need to guard
//! against re-entry.

use async_trait::async_trait;

use crate::error::TaskError;

/// # Shared handle to a task object.
///
/// This is the primary type used by the registry and specs.
pub type TaskRef = std::sync::Arc<dyn Task>;

/// # A unit of boot-time work, run at most once.
///
/// A `Task` has a stable [`name`](Task::name) (its identity in the registry,
/// and what task-completion dependencies resolve against), an optional
/// [`priority`](Task::priority) ordering hint, and an async
/// [`run`](Task::run) method that performs the actual effect — create a
/// mount, write a device node, and so on.
///
/// Returning an error from `run` aborts the entire scheduling run: a
/// boot-critical step failing stops the boot sequence rather than continuing
/// in an unknown state.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use bootvisor::{Task, TaskError};
///
/// struct MountRoot;
///
/// #[async_trait]
/// impl Task for MountRoot {
///     fn name(&self) -> &str { "mount-root" }
///
///     async fn run(&self) -> Result<(), TaskError> {
///         // mount("/dev/root", "/", ...)
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Task: Send + Sync + 'static {
    /// Returns a stable, human-readable task name.
    ///
    /// Names are how task-completion dependencies refer to this task; keep
    /// them unique within one registry.
    fn name(&self) -> &str;

    /// Ordering hint: lower sorts earlier among tasks with no dependency
    /// relation. Never a correctness gate.
    fn priority(&self) -> i32 {
        0
    }

    /// Executes the task's effect.
    ///
    /// Invoked at most once, after all dependencies reported fulfilled.
    async fn run(&self) -> Result<(), TaskError>;
}
