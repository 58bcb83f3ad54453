//! Error types used by the bootvisor scheduler and tasks.
//!
//! This module defines three error enums:
//!
//! - [`TaskError`] — errors raised by individual task executions.
//! - [`DependencyError`] — errors raised while constructing dependencies.
//! - [`SchedulerError`] — errors raised by the scheduling run itself.
//!
//! All types provide helper methods (`as_label`, `as_message`) for logging.
//!
//! A *stalled* schedule (a dependency that can never become fulfilled) is
//! not an error. The sweep loop keeps polling forever unless a sweep budget
//! is configured (see [`SchedulerConfig`](crate::SchedulerConfig)).

use thiserror::Error;

/// # Errors produced by task execution.
///
/// Returned from a concrete [`Task::run`](crate::Task::run). The scheduler
/// never retries a failed task: any error aborts the whole run (fail-fast),
/// because partial, unvalidated boot progress is worse than a halted process.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// Task execution failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl TaskError {
    /// Builds a failure from any displayable error.
    pub fn fail(error: impl std::fmt::Display) -> Self {
        TaskError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use bootvisor::TaskError;
    ///
    /// let err = TaskError::Fail { error: "boom".into() };
    /// assert_eq!(err.as_label(), "task_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TaskError::Fail { error } => format!("error: {error}"),
        }
    }
}

/// # Errors produced while constructing dependencies.
///
/// These are synchronous and local to the construction call: a failed
/// [`add_dependency`](crate::TaskSpec::add_dependency) leaves the task's
/// dependency list exactly as it was.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DependencyError {
    /// The requested kind is not present in the [`KindCatalog`](crate::KindCatalog).
    #[error("unknown dependency kind: {kind}")]
    UnknownKind {
        /// The kind name that failed to resolve.
        kind: String,
    },

    /// The kind exists but was given the wrong number of positional arguments.
    #[error("dependency kind {kind:?} expects {expected} argument(s), got {got}")]
    BadArity {
        /// The kind name.
        kind: String,
        /// Number of arguments the constructor expects.
        expected: usize,
        /// Number of arguments actually supplied.
        got: usize,
    },
}

impl DependencyError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            DependencyError::UnknownKind { .. } => "dep_unknown_kind",
            DependencyError::BadArity { .. } => "dep_bad_arity",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DependencyError::UnknownKind { kind } => format!("unknown kind: {kind}"),
            DependencyError::BadArity {
                kind,
                expected,
                got,
            } => format!("kind {kind}: expected {expected} arg(s), got {got}"),
        }
    }
}

/// # Errors produced by a scheduling run.
///
/// These represent failures of [`Scheduler::run`](crate::Scheduler::run)
/// itself: a task body failing (which aborts the boot sequence), a singleton
/// factory failing to build its spec, or the optional sweep budget running out.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// A task's `run()` returned an error; the whole run is aborted.
    #[error("task {task} failed: {source}")]
    TaskFailed {
        /// Name of the failed task.
        task: String,
        /// The underlying task error.
        #[source]
        source: TaskError,
    },

    /// A pending singleton factory failed while building its task spec.
    #[error("singleton {key} failed to build: {source}")]
    Singleton {
        /// The singleton key whose factory failed.
        key: String,
        /// The underlying dependency error.
        #[source]
        source: DependencyError,
    },

    /// The configured sweep budget was exhausted with tasks still unrun.
    ///
    /// Only possible when [`SchedulerConfig`](crate::SchedulerConfig) sets a
    /// non-zero `max_sweeps`; the default behavior is to poll forever.
    #[error("sweep budget {sweeps} exhausted; {remaining} task(s) never ran")]
    BudgetExhausted {
        /// Number of full sweeps performed.
        sweeps: u64,
        /// Number of tasks still unrun when the budget ran out.
        remaining: usize,
    },
}

impl SchedulerError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use bootvisor::SchedulerError;
    ///
    /// let err = SchedulerError::BudgetExhausted { sweeps: 3, remaining: 1 };
    /// assert_eq!(err.as_label(), "sched_budget_exhausted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SchedulerError::TaskFailed { .. } => "sched_task_failed",
            SchedulerError::Singleton { .. } => "sched_singleton_failed",
            SchedulerError::BudgetExhausted { .. } => "sched_budget_exhausted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SchedulerError::TaskFailed { task, source } => {
                format!("task {task}: {}", source.as_message())
            }
            SchedulerError::Singleton { key, source } => {
                format!("singleton {key}: {}", source.as_message())
            }
            SchedulerError::BudgetExhausted { sweeps, remaining } => {
                format!("gave up after {sweeps} sweep(s); {remaining} task(s) unrun")
            }
        }
    }
}
