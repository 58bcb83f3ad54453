//! # Task abstractions and specifications.
//!
//! This module provides the core task-related types:
//! - [`Task`] - trait for implementing a unit of boot-time work
//! - [`TaskFn`] - function-based task implementation
//! - [`TaskRef`] - shared reference to a task (`Arc<dyn Task>`)
//! - [`TaskSpec`] - specification bundling a task with its dependencies
//! - [`TaskEntry`] / [`TaskSet`] - registered state and its lookup snapshot
//! - [`SingletonSlot`] - once-only factory materialized at scheduler start

mod entry;
mod singleton;
mod spec;
mod task;
mod task_fn;

pub use entry::{EntryRef, TaskEntry, TaskSet};
pub use singleton::{SingletonFactory, SingletonSlot};
pub use spec::TaskSpec;
pub use task::{Task, TaskRef};
pub use task_fn::TaskFn;
