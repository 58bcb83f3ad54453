//! # Dependency abstraction.
//!
//! A [`Dependency`] is a polymorphic predicate attached to a task, with two
//! distinct contracts:
//!
//! - **Readiness** ([`fulfilled`](Dependency::fulfilled)): "is this
//!   satisfied right now". Re-evaluated on every sweep; must be cheap and
//!   safe to call any number of times.
//! - **Ordering hint** ([`depends_on`](Dependency::depends_on)): "does
//!   satisfying this imply that some other task must already have run".
//!   Feeds the sort comparator only — it is never a substitute for the
//!   readiness check.
//!
//! A dependency on another task answers both questions against that task's
//! `ran` flag (see [`TaskDone`](crate::TaskDone)). A dependency on an
//! external condition (a file appearing, a device node showing up, a mount
//! landing) has no task-ordering opinion and keeps the default `false`
//! answer, which excludes it from priority reasoning.
//!
//! Both methods receive the [`TaskSet`] as explicit context; dependencies
//! that reference other tasks resolve them by name through it.

use std::sync::Arc;

use crate::tasks::{TaskEntry, TaskSet};

/// Shared handle to a dependency object.
pub type DepRef = Arc<dyn Dependency>;

/// Readiness and ordering predicate attached to a task.
pub trait Dependency: Send + Sync + 'static {
    /// Whether this dependency is satisfied right now.
    ///
    /// Called once per owning task per sweep; keep it cheap and
    /// side-effect free.
    fn fulfilled(&self, tasks: &TaskSet) -> bool;

    /// Whether satisfying this dependency requires `other` to have already
    /// run. Pure ordering hint.
    ///
    /// The default is `false`: external-condition dependencies have no
    /// task-ordering relation and must decline the question for any task.
    fn depends_on(&self, other: &TaskEntry, tasks: &TaskSet) -> bool {
        let _ = (other, tasks);
        false
    }
}
