//! # Task-completion dependency.
//!
//! [`TaskDone`] gates a task on another task (referenced by name) having
//! run. It is the one dependency kind the core supplies itself, registered
//! in the default [`KindCatalog`](crate::KindCatalog) as `"task"`; it is
//! also the only built-in kind with an ordering opinion.

use std::sync::Arc;

use crate::deps::dep::{DepRef, Dependency};
use crate::tasks::{TaskEntry, TaskSet};

/// Dependency on another task's completion.
///
/// - `fulfilled`: the target's `ran` flag. A target that was never
///   registered simply never fulfills, stalling the owning task (the
///   scheduler's documented liveness behavior for unsatisfiable graphs).
/// - `depends_on`: true for the target itself, and transitively for
///   anything the target depends on. Cycles in the graph make this
///   recursion diverge; the scheduler does no cycle detection.
///
/// ## Example
/// ```rust
/// use bootvisor::TaskDone;
///
/// let dep = TaskDone::new("load-modules");
/// assert_eq!(dep.target(), "load-modules");
/// ```
pub struct TaskDone {
    target: String,
}

impl TaskDone {
    /// Creates a dependency on the named task.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Creates the dependency and returns it as a shared handle.
    pub fn arc(target: impl Into<String>) -> DepRef {
        Arc::new(Self::new(target))
    }

    /// The name of the task this dependency waits for.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Dependency for TaskDone {
    fn fulfilled(&self, tasks: &TaskSet) -> bool {
        tasks.ran(&self.target)
    }

    fn depends_on(&self, other: &TaskEntry, tasks: &TaskSet) -> bool {
        if other.name() == self.target {
            return true;
        }
        match tasks.get(&self.target) {
            Some(entry) => entry.depends_on(other, tasks),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::KindCatalog;
    use crate::error::TaskError;
    use crate::tasks::{TaskFn, TaskSpec};
    use crate::Registry;

    fn noop(name: &'static str) -> TaskSpec {
        TaskSpec::new(TaskFn::arc(name, || async { Ok::<_, TaskError>(()) }))
    }

    #[test]
    fn test_fulfilled_tracks_ran_flag() {
        let mut reg = Registry::new();
        reg.register(noop("a"));
        let tasks = reg.snapshot();

        let dep = TaskDone::new("a");
        assert!(!dep.fulfilled(&tasks));
        // Unknown target never fulfills.
        assert!(!TaskDone::new("ghost").fulfilled(&tasks));
    }

    #[test]
    fn test_depends_on_is_transitive() {
        let catalog = KindCatalog::default();
        let mut reg = Registry::new();
        let a = reg.register(noop("a"));
        let b = reg.register(noop("b").with_dependency("task", &["a"], &catalog).unwrap());
        reg.register(noop("c").with_dependency("task", &["b"], &catalog).unwrap());
        let tasks = reg.snapshot();

        let on_b = TaskDone::new("b");
        assert!(on_b.depends_on(&b, &tasks));
        // c -> b -> a: a is reachable through b's own dependencies.
        assert!(on_b.depends_on(&a, &tasks));

        let on_ghost = TaskDone::new("ghost");
        assert!(!on_ghost.depends_on(&a, &tasks));
    }
}
