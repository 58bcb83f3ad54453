//! # Task specification for scheduling.
//!
//! Defines [`TaskSpec`], the bundle handed to the registry: the task itself,
//! its dependency list, and an optional priority override.
//!
//! Dependencies are attached either:
//! - **By kind** with [`TaskSpec::add_dependency`] /
//!   [`TaskSpec::with_dependency`], resolving a symbolic kind name through a
//!   [`KindCatalog`] (fails with [`DependencyError::UnknownKind`] and leaves
//!   the list untouched), or
//! - **Directly** with [`TaskSpec::with_dep`] for an already-constructed
//!   [`DepRef`] (e.g., a closure-backed [`DepFn`](crate::DepFn)).

use crate::deps::{DepRef, KindCatalog};
use crate::error::DependencyError;
use crate::tasks::task::TaskRef;

/// Specification for registering a task.
///
/// ## Example
/// ```rust
/// use bootvisor::{KindCatalog, TaskFn, TaskSpec, TaskError};
///
/// let catalog = KindCatalog::default();
/// let fsck = TaskFn::arc("fsck-root", || async { Ok::<_, TaskError>(()) });
///
/// let spec = TaskSpec::new(fsck)
///     .with_priority(-10)
///     .with_dependency("task", &["load-modules"], &catalog)
///     .unwrap();
/// assert_eq!(spec.name(), "fsck-root");
/// assert_eq!(spec.dep_count(), 1);
/// ```
#[derive(Clone)]
pub struct TaskSpec {
    task: TaskRef,
    deps: Vec<DepRef>,
    priority: Option<i32>,
}

impl TaskSpec {
    /// Creates a spec with no dependencies and the task's own priority.
    pub fn new(task: TaskRef) -> Self {
        Self {
            task,
            deps: Vec::new(),
            priority: None,
        }
    }

    /// Convenience: returns the task name.
    pub fn name(&self) -> &str {
        self.task.name()
    }

    /// Number of attached dependencies.
    pub fn dep_count(&self) -> usize {
        self.deps.len()
    }

    /// Resolved priority: the override if set, else the task's own.
    pub fn priority(&self) -> i32 {
        self.priority.unwrap_or_else(|| self.task.priority())
    }

    /// Returns a new spec with an explicit priority override.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns a new spec with an already-constructed dependency appended.
    pub fn with_dep(mut self, dep: DepRef) -> Self {
        self.deps.push(dep);
        self
    }

    /// Looks up `kind` in the catalog, constructs the dependency with the
    /// given positional arguments, and appends it.
    ///
    /// On failure the spec's dependency list is unchanged — construction
    /// happens before the append, so no partial dependency is ever attached.
    pub fn add_dependency(
        &mut self,
        kind: &str,
        args: &[&str],
        catalog: &KindCatalog,
    ) -> Result<(), DependencyError> {
        let dep = catalog.build(kind, args)?;
        self.deps.push(dep);
        Ok(())
    }

    /// Builder form of [`TaskSpec::add_dependency`].
    pub fn with_dependency(
        mut self,
        kind: &str,
        args: &[&str],
        catalog: &KindCatalog,
    ) -> Result<Self, DependencyError> {
        self.add_dependency(kind, args, catalog)?;
        Ok(self)
    }

    /// Splits the spec into its parts for registration.
    pub(crate) fn into_parts(self) -> (TaskRef, Vec<DepRef>, i32) {
        let priority = self.priority();
        (self.task, self.deps, priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::tasks::TaskFn;

    fn noop(name: &'static str) -> TaskRef {
        TaskFn::arc(name, || async { Ok::<_, TaskError>(()) })
    }

    #[test]
    fn test_unknown_kind_leaves_deps_unchanged() {
        let catalog = KindCatalog::default();
        let mut spec = TaskSpec::new(noop("a"))
            .with_dependency("task", &["b"], &catalog)
            .unwrap();
        assert_eq!(spec.dep_count(), 1);

        let err = spec
            .add_dependency("no-such-kind", &["x"], &catalog)
            .unwrap_err();
        assert!(matches!(err, DependencyError::UnknownKind { ref kind } if kind == "no-such-kind"));
        assert_eq!(spec.dep_count(), 1);
    }

    #[test]
    fn test_priority_override_beats_task_default() {
        let spec = TaskSpec::new(noop("a"));
        assert_eq!(spec.priority(), 0);

        let spec = spec.with_priority(-5);
        assert_eq!(spec.priority(), -5);
    }
}
