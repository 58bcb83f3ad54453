//! # Closure-backed dependency.
//!
//! [`DepFn`] wraps an `Fn(&TaskSet) -> bool` predicate as a [`Dependency`].
//! This is the cheapest way to express an external condition (a device node
//! appearing, a file existing, a mount landing) without writing a dedicated
//! type. It keeps the default `depends_on` answer (`false`): external
//! conditions have no task-ordering relation.

use std::sync::Arc;

use crate::deps::dep::{DepRef, Dependency};
use crate::tasks::TaskSet;

/// Function-backed dependency.
///
/// # Example
/// ```
/// use bootvisor::{DepFn, DepRef};
///
/// let dev_present: DepRef = DepFn::arc(|_tasks| {
///     std::path::Path::new("/dev/sda1").exists()
/// });
/// # let _ = dev_present;
/// ```
pub struct DepFn<F>
where
    F: Fn(&TaskSet) -> bool + Send + Sync + 'static,
{
    func: F,
}

impl<F> DepFn<F>
where
    F: Fn(&TaskSet) -> bool + Send + Sync + 'static,
{
    /// Creates a new function-backed dependency.
    pub fn new(func: F) -> Self {
        Self { func }
    }

    /// Creates the dependency and returns it as a shared handle.
    pub fn arc(func: F) -> DepRef {
        Arc::new(Self::new(func))
    }
}

impl<F> Dependency for DepFn<F>
where
    F: Fn(&TaskSet) -> bool + Send + Sync + 'static,
{
    fn fulfilled(&self, tasks: &TaskSet) -> bool {
        (self.func)(tasks)
    }
}
