//! # Singleton task slots: declare now, construct at scheduler start.
//!
//! A [`SingletonSlot`] is a once-only factory for a task that must have at
//! most one live instance per key. Declaring the slot registers intent; the
//! scheduler materializes each distinct key exactly once at the start of a
//! run, before the first sort. This defers any side effects of construction
//! until the scheduler is ready, while keeping declaration order independent
//! of instantiation order.
//!
//! Duplicate declarations of the same key (e.g., a setup routine executed
//! twice) are ignored by the registry, so exactly one instance is ever built.

use crate::deps::KindCatalog;
use crate::error::DependencyError;
use crate::tasks::spec::TaskSpec;

/// Factory invoked once per slot, at scheduler start.
///
/// Receives the scheduler's kind catalog so the spec it builds can attach
/// dependencies by kind.
pub type SingletonFactory =
    Box<dyn FnOnce(&KindCatalog) -> Result<TaskSpec, DependencyError> + Send + 'static>;

/// A pending singleton: a key identifying the instance, plus the factory
/// that builds its [`TaskSpec`].
///
/// ## Example
/// ```rust
/// use bootvisor::{SingletonSlot, TaskFn, TaskSpec, TaskError};
///
/// let slot = SingletonSlot::new("udev-settle", |_catalog| {
///     let task = TaskFn::arc("udev-settle", || async { Ok::<_, TaskError>(()) });
///     Ok(TaskSpec::new(task))
/// });
/// assert_eq!(slot.key(), "udev-settle");
/// ```
pub struct SingletonSlot {
    key: String,
    factory: SingletonFactory,
}

impl SingletonSlot {
    /// Creates a slot for the given key.
    pub fn new<F>(key: impl Into<String>, factory: F) -> Self
    where
        F: FnOnce(&KindCatalog) -> Result<TaskSpec, DependencyError> + Send + 'static,
    {
        Self {
            key: key.into(),
            factory: Box::new(factory),
        }
    }

    /// The key identifying this singleton.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Consumes the slot, running its factory.
    pub(crate) fn build(self, catalog: &KindCatalog) -> Result<TaskSpec, DependencyError> {
        (self.factory)(catalog)
    }
}
