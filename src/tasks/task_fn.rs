//! # Function-backed task implementation.
//!
//! [`TaskFn`] wraps a closure `Fnc: FnMut() -> Fut`. The closure is protected
//! by a [`Mutex`] to allow calling `run(&self)` even though the closure is
//! `FnMut`. Use [`TaskFn::arc`] for a one-liner that returns a [`TaskRef`].
//!
//! The scheduler invokes `run` at most once per task, so the mutex is never
//! contended in practice; it exists to make the `&self` signature sound.

use std::{borrow::Cow, future::Future, sync::Mutex};

use async_trait::async_trait;

use crate::error::TaskError;
use crate::tasks::task::{Task, TaskRef};

/// Function-backed task.
///
/// # Example
/// ```
/// use bootvisor::{TaskFn, TaskRef, TaskError};
///
/// let t: TaskRef = TaskFn::arc("swapon", || async {
///     // swapon("/dev/swap")
///     Ok::<_, TaskError>(())
/// });
///
/// assert_eq!(t.name(), "swapon");
/// ```
#[derive(Debug)]
pub struct TaskFn<Fnc, Fut>
where
    Fnc: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    /// Stable task name.
    name: Cow<'static, str>,
    /// Underlying function (guarded by a mutex to allow `FnMut` with `&self`).
    func: Mutex<Fnc>,
}

impl<Fnc, Fut> TaskFn<Fnc, Fut>
where
    Fnc: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    /// Creates a new function-backed task.
    ///
    /// Prefer [`TaskFn::arc`] when you immediately need a [`TaskRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, func: Fnc) -> Self {
        Self {
            name: name.into(),
            func: Mutex::new(func),
        }
    }

    /// Creates the task and returns it as a shared handle (`Arc<dyn Task>`).
    pub fn arc(name: impl Into<Cow<'static, str>>, func: Fnc) -> TaskRef {
        std::sync::Arc::new(Self::new(name, func))
    }
}

#[async_trait]
impl<Fnc, Fut> Task for TaskFn<Fnc, Fut>
where
    Fnc: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Result<(), TaskError> {
        let fut = {
            let mut f = self.func.lock().map_err(|_| TaskError::Fail {
                error: "mutex poisoned".into(),
            })?;
            (f)()
        };
        fut.await
    }
}
