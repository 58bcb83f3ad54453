//! # Registered task state.
//!
//! [`TaskEntry`] is what the registry actually holds: the task handle, its
//! dependency list, the one-shot `ran` flag, the resolved priority, and the
//! registration sequence number that makes the sort order reproducible.
//!
//! [`TaskSet`] is a cheap snapshot of the registry's live list. It is
//! threaded explicitly through every dependency check so that a dependency
//! referencing another task can resolve it by name — there is no hidden
//! global registry.

use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use crate::deps::DepRef;
use crate::error::SchedulerError;
use crate::events::{Event, EventKind};
use crate::subscribers::SubscriberSet;
use crate::tasks::task::TaskRef;

/// Shared handle to a registered task.
pub type EntryRef = Arc<TaskEntry>;

/// A task as the registry sees it: handle, dependencies, and run state.
///
/// Entries are created by [`Registry::register`](crate::Registry::register)
/// and live for the rest of the process; `ran` is the only field that ever
/// changes after registration, and it flips from `false` to `true` exactly
/// once.
pub struct TaskEntry {
    task: TaskRef,
    deps: Vec<DepRef>,
    priority: i32,
    /// Registration sequence number; the final sort tie-break. Unique and
    /// monotonically increasing, never memory identity, so the same
    /// registration order always yields the same schedule.
    seq: u64,
    ran: AtomicBool,
}

impl TaskEntry {
    pub(crate) fn new(task: TaskRef, deps: Vec<DepRef>, priority: i32, seq: u64) -> Self {
        Self {
            task,
            deps,
            priority,
            seq,
            ran: AtomicBool::new(false),
        }
    }

    /// The task's name (its identity).
    pub fn name(&self) -> &str {
        self.task.name()
    }

    /// The ordering hint; lower sorts earlier.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The registration sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Whether this task has already run. Monotonic: once true, stays true.
    pub fn ran(&self) -> bool {
        self.ran.load(AtomicOrdering::Acquire)
    }

    /// Number of owned dependencies.
    pub fn dep_count(&self) -> usize {
        self.deps.len()
    }

    /// True iff every owned dependency currently reports fulfilled.
    ///
    /// Pure and side-effect free; re-evaluated on every sweep.
    pub fn deps_fulfilled(&self, tasks: &TaskSet) -> bool {
        self.deps.iter().all(|d| d.fulfilled(tasks))
    }

    /// True iff any owned dependency says `other` must have run before this
    /// task. Purely an ordering signal, distinct from fulfillment.
    ///
    /// Task-completion dependencies delegate transitively, so a cyclic
    /// dependency graph makes this recursion diverge (the documented
    /// undefined-ordering caveat — cycles are not detected).
    pub fn depends_on(&self, other: &TaskEntry, tasks: &TaskSet) -> bool {
        self.deps.iter().any(|d| d.depends_on(other, tasks))
    }

    /// One scheduling attempt: no-op unless all dependencies hold and the
    /// task has not run yet; otherwise invokes `run()` and flips `ran`.
    ///
    /// Returns `Ok(true)` when the task has run (now or earlier),
    /// `Ok(false)` when it is still waiting on dependencies. An error from
    /// the task body aborts the whole run.
    pub(crate) async fn try_run(
        &self,
        tasks: &TaskSet,
        subs: &SubscriberSet,
        sweep: u64,
    ) -> Result<bool, SchedulerError> {
        if self.ran() {
            return Ok(true);
        }
        if !self.deps_fulfilled(tasks) {
            subs.emit(
                &Event::new(EventKind::TaskWaiting)
                    .with_task(self.name())
                    .with_sweep(sweep),
            );
            return Ok(false);
        }

        subs.emit(
            &Event::new(EventKind::TaskStarting)
                .with_task(self.name())
                .with_sweep(sweep),
        );

        if let Err(source) = self.task.run().await {
            subs.emit(
                &Event::new(EventKind::TaskFailed)
                    .with_task(self.name())
                    .with_reason(source.as_message())
                    .with_sweep(sweep),
            );
            return Err(SchedulerError::TaskFailed {
                task: self.name().to_string(),
                source,
            });
        }

        self.ran.store(true, AtomicOrdering::Release);
        subs.emit(
            &Event::new(EventKind::TaskFinished)
                .with_task(self.name())
                .with_sweep(sweep),
        );
        Ok(true)
    }
}

/// Snapshot of the registry's live list, used as lookup context for
/// dependency checks and the sort comparator.
///
/// Lookups are by name, first match in registration order.
#[derive(Clone)]
pub struct TaskSet {
    entries: Vec<EntryRef>,
}

impl TaskSet {
    pub(crate) fn new(entries: Vec<EntryRef>) -> Self {
        Self { entries }
    }

    /// Returns the entry with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&EntryRef> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Whether the named task has run. Unknown names report `false`, which
    /// preserves the stall semantics: a dependency on a task that was never
    /// registered simply never becomes fulfilled.
    pub fn ran(&self, name: &str) -> bool {
        self.get(name).map(|e| e.ran()).unwrap_or(false)
    }

    /// The entries, in the order they were snapshotted.
    pub fn entries(&self) -> &[EntryRef] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
