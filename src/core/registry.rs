//! # Task registry - the process-wide collection of scheduled work.
//!
//! The [`Registry`] holds:
//! - the live, insertion-ordered list of registered tasks (sorted in place
//!   once, at scheduler start), and
//! - the pending list of singleton slots not yet materialized.
//!
//! ## Rules
//! - Registration assigns each entry a unique, monotonically increasing
//!   sequence number; it is the comparator's final tie-break.
//! - Singleton keys are deduplicated at declaration time: a key that is
//!   already pending (or was already materialized) is ignored, so each
//!   singleton yields exactly one constructed instance.
//! - Entries are never removed; after the sort, the only mutation is each
//!   entry's `ran` flag flipping to true.
//!
//! The registry is driven from a single logical thread (setup, then the
//! scheduling loop), so none of this needs locking.

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::order;
use crate::tasks::{EntryRef, SingletonSlot, TaskEntry, TaskSet, TaskSpec};

/// Process-wide holder of all tasks and pending singleton slots.
#[derive(Default)]
pub struct Registry {
    tasks: Vec<EntryRef>,
    pending: Vec<SingletonSlot>,
    /// Singleton keys ever declared; used to drop duplicate declarations.
    singleton_keys: HashSet<String>,
    next_seq: u64,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task to the live list, assigning its sequence number.
    ///
    /// Returns the shared entry handle; no validation is performed.
    pub fn register(&mut self, spec: TaskSpec) -> EntryRef {
        let (task, deps, priority) = spec.into_parts();
        let seq = self.next_seq;
        self.next_seq += 1;

        let entry = Arc::new(TaskEntry::new(task, deps, priority, seq));
        self.tasks.push(entry.clone());
        entry
    }

    /// Appends a singleton slot to the pending list.
    ///
    /// Returns `false` (and drops the slot) when the key was already
    /// declared — repeat declarations still yield exactly one instance.
    pub fn register_singleton(&mut self, slot: SingletonSlot) -> bool {
        if !self.singleton_keys.insert(slot.key().to_string()) {
            return false;
        }
        self.pending.push(slot);
        true
    }

    /// Takes the pending singleton slots, leaving the list empty.
    ///
    /// The scheduler consumes this exactly once, at the start of a run.
    pub(crate) fn take_pending(&mut self) -> Vec<SingletonSlot> {
        std::mem::take(&mut self.pending)
    }

    /// Sorts the live list in place under the scheduler's total order.
    ///
    /// The sort is stable; with the unique sequence tie-break it is also
    /// fully deterministic for a fixed registration order.
    pub(crate) fn sort(&mut self) {
        let view = self.snapshot();
        self.tasks.sort_by(|a, b| order::compare(a, b, &view));
    }

    /// Snapshot of the live list, in its current order.
    pub fn snapshot(&self) -> TaskSet {
        TaskSet::new(self.tasks.clone())
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True if no tasks are registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of singleton slots awaiting construction.
    pub fn pending_singletons(&self) -> usize {
        self.pending.len()
    }

    /// True iff every registered task has run.
    pub fn all_ran(&self) -> bool {
        self.tasks.iter().all(|e| e.ran())
    }
}
