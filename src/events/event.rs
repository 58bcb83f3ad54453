//! # Scheduling events emitted by the registry and the sweep loop.
//!
//! [`EventKind`] classifies event types across three categories:
//! - **Registration events**: tasks entering the registry, singleton slots
//!   pending and being built.
//! - **Sweep events**: a task waiting on dependencies, starting, finishing,
//!   or failing.
//! - **Terminal events**: a sweep ending with work left over, the whole
//!   schedule completing.
//!
//! The [`Event`] struct carries additional metadata such as timestamps, task
//! names, sweep numbers and backoff delays.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Delivery through the
//! [`SubscriberSet`](crate::SubscriberSet) is synchronous, so subscribers
//! observe events in emission order.
//!
//! ## Example
//! ```rust
//! use bootvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::TaskStarting).with_task("mount-root");
//!
//! assert_eq!(ev.kind, EventKind::TaskStarting);
//! assert_eq!(ev.task.as_deref(), Some("mount-root"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of scheduling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Registration events ===
    /// A task was registered into the live list.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskRegistered,

    /// A singleton slot was declared and is awaiting construction.
    ///
    /// Sets:
    /// - `task`: singleton key
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SingletonPending,

    /// A pending singleton slot was materialized into a registered task.
    ///
    /// Emitted by the scheduler at the start of a run, before the sort.
    ///
    /// Sets:
    /// - `task`: task name of the constructed instance
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SingletonBuilt,

    // === Sweep events ===
    /// A task was visited during a sweep but its dependencies do not all
    /// hold yet; it is left for the next sweep.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `sweep`: current sweep number (1-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskWaiting,

    /// A task's dependencies all hold and its `run()` is about to be invoked.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `sweep`: current sweep number (1-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskStarting,

    /// A task's `run()` returned successfully and its `ran` flag flipped.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `sweep`: current sweep number (1-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskFinished,

    /// A task's `run()` returned an error; the whole run is about to abort.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `reason`: human-readable error detail
    /// - `sweep`: current sweep number (1-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskFailed,

    // === Terminal events ===
    /// A full sweep finished with tasks still unrun; the loop pauses before
    /// re-polling.
    ///
    /// Sets:
    /// - `sweep`: sweep number just completed (1-based)
    /// - `remaining`: number of tasks still unrun
    /// - `delay_ms`: pause before the next sweep (ms)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SweepCompleted,

    /// Every registered task has run; the scheduler is done.
    ///
    /// Sets:
    /// - `sweep`: number of sweeps it took
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SchedulerFinished,
}

/// Scheduling event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Name of the task (or singleton key), if applicable.
    pub task: Option<Arc<str>>,
    /// Human-readable reason or detail, if applicable.
    pub reason: Option<Arc<str>>,
    /// Sweep number, if applicable (1-based).
    pub sweep: Option<u64>,
    /// Number of tasks still unrun, if applicable.
    pub remaining: Option<usize>,
    /// Pause before the next sweep in milliseconds (compact).
    pub delay_ms: Option<u32>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            task: None,
            reason: None,
            sweep: None,
            remaining: None,
            delay_ms: None,
        }
    }

    /// Attaches a task name (or singleton key).
    #[inline]
    pub fn with_task(mut self, task: impl Into<Arc<str>>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a sweep number.
    #[inline]
    pub fn with_sweep(mut self, sweep: u64) -> Self {
        self.sweep = Some(sweep);
        self
    }

    /// Attaches a count of tasks still unrun.
    #[inline]
    pub fn with_remaining(mut self, remaining: usize) -> Self {
        self.remaining = Some(remaining);
        self
    }

    /// Attaches a sweep pause duration (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }
}
