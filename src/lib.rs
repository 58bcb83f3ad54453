//! # bootvisor
//!
//! **Bootvisor** is a boot-time task scheduler for Rust.
//!
//! It runs a set of discrete tasks exactly once each, in an order consistent
//! with their declared dependencies, where dependency satisfaction (device
//! nodes appearing, filesystems mounting, other tasks finishing) is not
//! knowable up front and must be polled. The crate is designed as the
//! sequencing core of an init process or image bring-up tool; the concrete
//! task bodies and external-condition checks are plugins.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌───────────────────┐
//!     │   TaskSpec   │   │   TaskSpec   │   │   SingletonSlot   │
//!     │ (task + deps)│   │ (task + deps)│   │ (deferred build)  │
//!     └──────┬───────┘   └──────┬───────┘   └─────────┬─────────┘
//!            ▼                  ▼                     ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Scheduler                                                    │
//! │  - Registry (live list + pending singletons, seq numbers)     │
//! │  - KindCatalog (dependency kind → constructor)                │
//! │  - SubscriberSet (ordered fan-out of events)                  │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                ▼
//!                           run():
//!                             materialize singletons (once per key)
//!                             sort (deps → priority → name → seq)
//!                             loop {
//!                               for task in sorted order, unrun:
//!                                 deps fulfilled? → run(), ran = true
//!                               all ran → done
//!                               sleep(poll_interval)
//!                             }
//! ```
//!
//! ## Properties
//! | Area            | Description                                               | Key types / traits                  |
//! |-----------------|-----------------------------------------------------------|-------------------------------------|
//! | **Exactly once**| `ran` flips false→true once; `run()` never re-invoked.    | [`TaskEntry`]                       |
//! | **Ordering**    | Deterministic total order with a registration tie-break.  | [`TaskSpec`], [`Registry`]          |
//! | **Gating**      | Tasks run only when every dependency currently holds.     | [`Dependency`], [`DepFn`], [`TaskDone`] |
//! | **Polling**     | Coarse fixed-interval re-check; no event-driven wakeup.   | [`SchedulerConfig`]                 |
//! | **Fail-fast**   | A task error aborts the whole run.                        | [`TaskError`], [`SchedulerError`]   |
//! | **Observability**| Ordered event stream for logging sinks.                  | [`Event`], [`Subscribe`]            |
//!
//! An unsatisfiable dependency graph stalls the loop forever: the scheduler
//! keeps polling rather than giving up on a sequence that must eventually
//! complete. An optional sweep budget ([`SchedulerConfig::max_sweeps`])
//! trades that guarantee for testability.
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use bootvisor::{Scheduler, SchedulerConfig, TaskError, TaskFn, TaskSpec};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut sched = Scheduler::new(SchedulerConfig::default(), Vec::new());
//!
//!     let modules = TaskSpec::new(TaskFn::arc("load-modules", || async {
//!         Ok::<_, TaskError>(())
//!     }));
//!     sched.register(modules);
//!
//!     // Runs only after "load-modules" has finished.
//!     let root = TaskSpec::new(TaskFn::arc("mount-root", || async {
//!         Ok::<_, TaskError>(())
//!     }))
//!     .with_dependency("task", &["load-modules"], sched.catalog())?;
//!     sched.register(root);
//!
//!     sched.run().await?;
//!     Ok(())
//! }
//! ```

mod core;
mod deps;
mod error;
mod events;
mod subscribers;
mod tasks;

// ---- Public re-exports ----

pub use crate::core::{Registry, Scheduler, SchedulerConfig};
pub use crate::deps::{DepFn, DepRef, Dependency, KindCatalog, KindCtor, TaskDone};
pub use crate::error::{DependencyError, SchedulerError, TaskError};
pub use crate::events::{Event, EventKind};
pub use crate::subscribers::{Subscribe, SubscriberSet};
pub use crate::tasks::{
    EntryRef, SingletonFactory, SingletonSlot, Task, TaskEntry, TaskFn, TaskRef, TaskSet, TaskSpec,
};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use crate::subscribers::LogWriter;
