//! # Scheduler: materialize singletons, sort once, sweep until done.
//!
//! The [`Scheduler`] owns the [`Registry`], the dependency
//! [`KindCatalog`](crate::KindCatalog), the [`SchedulerConfig`] and a
//! [`SubscriberSet`] for observability. Its [`run`](Scheduler::run) method
//! is the entry point of the whole boot sequence.
//!
//! ## High-level flow
//! ```text
//! Setup phase (single-threaded):
//!   scheduler.register(TaskSpec)            → live list, seq assigned
//!   scheduler.register_singleton(slot)      → pending list, key deduped
//!
//! scheduler.run():
//!   (1) materialize: every pending singleton slot builds its TaskSpec
//!       (given the kind catalog) and is registered; pending list cleared
//!   (2) sort the live list in place under the total order (core/order.rs)
//!   (3) sweep loop:
//!         for each task in sorted order with ran == false:
//!             all deps fulfilled?  → run() → ran = true
//!             otherwise            → leave for the next sweep
//!         all ran        → SchedulerFinished, Ok(())
//!         work remains   → SweepCompleted, sleep(poll_interval), repeat
//! ```
//!
//! ## Failure semantics
//! - No cycle detection: a circular or unsatisfiable dependency graph makes
//!   the loop poll forever, unless a sweep budget is configured.
//! - A task error is not caught here: it aborts the entire run. A
//!   boot-critical step failing should stop the boot sequence rather than
//!   continue in an unknown state.

use std::sync::Arc;

use crate::core::config::SchedulerConfig;
use crate::core::registry::Registry;
use crate::deps::KindCatalog;
use crate::error::SchedulerError;
use crate::events::{Event, EventKind};
use crate::subscribers::{Subscribe, SubscriberSet};
use crate::tasks::{EntryRef, SingletonSlot, TaskSpec};

/// Drives the sort-then-poll execution loop over the registered task set.
///
/// Construct one at process entry, thread it through setup, then call
/// [`run`](Scheduler::run) once.
pub struct Scheduler {
    cfg: SchedulerConfig,
    subs: SubscriberSet,
    catalog: KindCatalog,
    registry: Registry,
}

impl Scheduler {
    /// Creates a scheduler with the default kind catalog (the built-in
    /// `"task"` kind) and the provided subscribers.
    pub fn new(cfg: SchedulerConfig, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        Self {
            cfg,
            subs: SubscriberSet::new(subscribers),
            catalog: KindCatalog::default(),
            registry: Registry::new(),
        }
    }

    /// Replaces the kind catalog (e.g., to add domain-specific kinds).
    pub fn with_catalog(mut self, catalog: KindCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The dependency kind catalog.
    pub fn catalog(&self) -> &KindCatalog {
        &self.catalog
    }

    /// Mutable access to the catalog, for registering extra kinds.
    pub fn catalog_mut(&mut self) -> &mut KindCatalog {
        &mut self.catalog
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers a task and records the registration event.
    pub fn register(&mut self, spec: TaskSpec) -> EntryRef {
        let entry = self.registry.register(spec);
        self.subs
            .emit(&Event::new(EventKind::TaskRegistered).with_task(entry.name()));
        entry
    }

    /// Declares a singleton slot; construction is deferred to [`run`](Scheduler::run).
    ///
    /// Duplicate keys are ignored, so repeated declarations still yield
    /// exactly one instance.
    pub fn register_singleton(&mut self, slot: SingletonSlot) {
        let key: Arc<str> = slot.key().into();
        if self.registry.register_singleton(slot) {
            self.subs
                .emit(&Event::new(EventKind::SingletonPending).with_task(key));
        }
    }

    /// Runs the boot sequence to completion.
    ///
    /// Materializes pending singletons, sorts the task set, then sweeps it
    /// until every task has run. Returns the first task error encountered
    /// (fail-fast), a singleton construction failure, or — only when a sweep
    /// budget is configured — [`SchedulerError::BudgetExhausted`].
    pub async fn run(&mut self) -> Result<(), SchedulerError> {
        self.materialize_singletons()?;
        self.registry.sort();

        // Sorted order is fixed from here on; the snapshot doubles as the
        // lookup context for every dependency check.
        let tasks = self.registry.snapshot();

        let mut sweep: u64 = 0;
        loop {
            sweep += 1;
            let mut remaining = 0usize;

            for entry in tasks.entries() {
                if !entry.try_run(&tasks, &self.subs, sweep).await? {
                    remaining += 1;
                }
            }

            if remaining == 0 {
                self.subs
                    .emit(&Event::new(EventKind::SchedulerFinished).with_sweep(sweep));
                return Ok(());
            }

            if let Some(budget) = self.cfg.sweep_budget() {
                if sweep >= budget {
                    return Err(SchedulerError::BudgetExhausted { sweeps: sweep, remaining });
                }
            }

            self.subs.emit(
                &Event::new(EventKind::SweepCompleted)
                    .with_sweep(sweep)
                    .with_remaining(remaining)
                    .with_delay(self.cfg.poll_interval),
            );
            tokio::time::sleep(self.cfg.poll_interval).await;
        }
    }

    /// Builds exactly one instance per pending singleton slot and clears
    /// the pending list.
    fn materialize_singletons(&mut self) -> Result<(), SchedulerError> {
        for slot in self.registry.take_pending() {
            let key = slot.key().to_string();
            let spec = slot
                .build(&self.catalog)
                .map_err(|source| SchedulerError::Singleton { key, source })?;
            let entry = self.registry.register(spec);
            self.subs
                .emit(&Event::new(EventKind::SingletonBuilt).with_task(entry.name()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::DepFn;
    use crate::error::TaskError;
    use crate::tasks::TaskFn;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records each task's `run()` in invocation order.
    struct RunLog(Arc<Mutex<Vec<String>>>);

    impl RunLog {
        fn new() -> Self {
            Self(Arc::new(Mutex::new(Vec::new())))
        }

        fn task(&self, name: &'static str) -> TaskSpec {
            let log = self.0.clone();
            TaskSpec::new(TaskFn::arc(name, move || {
                let log = log.clone();
                async move {
                    log.lock().unwrap().push(name.to_string());
                    Ok::<_, TaskError>(())
                }
            }))
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    type Recorded = (EventKind, Option<String>, Option<u64>, Option<String>);

    /// Captures emitted events for assertions on sweeps and ordering.
    struct Recorder(Arc<Mutex<Vec<Recorded>>>);

    impl Subscribe for Recorder {
        fn on_event(&self, e: &Event) {
            self.0.lock().unwrap().push((
                e.kind,
                e.task.as_deref().map(str::to_string),
                e.sweep,
                e.reason.as_deref().map(str::to_string),
            ));
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    fn scheduler() -> Scheduler {
        Scheduler::new(SchedulerConfig::default(), Vec::new())
    }

    #[tokio::test]
    async fn test_task_without_deps_runs_in_first_sweep() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut sched = Scheduler::new(
            SchedulerConfig::default(),
            vec![Arc::new(Recorder(events.clone())) as _],
        );

        let log = RunLog::new();
        let entry = sched.register(log.task("console"));
        sched.run().await.unwrap();

        assert!(entry.ran());
        assert_eq!(log.entries(), vec!["console"]);

        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|(k, t, s, _)| *k == EventKind::TaskStarting
                && t.as_deref() == Some("console")
                && *s == Some(1)));
        assert!(events
            .iter()
            .any(|(k, ..)| *k == EventKind::SchedulerFinished));
    }

    #[tokio::test]
    async fn test_dependent_registered_first_still_runs_second() {
        let mut sched = scheduler();
        let log = RunLog::new();

        // B (depends on A, priority 0) registered before A (no deps).
        let b = log
            .task("b")
            .with_dependency("task", &["a"], sched.catalog())
            .unwrap();
        sched.register(b);
        sched.register(log.task("a"));

        sched.run().await.unwrap();
        assert_eq!(log.entries(), vec!["a", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_condition_delays_until_third_sweep() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut sched = Scheduler::new(
            SchedulerConfig::default(),
            vec![Arc::new(Recorder(events.clone())) as _],
        );

        // Checked once per sweep; false for the first two checks.
        let checks = Arc::new(AtomicU32::new(0));
        let checks2 = checks.clone();
        let dep = DepFn::arc(move |_| checks2.fetch_add(1, Ordering::SeqCst) >= 2);

        let log = RunLog::new();
        sched.register(log.task("mount-var").with_dep(dep));
        sched.run().await.unwrap();

        assert_eq!(log.entries(), vec!["mount-var"]);
        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|(k, _, s, _)| *k == EventKind::TaskStarting && *s == Some(3)));
        assert!(events
            .iter()
            .any(|(k, _, s, _)| *k == EventKind::TaskWaiting && *s == Some(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_invoked_at_most_once_across_sweeps() {
        let mut sched = scheduler();

        let runs = Arc::new(AtomicU32::new(0));
        let runs2 = runs.clone();
        let early = TaskSpec::new(TaskFn::arc("early", move || {
            let runs = runs2.clone();
            async move {
                runs.fetch_add(1, Ordering::SeqCst);
                Ok::<_, TaskError>(())
            }
        }));

        // Forces two extra sweeps after "early" has already run.
        let checks = Arc::new(AtomicU32::new(0));
        let checks2 = checks.clone();
        let log = RunLog::new();
        let slow = log
            .task("slow")
            .with_dep(DepFn::arc(move |_| {
                checks2.fetch_add(1, Ordering::SeqCst) >= 2
            }));

        sched.register(early);
        sched.register(slow);
        sched.run().await.unwrap();

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(log.entries(), vec!["slow"]);
    }

    #[tokio::test]
    async fn test_task_failure_aborts_the_run() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut sched = Scheduler::new(
            SchedulerConfig::default(),
            vec![Arc::new(Recorder(events.clone())) as _],
        );
        let log = RunLog::new();

        let doomed = TaskSpec::new(TaskFn::arc("doomed", || async {
            Err::<(), _>(TaskError::fail("no such device"))
        }))
        .with_priority(-1);
        sched.register(doomed);
        let survivor = sched.register(log.task("survivor"));

        let err = sched.run().await.unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::TaskFailed { ref task, .. } if task == "doomed"
        ));
        assert_eq!(err.as_label(), "sched_task_failed");
        // Fail-fast: the rest of the sweep never happened.
        assert!(!survivor.ran());
        assert!(log.entries().is_empty());

        // The failure shows up in the event stream with its error detail.
        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|(k, t, s, r)| *k == EventKind::TaskFailed
                && t.as_deref() == Some("doomed")
                && *s == Some(1)
                && r.as_deref() == Some("error: no such device")));
        assert!(!events
            .iter()
            .any(|(k, ..)| *k == EventKind::SchedulerFinished));
    }

    #[tokio::test]
    async fn test_singleton_declared_twice_builds_once() {
        let mut sched = scheduler();
        let built = Arc::new(AtomicU32::new(0));
        let log = RunLog::new();

        for _ in 0..2 {
            let built = built.clone();
            let log_task = log.task("udev-settle");
            sched.register_singleton(SingletonSlot::new("udev-settle", move |_catalog| {
                built.fetch_add(1, Ordering::SeqCst);
                Ok(log_task)
            }));
        }

        assert_eq!(sched.registry().pending_singletons(), 1);
        assert_eq!(sched.registry().len(), 0);

        sched.run().await.unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert_eq!(sched.registry().len(), 1);
        assert_eq!(log.entries(), vec!["udev-settle"]);
    }

    #[tokio::test]
    async fn test_singletons_materialize_before_the_sort() {
        let mut sched = scheduler();
        let log = RunLog::new();

        // Ordinary task depends on a singleton that does not exist yet.
        let dependent = log
            .task("ifup")
            .with_dependency("task", &["netdev"], sched.catalog())
            .unwrap();
        sched.register(dependent);

        let netdev = log.task("netdev");
        sched.register_singleton(SingletonSlot::new("netdev", move |_| Ok(netdev)));

        sched.run().await.unwrap();
        assert_eq!(log.entries(), vec!["netdev", "ifup"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_budget_reports_remaining_work() {
        let mut sched = Scheduler::new(
            SchedulerConfig {
                poll_interval: Duration::from_millis(10),
                max_sweeps: 2,
            },
            Vec::new(),
        );

        let log = RunLog::new();
        sched.register(log.task("stuck").with_dep(DepFn::arc(|_| false)));
        sched.register(log.task("fine"));

        let err = sched.run().await.unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::BudgetExhausted {
                sweeps: 2,
                remaining: 1
            }
        ));
        // The satisfiable task still ran.
        assert_eq!(log.entries(), vec!["fine"]);
    }

    #[tokio::test]
    async fn test_empty_registry_finishes_immediately() {
        let mut sched = scheduler();
        sched.run().await.unwrap();
        assert!(sched.registry().all_ran());
    }
}
