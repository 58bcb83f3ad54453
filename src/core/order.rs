//! # The total order over registered tasks.
//!
//! The registry sorts its live list once, at scheduler start, with this
//! comparator. The order is:
//!
//! 1. If `b` transitively depends on `a`, `a` sorts first.
//! 2. Else if `a` transitively depends on `b`, `a` sorts last.
//! 3. Else by priority, ascending.
//! 4. Else by task name, ascending lexicographic.
//! 5. Else by registration sequence number — stable, unique and assigned at
//!    registration, so the same registration order always produces the same
//!    schedule. Memory identity is never consulted.
//!
//! The dependency checks make this a valid total order only for acyclic
//! ordering hints; a cyclic graph yields undefined sort behavior (explicit
//! caveat, not handled).

use std::cmp::Ordering;

use crate::tasks::{TaskEntry, TaskSet};

/// Compares two entries under the scheduler's total order.
///
/// `tasks` is the lookup context for transitive dependency resolution.
pub(crate) fn compare(a: &TaskEntry, b: &TaskEntry, tasks: &TaskSet) -> Ordering {
    if b.depends_on(a, tasks) {
        return Ordering::Less;
    }
    if a.depends_on(b, tasks) {
        return Ordering::Greater;
    }
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| a.seq().cmp(&b.seq()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Registry;
    use crate::deps::KindCatalog;
    use crate::error::TaskError;
    use crate::tasks::{TaskFn, TaskSpec};

    fn noop(name: &'static str) -> TaskSpec {
        TaskSpec::new(TaskFn::arc(name, || async { Ok::<_, TaskError>(()) }))
    }

    #[test]
    fn test_dependent_sorts_after_its_dependency() {
        let catalog = KindCatalog::default();
        let mut reg = Registry::new();
        // Register the dependent first; registration order must not matter.
        let b = reg.register(noop("b").with_dependency("task", &["a"], &catalog).unwrap());
        let a = reg.register(noop("a"));
        let tasks = reg.snapshot();

        assert_eq!(compare(&a, &b, &tasks), Ordering::Less);
        assert_eq!(compare(&b, &a, &tasks), Ordering::Greater);
    }

    #[test]
    fn test_transitive_dependency_orders_across_a_chain() {
        let catalog = KindCatalog::default();
        let mut reg = Registry::new();
        let c = reg.register(noop("c").with_dependency("task", &["b"], &catalog).unwrap());
        let b = reg.register(noop("b").with_dependency("task", &["a"], &catalog).unwrap());
        let a = reg.register(noop("a"));
        let tasks = reg.snapshot();

        // c -> b -> a, so a precedes c even with no direct edge.
        assert_eq!(compare(&a, &c, &tasks), Ordering::Less);
        assert_eq!(compare(&c, &a, &tasks), Ordering::Greater);
        assert_eq!(compare(&b, &c, &tasks), Ordering::Less);
    }

    #[test]
    fn test_priority_breaks_unrelated_ties() {
        let mut reg = Registry::new();
        let late = reg.register(noop("zz").with_priority(10));
        let early = reg.register(noop("aa").with_priority(-10));
        let tasks = reg.snapshot();

        assert_eq!(compare(&early, &late, &tasks), Ordering::Less);
    }

    #[test]
    fn test_name_then_seq_break_remaining_ties() {
        let mut reg = Registry::new();
        let b = reg.register(noop("b"));
        let a = reg.register(noop("a"));
        let a2 = reg.register(noop("a"));
        let tasks = reg.snapshot();

        assert_eq!(compare(&a, &b, &tasks), Ordering::Less);
        // Same priority, same name: earlier registration wins.
        assert_eq!(compare(&a, &a2, &tasks), Ordering::Less);
        assert_eq!(compare(&a2, &a, &tasks), Ordering::Greater);
    }

    #[test]
    fn test_sort_is_deterministic_for_a_fixed_registration_order() {
        let catalog = KindCatalog::default();

        let build = || {
            let mut reg = Registry::new();
            reg.register(noop("net").with_dependency("task", &["modules"], &catalog).unwrap());
            reg.register(noop("modules"));
            reg.register(noop("swap").with_priority(5));
            reg.register(noop("console"));
            reg.sort();
            reg.snapshot()
                .entries()
                .iter()
                .map(|e| e.name().to_string())
                .collect::<Vec<_>>()
        };

        let first = build();
        let second = build();
        assert_eq!(first, second);
        assert_eq!(first, vec!["console", "modules", "net", "swap"]);
    }
}
