//! # Scheduler configuration.
//!
//! Provides [`SchedulerConfig`], the settings for one scheduling run.
//!
//! ## Sentinel values
//! - `max_sweeps = 0` → unlimited (the faithful boot-scheduler behavior: an
//!   unsatisfiable dependency graph stalls forever rather than giving up)

use std::time::Duration;

/// Configuration for the sweep loop.
///
/// ## Field semantics
/// - `poll_interval`: pause between sweeps when tasks remain unrun. Coarse,
///   global backoff — readiness is discovered only by re-polling, there is
///   no event-driven wakeup.
/// - `max_sweeps`: sweep budget (`0` = unlimited). When non-zero, the run
///   aborts with [`SchedulerError::BudgetExhausted`](crate::SchedulerError)
///   after that many full sweeps still leave tasks unrun. Off by default;
///   turning it on trades the stall-forever guarantee for testability.
#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    /// Pause between sweeps when work remains.
    pub poll_interval: Duration,

    /// Maximum number of full sweeps before giving up.
    ///
    /// - `0` = unlimited (poll until every task has run)
    /// - `n > 0` = abort after `n` sweeps with tasks still unrun
    pub max_sweeps: u64,
}

impl SchedulerConfig {
    /// Returns the sweep budget as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → abort after `n` sweeps
    #[inline]
    pub fn sweep_budget(&self) -> Option<u64> {
        if self.max_sweeps == 0 {
            None
        } else {
            Some(self.max_sweeps)
        }
    }
}

impl Default for SchedulerConfig {
    /// Default configuration:
    ///
    /// - `poll_interval = 1s` (coarse re-check interval)
    /// - `max_sweeps = 0` (poll forever)
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            max_sweeps: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_sweeps_means_unlimited() {
        let cfg = SchedulerConfig::default();
        assert_eq!(cfg.sweep_budget(), None);

        let cfg = SchedulerConfig {
            max_sweeps: 5,
            ..SchedulerConfig::default()
        };
        assert_eq!(cfg.sweep_budget(), Some(5));
    }
}
