//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [registered] task=mount-root
//! [singleton-pending] key=udev-settle
//! [singleton-built] task=udev-settle
//! [waiting] task=mount-root sweep=2
//! [starting] task=mount-root sweep=3
//! [finished] task=mount-root sweep=3
//! [failed] task=mount-root sweep=3 reason="error: no such device"
//! [sweep] n=3 remaining=1 delay=1000ms
//! [done] sweeps=4
//! ```

use crate::events::{Event, EventKind};
use crate::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable event
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] to
/// route events into a real boot console or structured log.
pub struct LogWriter;

impl Subscribe for LogWriter {
    fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::TaskRegistered => {
                println!("[registered] task={:?}", e.task);
            }
            EventKind::SingletonPending => {
                println!("[singleton-pending] key={:?}", e.task);
            }
            EventKind::SingletonBuilt => {
                println!("[singleton-built] task={:?}", e.task);
            }
            EventKind::TaskWaiting => {
                println!("[waiting] task={:?} sweep={:?}", e.task, e.sweep);
            }
            EventKind::TaskStarting => {
                println!("[starting] task={:?} sweep={:?}", e.task, e.sweep);
            }
            EventKind::TaskFinished => {
                println!("[finished] task={:?} sweep={:?}", e.task, e.sweep);
            }
            EventKind::TaskFailed => {
                println!(
                    "[failed] task={:?} sweep={:?} reason={:?}",
                    e.task, e.sweep, e.reason
                );
            }
            EventKind::SweepCompleted => {
                println!(
                    "[sweep] n={:?} remaining={:?} delay={:?}ms",
                    e.sweep, e.remaining, e.delay_ms
                );
            }
            EventKind::SchedulerFinished => {
                println!("[done] sweeps={:?}", e.sweep);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
