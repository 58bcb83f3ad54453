//! # SubscriberSet: ordered fan-out over multiple subscribers.
//!
//! [`SubscriberSet`] distributes each [`Event`](crate::events::Event) to
//! every subscriber, synchronously and in emission order.
//!
//! ## What it guarantees
//! - Subscribers see events in the exact order they were emitted.
//! - A panic inside one subscriber is caught and reported; the event still
//!   reaches the remaining subscribers.
//!
//! ## What it does **not** guarantee
//! - No isolation from slow subscribers: a blocking `on_event` delays the
//!   sweep that emitted the event.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use bootvisor::{Event, EventKind, Subscribe, SubscriberSet};
//!
//! struct Printer;
//! impl Subscribe for Printer {
//!     fn on_event(&self, ev: &Event) { let _ = ev; /* println! ... */ }
//!     fn name(&self) -> &'static str { "printer" }
//! }
//!
//! let set = SubscriberSet::new(vec![Arc::new(Printer) as _]);
//! set.emit(&Event::new(EventKind::TaskRegistered).with_task("demo"));
//! ```

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use crate::events::Event;

use super::Subscribe;

/// Composite fan-out that delivers events to all subscribers in order.
pub struct SubscriberSet {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a new set from the given subscribers.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Delivers one event to every subscriber.
    ///
    /// A panicking subscriber is reported to stderr by name; delivery
    /// continues with the next subscriber.
    pub fn emit(&self, event: &Event) {
        for sub in &self.subs {
            let result = std::panic::catch_unwind(AssertUnwindSafe(|| sub.on_event(event)));
            if let Err(panic_err) = result {
                eprintln!(
                    "[bootvisor] subscriber '{}' panicked: {:?}",
                    sub.name(),
                    panic_err
                );
            }
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subs.len()
    }
}
