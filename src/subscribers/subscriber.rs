//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], an extension point for plugging custom event
//! handlers into the scheduler (logging sinks, progress reporters, test
//! probes).
//!
//! Delivery is synchronous and in emission order: the scheduler is a single
//! logical thread of control, and a boot log is only useful if its lines
//! interleave correctly with the sweep that produced them.
//!
//! ## Rules
//! - `on_event` runs inline in the scheduling thread; keep it cheap.
//! - Handle errors internally; do not panic. Panics are caught and reported
//!   to stderr so a broken sink cannot abort the boot sequence.
//!
//! ## Example
//! ```rust
//! use bootvisor::{Event, EventKind, Subscribe};
//!
//! struct Progress;
//!
//! impl Subscribe for Progress {
//!     fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::TaskFinished) {
//!             // tick a progress bar, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "progress" }
//! }
//! ```

use crate::events::Event;

/// Event subscriber for scheduler observability.
///
/// Implementations receive every [`Event`] the scheduler emits, in order,
/// on the scheduling thread.
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called inline from the scheduling thread; long blocking work here
    /// delays the sweep.
    fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in panic reports.
    ///
    /// Prefer short, descriptive names (e.g., "log", "progress"). The
    /// default uses `type_name::<Self>()`, which can be verbose - override
    /// it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
