//! Scheduling core: registry, total order, and the sweep loop.
//!
//! Internal modules:
//! - [`config`]: sweep interval and optional sweep budget;
//! - [`order`]: the comparator defining the total order over tasks;
//! - [`registry`]: the live task list and pending singleton slots;
//! - [`scheduler`]: materialize → sort → poll-until-done.

mod config;
mod order;
mod registry;
mod scheduler;

pub use config::SchedulerConfig;
pub use registry::Registry;
pub use scheduler::Scheduler;
