//! # Event subscribers for the bootvisor scheduler.
//!
//! This module provides the [`Subscribe`] trait, the ordered fan-out
//! [`SubscriberSet`], and a built-in stdout logger.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Scheduler / TaskEntry ── emit(&Event) ──► SubscriberSet
//!                                                 │ (synchronous, in order)
//!                                            ┌────┴────┬─────────┐
//!                                            ▼         ▼         ▼
//!                                         LogWriter  Probe    Custom ...
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** - observe and react to events (logging, boot
//!   progress display)
//! - **Stateful subscribers** - record event streams for later inspection
//!   (the test suite uses one to assert run order)

mod set;
mod subscriber;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscriber::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
