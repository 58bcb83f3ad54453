//! Scheduling events: the data model for observability.
//!
//! This module groups the event **data model** used to record what the
//! registry and the sweep loop are doing.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publishers**: `Scheduler` (registration, singleton materialization,
//!   sweep progress) and `TaskEntry::try_run` (per-task attempts).
//! - **Consumers**: everything implementing
//!   [`Subscribe`](crate::Subscribe), delivered synchronously through the
//!   [`SubscriberSet`](crate::SubscriberSet).

mod event;

pub use event::{Event, EventKind};
