//! # Dependencies: readiness gating and ordering hints.
//!
//! This module provides the dependency-related types:
//! - [`Dependency`] - the dual-contract predicate trait
//! - [`DepRef`] - shared reference to a dependency (`Arc<dyn Dependency>`)
//! - [`DepFn`] - closure-backed dependency for external conditions
//! - [`TaskDone`] - the built-in task-completion dependency
//! - [`KindCatalog`] - the closed kind-name → constructor map

mod catalog;
mod dep;
mod dep_fn;
mod task_done;

pub use catalog::{KindCatalog, KindCtor};
pub use dep::{DepRef, Dependency};
pub use dep_fn::DepFn;
pub use task_done::TaskDone;
