//! # Dependency kind catalog.
//!
//! [`KindCatalog`] is the closed map from a symbolic kind name to a
//! constructor taking positional arguments. It replaces open-ended
//! reflection with an explicit factory: looking up a kind that was never
//! registered returns a typed [`DependencyError::UnknownKind`], and
//! constructors validate their argument count with
//! [`DependencyError::BadArity`].
//!
//! The default catalog knows one kind, `"task"` (one argument: the target
//! task name). Domain-specific kinds — files, devices, mounts — are plugins:
//! register them with [`KindCatalog::register`].
//!
//! ## Example
//! ```rust
//! use bootvisor::{DepFn, KindCatalog, DependencyError};
//!
//! let mut catalog = KindCatalog::default();
//! catalog.register("file", |args| {
//!     let [path] = args else {
//!         return Err(DependencyError::BadArity {
//!             kind: "file".into(),
//!             expected: 1,
//!             got: args.len(),
//!         });
//!     };
//!     let path = std::path::PathBuf::from(path);
//!     Ok(DepFn::arc(move |_| path.exists()))
//! });
//!
//! assert!(catalog.build("file", &["/etc/fstab"]).is_ok());
//! assert!(catalog.build("device", &["/dev/sda"]).is_err());
//! ```

use std::collections::HashMap;

use crate::deps::dep::DepRef;
use crate::deps::task_done::TaskDone;
use crate::error::DependencyError;

/// Constructor for one dependency kind: positional string arguments in,
/// shared dependency handle out.
pub type KindCtor = Box<dyn Fn(&[&str]) -> Result<DepRef, DependencyError> + Send + Sync>;

/// Closed map from kind name to dependency constructor.
pub struct KindCatalog {
    kinds: HashMap<String, KindCtor>,
}

impl KindCatalog {
    /// Creates an empty catalog with no kinds at all.
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Registers a constructor under the given kind name, replacing any
    /// previous one.
    pub fn register<F>(&mut self, kind: impl Into<String>, ctor: F)
    where
        F: Fn(&[&str]) -> Result<DepRef, DependencyError> + Send + Sync + 'static,
    {
        self.kinds.insert(kind.into(), Box::new(ctor));
    }

    /// Whether the given kind is known.
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Looks up `kind` and constructs a dependency with the given positional
    /// arguments.
    pub fn build(&self, kind: &str, args: &[&str]) -> Result<DepRef, DependencyError> {
        let ctor = self
            .kinds
            .get(kind)
            .ok_or_else(|| DependencyError::UnknownKind {
                kind: kind.to_string(),
            })?;
        ctor(args)
    }
}

impl Default for KindCatalog {
    /// Catalog with the built-in `"task"` kind: one argument, the name of
    /// the task whose completion is waited on.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.register("task", |args| {
            let [target] = args else {
                return Err(DependencyError::BadArity {
                    kind: "task".into(),
                    expected: 1,
                    got: args.len(),
                });
            };
            Ok(TaskDone::arc(*target))
        });
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::DepFn;

    #[test]
    fn test_unknown_kind_is_a_typed_error() {
        let catalog = KindCatalog::default();
        let err = catalog.build("mount", &["/var"]).map(|_| ()).unwrap_err();
        assert!(matches!(err, DependencyError::UnknownKind { ref kind } if kind == "mount"));
        assert_eq!(err.as_label(), "dep_unknown_kind");
    }

    #[test]
    fn test_task_kind_checks_arity() {
        let catalog = KindCatalog::default();
        assert!(catalog.build("task", &["a"]).is_ok());

        let err = catalog.build("task", &[]).map(|_| ()).unwrap_err();
        assert!(matches!(
            err,
            DependencyError::BadArity {
                expected: 1,
                got: 0,
                ..
            }
        ));
        let err = catalog.build("task", &["a", "b"]).map(|_| ()).unwrap_err();
        assert!(matches!(err, DependencyError::BadArity { got: 2, .. }));
    }

    #[test]
    fn test_registered_kind_is_buildable() {
        let mut catalog = KindCatalog::empty();
        assert!(!catalog.contains("always"));

        catalog.register("always", |_args| Ok(DepFn::arc(|_| true)));
        assert!(catalog.contains("always"));
        assert!(catalog.build("always", &[]).is_ok());
    }
}
