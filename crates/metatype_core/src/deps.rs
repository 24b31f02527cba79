//! Dependency declarations: what a description's fragments need in scope to compile.
//!
//! A [`Dependency`] is an immutable `(path, kind)` pair. Equal pairs are interchangeable, so consumers deduplicate
//! them per output unit with [`dedup_dependencies`].
//!
//! ## Examples
//! ```rust
//! use metatype_core::deps::{Dependency, dedup_dependencies};
//!
//! let runtime = Dependency::system("metatype_runtime::wire").unwrap();
//! let local = Dependency::local("types::Celsius").unwrap();
//!
//! assert_eq!(runtime.to_string(), "use ::metatype_runtime::wire;");
//! assert_eq!(local.use_path(), "crate::types::Celsius");
//!
//! let unique = dedup_dependencies([runtime.clone(), local.clone(), runtime.clone()]);
//! assert_eq!(unique, vec![runtime, local]);
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::errors::CatalogError;

/// How a dependency path is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum DependencyKind {
    /// Resolved from the extern prelude (another crate): `use ::path;`.
    System,
    /// Resolved relative to the generated crate's root: `use crate::path;`.
    Local,
}

/// One compile-time dependency of a type description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dependency {
    path: String,
    kind: DependencyKind,
}

impl Dependency {
    /// Declare a dependency.
    ///
    /// ## Errors
    /// - [`CatalogError::EmptyDependencyPath`] if `path` is empty or whitespace.
    ///
    /// ## Notes
    /// - Whether `path` resolves is the generator's concern, not checked here.
    pub fn new(path: impl Into<String>, kind: DependencyKind) -> Result<Self, CatalogError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(CatalogError::EmptyDependencyPath);
        }
        Ok(Self { path, kind })
    }

    pub fn system(path: impl Into<String>) -> Result<Self, CatalogError> {
        Self::new(path, DependencyKind::System)
    }

    pub fn local(path: impl Into<String>) -> Result<Self, CatalogError> {
        Self::new(path, DependencyKind::Local)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// Path as it appears in a `use` item, qualified by [`kind`](Self::kind).
    pub fn use_path(&self) -> String {
        match self.kind {
            DependencyKind::System => format!("::{}", self.path),
            DependencyKind::Local => format!("crate::{}", self.path),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "use {};", self.use_path())
    }
}

/// Deduplicate dependencies, keeping the first occurrence of each and preserving order.
pub fn dedup_dependencies<I>(deps: I) -> Vec<Dependency>
where
    I: IntoIterator<Item = Dependency>,
{
    let mut seen = HashSet::new();
    deps.into_iter().filter(|dep| seen.insert(dep.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(Dependency::system(""), Err(CatalogError::EmptyDependencyPath)));
        assert!(matches!(Dependency::local("  "), Err(CatalogError::EmptyDependencyPath)));
    }

    #[test]
    fn kind_is_part_of_identity() {
        let a = Dependency::system("geo::Point").unwrap();
        let b = Dependency::local("geo::Point").unwrap();
        assert_ne!(a, b);
        assert_eq!(dedup_dependencies([a.clone(), b.clone(), a.clone()]), vec![a, b]);
    }

    #[test]
    fn display_renders_use_item() {
        let dep = Dependency::local("units").unwrap();
        assert_eq!(dep.to_string(), "use crate::units;");
    }
}
