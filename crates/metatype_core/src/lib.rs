//! Type descriptions and the type catalog for metatype.
//!
//! A [`TypeDescription`] records, for one value type, the source text of five conversion closures (parse, format,
//! serialize, size, deserialize), a validation pattern for candidate text, and the dependencies those closures need.
//! Descriptions are collected into a [`TypeCatalog`] during a tool's startup phase and frozen into a
//! [`FrozenCatalog`] that a code generator reads.
//!
//! ## Notes
//!
//! - This is a data catalog: fragments are opaque text. Nothing here executes, parses or type-checks them.
//! - The catalog has two phases. [`TypeCatalog`] is the open, insert-only phase borrowed mutably by registrars;
//!   [`TypeCatalog::freeze`] consumes it into a read-only, shareable [`FrozenCatalog`].
//! - [`catalog::install`] optionally publishes one frozen catalog process-wide. It succeeds at most once.
//!
//! ## Examples
//! ```rust
//! use metatype_core::{Dependency, TypeCatalog, TypeDescription};
//!
//! let mut desc = TypeDescription::new(
//!     "Celsius",
//!     "|s: &str| s.trim().parse::<f64>().map(Celsius)",
//!     "|v: &Celsius| v.0.to_string()",
//!     "|v: &Celsius| v.0.to_le_bytes().to_vec()",
//!     "|_v: &Celsius| 8usize",
//!     "|b: &[u8]| Celsius(f64::from_le_bytes(b[..8].try_into().unwrap()))",
//!     r"\s*-?[0-9]+(\.[0-9]+)?\s*",
//! );
//! desc.push_dependency(Dependency::local("units::Celsius").unwrap());
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.add_new_concrete_type(desc).unwrap();
//! let frozen = catalog.freeze().unwrap();
//!
//! assert!(frozen.validate("Celsius", " 21.5 ").unwrap());
//! assert!(!frozen.validate("Celsius", "warm").unwrap());
//! ```

pub mod catalog;
pub mod deps;
pub mod description;
pub mod errors;
pub mod fragments;

pub use catalog::{CatalogEntry, DuplicatePolicy, FrozenCatalog, TypeCatalog};
pub use deps::{Dependency, DependencyKind, dedup_dependencies};
pub use description::{Fragments, TypeDescription};
pub use errors::CatalogError;
pub use fragments::{FRAGMENT_KINDS, FragmentKind, FragmentKindInfo};
