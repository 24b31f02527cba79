#![forbid(unsafe_code)]
//! metatype: conversion descriptions for code-generated reflection
//!
//! Rust code that is generated at build time cannot discover at runtime how to read or write an arbitrary external
//! value type. metatype records that knowledge ahead of time: for each type, the source of five conversion closures
//! (parse, format, serialize, size, deserialize), a validation pattern, and the `use` dependencies the closures need.
//! A generator reads the frozen catalog and splices the closures into the code it emits.
//!
//! ## Crates
//!
//! - `metatype_core` - type descriptions, dependency declarations, the catalog
//! - `metatype_runtime` - what the conversion closures call at runtime
//! - `metatype` (this crate) - family registrars, the `conversion!` macro, configuration, the inspection CLI
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: use `.expect("INVARIANT: reason")` with a clear explanation.
//!
//! ## Examples
//! ```rust
//! use metatype::{CatalogConfig, build_catalog};
//!
//! let catalog = build_catalog(&CatalogConfig::default()).unwrap();
//! assert!(catalog.validate("metatype_runtime::linalg::Vec2", "(1, 2)").unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod conversion;
pub mod families;
pub mod inspect;

pub use config::CatalogConfig;
pub use conversion::{Conversion, ConversionSet, DynConversions};

use metatype_core::{CatalogError, FrozenCatalog};

/// Build the builtin catalog: run every family registrar, then freeze.
#[tracing::instrument(skip_all, fields(policy = config.duplicate_policy.as_str()))]
pub fn build_catalog(config: &CatalogConfig) -> Result<FrozenCatalog, CatalogError> {
    let mut catalog = config.catalog();
    families::register_builtin_families(&mut catalog)?;
    let frozen = catalog.freeze()?;
    tracing::info!(types = frozen.len(), "type catalog ready");
    Ok(frozen)
}
