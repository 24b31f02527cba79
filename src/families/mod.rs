//! Family registrars.
//!
//! A family registrar is a plain procedure: it builds the descriptions for a group of related types, attaches their
//! shared dependencies, and inserts them into a [`TypeCatalog`]. New families get a submodule here and a line in
//! [`register_builtin_families`].

pub mod linalg;

use metatype_core::{CatalogError, TypeCatalog};

use crate::conversion::DynConversions;

/// Run every builtin registrar, in a fixed order.
pub fn register_builtin_families(catalog: &mut TypeCatalog) -> Result<(), CatalogError> {
    linalg::register_linalg_types(catalog)?;
    Ok(())
}

/// Function-value conversions for every builtin type.
pub fn native_conversions() -> Vec<Box<dyn DynConversions>> {
    linalg::native_conversions()
}

/// Function-value conversions for one builtin type, by canonical name.
pub fn native_for(type_name: &str) -> Option<Box<dyn DynConversions>> {
    native_conversions().into_iter().find(|c| c.type_name() == type_name)
}
