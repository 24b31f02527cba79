//! The process-wide install slot is one-shot. Kept in its own test binary so no other test touches the slot.

use metatype_core::catalog;
use metatype_core::{CatalogError, TypeCatalog, TypeDescription};

#[test]
fn install_succeeds_once() {
    assert!(catalog::installed().is_none());

    let mut first = TypeCatalog::new();
    first
        .add_new_concrete_type(TypeDescription::new("First", "p", "f", "s", "z", "d", "x"))
        .unwrap();
    catalog::install(first.freeze().unwrap()).unwrap();

    let second = TypeCatalog::new().freeze().unwrap();
    assert!(matches!(catalog::install(second), Err(CatalogError::AlreadyInstalled)));

    let installed = catalog::installed().expect("catalog installed");
    assert_eq!(installed.names().collect::<Vec<_>>(), vec!["First"]);
}
