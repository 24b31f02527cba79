//! Linear-algebra family: `Vec2`, `Vec3` and `Mat4` from `metatype_runtime::linalg`.
//!
//! Each type gets five conversions written once with [`crate::conversion!`]. Their text goes into the catalog; their
//! function values are returned by the `*_conversions()` constructors. Validation patterns come from the same
//! [`NumericListGrammar`] statics the parse conversions call.
//!
//! ## Notes
//!
//! - The closures only name `linalg`, `wire` and `ConversionError`, which is exactly what [`RUNTIME_DEPENDENCIES`]
//!   brings into scope in generated code.
//! - Byte encoding is little-endian `f32` per component, row-major for `Mat4` (see `metatype_runtime::wire`).

use metatype_core::{CatalogError, Dependency, TypeCatalog, TypeDescription};
use metatype_runtime::numeric_list::NumericListGrammar;
use metatype_runtime::{ConversionError, linalg, wire};

use crate::conversion::{ConversionSet, DynConversions};

/// Paths every linear-algebra fragment needs, attached to each description as `System` dependencies.
pub const RUNTIME_DEPENDENCIES: [&str; 3] = [
    "metatype_runtime::linalg",
    "metatype_runtime::wire",
    "metatype_runtime::ConversionError",
];

pub fn vec2_conversions() -> ConversionSet<linalg::Vec2> {
    ConversionSet {
        type_name: linalg::Vec2::TYPE_NAME,
        parse: crate::conversion!(|s: &str| -> Result<linalg::Vec2, ConversionError> {
            let [x, y] = linalg::VEC2_GRAMMAR.parse_array::<2>(s)?;
            Ok(linalg::Vec2::new(x, y))
        }),
        format: crate::conversion!(|v: &linalg::Vec2| -> String {
            linalg::VEC2_GRAMMAR.format(&v.to_array())
        }),
        serialize: crate::conversion!(|v: &linalg::Vec2| -> Vec<u8> { wire::encode_f32s(&v.to_array()) }),
        size: crate::conversion!(|_v: &linalg::Vec2| -> usize { wire::encoded_len(2) }),
        deserialize: crate::conversion!(|buf: &[u8]| -> Result<linalg::Vec2, ConversionError> {
            let [x, y] = wire::decode_f32s::<2>(buf, linalg::Vec2::TYPE_NAME)?;
            Ok(linalg::Vec2::new(x, y))
        }),
    }
}

pub fn vec3_conversions() -> ConversionSet<linalg::Vec3> {
    ConversionSet {
        type_name: linalg::Vec3::TYPE_NAME,
        parse: crate::conversion!(|s: &str| -> Result<linalg::Vec3, ConversionError> {
            let [x, y, z] = linalg::VEC3_GRAMMAR.parse_array::<3>(s)?;
            Ok(linalg::Vec3::new(x, y, z))
        }),
        format: crate::conversion!(|v: &linalg::Vec3| -> String {
            linalg::VEC3_GRAMMAR.format(&v.to_array())
        }),
        serialize: crate::conversion!(|v: &linalg::Vec3| -> Vec<u8> { wire::encode_f32s(&v.to_array()) }),
        size: crate::conversion!(|_v: &linalg::Vec3| -> usize { wire::encoded_len(3) }),
        deserialize: crate::conversion!(|buf: &[u8]| -> Result<linalg::Vec3, ConversionError> {
            let [x, y, z] = wire::decode_f32s::<3>(buf, linalg::Vec3::TYPE_NAME)?;
            Ok(linalg::Vec3::new(x, y, z))
        }),
    }
}

pub fn mat4_conversions() -> ConversionSet<linalg::Mat4> {
    ConversionSet {
        type_name: linalg::Mat4::TYPE_NAME,
        parse: crate::conversion!(|s: &str| -> Result<linalg::Mat4, ConversionError> {
            linalg::MAT4_GRAMMAR
                .parse_array::<16>(s)
                .map(linalg::Mat4::from_row_major)
        }),
        format: crate::conversion!(|m: &linalg::Mat4| -> String {
            linalg::MAT4_GRAMMAR.format(&m.to_row_major())
        }),
        serialize: crate::conversion!(|m: &linalg::Mat4| -> Vec<u8> { wire::encode_f32s(&m.to_row_major()) }),
        size: crate::conversion!(|_m: &linalg::Mat4| -> usize { wire::encoded_len(16) }),
        deserialize: crate::conversion!(|buf: &[u8]| -> Result<linalg::Mat4, ConversionError> {
            wire::decode_f32s::<16>(buf, linalg::Mat4::TYPE_NAME).map(linalg::Mat4::from_row_major)
        }),
    }
}

/// Shared dependency declarations, built once and attached to every description.
pub fn runtime_dependencies() -> Result<Vec<Dependency>, CatalogError> {
    RUNTIME_DEPENDENCIES.into_iter().map(Dependency::system).collect()
}

fn describe<T>(conversions: &ConversionSet<T>, grammar: &NumericListGrammar) -> TypeDescription {
    TypeDescription::from_fragments(conversions.type_name, conversions.fragments(), grammar.pattern())
}

/// Descriptions for the family, in registration order, without dependencies attached.
pub fn linalg_descriptions() -> [TypeDescription; 3] {
    [
        describe(&vec2_conversions(), &linalg::VEC2_GRAMMAR),
        describe(&vec3_conversions(), &linalg::VEC3_GRAMMAR),
        describe(&mat4_conversions(), &linalg::MAT4_GRAMMAR),
    ]
}

/// Register `Vec2`, `Vec3` and `Mat4`.
///
/// ## Errors
/// - Whatever [`TypeCatalog::add_new_concrete_type`] reports, e.g. a duplicate under the reject policy. Types
///   registered before the failing one stay registered.
#[tracing::instrument(skip_all)]
pub fn register_linalg_types(catalog: &mut TypeCatalog) -> Result<(), CatalogError> {
    let shared = runtime_dependencies()?;
    for description in linalg_descriptions() {
        catalog.add_new_concrete_type(description.with_dependencies(shared.iter().cloned()))?;
    }
    tracing::debug!(total = catalog.len(), "registered linear-algebra types");
    Ok(())
}

/// Function-value conversions for every type in the family.
pub fn native_conversions() -> Vec<Box<dyn DynConversions>> {
    vec![
        Box::new(vec2_conversions()),
        Box::new(vec3_conversions()),
        Box::new(mat4_conversions()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use metatype_core::DuplicatePolicy;

    #[test]
    fn registers_three_types_in_order() {
        let mut catalog = TypeCatalog::new();
        register_linalg_types(&mut catalog).unwrap();

        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec![linalg::Vec2::TYPE_NAME, linalg::Vec3::TYPE_NAME, linalg::Mat4::TYPE_NAME]
        );
        for description in catalog.iter() {
            assert_eq!(description.dependencies().len(), RUNTIME_DEPENDENCIES.len());
        }
    }

    #[test]
    fn registering_twice_conflicts_under_reject() {
        let mut catalog = TypeCatalog::new();
        register_linalg_types(&mut catalog).unwrap();
        assert!(matches!(
            register_linalg_types(&mut catalog),
            Err(CatalogError::DuplicateType { .. })
        ));

        let mut catalog = TypeCatalog::with_policy(DuplicatePolicy::Replace);
        register_linalg_types(&mut catalog).unwrap();
        register_linalg_types(&mut catalog).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn patterns_come_from_grammars() {
        let [vec2, vec3, mat4] = linalg_descriptions();
        assert_eq!(vec2.validation_pattern(), linalg::VEC2_GRAMMAR.pattern());
        assert_eq!(vec3.validation_pattern(), linalg::VEC3_GRAMMAR.pattern());
        assert_eq!(mat4.validation_pattern(), linalg::MAT4_GRAMMAR.pattern());
    }
}
