//! Runtime support for metatype-generated conversion code.
//!
//! Conversion fragments registered in a `metatype_core` catalog are closures that call into this crate. Generated code
//! links against it and imports the modules named by each description's dependency declarations.
//!
//! ## Notes
//!
//! - The linear-algebra value types live in [`linalg`] together with the text grammars that describe them.
//! - [`numeric_list`] owns the number-list grammar that both the parser and the validation pattern are derived from.
//! - [`wire`] is the fixed-width little-endian byte codec.

#![deny(clippy::unwrap_used)]

pub mod errors;
pub mod linalg;
pub mod numeric_list;
pub mod wire;

pub use errors::ConversionError;
