//! Integration tests for `metatype_runtime::errors`.
//!
//! These lock in the user-facing wording of conversion errors, which tooling surfaces verbatim next to rejected input.

use metatype_runtime::ConversionError;
use metatype_runtime::linalg::{MAT4_GRAMMAR, Mat4, VEC2_GRAMMAR, Vec2};
use metatype_runtime::wire;

#[test]
/// Malformed text must name the type and quote the offending input.
fn malformed_text_names_type_and_input() {
    let err = VEC2_GRAMMAR.parse("(1; 2)").unwrap_err();

    assert_eq!(err, ConversionError::malformed(Vec2::TYPE_NAME, "(1; 2)"));
    assert_eq!(
        err.to_string(),
        "invalid metatype_runtime::linalg::Vec2 text: \"(1; 2)\""
    );
    assert!(err.is_text_error());
}

#[test]
/// A 15-number matrix is a text error that quotes the input and reports both counts.
fn wrong_arity_reports_input_and_counts() {
    let text = (0..15).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
    let err = MAT4_GRAMMAR.parse(&text).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("invalid metatype_runtime::linalg::Mat4 text: {text:?} (expected 16 numbers, found 15)")
    );
    assert_eq!(err.text(), Some(text.as_str()));
    assert_eq!(err.type_name(), Mat4::TYPE_NAME);
    assert!(err.is_text_error());
}

#[test]
/// Short buffers are reported with expected and actual sizes, never read out of bounds.
fn short_buffer_reports_sizes() {
    let err = wire::decode_f32s::<16>(&[0u8; 10], Mat4::TYPE_NAME).unwrap_err();

    assert_eq!(
        err.to_string(),
        "buffer too short for metatype_runtime::linalg::Mat4: expected 64 bytes, got 10"
    );
    assert!(!err.is_text_error());
    assert_eq!(err.text(), None);
}
