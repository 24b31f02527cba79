//! Conversion errors raised by generated parse/deserialize callables.
//!
//! These are the runtime half of the error taxonomy: the catalog itself never raises them, the conversion routines it
//! describes do.

use thiserror::Error;

/// Failure of a text or byte conversion for a registered type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input text does not match the type's text grammar.
    #[error("invalid {type_name} text: {text:?}")]
    MalformedText { type_name: &'static str, text: String },

    /// Input text is a number list of the wrong length. Still malformed text: the offending input is kept.
    #[error("invalid {type_name} text: {text:?} (expected {expected} numbers, found {found})")]
    WrongArity {
        type_name: &'static str,
        text: String,
        expected: usize,
        found: usize,
    },

    /// Byte buffer is shorter than the type's fixed encoded size.
    #[error("buffer too short for {type_name}: expected {expected} bytes, got {actual}")]
    BufferTooShort {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ConversionError {
    /// Build a [`ConversionError::MalformedText`] from borrowed input.
    pub fn malformed(type_name: &'static str, text: &str) -> Self {
        ConversionError::MalformedText {
            type_name,
            text: text.to_string(),
        }
    }

    /// The rejected input, for text errors.
    pub fn text(&self) -> Option<&str> {
        match self {
            ConversionError::MalformedText { text, .. } | ConversionError::WrongArity { text, .. } => {
                Some(text.as_str())
            }
            ConversionError::BufferTooShort { .. } => None,
        }
    }

    /// Name of the type whose conversion failed.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConversionError::MalformedText { type_name, .. }
            | ConversionError::WrongArity { type_name, .. }
            | ConversionError::BufferTooShort { type_name, .. } => type_name,
        }
    }

    /// Whether this error came from text parsing (as opposed to byte decoding).
    pub fn is_text_error(&self) -> bool {
        matches!(
            self,
            ConversionError::MalformedText { .. } | ConversionError::WrongArity { .. }
        )
    }
}
