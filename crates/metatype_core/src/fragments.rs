//! Fragment-kind vocabulary.
//!
//! Every type description carries exactly five code fragments. This registry gives each kind a stable id, the
//! canonical name a generator uses for the emitted function, and the signature the fragment must compile to.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII**.
//! - Signatures are documentation for fragment authors and generators; they are not checked against fragment text.
//!
//! ## Examples
//! ```rust
//! use metatype_core::fragments::{self, FragmentKind};
//!
//! assert_eq!(fragments::from_str("deserialize"), Some(FragmentKind::Deserialize));
//! assert_eq!(fragments::as_str(FragmentKind::Size), "size");
//! assert_eq!(fragments::info_for(FragmentKind::Parse).input, "&str");
//! ```

/// Stable identifier for a fragment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Parse,
    Format,
    Serialize,
    Size,
    Deserialize,
}

impl FragmentKind {
    /// All kinds in canonical order.
    pub const ALL: [FragmentKind; 5] = [
        FragmentKind::Parse,
        FragmentKind::Format,
        FragmentKind::Serialize,
        FragmentKind::Size,
        FragmentKind::Deserialize,
    ];
}

/// Metadata for a fragment kind.
#[derive(Debug, Clone, Copy)]
pub struct FragmentKindInfo {
    pub id: FragmentKind,
    /// Name of the generated function (prefix; generators append the type's identifier).
    pub canonical: &'static str,
    /// Parameter type of the unary closure, with `T` standing for the described type.
    pub input: &'static str,
    /// Return type of the closure.
    pub output: &'static str,
    pub description: &'static str,
}

/// Registry of fragment kinds, in canonical order.
pub const FRAGMENT_KINDS: &[FragmentKindInfo] = &[
    info(
        FragmentKind::Parse,
        "parse",
        "&str",
        "Result<T, ConversionError>",
        "Parse the text form of a value.",
    ),
    info(
        FragmentKind::Format,
        "format",
        "&T",
        "String",
        "Format a value in its canonical text form.",
    ),
    info(
        FragmentKind::Serialize,
        "serialize",
        "&T",
        "Vec<u8>",
        "Encode a value to bytes.",
    ),
    info(
        FragmentKind::Size,
        "size",
        "&T",
        "usize",
        "Report the encoded size of a value in bytes.",
    ),
    info(
        FragmentKind::Deserialize,
        "deserialize",
        "&[u8]",
        "Result<T, ConversionError>",
        "Decode a value from bytes.",
    ),
];

/// Resolve a fragment kind from its canonical name.
pub fn from_str(name: &str) -> Option<FragmentKind> {
    FRAGMENT_KINDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(name))
        .map(|k| k.id)
}

/// Return the canonical name of a fragment kind.
pub fn as_str(id: FragmentKind) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a fragment kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: FragmentKind) -> &'static FragmentKindInfo {
    FRAGMENT_KINDS
        .iter()
        .find(|k| k.id == id)
        .expect("fragment kind info missing")
}

const fn info(
    id: FragmentKind,
    canonical: &'static str,
    input: &'static str,
    output: &'static str,
    description: &'static str,
) -> FragmentKindInfo {
    FragmentKindInfo {
        id,
        canonical,
        input,
        output,
        description,
    }
}
