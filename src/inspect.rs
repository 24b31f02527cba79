//! Human- and machine-readable views of a frozen catalog.
//!
//! Used by the `metatype` CLI. Nothing here generates code: fragments are only parsed so they can be pretty-printed.

use std::fmt::Write as _;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use serde::Serialize;

use metatype_core::fragments::{self, FragmentKind};
use metatype_core::{CatalogEntry, Dependency, FrozenCatalog};

/// One row of `metatype list --json`.
#[derive(Debug, Serialize)]
pub struct TypeSummary<'a> {
    pub name: &'a str,
    pub validation_pattern: &'a str,
    pub dependencies: &'a [Dependency],
}

impl<'a> From<&'a CatalogEntry> for TypeSummary<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        let description = entry.description();
        Self {
            name: description.name(),
            validation_pattern: description.validation_pattern(),
            dependencies: description.dependencies(),
        }
    }
}

pub fn summaries(catalog: &FrozenCatalog) -> Vec<TypeSummary<'_>> {
    catalog.iter().map(TypeSummary::from).collect()
}

/// One line per registered type, in registration order.
pub fn render_listing(catalog: &FrozenCatalog) -> String {
    let mut out = String::new();
    for entry in catalog.iter() {
        let description = entry.description();
        let count = description.dependencies().len();
        let plural = if count == 1 { "dependency" } else { "dependencies" };
        let _ = writeln!(out, "{} ({count} {plural})", description.name());
    }
    out
}

/// `use` items for a dependency list, one per line.
pub fn render_dependencies(deps: &[Dependency]) -> String {
    deps.iter().map(|dep| format!("{dep}\n")).collect()
}

/// Full view of one entry for `metatype show`: pattern, `use` items, then each fragment under a `// kind` header.
///
/// Fragments that do not parse as closures are printed as stored; `raw` skips pretty-printing altogether.
pub fn render_entry(entry: &CatalogEntry, raw: bool) -> String {
    let description = entry.description();
    let mut out = String::new();
    let _ = writeln!(out, "{}", description.name());
    let _ = writeln!(out, "pattern: {}", description.validation_pattern());
    out.push('\n');
    out.push_str(&render_dependencies(description.dependencies()));
    for (kind, text) in description.fragments().iter() {
        let _ = writeln!(out, "\n// {}", fragments::as_str(kind));
        let body = if raw {
            None
        } else {
            match pretty_fragment(kind, description.name(), text) {
                Ok(pretty) => Some(pretty),
                Err(err) => {
                    tracing::debug!(kind = fragments::as_str(kind), %err, "fragment is not a closure, showing raw text");
                    None
                }
            }
        };
        match body {
            Some(pretty) => out.push_str(&pretty),
            None => {
                let _ = writeln!(out, "{text}");
            }
        }
    }
    out
}

/// Pretty-print a fragment as a named binding inside a function, e.g. `fn parse_vec2() { let parse = |s: &str| ...; }`.
///
/// ## Errors
/// - The `syn` error if the fragment is not a closure expression.
pub fn pretty_fragment(kind: FragmentKind, type_name: &str, text: &str) -> Result<String, syn::Error> {
    let closure: syn::ExprClosure = syn::parse_str(text)?;
    let binding = format_ident!("{}", fragments::as_str(kind));
    let function = format_ident!("{}_{}", fragments::as_str(kind), type_ident(type_name));

    let tokens: TokenStream = quote! {
        fn #function() {
            let #binding = #closure;
        }
    };
    let file: syn::File = syn::parse2(tokens)?;
    Ok(prettyplease::unparse(&file))
}

/// Lower-case identifier for the last path segment of a type name (`a::b::Vec2` -> `vec2`).
pub fn type_ident(type_name: &str) -> String {
    let last = type_name.rsplit("::").next().unwrap_or(type_name);
    let ident: String = last
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if ident.is_empty() { "ty".to_string() } else { ident }
}

/// Lower-case hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Parse hex text (whitespace ignored) back into bytes.
pub fn from_hex(text: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).ok()?;
            u8::from_str_radix(pair, 16).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ident_uses_last_segment() {
        assert_eq!(type_ident("metatype_runtime::linalg::Vec2"), "vec2");
        assert_eq!(type_ident("Mat<4>"), "mat_4_");
        assert_eq!(type_ident(""), "ty");
    }

    #[test]
    fn hex_round_trip() {
        let bytes = vec![0x00, 0x80, 0x3f, 0xff];
        assert_eq!(to_hex(&bytes), "00803fff");
        assert_eq!(from_hex("00 80 3f ff").unwrap(), bytes);
        assert_eq!(from_hex("abc"), None);
        assert_eq!(from_hex("zz"), None);
    }

    #[test]
    fn pretty_fragment_wraps_closure() {
        let pretty = pretty_fragment(FragmentKind::Size, "geo::Point", "|_p: &Point| -> usize { 8 }").unwrap();
        assert!(pretty.starts_with("fn size_point() {"), "{pretty}");
        assert!(pretty.contains("let size = |_p: &Point| -> usize"), "{pretty}");
        assert!(pretty.trim_end().ends_with('}'), "{pretty}");
    }

    #[test]
    fn pretty_fragment_rejects_non_closure() {
        assert!(pretty_fragment(FragmentKind::Parse, "T", "not a closure {").is_err());
    }
}
