//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use metatype_core::{CatalogEntry, FrozenCatalog};

use crate::conversion::DynConversions;
use crate::families;
use crate::inspect;

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Lookups shared by the commands
// ============================================================================

fn lookup_entry<'a>(catalog: &'a FrozenCatalog, type_name: &str) -> CliResult<&'a CatalogEntry> {
    catalog.entry(type_name).ok_or_else(|| unknown_type(catalog, type_name))
}

fn unknown_type(catalog: &FrozenCatalog, type_name: &str) -> CliError {
    let known: Vec<&str> = catalog.names().collect();
    CliError::failure(format!(
        "Unknown type '{}'. Registered types: {}",
        type_name,
        known.join(", ")
    ))
}

/// Native conversions for a catalog entry. Only builtin families carry function values.
fn lookup_native(catalog: &FrozenCatalog, type_name: &str) -> CliResult<Box<dyn DynConversions>> {
    lookup_entry(catalog, type_name)?;
    families::native_for(type_name)
        .ok_or_else(|| CliError::failure(format!("No native conversions available for '{}'", type_name)))
}

// ============================================================================
// Commands
// ============================================================================

/// List registered types (`metatype list`).
pub fn list(catalog: &FrozenCatalog, json: bool) -> CliResult<ExitCode> {
    if json {
        let rendered = serde_json::to_string_pretty(&inspect::summaries(catalog))
            .map_err(|e| CliError::failure(format!("Failed to render JSON: {}", e)))?;
        println!("{}", rendered);
    } else {
        print!("{}", inspect::render_listing(catalog));
    }
    Ok(ExitCode::SUCCESS)
}

/// Show one type's pattern, dependencies and fragments (`metatype show`).
pub fn show(catalog: &FrozenCatalog, type_name: &str, raw: bool) -> CliResult<ExitCode> {
    let entry = lookup_entry(catalog, type_name)?;
    print!("{}", inspect::render_entry(entry, raw));
    Ok(ExitCode::SUCCESS)
}

/// Run the validation pattern (`metatype check`). Exits 1 when the text does not match.
pub fn check(catalog: &FrozenCatalog, type_name: &str, text: &str) -> CliResult<ExitCode> {
    let entry = lookup_entry(catalog, type_name)?;
    if entry.validate(text) {
        println!("match");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("no match");
        Ok(ExitCode::FAILURE)
    }
}

/// Parse text and print the serialized bytes as hex (`metatype encode`).
pub fn encode(catalog: &FrozenCatalog, type_name: &str, text: &str) -> CliResult<ExitCode> {
    let native = lookup_native(catalog, type_name)?;
    let bytes = native.encode(text).map_err(|e| CliError::failure(e.to_string()))?;
    println!("{}", inspect::to_hex(&bytes));
    Ok(ExitCode::SUCCESS)
}

/// Deserialize hex bytes and print the canonical text (`metatype decode`).
pub fn decode(catalog: &FrozenCatalog, type_name: &str, hex: &str) -> CliResult<ExitCode> {
    let native = lookup_native(catalog, type_name)?;
    let bytes = inspect::from_hex(hex).ok_or_else(|| CliError::usage(format!("Invalid hex input: {:?}", hex)))?;
    let text = native.decode(&bytes).map_err(|e| CliError::failure(e.to_string()))?;
    println!("{}", text);
    Ok(ExitCode::SUCCESS)
}

/// Print deduplicated `use` items (`metatype deps`). No names means the whole catalog.
pub fn deps(catalog: &FrozenCatalog, type_names: &[String]) -> CliResult<ExitCode> {
    let deps = if type_names.is_empty() {
        catalog.dependencies()
    } else {
        catalog
            .dependencies_for(type_names.iter().map(String::as_str))
            .map_err(|e| CliError::failure(e.to_string()))?
    };
    print!("{}", inspect::render_dependencies(&deps));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CatalogConfig;

    fn catalog() -> FrozenCatalog {
        crate::build_catalog(&CatalogConfig::default()).unwrap()
    }

    #[test]
    fn test_check_exit_codes() {
        let catalog = catalog();
        let vec2 = metatype_runtime::linalg::Vec2::TYPE_NAME;
        assert_eq!(check(&catalog, vec2, "(1, 2)").unwrap(), ExitCode::SUCCESS);
        assert_eq!(check(&catalog, vec2, "(1, 2, 3)").unwrap(), ExitCode::FAILURE);
    }

    #[test]
    fn test_unknown_type_lists_registered_names() {
        let catalog = catalog();
        let err = show(&catalog, "Quaternion", false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Unknown type 'Quaternion'"));
        assert!(err.message.contains(metatype_runtime::linalg::Mat4::TYPE_NAME));
    }

    #[test]
    fn test_encode_reports_parse_errors() {
        let catalog = catalog();
        let err = encode(&catalog, metatype_runtime::linalg::Vec3::TYPE_NAME, "1, 2").unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        let catalog = catalog();
        let err = decode(&catalog, metatype_runtime::linalg::Vec2::TYPE_NAME, "xyz").unwrap_err();
        assert_eq!(err.exit_code, ExitCode::USAGE);
    }

    #[test]
    fn test_deps_unknown_type_fails() {
        let catalog = catalog();
        assert!(deps(&catalog, &["Nope".to_string()]).is_err());
        assert_eq!(deps(&catalog, &[]).unwrap(), ExitCode::SUCCESS);
    }
}
