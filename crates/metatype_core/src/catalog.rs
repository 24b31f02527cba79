//! The type catalog: open registration phase, frozen read-only phase, and the process-wide install slot.
//!
//! ## Notes
//!
//! - Entries keep insertion order so downstream generation is deterministic.
//! - Duplicate names follow the catalog's [`DuplicatePolicy`]. Under [`DuplicatePolicy::Replace`] the new description
//!   takes over the original slot, so order does not depend on which registrar ran last.
//! - Validation patterns are compiled once, at [`TypeCatalog::freeze`], anchored to the whole input.

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use regex::Regex;

use crate::deps::{Dependency, dedup_dependencies};
use crate::description::TypeDescription;
use crate::errors::CatalogError;

/// What to do when a registered name is registered again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Fail with [`CatalogError::DuplicateType`] and keep the existing entry.
    #[default]
    Reject,
    /// Overwrite the existing entry in place.
    Replace,
}

impl DuplicatePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DuplicatePolicy::Reject => "reject",
            DuplicatePolicy::Replace => "replace",
        }
    }

    /// Resolve a policy from its name (case-insensitive ASCII).
    pub fn from_name(name: &str) -> Option<Self> {
        [DuplicatePolicy::Reject, DuplicatePolicy::Replace]
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

/// Catalog in its registration phase.
///
/// Registrars borrow it mutably and insert descriptions; [`freeze`](Self::freeze) ends the phase.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    entries: IndexMap<String, TypeDescription>,
    policy: DuplicatePolicy,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            entries: IndexMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a description under its canonical name.
    ///
    /// ## Errors
    /// - [`CatalogError::EmptyTypeName`] if the description's name is empty or whitespace.
    /// - [`CatalogError::DuplicateType`] if the name is taken and the policy is [`DuplicatePolicy::Reject`].
    pub fn add_new_concrete_type(&mut self, description: TypeDescription) -> Result<(), CatalogError> {
        let name = description.name();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyTypeName);
        }

        if self.entries.contains_key(name) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(CatalogError::DuplicateType { name: name.to_string() });
                }
                DuplicatePolicy::Replace => {
                    tracing::warn!(name, "replacing registered type description");
                }
            }
        } else {
            tracing::debug!(name, deps = description.dependencies().len(), "registering type description");
        }

        // An existing key keeps its position; only the value is swapped.
        self.entries.insert(name.to_string(), description);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescription> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Descriptions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescription> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End the registration phase.
    ///
    /// ## Errors
    /// - [`CatalogError::InvalidPattern`] for the first description whose validation pattern does not compile.
    #[tracing::instrument(skip_all, fields(types = self.entries.len()))]
    pub fn freeze(self) -> Result<FrozenCatalog, CatalogError> {
        let mut entries = IndexMap::with_capacity(self.entries.len());
        for (name, description) in self.entries {
            let pattern = compile_pattern(&name, description.validation_pattern())?;
            entries.insert(name, CatalogEntry { description, pattern });
        }
        Ok(FrozenCatalog {
            entries: Arc::new(entries),
        })
    }
}

fn compile_pattern(name: &str, source: &str) -> Result<Regex, CatalogError> {
    Regex::new(&format!("^(?:{source})$")).map_err(|source| CatalogError::InvalidPattern {
        name: name.to_string(),
        source,
    })
}

/// A registered description together with its compiled validation pattern.
#[derive(Debug)]
pub struct CatalogEntry {
    description: TypeDescription,
    pattern: Regex,
}

impl CatalogEntry {
    pub fn description(&self) -> &TypeDescription {
        &self.description
    }

    /// Compiled pattern, anchored to the whole input.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Does `text` have a form the type's parse fragment accepts?
    pub fn validate(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Read-only snapshot of a catalog, cheap to clone and share across threads.
#[derive(Debug, Clone)]
pub struct FrozenCatalog {
    entries: Arc<IndexMap<String, CatalogEntry>>,
}

impl FrozenCatalog {
    pub fn get(&self, name: &str) -> Option<&TypeDescription> {
        self.entry(name).map(CatalogEntry::description)
    }

    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pre-check `text` against the validation pattern of `name`.
    ///
    /// ## Errors
    /// - [`CatalogError::UnknownType`] if `name` is not registered.
    pub fn validate(&self, name: &str, text: &str) -> Result<bool, CatalogError> {
        self.entry(name)
            .map(|entry| entry.validate(text))
            .ok_or_else(|| CatalogError::UnknownType { name: name.to_string() })
    }

    /// Deduplicated dependencies of every registered description, in first-seen order.
    pub fn dependencies(&self) -> Vec<Dependency> {
        dedup_dependencies(
            self.iter()
                .flat_map(|entry| entry.description.dependencies().iter().cloned()),
        )
    }

    /// Deduplicated dependencies for one output unit containing the named types.
    ///
    /// ## Errors
    /// - [`CatalogError::UnknownType`] for the first name that is not registered.
    pub fn dependencies_for<'a, I>(&self, names: I) -> Result<Vec<Dependency>, CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut all = Vec::new();
        for name in names {
            let description = self
                .get(name)
                .ok_or_else(|| CatalogError::UnknownType { name: name.to_string() })?;
            all.extend(description.dependencies().iter().cloned());
        }
        Ok(dedup_dependencies(all))
    }
}

static INSTALLED: OnceLock<FrozenCatalog> = OnceLock::new();

/// Publish `catalog` as the process-wide catalog.
///
/// ## Errors
/// - [`CatalogError::AlreadyInstalled`] if a catalog was installed before. The first install stays in place.
pub fn install(catalog: FrozenCatalog) -> Result<(), CatalogError> {
    INSTALLED.set(catalog).map_err(|_| CatalogError::AlreadyInstalled)
}

/// The process-wide catalog, if one has been installed.
pub fn installed() -> Option<&'static FrozenCatalog> {
    INSTALLED.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(name: &str, pattern: &str) -> TypeDescription {
        TypeDescription::new(name, "p", "f", "s", "z", "d", pattern)
    }

    #[test]
    fn reject_keeps_first_entry() {
        let mut catalog = TypeCatalog::new();
        catalog.add_new_concrete_type(desc("A", "a")).unwrap();
        let err = catalog.add_new_concrete_type(desc("A", "b")).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateType { ref name } if name == "A"));
        assert_eq!(catalog.get("A").unwrap().validation_pattern(), "a");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn replace_keeps_original_slot() {
        let mut catalog = TypeCatalog::with_policy(DuplicatePolicy::Replace);
        for (name, pattern) in [("A", "a"), ("B", "b"), ("A", "a2")] {
            catalog.add_new_concrete_type(desc(name, pattern)).unwrap();
        }

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(catalog.get("A").unwrap().validation_pattern(), "a2");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut catalog = TypeCatalog::new();
        assert!(matches!(
            catalog.add_new_concrete_type(desc(" ", "x")),
            Err(CatalogError::EmptyTypeName)
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn freeze_anchors_patterns() {
        let mut catalog = TypeCatalog::new();
        catalog.add_new_concrete_type(desc("Digit", "[0-9]")).unwrap();
        let frozen = catalog.freeze().unwrap();

        assert!(frozen.validate("Digit", "7").unwrap());
        assert!(!frozen.validate("Digit", "77").unwrap());
        assert!(!frozen.validate("Digit", "x7").unwrap());
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let mut catalog = TypeCatalog::new();
        catalog.add_new_concrete_type(desc("Bool", "true|false")).unwrap();
        let frozen = catalog.freeze().unwrap();

        assert!(frozen.validate("Bool", "false").unwrap());
        assert!(!frozen.validate("Bool", "truex").unwrap());
        assert!(!frozen.validate("Bool", "xfalse").unwrap());
    }

    #[test]
    fn freeze_reports_invalid_pattern() {
        let mut catalog = TypeCatalog::new();
        catalog.add_new_concrete_type(desc("Ok", "x")).unwrap();
        catalog.add_new_concrete_type(desc("Broken", "(unclosed")).unwrap();

        let err = catalog.freeze().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { ref name, .. } if name == "Broken"));
    }

    #[test]
    fn validate_unknown_type() {
        let frozen = TypeCatalog::new().freeze().unwrap();
        assert!(matches!(
            frozen.validate("Nope", ""),
            Err(CatalogError::UnknownType { .. })
        ));
    }

    #[test]
    fn policy_names() {
        assert_eq!(DuplicatePolicy::from_name("Replace"), Some(DuplicatePolicy::Replace));
        assert_eq!(DuplicatePolicy::from_name(" reject "), Some(DuplicatePolicy::Reject));
        assert_eq!(DuplicatePolicy::from_name("overwrite"), None);
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Reject);
    }
}
