//! Catalog configuration for metatype tooling.

use metatype_core::{DuplicatePolicy, TypeCatalog};
use thiserror::Error;

/// Environment variable selecting the duplicate policy (`reject` or `replace`).
pub const ON_DUPLICATE_ENV: &str = "METATYPE_ON_DUPLICATE";

/// Catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// What re-registering an existing type name does
    pub duplicate_policy: DuplicatePolicy,
}

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {source_name} value `{value}`: expected `reject` or `replace`")]
    InvalidDuplicatePolicy { source_name: &'static str, value: String },
}

impl CatalogConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ON_DUPLICATE_ENV) {
            config.duplicate_policy = parse_policy(ON_DUPLICATE_ENV, &value)?;
        }
        Ok(config)
    }

    /// Set the duplicate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Start an empty catalog with this configuration.
    pub fn catalog(&self) -> TypeCatalog {
        TypeCatalog::with_policy(self.duplicate_policy)
    }
}

pub(crate) fn parse_policy(source_name: &'static str, value: &str) -> Result<DuplicatePolicy, ConfigError> {
    DuplicatePolicy::from_name(value).ok_or_else(|| ConfigError::InvalidDuplicatePolicy {
        source_name,
        value: value.to_string(),
    })
}
