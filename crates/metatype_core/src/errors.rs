//! Errors raised while building, freezing or querying a type catalog.

use thiserror::Error;

/// Error from catalog construction or lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("type description has an empty name")]
    EmptyTypeName,

    #[error("dependency path is empty")]
    EmptyDependencyPath,

    /// A description with this canonical name is already registered and the catalog rejects duplicates.
    #[error("type `{name}` is already registered")]
    DuplicateType { name: String },

    #[error("type `{name}` is not registered")]
    UnknownType { name: String },

    /// The validation pattern of `name` is not a valid regular expression.
    #[error("invalid validation pattern for `{name}`: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("a type catalog is already installed for this process")]
    AlreadyInstalled,
}
