//! Type descriptions: the unit of registration.

use crate::deps::Dependency;
use crate::fragments::FragmentKind;

/// Source text of the five conversion closures for one type.
///
/// Each fragment is the text of a self-contained unary closure; see [`crate::fragments::FRAGMENT_KINDS`] for the
/// signature each kind must compile to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fragments {
    parse: String,
    format: String,
    serialize: String,
    size: String,
    deserialize: String,
}

impl Fragments {
    pub fn new(
        parse: impl Into<String>,
        format: impl Into<String>,
        serialize: impl Into<String>,
        size: impl Into<String>,
        deserialize: impl Into<String>,
    ) -> Self {
        Self {
            parse: parse.into(),
            format: format.into(),
            serialize: serialize.into(),
            size: size.into(),
            deserialize: deserialize.into(),
        }
    }

    pub fn get(&self, kind: FragmentKind) -> &str {
        match kind {
            FragmentKind::Parse => &self.parse,
            FragmentKind::Format => &self.format,
            FragmentKind::Serialize => &self.serialize,
            FragmentKind::Size => &self.size,
            FragmentKind::Deserialize => &self.deserialize,
        }
    }

    /// All fragments in canonical kind order.
    pub fn iter(&self) -> impl Iterator<Item = (FragmentKind, &str)> + '_ {
        FragmentKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Everything a generator needs to emit conversions for one value type.
///
/// ## Notes
/// - Fragments and the validation pattern are fixed at construction. Dependencies stay appendable so the same shared
///   declarations can be attached to several descriptions.
/// - The validation pattern must accept exactly the text the parse fragment accepts. This is an authoring obligation;
///   nothing here checks it.
/// - Registering moves the description into the catalog. Clone a template before registering it if you keep using it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeDescription {
    name: String,
    fragments: Fragments,
    validation_pattern: String,
    dependencies: Vec<Dependency>,
}

impl TypeDescription {
    /// Describe a type from its five fragments and validation pattern.
    pub fn new(
        name: impl Into<String>,
        parse: impl Into<String>,
        format: impl Into<String>,
        serialize: impl Into<String>,
        size: impl Into<String>,
        deserialize: impl Into<String>,
        validation_pattern: impl Into<String>,
    ) -> Self {
        Self::from_fragments(
            name,
            Fragments::new(parse, format, serialize, size, deserialize),
            validation_pattern,
        )
    }

    pub fn from_fragments(name: impl Into<String>, fragments: Fragments, validation_pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragments,
            validation_pattern: validation_pattern.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fragments(&self) -> &Fragments {
        &self.fragments
    }

    pub fn fragment(&self, kind: FragmentKind) -> &str {
        self.fragments.get(kind)
    }

    /// Regular-expression source, matched against whole inputs once the catalog is frozen.
    pub fn validation_pattern(&self) -> &str {
        &self.validation_pattern
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn push_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    pub fn with_dependencies<I>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = Dependency>,
    {
        self.dependencies.extend(dependencies);
        self
    }
}
