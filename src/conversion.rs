//! Conversion closures that exist both as source text and as function values.
//!
//! The [`conversion!`](crate::conversion!) macro takes one closure and yields a [`Conversion`] holding its
//! `stringify!`-ed source next to the closure coerced to a function pointer. A family registrar writes each conversion
//! once: the text goes into the catalog for the generator, the function value is what tests and tooling call. The two
//! cannot drift apart.
//!
//! ## Notes
//!
//! - Closures must not capture anything, so they coerce to `fn` pointers and the text is self-contained.
//! - Paths used inside a closure must resolve through the description's dependency declarations, since the text is
//!   compiled later in a different crate. Registrars import exactly those paths so the native copy resolves the same way.

use metatype_core::Fragments;
use metatype_runtime::ConversionError;

pub type ParseFn<T> = fn(&str) -> Result<T, ConversionError>;
pub type FormatFn<T> = fn(&T) -> String;
pub type SerializeFn<T> = fn(&T) -> Vec<u8>;
pub type SizeFn<T> = fn(&T) -> usize;
pub type DeserializeFn<T> = fn(&[u8]) -> Result<T, ConversionError>;

/// One conversion closure: its source text and its compiled function value.
#[derive(Debug, Clone, Copy)]
pub struct Conversion<F> {
    source: &'static str,
    func: F,
}

impl<F> Conversion<F> {
    pub const fn new(source: &'static str, func: F) -> Self {
        Self { source, func }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }
}

impl<F: Copy> Conversion<F> {
    pub fn func(&self) -> F {
        self.func
    }
}

/// Build a [`Conversion`] from a non-capturing closure.
///
/// ```rust
/// use metatype::conversion::{Conversion, SizeFn};
///
/// let size: Conversion<SizeFn<u32>> = metatype::conversion!(|_v: &u32| -> usize { 4 });
/// assert_eq!((size.func())(&7), 4);
/// assert!(size.source().contains("usize"));
/// ```
#[macro_export]
macro_rules! conversion {
    ($($closure:tt)+) => {
        $crate::conversion::Conversion::new(::core::stringify!($($closure)+), $($closure)+)
    };
}

/// The five conversions of one type.
pub struct ConversionSet<T> {
    pub type_name: &'static str,
    pub parse: Conversion<ParseFn<T>>,
    pub format: Conversion<FormatFn<T>>,
    pub serialize: Conversion<SerializeFn<T>>,
    pub size: Conversion<SizeFn<T>>,
    pub deserialize: Conversion<DeserializeFn<T>>,
}

impl<T> ConversionSet<T> {
    /// Source text of all five conversions, for a type description.
    pub fn fragments(&self) -> Fragments {
        Fragments::new(
            self.parse.source(),
            self.format.source(),
            self.serialize.source(),
            self.size.source(),
            self.deserialize.source(),
        )
    }

    pub fn parse(&self, text: &str) -> Result<T, ConversionError> {
        (self.parse.func)(text)
    }

    pub fn format(&self, value: &T) -> String {
        (self.format.func)(value)
    }

    pub fn serialize(&self, value: &T) -> Vec<u8> {
        (self.serialize.func)(value)
    }

    pub fn size(&self, value: &T) -> usize {
        (self.size.func)(value)
    }

    pub fn deserialize(&self, bytes: &[u8]) -> Result<T, ConversionError> {
        (self.deserialize.func)(bytes)
    }
}

/// Type-erased access to a [`ConversionSet`], for tooling that only sees type names.
pub trait DynConversions: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn fragments(&self) -> Fragments;

    /// Parse `text` and format it back in canonical form.
    fn reformat(&self, text: &str) -> Result<String, ConversionError>;

    /// Parse `text` and serialize the value.
    fn encode(&self, text: &str) -> Result<Vec<u8>, ConversionError>;

    /// Deserialize `bytes` and format the value.
    fn decode(&self, bytes: &[u8]) -> Result<String, ConversionError>;
}

impl<T> DynConversions for ConversionSet<T> {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn fragments(&self) -> Fragments {
        ConversionSet::fragments(self)
    }

    fn reformat(&self, text: &str) -> Result<String, ConversionError> {
        self.parse(text).map(|value| self.format(&value))
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, ConversionError> {
        self.parse(text).map(|value| self.serialize(&value))
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, ConversionError> {
        self.deserialize(bytes).map(|value| self.format(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_set() -> ConversionSet<bool> {
        ConversionSet {
            type_name: "bool",
            parse: crate::conversion!(|s: &str| -> Result<bool, ConversionError> {
                s.trim().parse::<bool>().map_err(|_| ConversionError::malformed("bool", s))
            }),
            format: crate::conversion!(|v: &bool| -> String { v.to_string() }),
            serialize: crate::conversion!(|v: &bool| -> Vec<u8> { vec![u8::from(*v)] }),
            size: crate::conversion!(|_v: &bool| -> usize { 1 }),
            deserialize: crate::conversion!(|buf: &[u8]| -> Result<bool, ConversionError> {
                buf.first().map(|b| *b != 0).ok_or(ConversionError::BufferTooShort {
                    type_name: "bool",
                    expected: 1,
                    actual: 0,
                })
            }),
        }
    }

    #[test]
    fn source_and_function_come_from_one_closure() {
        let set = flag_set();
        assert!(set.parse.source().contains("bool"));
        assert!(set.parse(" true ").unwrap());
        assert_eq!(set.format(&false), "false");
        assert_eq!(set.serialize(&true), vec![1]);
        assert_eq!(set.size(&true), 1);
        assert!(set.deserialize(&[]).is_err());
    }

    #[test]
    fn erased_conversions_round_trip() {
        let set: Box<dyn DynConversions> = Box::new(flag_set());
        assert_eq!(set.reformat("  false").unwrap(), "false");
        assert_eq!(set.encode("true").unwrap(), vec![1]);
        assert_eq!(set.decode(&[0]).unwrap(), "false");
        assert_eq!(
            set.fragments().get(metatype_core::FragmentKind::Size),
            flag_set().size.source()
        );
    }
}
