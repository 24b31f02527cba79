//! Text grammar for fixed-arity lists of numbers.
//!
//! A [`NumericListGrammar`] is the single description from which a type's parser, its formatter, and its validation
//! pattern are all derived, so the pattern accepts exactly the text the parser accepts.
//!
//! ## Notes
//!
//! - Numbers follow [`NUMBER`]: optional sign, optional integer digits, optional `.`, at least one digit. Exponents,
//!   `inf` and `NaN` are not part of the grammar.
//! - Formatting uses Rust's shortest round-tripping decimal form, which never uses exponent notation, so every finite
//!   value formats to text the grammar accepts and parses back to the same value.
//!
//! ## Examples
//! ```rust
//! use metatype_runtime::numeric_list::NumericListGrammar;
//!
//! static PAIR: NumericListGrammar = NumericListGrammar::tuple("Pair", 2);
//!
//! assert_eq!(PAIR.parse("(1, -2.5)").unwrap(), vec![1.0, -2.5]);
//! assert_eq!(PAIR.format(&[1.0, -2.5]), "(1, -2.5)");
//! assert!(!PAIR.can_parse("(1, 2, 3)"));
//! ```

use std::fmt::Write as _;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::ConversionError;

/// Regular-expression source for one number token.
pub const NUMBER: &str = r"[-+]?[0-9]*\.?[0-9]+";

/// Separators allowed between numbers in [`ListLayout::Rows`] text.
const ROW_SEPARATOR: &str = r"[\s,\[\]]";

/// How a numeric list is laid out as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    /// `(a, b, c)`: comma separated, whitespace tolerant, parentheses optional.
    Tuple,
    /// Free-form number tokens separated by commas, whitespace or square brackets. Formatted as bracketed rows of
    /// `width` numbers, one row per line.
    Rows { width: usize },
}

/// Grammar for the text form of a fixed-arity list of `f32` components.
#[derive(Debug)]
pub struct NumericListGrammar {
    type_name: &'static str,
    arity: usize,
    layout: ListLayout,
    shape: OnceLock<Regex>,
}

impl NumericListGrammar {
    /// Grammar for a parenthesized tuple of `arity` numbers.
    pub const fn tuple(type_name: &'static str, arity: usize) -> Self {
        Self::new(type_name, arity, ListLayout::Tuple)
    }

    /// Grammar for `arity` free-form numbers formatted as rows of `width`.
    pub const fn rows(type_name: &'static str, arity: usize, width: usize) -> Self {
        Self::new(type_name, arity, ListLayout::Rows { width })
    }

    const fn new(type_name: &'static str, arity: usize, layout: ListLayout) -> Self {
        Self {
            type_name,
            arity,
            layout,
            shape: OnceLock::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn layout(&self) -> ListLayout {
        self.layout
    }

    /// Validation pattern source: accepts exactly the text [`parse`](Self::parse) accepts.
    ///
    /// ## Notes
    /// - The pattern is unanchored source; consumers must match it against the whole input.
    pub fn pattern(&self) -> String {
        let tail = self.arity.saturating_sub(1);
        match self.layout {
            ListLayout::Tuple => format!(r"\s*\(?\s*{NUMBER}(?:\s*,\s*{NUMBER}){{{tail}}}\s*\)?\s*"),
            ListLayout::Rows { .. } => {
                format!(r"{ROW_SEPARATOR}*{NUMBER}(?:{ROW_SEPARATOR}+{NUMBER}){{{tail}}}{ROW_SEPARATOR}*")
            }
        }
    }

    /// Cheap pre-check: does `text` parse under this grammar?
    pub fn can_parse(&self, text: &str) -> bool {
        self.parse(text).is_ok()
    }

    /// Parse `text` into exactly [`arity`](Self::arity) components.
    ///
    /// ## Errors
    /// - [`ConversionError::MalformedText`] if the text is not a number list of this layout.
    /// - [`ConversionError::WrongArity`] if a [`ListLayout::Rows`] list has the wrong number of tokens.
    pub fn parse(&self, text: &str) -> Result<Vec<f32>, ConversionError> {
        if !self.shape_regex().is_match(text) {
            return Err(ConversionError::malformed(self.type_name, text));
        }

        let mut values = Vec::with_capacity(self.arity);
        for token in number_regex().find_iter(text) {
            let value = token
                .as_str()
                .parse::<f32>()
                .map_err(|_| ConversionError::malformed(self.type_name, text))?;
            values.push(value);
        }

        if values.len() != self.arity {
            return Err(ConversionError::WrongArity {
                type_name: self.type_name,
                text: text.to_string(),
                expected: self.arity,
                found: values.len(),
            });
        }
        Ok(values)
    }

    /// Parse `text` into a fixed-size array.
    ///
    /// `N` must equal [`arity`](Self::arity); a mismatch surfaces as [`ConversionError::WrongArity`].
    pub fn parse_array<const N: usize>(&self, text: &str) -> Result<[f32; N], ConversionError> {
        let values = self.parse(text)?;
        let found = values.len();
        <[f32; N]>::try_from(values).map_err(|_| ConversionError::WrongArity {
            type_name: self.type_name,
            text: text.to_string(),
            expected: N,
            found,
        })
    }

    /// Format components in this grammar's canonical text form.
    ///
    /// ## Notes
    /// - Only finite values format to text this grammar parses back. `inf` and `NaN` are written as Rust displays
    ///   them and are rejected by both [`parse`](Self::parse) and the validation pattern.
    pub fn format(&self, values: &[f32]) -> String {
        match self.layout {
            ListLayout::Tuple => bracketed('(', values, ')'),
            ListLayout::Rows { width } => values
                .chunks(width.max(1))
                .map(|row| bracketed('[', row, ']'))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    // Tuple text must match the exact-arity pattern; row text only has to have the right shape, so a token count
    // mismatch can be reported as an arity error.
    fn shape_regex(&self) -> &Regex {
        self.shape.get_or_init(|| {
            let source = match self.layout {
                ListLayout::Tuple => format!("^(?:{})$", self.pattern()),
                ListLayout::Rows { .. } => {
                    format!(r"^{ROW_SEPARATOR}*(?:{NUMBER}(?:{ROW_SEPARATOR}+{NUMBER})*)?{ROW_SEPARATOR}*$")
                }
            };
            Regex::new(&source).expect("INVARIANT: numeric list grammar builds a valid regex")
        })
    }
}

fn number_regex() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER).expect("INVARIANT: NUMBER is a valid regex"))
}

fn bracketed(open: char, values: &[f32], close: char) -> String {
    let mut out = String::with_capacity(values.len() * 8 + 2);
    out.push(open);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to String cannot fail.
        let _ = write!(out, "{value}");
    }
    out.push(close);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    static PAIR: NumericListGrammar = NumericListGrammar::tuple("Pair", 2);
    static GRID: NumericListGrammar = NumericListGrammar::rows("Grid", 4, 2);

    fn anchored(grammar: &NumericListGrammar) -> Regex {
        Regex::new(&format!("^(?:{})$", grammar.pattern())).unwrap()
    }

    #[test]
    fn tuple_accepts_optional_parens_and_whitespace() {
        assert_eq!(PAIR.parse("(1, 2)").unwrap(), vec![1.0, 2.0]);
        assert_eq!(PAIR.parse("1,2").unwrap(), vec![1.0, 2.0]);
        assert_eq!(PAIR.parse("  ( -1.5 ,+.25 )  ").unwrap(), vec![-1.5, 0.25]);
    }

    #[test]
    fn tuple_rejects_wrong_arity_and_garbage() {
        for text in ["(1)", "(1, 2, 3)", "(a, b)", "", "(1,, 2)", "(1 2)", "(1e3, 2)"] {
            assert_eq!(
                PAIR.parse(text),
                Err(ConversionError::malformed("Pair", text)),
                "expected rejection of {text:?}"
            );
        }
    }

    #[test]
    fn rows_count_tokens() {
        assert_eq!(GRID.parse("[1, 2]\n[3, 4]").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(GRID.parse("1 2 3 4").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            GRID.parse("1 2 3"),
            Err(ConversionError::WrongArity {
                type_name: "Grid",
                text: "1 2 3".to_string(),
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            GRID.parse("1 2 3 4 5"),
            Err(ConversionError::WrongArity {
                type_name: "Grid",
                text: "1 2 3 4 5".to_string(),
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn rows_reject_unseparated_or_foreign_tokens() {
        for text in ["1 2 3 x4", "1.2.3 4 5 6", "1-2 3 4 5", "(1, 2, 3, 4)"] {
            assert_eq!(GRID.parse(text), Err(ConversionError::malformed("Grid", text)));
        }
    }

    #[test]
    fn pattern_agrees_with_parser() {
        let samples = [
            "(1, 2)",
            "1, 2",
            "(1, 2, 3)",
            "[1, 2]\n[3, 4]",
            "1 2 3 4",
            "1 2 3",
            "1234",
            "1.2.3 4 5 6",
            "(.5, -7.)",
            "",
        ];
        for grammar in [&PAIR, &GRID] {
            let re = anchored(grammar);
            for text in samples {
                assert_eq!(
                    re.is_match(text),
                    grammar.can_parse(text),
                    "pattern and parser disagree on {text:?} for {}",
                    grammar.type_name()
                );
            }
        }
    }

    #[test]
    fn format_tuple_and_rows() {
        assert_eq!(PAIR.format(&[1.0, 2.0]), "(1, 2)");
        assert_eq!(PAIR.format(&[-0.5, 1e-7]), "(-0.5, 0.0000001)");
        assert_eq!(GRID.format(&[1.0, 2.0, 3.0, 4.0]), "[1, 2]\n[3, 4]");
    }

    #[test]
    fn format_of_non_finite_values_does_not_parse() {
        for value in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let text = PAIR.format(&[value, 1.0]);
            assert!(!PAIR.can_parse(&text), "{text:?} should be rejected");
            assert!(!anchored(&PAIR).is_match(&text), "{text:?} should not match the pattern");
        }
    }

    #[test]
    fn parse_array_checks_const_arity() {
        assert_eq!(PAIR.parse_array::<2>("(3, 4)").unwrap(), [3.0, 4.0]);
        assert!(matches!(
            PAIR.parse_array::<3>("(3, 4)"),
            Err(ConversionError::WrongArity { expected: 3, found: 2, .. })
        ));
    }
}
