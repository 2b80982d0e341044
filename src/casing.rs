//! Identifier case validation and conversion
//!
//! Four conventional cases are understood: `snake_case`, `camelCase`,
//! `kebab-case` and `PascalCase`. A string can be validated against a case,
//! decomposed into lowercase word components, forced into a case from
//! arbitrary text, or converted directly between two known cases.
//!
//! # Examples
//!
//! ```
//! use slackbox::casing::{self, Case};
//!
//! // Direct conversion validates the source case first
//! let camel = casing::convert_case("observed_value", Case::Snake, Case::Camel).unwrap();
//! assert_eq!(camel, "observedValue");
//!
//! // Forcing tokenizes arbitrary text and never fails
//! assert_eq!(casing::force_case("I'm a teapot", Case::Snake), "i_m_a_teapot");
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Maximal runs of `_` or `-` characters
static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_-]+").unwrap());

/// A single uppercase letter, captured for re-insertion
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z])").unwrap());

/// The four supported identifier cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `snake_case`
    Snake,
    /// `camelCase`
    Camel,
    /// `kebab-case`
    Kebab,
    /// `PascalCase`
    Pascal,
}

impl Case {
    /// All supported cases, in a fixed order
    pub const ALL: [Self; 4] = [Self::Snake, Self::Camel, Self::Kebab, Self::Pascal];

    /// Lowercase name used in error messages and operation names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Camel => "camel",
            Self::Kebab => "kebab",
            Self::Pascal => "pascal",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when converting between cases
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    /// Input did not match the grammar of the case asserted by the caller
    #[error("{string} is not a {case} case string")]
    InvalidFormat {
        /// The rejected input
        string: String,
        /// The case the input was expected to match
        case: Case,
    },

    /// No implementation is registered for the requested operation
    #[error("{operation} is not implemented")]
    NotImplemented {
        /// Constructed operation name, e.g. `convert_snake_to_snake`
        operation: String,
    },
}

/// A direct converter between two known cases
type Converter = fn(&str) -> String;

/// Pairwise converter table; same-case pairs are intentionally unmapped
const CONVERTERS: [(Case, Case, Converter); 12] = [
    (Case::Snake, Case::Camel, snake_to_camel),
    (Case::Snake, Case::Kebab, snake_to_kebab),
    (Case::Snake, Case::Pascal, snake_to_pascal),
    (Case::Camel, Case::Snake, camel_to_snake),
    (Case::Camel, Case::Kebab, camel_to_kebab),
    (Case::Camel, Case::Pascal, camel_to_pascal),
    (Case::Kebab, Case::Snake, kebab_to_snake),
    (Case::Kebab, Case::Camel, kebab_to_camel),
    (Case::Kebab, Case::Pascal, kebab_to_pascal),
    (Case::Pascal, Case::Snake, pascal_to_snake),
    (Case::Pascal, Case::Camel, pascal_to_camel),
    (Case::Pascal, Case::Kebab, pascal_to_kebab),
];

/// Check whether a string is well-formed for the given case
///
/// Grammars are anchored and full-string: `snake` and `kebab` are
/// lowercase-letter runs joined by single separators; `camel` is a lowercase
/// run followed by uppercase-then-lowercase groups; `pascal` is one or more
/// uppercase-then-lowercase groups with no leading lowercase run.
#[must_use]
pub fn is_valid(input: &str, case: Case) -> bool {
    grammar(case).is_match(input)
}

/// Decompose a string into its lowercase word components
///
/// Separator runs become spaces, every uppercase letter opens a new
/// component, and apostrophes and double quotes act as separators. Acronym
/// runs therefore split letter by letter: `"HTTPRequest"` yields
/// `["h", "t", "t", "p", "request"]`.
#[must_use]
pub fn components(input: &str) -> Vec<String> {
    let spaced = SEPARATOR_RUNS.replace_all(input, " ");
    let spaced = UPPERCASE.replace_all(&spaced, " $1");
    let lowered = spaced.to_lowercase();
    let separated = lowered.replace(['\'', '"'], " ");
    separated.trim().split(' ').map(ToString::to_string).collect()
}

/// Force arbitrary text into the given case
///
/// The input is decomposed with [`components`] and re-joined per the target
/// case. No validation is performed, so this never fails, even on malformed
/// or mixed-case input.
#[must_use]
pub fn force_case(input: &str, case: Case) -> String {
    let parts = components(input);
    match case {
        Case::Snake => parts.join("_"),
        Case::Kebab => parts.join("-"),
        Case::Camel => {
            let mut parts = parts.into_iter();
            let mut joined = parts.next().unwrap_or_default();
            for part in parts {
                joined.push_str(&title(&part));
            }
            joined
        }
        Case::Pascal => parts.iter().map(|part| title(part)).collect(),
    }
}

/// Convert a string from one known case to another
///
/// The input must be well-formed `from` case, otherwise
/// [`CaseError::InvalidFormat`] is returned. Conversion then goes through
/// one of twelve direct pairwise converters; a pair with no registered
/// converter (including every same-case pair) fails with
/// [`CaseError::NotImplemented`].
pub fn convert_case(input: &str, from: Case, to: Case) -> Result<String, CaseError> {
    if !is_valid(input, from) {
        return Err(CaseError::InvalidFormat { string: input.to_string(), case: from });
    }
    let convert = converter(from, to)?;
    Ok(convert(input))
}

/// Look up the compiled grammar for a case
fn grammar(case: Case) -> &'static Regex {
    static SNAKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+(_[a-z]+)*$").unwrap());
    static CAMEL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[a-z]+([A-Z]+[a-z]+)*$").unwrap());
    static KEBAB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+(-[a-z]+)*$").unwrap());
    static PASCAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Z]+[a-z]+)+$").unwrap());

    match case {
        Case::Snake => &SNAKE,
        Case::Camel => &CAMEL,
        Case::Kebab => &KEBAB,
        Case::Pascal => &PASCAL,
    }
}

/// Look up the direct converter for a case pair
fn converter(from: Case, to: Case) -> Result<Converter, CaseError> {
    CONVERTERS
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, convert)| *convert)
        .ok_or_else(|| CaseError::NotImplemented { operation: format!("convert_{from}_to_{to}") })
}

/// Uppercase the first letter and lowercase the rest
fn title(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

fn snake_to_camel(input: &str) -> String {
    let mut parts = input.split('_');
    let mut joined = parts.next().unwrap_or_default().to_string();
    for part in parts {
        joined.push_str(&title(part));
    }
    joined
}

fn snake_to_kebab(input: &str) -> String {
    input.replace('_', "-")
}

fn snake_to_pascal(input: &str) -> String {
    input.split('_').map(title).collect()
}

fn camel_to_snake(input: &str) -> String {
    UPPERCASE.replace_all(input, "_$1").to_lowercase()
}

fn camel_to_kebab(input: &str) -> String {
    UPPERCASE.replace_all(input, "-$1").to_lowercase()
}

fn camel_to_pascal(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

fn kebab_to_snake(input: &str) -> String {
    input.replace('-', "_")
}

fn kebab_to_camel(input: &str) -> String {
    let mut parts = input.split('-');
    let mut joined = parts.next().unwrap_or_default().to_string();
    for part in parts {
        joined.push_str(&title(part));
    }
    joined
}

fn kebab_to_pascal(input: &str) -> String {
    input.split('-').map(title).collect()
}

fn pascal_to_snake(input: &str) -> String {
    UPPERCASE.replace_all(input, "_$1").to_lowercase().trim_matches('_').to_string()
}

fn pascal_to_camel(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| first.to_lowercase().chain(chars).collect())
}

fn pascal_to_kebab(input: &str) -> String {
    UPPERCASE.replace_all(input, "-$1").to_lowercase().trim_matches('-').to_string()
}
