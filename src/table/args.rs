//! Typst argument literals for table styling
//!
//! Styling attributes accept a closed set of value shapes: a scalar
//! (number, boolean, or raw Typst expression), a per-axis list, or an
//! insertion-ordered named mapping. [`ArgValue`] is the tagged union of
//! those shapes and [`render_arg`] produces the Typst literal for each.

use indexmap::IndexMap;

use crate::utils::error::{Error, Result};

/// A value renderable as a Typst argument literal.
///
/// Strings are passed through verbatim; the caller is responsible for
/// supplying well-formed Typst (a length, a color, or a formula such as
/// `(x, _) => if x > 1 { 1pt } else { 0pt }`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<String>),
    Map(IndexMap<String, String>),
}

impl ArgValue {
    /// Short tag used in attribute validation messages.
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            ArgValue::Int(_) => "integer",
            ArgValue::Float(_) => "float",
            ArgValue::Bool(_) => "boolean",
            ArgValue::Str(_) => "string",
            ArgValue::List(_) => "list",
            ArgValue::Map(_) => "mapping",
        }
    }
}

/// Render a value as a Typst argument literal.
pub fn render_arg(value: &ArgValue) -> String {
    match value {
        ArgValue::Int(i) => i.to_string(),
        ArgValue::Float(x) => x.to_string(),
        ArgValue::Bool(b) => b.to_string(),
        ArgValue::Str(s) => s.clone(),
        ArgValue::List(items) => render_sequence(items.iter().map(String::as_str)),
        ArgValue::Map(map) => render_mapping(map),
    }
}

/// Render a parenthesized, comma-joined sequence: `(a, b, c)`.
pub fn render_sequence<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = items.into_iter().collect();
    format!("({})", joined.join(", "))
}

/// Render a parenthesized `key: value` sequence in insertion order:
/// `(top: 1pt, bottom: 2pt)`.
pub fn render_mapping(map: &IndexMap<String, String>) -> String {
    let pairs: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
    format!("({})", pairs.join(", "))
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value as i64)
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        ArgValue::Int(value as i64)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(value: Vec<String>) -> Self {
        ArgValue::List(value)
    }
}

impl From<Vec<&str>> for ArgValue {
    fn from(value: Vec<&str>) -> Self {
        ArgValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<IndexMap<String, String>> for ArgValue {
    fn from(value: IndexMap<String, String>) -> Self {
        ArgValue::Map(value)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ArgValue {
    fn from(pairs: [(&str, &str); N]) -> Self {
        ArgValue::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Floats are accepted only if they have a Typst literal form.
impl TryFrom<f64> for ArgValue {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(ArgValue::Float(value))
        } else {
            Err(Error::argument(format!(
                "{} has no Typst literal form",
                value
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_arg(&ArgValue::Int(4)), "4");
        assert_eq!(render_arg(&ArgValue::Float(2.5)), "2.5");
        assert_eq!(render_arg(&ArgValue::Bool(true)), "true");
        assert_eq!(render_arg(&ArgValue::Str("3pt".into())), "3pt");
    }

    #[test]
    fn test_render_formula_passthrough() {
        let formula = "(x, _) => if x > 1 { 1pt } else { 0pt }";
        assert_eq!(render_arg(&ArgValue::from(formula)), formula);
    }

    #[test]
    fn test_render_list() {
        let value = ArgValue::from(vec!["3pt", "2pt", "1pt"]);
        assert_eq!(render_arg(&value), "(3pt, 2pt, 1pt)");
    }

    #[test]
    fn test_render_mapping_preserves_insertion_order() {
        let value = ArgValue::from([("top", "1pt"), ("bottom", "2pt")]);
        assert_eq!(render_arg(&value), "(top: 1pt, bottom: 2pt)");

        let value = ArgValue::from([("bottom", "2pt"), ("top", "1pt")]);
        assert_eq!(render_arg(&value), "(bottom: 2pt, top: 1pt)");
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        assert!(ArgValue::try_from(f64::NAN).is_err());
        assert!(ArgValue::try_from(f64::INFINITY).is_err());
        assert!(ArgValue::try_from(0.5).is_ok());
    }
}
