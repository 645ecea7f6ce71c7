//! Locale-aware conversion of cell text into field values.

use regex::Regex;
use std::sync::LazyLock;

use super::fields::is_numeric;
use crate::models::FieldValue;

/// Longest leading decimal literal, e.g. `21.5` in `21.5 g`, or a signed
/// `Infinity`.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .unwrap_or_else(|e| {
            panic!("Failed to compile numeric prefix pattern: {e}. This is a programming error.")
        })
});

/// Converts cell text into a value for `key`.
///
/// Returns `None` for empty (or whitespace-only) text so the caller can omit
/// the field. Numeric keys use the comma decimal separator of the source pages;
/// text that does not start with a number becomes `NaN` rather than an error.
/// Other keys keep the trimmed text.
pub fn coerce(raw_text: &str, key: &str) -> Option<FieldValue> {
    let text = raw_text.trim();
    if text.is_empty() {
        return None;
    }

    if is_numeric(key) {
        Some(FieldValue::Number(parse_decimal(text)))
    } else {
        Some(FieldValue::Text(text.to_string()))
    }
}

/// Parses a number written with a comma decimal separator.
///
/// Only the first comma is treated as the separator, and trailing text after
/// the number (units, footnote marks) is ignored.
pub fn parse_decimal(text: &str) -> f64 {
    let normalized = text.trim_start().replacen(',', ".", 1);
    LEADING_NUMBER
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
