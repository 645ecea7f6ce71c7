//! Energy and energy-distribution summary tables.

use super::coerce::coerce;
use super::fields::lookup;
use crate::config::{ENERGY_CAPTION, PERCENTAGES_CAPTION};
use crate::error_handling::ParseError;
use crate::models::SummaryMap;

/// Which summary table a caption introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    /// "Orka í 100g:", energy per 100g
    Energy,
    /// "Orkudreifing:", share of energy per macronutrient
    Percentages,
}

impl SummaryKind {
    /// Identifies a summary table by its (trimmed) caption.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedTable`] for any other caption.
    pub fn from_caption(caption: &str) -> Result<Self, ParseError> {
        match caption.trim() {
            ENERGY_CAPTION => Ok(SummaryKind::Energy),
            PERCENTAGES_CAPTION => Ok(SummaryKind::Percentages),
            other => Err(ParseError::UnexpectedTable {
                caption: other.to_string(),
            }),
        }
    }
}

/// Reads key/value rows into `map`.
///
/// Cell 0 is a raw label, cell 1 its value; further cells are ignored. Rows with
/// fewer than two cells carry no value and are skipped, as are rows where both
/// cells are empty. Empty values are omitted.
///
/// # Errors
///
/// - [`ParseError::UnknownField`] if a label is not in the field dictionary
/// - [`ParseError::MissingFieldLabel`] if a value has no label
pub fn parse_summary_rows<S: AsRef<str>>(
    rows: &[Vec<S>],
    map: &mut SummaryMap,
) -> Result<(), ParseError> {
    for (index, cells) in rows.iter().enumerate() {
        let [label, value, ..] = cells.as_slice() else {
            continue;
        };
        let (label, value) = (label.as_ref().trim(), value.as_ref());

        if label.is_empty() {
            if value.trim().is_empty() {
                continue;
            }
            return Err(ParseError::MissingFieldLabel { row: index });
        }

        let key = lookup(label)?;
        if let Some(parsed) = coerce(value, key) {
            map.insert(key, parsed);
        }
    }
    Ok(())
}
