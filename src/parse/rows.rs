//! Nutrient table rows.
//!
//! The nutrient table has a fixed nine-column layout:
//!
//! | # | Header    | Column           |
//! |---|-----------|------------------|
//! | 0 | Heiti     | field label      |
//! | 1 | Ein.      | unit             |
//! | 2 | Innihald  | amount           |
//! | 3 | Lægst     | amount_lowest    |
//! | 4 | Hæst      | amount_highest   |
//! | 5 | Fjöldi    | sample count (discarded) |
//! | 6 | Gæðast.   | grade            |
//! | 7 | Mæliár    | year_measured    |
//! | 8 | Heimild   | permit           |

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use super::coerce::coerce;
use super::fields::lookup;
use crate::error_handling::ParseError;
use crate::models::{FieldValue, NutrientRow};

/// A nutrient table column, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    Field,
    Unit,
    Amount,
    AmountLowest,
    AmountHighest,
    NotUsed,
    Grade,
    YearMeasured,
    Permit,
}

impl Column {
    /// Column at a zero-based cell position, if the schema has one.
    pub fn at(index: usize) -> Option<Column> {
        Column::iter().nth(index)
    }

    /// Semantic name; decides whether the column is numeric.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Parses the cells of one data row.
///
/// `row` is the row's position in the table and only appears in logs.
/// Empty cells are left unset, the label cell included, so a blank spacer row
/// yields an empty record. Cells past the last column are ignored.
///
/// # Errors
///
/// Returns [`ParseError::UnknownField`] if the label is not in the field
/// dictionary.
pub fn parse_row<S: AsRef<str>>(row: usize, cells: &[S]) -> Result<NutrientRow, ParseError> {
    let label = cells.first().map(|c| c.as_ref().trim()).unwrap_or_default();
    let mut nutrient = if label.is_empty() {
        log::debug!("Row {}: no field label", row);
        NutrientRow::default()
    } else {
        NutrientRow::new(lookup(label)?)
    };

    for (index, cell) in cells.iter().enumerate().skip(1) {
        let Some(column) = Column::at(index) else {
            log::trace!("Row {}: ignoring cell {} past the last column", row, index);
            continue;
        };
        let Some(value) = coerce(cell.as_ref(), column.name()) else {
            continue;
        };
        match column {
            Column::Field | Column::NotUsed => {}
            Column::Unit => nutrient.unit = into_text(value),
            Column::Amount => nutrient.amount = Some(value),
            Column::AmountLowest => nutrient.amount_lowest = Some(value),
            Column::AmountHighest => nutrient.amount_highest = Some(value),
            Column::Grade => nutrient.grade = into_text(value),
            Column::YearMeasured => nutrient.year_measured = Some(value),
            Column::Permit => nutrient.permit = into_text(value),
        }
    }

    log::trace!("Row {}: {:?}", row, nutrient);
    Ok(nutrient)
}

fn into_text(value: FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(t) => Some(t),
        FieldValue::Number(n) => Some(n.to_string()),
    }
}
