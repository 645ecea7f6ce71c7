//! Records produced by the index and detail parsers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One entry of the food catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStub {
    /// Numeric item id, kept as text because it names the detail document
    pub id: String,
    /// Name in the source language (Icelandic)
    pub name_local: String,
    /// Alternate (English) name
    pub name_alt: String,
}

/// A cell value after coercion.
///
/// Numbers that failed to parse are kept as `NaN` and serialize as `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// Returns the text value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Number(_) => None,
            FieldValue::Text(t) => Some(t),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Whole numbers are written without a fraction (`2019`, not `2019.0`).
            FieldValue::Number(n)
                if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER =>
            {
                serializer.serialize_i64(*n as i64)
            }
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Text(t) => serializer.serialize_str(t),
        }
    }
}

/// One line of the per-item nutrient table.
///
/// Empty cells are left as `None` and omitted from the serialized record,
/// the label cell included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutrientRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_lowest: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_highest: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_measured: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permit: Option<String>,
}

impl NutrientRow {
    /// Creates a row with only the canonical field key set.
    pub fn new(field: &'static str) -> Self {
        NutrientRow {
            field: Some(field),
            ..Default::default()
        }
    }
}

/// Flat key/value map read from one summary table.
pub type SummaryMap = BTreeMap<&'static str, FieldValue>;

/// A fully assembled food item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub id: String,
    pub name_local: String,
    pub name_alt: String,
    pub nutrients: Vec<NutrientRow>,
    pub energy: SummaryMap,
    pub percentages: SummaryMap,
}

impl FoodItem {
    /// Starts an empty record for the given catalog entry.
    pub fn from_stub(stub: &ItemStub) -> Self {
        FoodItem {
            id: stub.id.clone(),
            name_local: stub.name_local.clone(),
            name_alt: stub.name_alt.clone(),
            nutrients: Vec::new(),
            energy: SummaryMap::new(),
            percentages: SummaryMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_whole_number_has_no_fraction() {
        let value = FieldValue::Number(2019.0);
        assert_eq!(serde_json::to_string(&value).unwrap(), "2019");
    }

    #[test]
    fn test_field_value_fraction_kept() {
        let value = FieldValue::Number(21.5);
        assert_eq!(serde_json::to_string(&value).unwrap(), "21.5");
    }

    #[test]
    fn test_field_value_nan_serializes_as_null() {
        let value = FieldValue::Number(f64::NAN);
        assert_eq!(serde_json::to_string(&value).unwrap(), "null");
    }

    #[test]
    fn test_field_value_infinity_serializes_as_null() {
        let value = FieldValue::Number(f64::NEG_INFINITY);
        assert_eq!(serde_json::to_string(&value).unwrap(), "null");
    }

    #[test]
    fn test_field_value_text() {
        let value = FieldValue::Text("A".to_string());
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"A\"");
        assert_eq!(value.as_str(), Some("A"));
        assert_eq!(value.as_f64(), None);
    }

    #[test]
    fn test_nutrient_row_omits_empty_columns() {
        let mut row = NutrientRow::new("protein");
        row.unit = Some("g".to_string());
        row.amount = Some(FieldValue::Number(21.5));

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value, json!({"field": "protein", "unit": "g", "amount": 21.5}));
    }

    #[test]
    fn test_blank_nutrient_row_serializes_empty() {
        let row = NutrientRow::default();
        assert_eq!(serde_json::to_value(&row).unwrap(), json!({}));
    }

    #[test]
    fn test_food_item_from_stub() {
        let stub = ItemStub {
            id: "7".to_string(),
            name_local: "Ýsa".to_string(),
            name_alt: "Haddock".to_string(),
        };
        let item = FoodItem::from_stub(&stub);
        assert_eq!(item.id, "7");
        assert_eq!(item.name_alt, "Haddock");
        assert!(item.nutrients.is_empty());
        assert!(item.energy.is_empty());
        assert!(item.percentages.is_empty());
    }
}
