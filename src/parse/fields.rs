//! Field dictionary: raw table labels to canonical keys.
//!
//! Labels on the source pages are abbreviated Icelandic and cannot be derived
//! from one another, so every accepted spelling is listed explicitly. Several
//! labels may share a canonical key (the summary tables and the nutrient table
//! use different spellings for the same nutrient).

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::error_handling::ParseError;

/// Every recognized raw label and its canonical key.
pub const FIELDS: &[(&str, &str)] = &[
    // Energy summary table
    ("kJ:", "kJ"),
    ("kcal:", "kcal"),
    // Energy distribution table
    ("Protín", "protein"),
    ("Fita", "fats"),
    ("Kolvetni", "carbohydrates"),
    ("Trefjar", "fibers"),
    // Older exports spelled this key "alchohol"
    ("Alkóhól", "alcohol"),
    // Nutrient table
    ("Prótein, alls", "protein"),
    ("Fita, alls", "fats"),
    ("Sykrur", "sugars"),
    ("Mettaðar fitusýrur", "fatty_acids"),
    ("cis-Einómettaðar fitus.", "fatty_acids_mono"),
    ("cis-Fjölómettaðar fitus.", "fatty_acids_poly"),
    ("cis-Fjölóm. fitus. n-6", "fatty_acids_n6_poly"),
    ("cis-Fjölóm. fitus. n-3", "fatty_acids_n3_poly"),
    ("cis-Fjölóm. f. n-3 langar", "fatty_acids_n3_poly_long"),
    ("trans-Fitusýrur", "trans_fatty_acids"),
    ("Kólesteról", "cholesterol"),
    ("Kolvetni, alls", "carbohydrates"),
    ("Viðbættur sykur", "added_sugar"),
    ("Trefjaefni", "fibers"),
    ("Steinefni, alls", "minerals"),
    ("Vatn", "water"),
    ("Kalk, Ca", "calcium"),
    ("Fosfór, P", "phosphorus"),
    ("Magnesíum, Mg", "magnesium"),
    ("Natríum, Na", "natrium"),
    ("Kalíum, K", "potassium"),
    ("Járn, Fe", "iron"),
    ("Zink, Zn", "zinc"),
    ("Kopar, Cu", "copper"),
    ("Joð, I", "iodine"),
    ("Mangan, Mn", "manganese"),
    ("Selen, Se", "selenium"),
    ("Kadmín, Cd", "cadmium"),
    ("Blý, Pb", "lead"),
    ("Kvikasilfur, Hg", "mercury"),
    ("Arsen, As", "arsenic"),
    ("Retinol", "retinol"),
    ("Beta-karótín", "beta_carotene"),
    ("A-vítamín, RJ", "a_vitamins"),
    ("B-vítamín", "b_vitamins"),
    ("B1-vítamín, þíamín", "b1_vitamins_thiamine"),
    ("B2-vítamín, ríbóflavín", "b2_vitamins_riboflavin"),
    ("B6-vítamín", "b6_vitamins"),
    ("B12-vítamín", "b12_vitamins"),
    ("C-vítamín", "c_vitamins"),
    ("D-vítamín", "d_vitamins"),
    ("E-vítamín", "e_vitamins"),
    ("E-vítamín, a-TJ", "e_vitamins"),
    ("Alfa-tókóferól", "alpha-tocopherol"),
    ("Níasín", "niacin"),
    ("Níasín-jafngildi", "niacin_equivalents"),
    ("Fólat, alls", "folate"),
    ("Beta-glúkanar", "beta_glucans"),
    ("C 18:2 n-6", "linoleic_acid"),
    ("C 18:3 n-3", "alpha_linolenic_acid"),
    ("C 20:5 n-3", "eicosapentaenoic_acid"),
    ("C 22:6 n-3", "docosahexaenoic_acid"),
];

/// Keys whose values are parsed as numbers.
///
/// Contains both canonical nutrient keys (used by the summary tables) and the
/// semantic names of the numeric nutrient-table columns.
pub const NUMERIC_FIELDS: &[&str] = &[
    "amount",
    "lowest",
    "highest",
    "year",
    "kJ",
    "kcal",
    "protein",
    "fats",
    "carbohydrates",
    "fibers",
    "alcohol",
    "amount_lowest",
    "amount_highest",
    "year_measured",
];

static DICTIONARY: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FIELDS.iter().copied().collect());

static NUMERIC_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NUMERIC_FIELDS.iter().copied().collect());

/// Resolves a raw label to its canonical key.
///
/// # Errors
///
/// Returns [`ParseError::UnknownField`] when the label is not in [`FIELDS`].
pub fn lookup(raw_label: &str) -> Result<&'static str, ParseError> {
    DICTIONARY
        .get(raw_label)
        .copied()
        .ok_or_else(|| ParseError::UnknownField {
            label: raw_label.to_string(),
        })
}

/// Whether values under `key` are coerced to numbers.
pub fn is_numeric(key: &str) -> bool {
    NUMERIC_SET.contains(key)
}

/// Every distinct canonical key, in table order.
pub fn canonical_keys() -> impl Iterator<Item = &'static str> {
    let mut seen = HashSet::new();
    FIELDS
        .iter()
        .map(|&(_, key)| key)
        .filter(move |key| seen.insert(*key))
}
