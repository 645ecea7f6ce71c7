//! HTML parsing and data extraction.
//!
//! This module turns the scraped pages into records:
//! - Field dictionary (raw Icelandic labels to canonical keys)
//! - Numeric coercion of comma-decimal cell text
//! - Nutrient table rows and the two summary tables of a detail page
//! - The catalog page listing every item
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod coerce;
mod document;
mod fields;
mod index;
mod rows;
mod summary;

// Re-export public API
pub use coerce::{coerce, parse_decimal};
pub use document::{extract_nutrients, extract_summaries, parse_food_item};
pub use fields::{canonical_keys, is_numeric, lookup, FIELDS, NUMERIC_FIELDS};
pub use index::parse_index_document;
pub use rows::{parse_row, Column};
pub use summary::{parse_summary_rows, SummaryKind};
