//! Catalog page parsing.

use scraper::Html;
use std::collections::HashSet;

use super::document::{CELLS, GRID_TABLE, ROWS};
use crate::config::GRID_TABLE_SELECTOR;
use crate::error_handling::ParseError;
use crate::models::ItemStub;
use crate::utils::row_cells;

/// Parses the catalog page into item stubs sorted by numeric id.
///
/// The catalog grid has three columns: id, Icelandic name, English name. The
/// header row is skipped. Rows whose id is not a plain integer are logged and
/// dropped, since the id later names a file on disk. Repeated ids keep their
/// first occurrence.
///
/// # Errors
///
/// Returns [`ParseError::MissingTable`] if the page has no catalog grid.
pub fn parse_index_document(html: &str) -> Result<Vec<ItemStub>, ParseError> {
    let document = Html::parse_document(html);
    let table = document
        .select(&GRID_TABLE)
        .next()
        .ok_or(ParseError::MissingTable(GRID_TABLE_SELECTOR))?;

    let mut seen = HashSet::new();
    let mut items: Vec<(u64, ItemStub)> = Vec::new();

    for (index, row) in table.select(&ROWS).enumerate().skip(1) {
        let mut cells = row_cells(row, &CELLS).into_iter();
        let Some(id) = cells.next() else {
            continue;
        };
        let numeric_id = if id.bytes().all(|b| b.is_ascii_digit()) {
            id.parse::<u64>().ok()
        } else {
            None
        };
        let Some(numeric_id) = numeric_id else {
            log::warn!("Catalog row {}: skipping non-numeric id {:?}", index, id);
            continue;
        };
        if !seen.insert(numeric_id) {
            log::debug!("Catalog row {}: duplicate id {}", index, id);
            continue;
        }

        let name_local = cells.next().unwrap_or_default();
        let name_alt = cells.next().unwrap_or_default();
        items.push((
            numeric_id,
            ItemStub {
                id,
                name_local,
                name_alt,
            },
        ));
    }

    items.sort_by_key(|(numeric_id, _)| *numeric_id);
    log::info!("Catalog lists {} items", items.len());
    Ok(items.into_iter().map(|(_, stub)| stub).collect())
}
