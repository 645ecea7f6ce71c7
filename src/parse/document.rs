//! Detail page parsing.
//!
//! A detail page holds three tables: the nutrient grid (`table#GridView1`) and
//! two captioned summary tables. This module walks the parsed document and feeds
//! their rows to the row and summary parsers.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::rows::parse_row;
use super::summary::{parse_summary_rows, SummaryKind};
use crate::config::{CAPTION_SELECTOR, CELL_SELECTOR, GRID_TABLE_SELECTOR, ROW_SELECTOR};
use crate::error_handling::ParseError;
use crate::models::{FoodItem, ItemStub, NutrientRow};
use crate::utils::{row_cells, static_selector};

pub(crate) static GRID_TABLE: LazyLock<Selector> =
    LazyLock::new(|| static_selector(GRID_TABLE_SELECTOR, "grid table"));
pub(crate) static ROWS: LazyLock<Selector> =
    LazyLock::new(|| static_selector(ROW_SELECTOR, "table rows"));
pub(crate) static CELLS: LazyLock<Selector> =
    LazyLock::new(|| static_selector(CELL_SELECTOR, "table cells"));
static CAPTIONS: LazyLock<Selector> =
    LazyLock::new(|| static_selector(CAPTION_SELECTOR, "summary captions"));

/// Parses one detail page into a complete item record.
///
/// # Errors
///
/// Any [`ParseError`] from the nutrient or summary tables.
pub fn parse_food_item(stub: &ItemStub, html: &str) -> Result<FoodItem, ParseError> {
    let document = Html::parse_document(html);
    let mut item = FoodItem::from_stub(stub);

    item.nutrients = extract_nutrients(&document)?;
    extract_summaries(&document, &mut item)?;

    log::debug!(
        "Item {}: {} nutrients, {} energy values, {} percentages",
        stub.id,
        item.nutrients.len(),
        item.energy.len(),
        item.percentages.len()
    );
    Ok(item)
}

/// Reads every data row of the nutrient grid.
///
/// Row 0 is the header and is never parsed. Rows without any `<td>` cells
/// (pager or spacer rows) are skipped. A page without the grid yields no rows.
pub fn extract_nutrients(document: &Html) -> Result<Vec<NutrientRow>, ParseError> {
    let Some(table) = document.select(&GRID_TABLE).next() else {
        log::debug!("No nutrient table in document");
        return Ok(Vec::new());
    };

    let mut nutrients = Vec::new();
    for (index, row) in table.select(&ROWS).enumerate().skip(1) {
        let cells = row_cells(row, &CELLS);
        if cells.is_empty() {
            log::trace!("Row {}: no data cells, skipping", index);
            continue;
        }
        nutrients.push(parse_row(index, &cells)?);
    }
    Ok(nutrients)
}

/// Fills the item's `energy` and `percentages` maps from the captioned tables.
///
/// # Errors
///
/// [`ParseError::UnexpectedTable`] if any table carries an unknown caption.
pub fn extract_summaries(document: &Html, item: &mut FoodItem) -> Result<(), ParseError> {
    for caption in document.select(&CAPTIONS) {
        let text = caption.text().collect::<String>();
        let kind = SummaryKind::from_caption(&text)?;

        let Some(table) = caption.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        let rows: Vec<Vec<String>> = table
            .select(&ROWS)
            .map(|row| row_cells(row, &CELLS))
            .collect();

        let target = match kind {
            SummaryKind::Energy => &mut item.energy,
            SummaryKind::Percentages => &mut item.percentages,
        };
        parse_summary_rows(&rows, target)?;
    }
    Ok(())
}
