//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses one of the crate's constant CSS selectors.
///
/// All selectors passed here are string constants from [`crate::config`], so a
/// parse failure is a programming error rather than bad input.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - What the selector is used for, included in the panic message
///
/// # Panics
///
/// Panics if the selector cannot be parsed.
pub fn static_selector(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Collects the trimmed text of every `<td>` in a table row.
///
/// Header cells (`<th>`) are not included, so a header row yields no cells.
pub fn row_cells(row: scraper::ElementRef<'_>, cell_selector: &Selector) -> Vec<String> {
    row.select(cell_selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}
