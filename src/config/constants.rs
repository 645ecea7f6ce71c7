//! Configuration constants.
//!
//! This module defines the source URLs, on-disk layout and page structure the
//! scraper depends on.

use std::time::Duration;

/// Catalog page listing every food item.
pub const INDEX_URL: &str = "http://www1.matis.is/ISGEM/FoodTable.aspx";
/// Detail page for one item; the id goes in [`DETAIL_ID_PARAM`].
pub const DETAIL_URL: &str = "http://www1.matis.is/ISGEM/details1.aspx";
pub const DETAIL_ID_PARAM: &str = "FAEDA";

/// Pause between two detail requests.
pub const REQUEST_DELAY: Duration = Duration::from_millis(10);
/// Per-request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("food_table/", env!("CARGO_PKG_VERSION"));

// On-disk layout, relative to the data directory
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const HTML_SUBDIR: &str = "html";
pub const ITEMS_SUBDIR: &str = "food-items";
pub const JSON_SUBDIR: &str = "json";
pub const INDEX_FILE: &str = "food-list.html";
pub const ITEM_LIST_FILE: &str = "food-item-list.json";
pub const DATASET_FILE: &str = "food-data.json";
pub const DATASET_MIN_FILE: &str = "food-data-min.json";

// Page structure
/// Both the catalog and the nutrient table are ASP.NET grid views with this id.
pub const GRID_TABLE_SELECTOR: &str = "table#GridView1";
pub const ROW_SELECTOR: &str = "tr";
pub const CELL_SELECTOR: &str = "td";
pub const CAPTION_SELECTOR: &str = "table > caption";

/// Caption of the "energy per 100g" summary table.
pub const ENERGY_CAPTION: &str = "Orka í 100g:";
/// Caption of the "energy distribution" summary table.
pub const PERCENTAGES_CAPTION: &str = "Orkudreifing:";
