// Shared test helpers for building source pages and data directories.

#![allow(dead_code)] // Each test file uses a different subset

use std::path::Path;

use food_table::storage::{write_item_list, DataPaths, DocumentStore};
use food_table::ItemStub;

pub const HEADER_ROW: &str = "<tr><th>Heiti</th><th>Ein.</th><th>Innihald</th><th>Lægst</th>\
    <th>Hæst</th><th>Fjöldi</th><th>Gæðast.</th><th>Mæliár</th><th>Heimild</th></tr>";

/// A detail page with the given nutrient rows and the two standard summary tables.
pub fn detail_page(rows: &[&[&str]]) -> String {
    detail_page_with_captions(rows, "Orka í 100g:", "Orkudreifing:")
}

pub fn detail_page_with_captions(rows: &[&[&str]], energy: &str, percentages: &str) -> String {
    let trs: String = rows
        .iter()
        .map(|cells| {
            let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{tds}</tr>")
        })
        .collect();
    format!(
        "<html><body>\
         <table id=\"GridView1\">{HEADER_ROW}{trs}</table>\
         <table><caption>{energy}</caption>\
         <tr><td>kJ:</td><td>105</td></tr><tr><td>kcal:</td><td>25</td></tr></table>\
         <table><caption>{percentages}</caption>\
         <tr><td>Protín</td><td>85</td></tr><tr><td>Fita</td><td>10,5</td></tr>\
         <tr><td>Kolvetni</td><td>0</td></tr></table>\
         </body></html>"
    )
}

/// A catalog page listing `(id, local name, alternate name)` rows.
pub fn catalog_page(rows: &[(&str, &str, &str)]) -> String {
    let trs: String = rows
        .iter()
        .map(|(id, is, en)| format!("<tr><td>{id}</td><td>{is}</td><td>{en}</td></tr>"))
        .collect();
    format!(
        "<html><body><table id=\"GridView1\">\
         <tr><th>Nr.</th><th>Heiti</th><th>Enskt heiti</th></tr>{trs}</table></body></html>"
    )
}

pub fn stub(id: &str, name_local: &str, name_alt: &str) -> ItemStub {
    ItemStub {
        id: id.to_string(),
        name_local: name_local.to_string(),
        name_alt: name_alt.to_string(),
    }
}

/// Writes an item list and the given detail pages into `dir`.
pub fn seed_data_dir(dir: &Path, stubs: &[ItemStub], pages: &[(&str, String)]) -> DocumentStore {
    let paths = DataPaths::new(dir);
    write_item_list(&paths, stubs).expect("Failed to write item list");
    let store = DocumentStore::new(paths);
    for (id, page) in pages {
        store
            .persist(id, page.as_bytes())
            .expect("Failed to write detail page");
    }
    store
}
