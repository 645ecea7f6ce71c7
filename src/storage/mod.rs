// storage/mod.rs
// Local file storage: downloaded pages and JSON output

pub mod documents;
pub mod output;

// Re-export commonly used items
pub use documents::{DataPaths, DocumentSource, DocumentStore};
pub use output::{read_item_list, write_dataset, write_item_list};
