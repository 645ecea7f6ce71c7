//! Item assembly: one record per catalog entry.
//!
//! Items are processed strictly in catalog order. A missing detail page is a
//! recoverable skip; any parse error stops the whole run, because it means the
//! field dictionary no longer covers what the source publishes.

use log::{info, warn};

use crate::error_handling::{AssemblyError, ItemOutcome, RunStats};
use crate::models::{FoodItem, ItemStub};
use crate::parse::parse_food_item;
use crate::storage::DocumentSource;

/// Everything the parse stage produced.
#[derive(Debug)]
pub struct Assembly {
    /// Parsed items, in catalog order
    pub items: Vec<FoodItem>,
    pub stats: RunStats,
}

/// Parses the stored detail page of one item.
///
/// Returns `Ok(None)` when the page is not stored.
///
/// # Errors
///
/// - [`AssemblyError::Load`] if the page exists but cannot be read
/// - [`AssemblyError::Parse`] if the page does not parse
pub fn assemble_item<S: DocumentSource + ?Sized>(
    stub: &ItemStub,
    documents: &S,
) -> Result<Option<FoodItem>, AssemblyError> {
    if !documents.exists(&stub.id) {
        return Ok(None);
    }

    let html = documents.load(&stub.id).map_err(|source| AssemblyError::Load {
        id: stub.id.clone(),
        source,
    })?;

    parse_food_item(stub, &html)
        .map(Some)
        .map_err(|source| AssemblyError::Parse {
            id: stub.id.clone(),
            name: stub.name_local.clone(),
            source,
        })
}

/// Parses every item in `stubs`.
///
/// Stops at the first error without returning any items, so a caller can
/// never write a partial dataset.
pub fn assemble_all<S: DocumentSource + ?Sized>(
    stubs: &[ItemStub],
    documents: &S,
) -> Result<Assembly, AssemblyError> {
    let mut items = Vec::with_capacity(stubs.len());
    let mut stats = RunStats::new();

    for stub in stubs {
        match assemble_item(stub, documents)? {
            Some(item) => {
                info!("Parsed: \"{} - {}\"", stub.id, stub.name_local);
                items.push(item);
                stats.record(ItemOutcome::Parsed);
            }
            None => {
                warn!(
                    "Skipping: \"{} - {}\" - HTML file does not exist",
                    stub.id, stub.name_local
                );
                stats.record(ItemOutcome::MissingDocument);
            }
        }
    }

    info!("Parsed: {}", stats.parsed());
    info!("Failed: {}", stats.failed());
    Ok(Assembly { items, stats })
}
