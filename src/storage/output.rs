//! JSON output files.
//!
//! Each file is written to a temporary file next to its destination and renamed
//! into place, so readers never see a half-written dataset.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::documents::{write_atomic, DataPaths};
use crate::models::{FoodItem, ItemStub};

/// Writes the dataset in pretty and compact form.
///
/// Returns the two paths written, pretty first.
pub fn write_dataset(paths: &DataPaths, items: &[FoodItem]) -> Result<(PathBuf, PathBuf)> {
    let pretty = serde_json::to_vec_pretty(items).context("Failed to serialize dataset")?;
    let compact = serde_json::to_vec(items).context("Failed to serialize dataset")?;

    let (pretty_path, compact_path) = (paths.dataset(), paths.dataset_min());
    write_output(&pretty_path, &pretty)?;
    write_output(&compact_path, &compact)?;
    log::info!(
        "Wrote {} items to {} and {}",
        items.len(),
        pretty_path.display(),
        compact_path.display()
    );
    Ok((pretty_path, compact_path))
}

/// Saves the parsed catalog for the later stages.
pub fn write_item_list(paths: &DataPaths, items: &[ItemStub]) -> Result<PathBuf> {
    let path = paths.item_list();
    write_output(&path, &to_pretty(items)?)?;
    Ok(path)
}

/// Loads the catalog saved by [`write_item_list`].
pub fn read_item_list(paths: &DataPaths) -> Result<Vec<ItemStub>> {
    let path = paths.item_list();
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read item list: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse item list: {}", path.display()))
}

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value).context("Failed to serialize JSON")
}

fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    write_atomic(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
