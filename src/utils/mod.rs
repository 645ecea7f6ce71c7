//! Small shared helpers.
//!
//! This module provides:
//! - CSS selector parsing for the crate's constant selectors
//! - Table cell text extraction

mod selector;

pub use selector::{row_cells, static_selector};
