//! Error handling and run statistics.
//!
//! This module provides:
//! - Error type definitions for parsing, assembly, fetching and initialization
//! - Per-item outcome counters
//!
//! Outcomes are categorized into:
//! - **Parsed**: the item was appended to the dataset
//! - **Failures**: recoverable skips (a missing detail document)
//!
//! Anything else is an error that aborts the run.

mod stats;
mod types;

// Re-export public API
pub use stats::RunStats;
pub use types::{AssemblyError, FetchError, InitializationError, ItemOutcome, ParseError};
