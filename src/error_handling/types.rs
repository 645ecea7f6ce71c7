//! Error type definitions.
//!
//! This module defines the error types used throughout the application, plus the
//! per-item outcome categories counted during a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while turning an HTML document into records.
///
/// Every variant is fatal for the run: it means the field dictionary or the
/// parser no longer matches the upstream page layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A table label that has no entry in the field dictionary.
    #[error("Unknown field label: {label:?}")]
    UnknownField { label: String },

    /// A summary table whose caption is neither of the known captions.
    #[error("Unexpected table: {caption:?}")]
    UnexpectedTable { caption: String },

    /// A summary row with a value but no label.
    #[error("Row {row} has no field label")]
    MissingFieldLabel { row: usize },

    /// A table the document is required to contain.
    #[error("Table not found: {0}")]
    MissingTable(&'static str),
}

/// Fatal errors from assembling the item collection.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// A detail document failed to parse.
    #[error("Failed to parse item {id} ({name}): {source}")]
    Parse {
        id: String,
        name: String,
        #[source]
        source: ParseError,
    },

    /// A detail document exists but could not be read.
    #[error("Failed to load item {id}: {source}")]
    Load {
        id: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the network fetch stages.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request failed or returned a non-success status.
    #[error("HTTP request error: {0}")]
    Http(#[from] ReqwestError),

    /// The configured URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The fetched document could not be stored.
    #[error("Failed to store document: {0}")]
    Io(#[from] std::io::Error),
}

/// What happened to one catalog entry during the parse stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ItemOutcome {
    /// Detail document parsed and appended to the output
    Parsed,
    /// Detail document not present in local storage
    MissingDocument,
}

impl std::fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ItemOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemOutcome::Parsed => "Parsed",
            ItemOutcome::MissingDocument => "Missing detail document",
        }
    }

    /// Whether the outcome counts toward the run's failed total.
    pub fn is_failure(&self) -> bool {
        matches!(self, ItemOutcome::MissingDocument)
    }
}
