//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;
use strum_macros::{Display, EnumString};

use crate::config::constants::{
    DEFAULT_DATA_DIR, DEFAULT_USER_AGENT, DETAIL_URL, HTTP_TIMEOUT_SECS, INDEX_URL,
    REQUEST_DELAY,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    Plain,
    Json,
}

/// One step of the scrape.
///
/// Each stage reads what the previous one left in the data directory, so any
/// of them can be re-run on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, StructOpt)]
#[strum(serialize_all = "kebab-case")]
pub enum Stage {
    /// Download the catalog page
    FetchIndex,
    /// Parse the catalog page into the item list
    ParseIndex,
    /// Download every detail page not already stored
    FetchItems,
    /// Parse the stored detail pages into the dataset
    ParseItems,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] = [
        Stage::FetchIndex,
        Stage::ParseIndex,
        Stage::FetchItems,
        Stage::ParseItems,
    ];
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use food_table::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/tmp/isgem"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding downloaded pages and JSON output
    pub data_dir: PathBuf,

    /// Catalog page URL
    pub index_url: String,

    /// Detail page URL (the item id is appended as a query parameter)
    pub detail_url: String,

    /// Pause between detail requests
    pub request_delay: Duration,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            index_url: INDEX_URL.to_string(),
            detail_url: DETAIL_URL.to_string(),
            request_delay: REQUEST_DELAY,
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "food_table",
    about = "Scrapes the ISGEM food composition tables into a JSON dataset"
)]
pub struct Opt {
    /// Directory holding downloaded pages and JSON output
    #[structopt(long, parse(from_os_str), default_value = "./data")]
    pub data_dir: PathBuf,

    /// Catalog page URL
    #[structopt(long, default_value = "http://www1.matis.is/ISGEM/FoodTable.aspx")]
    pub index_url: String,

    /// Detail page URL
    #[structopt(long, default_value = "http://www1.matis.is/ISGEM/details1.aspx")]
    pub detail_url: String,

    /// Pause between detail requests, in milliseconds
    #[structopt(long, default_value = "10")]
    pub delay_ms: u64,

    /// Per-request timeout in seconds
    #[structopt(long, default_value = "30")]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[structopt(long)]
    pub user_agent: Option<String>,

    /// Log level: error, warn, info, debug or trace
    #[structopt(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[structopt(long, default_value = "plain")]
    pub log_format: LogFormat,

    /// Run a single stage instead of the whole pipeline
    #[structopt(subcommand)]
    pub stage: Option<Stage>,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Config {
            data_dir: opt.data_dir,
            index_url: opt.index_url,
            detail_url: opt.detail_url,
            request_delay: Duration::from_millis(opt.delay_ms),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
