//! Logger initialization.
//!
//! Each stage reports progress through the `log` facade:
//! - `parse-items` logs `Parsed: "<id> - <name>"` at INFO for every item and
//!   `Skipping: ... HTML file does not exist` at WARN for items without a page,
//!   then the parsed and failed totals
//! - `fetch-items` logs `Downloaded: ...` at INFO and stored pages at DEBUG
//! - row-level detail of the table parsers is at DEBUG and TRACE

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` is read first and `level` then applies to this crate and to
/// anything `RUST_LOG` does not name. The HTML parser and HTTP stack are capped
/// so that `--log-level trace` shows row parsing rather than tokenizer output.
///
/// `LogFormat::Plain` prints `target [LEVEL] message` with the level colored.
/// `LogFormat::Json` prints one object per line with `ts` (milliseconds since
/// the epoch), `level`, `target` and `msg`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Watch every row of the nutrient tables
/// food_table --log-level trace parse-items
///
/// # Machine-readable progress of a full run
/// food_table --log-format json 2> run.jsonl
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, cap) in [
        ("html5ever", LevelFilter::Error),
        ("selectors", LevelFilter::Warn),
        ("reqwest", LevelFilter::Info),
        ("hyper", LevelFilter::Info),
    ] {
        builder.filter_module(module, cap.min(level));
    }
    builder.filter_module("food_table", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

fn colored_level(level: Level) -> ColoredString {
    let label = level.to_string();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

/// One JSON log line, with the message escaped by `serde_json`.
fn json_line(ts: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}
