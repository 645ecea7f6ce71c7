//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `food_table` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;
use structopt::StructOpt;

use food_table::initialization::init_logger_with;
use food_table::{run_pipeline, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::from_args();
    let stage = opt.stage;
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_pipeline(config, stage).await {
        Ok(report) => {
            if report.outputs.is_empty() {
                println!(
                    "✅ Finished {} stage{} in {:.1}s",
                    report.stages.len(),
                    if report.stages.len() == 1 { "" } else { "s" },
                    report.elapsed_seconds
                );
            } else {
                println!(
                    "✅ Parsed {} item{} ({} without a detail page) in {:.1}s",
                    report.parsed,
                    if report.parsed == 1 { "" } else { "s" },
                    report.failed,
                    report.elapsed_seconds
                );
                for path in &report.outputs {
                    println!("Results saved in {}", path.display());
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("food_table error: {:#}", e);
            process::exit(1);
        }
    }
}
