//! food_table library: scrapes the ISGEM food composition tables
//!
//! This library downloads the public Icelandic food composition database
//! (ISGEM) and converts its HTML pages into a JSON dataset with canonical,
//! English nutrient keys.
//!
//! The work is split into four stages, each reading what the previous one left
//! in the data directory:
//!
//! 1. `fetch-index`: download the catalog page
//! 2. `parse-index`: parse it into the item list
//! 3. `fetch-items`: download every detail page not already stored
//! 4. `parse-items`: parse the stored detail pages into the dataset
//!
//! # Example
//!
//! ```no_run
//! use food_table::{Config, Stage, run_pipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     data_dir: std::path::PathBuf::from("./data"),
//!     ..Default::default()
//! };
//!
//! let report = run_pipeline(config, Some(Stage::ParseItems)).await?;
//! println!("Parsed {} items, {} missing", report.parsed, report.failed);
//! # Ok(())
//! # }
//! ```

mod assembler;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
pub mod storage;
mod utils;

// Re-export public API
pub use assembler::{assemble_all, assemble_item, Assembly};
pub use config::{Config, LogFormat, LogLevel, Opt, Stage};
pub use error_handling::{
    AssemblyError, FetchError, InitializationError, ItemOutcome, ParseError, RunStats,
};
pub use fetch::{
    detail_url, fetch_detail_document, fetch_index_document, fetch_missing_documents,
    FetchReport,
};
pub use models::{FieldValue, FoodItem, ItemStub, NutrientRow, SummaryMap};
pub use run::{run_pipeline, RunReport};

// Internal run module (sequences the stages)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::assembler::assemble_all;
    use crate::config::{Config, Stage};
    use crate::fetch::{fetch_index_document, fetch_missing_documents};
    use crate::initialization::init_client;
    use crate::parse::parse_index_document;
    use crate::storage::{
        read_item_list, write_dataset, write_item_list, DataPaths, DocumentStore,
    };

    /// Results of a pipeline run.
    ///
    /// Counts stay at zero for stages that did not run.
    #[derive(Debug, Clone, Default)]
    pub struct RunReport {
        /// Stages that ran, in order
        pub stages: Vec<Stage>,
        /// Items in the catalog
        pub catalog_size: usize,
        /// Detail pages downloaded
        pub downloaded: usize,
        /// Detail pages already stored
        pub skipped: usize,
        /// Items written to the dataset
        pub parsed: usize,
        /// Items without a stored detail page
        pub failed: usize,
        /// Dataset files written (pretty, compact)
        pub outputs: Vec<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one stage, or all four in order when `stage` is `None`.
    ///
    /// # Errors
    ///
    /// Any stage failure ends the run. The dataset is only written after every
    /// item has been parsed, so a failed run leaves no new dataset behind.
    pub async fn run_pipeline(config: Config, stage: Option<Stage>) -> Result<RunReport> {
        let start = Instant::now();
        let stages = match stage {
            Some(stage) => vec![stage],
            None => Stage::ALL.to_vec(),
        };

        let store = DocumentStore::new(DataPaths::new(&config.data_dir));
        let mut report = RunReport::default();

        for stage in stages {
            info!("Stage {}", stage);
            match stage {
                Stage::FetchIndex => fetch_index(&config, &store).await?,
                Stage::ParseIndex => {
                    report.catalog_size = parse_index(&store)?;
                }
                Stage::FetchItems => {
                    let items = read_item_list(store.paths())?;
                    report.catalog_size = items.len();
                    let client = init_client(&config)?;
                    let fetched = fetch_missing_documents(&client, &config, &store, &items)
                        .await
                        .context("Failed to fetch detail pages")?;
                    report.downloaded = fetched.downloaded;
                    report.skipped = fetched.skipped;
                }
                Stage::ParseItems => {
                    let items = read_item_list(store.paths())?;
                    report.catalog_size = items.len();
                    let assembly = assemble_all(&items, &store)
                        .context("Aborting: no dataset written")?;
                    let (pretty, compact) = write_dataset(store.paths(), &assembly.items)?;
                    report.parsed = assembly.stats.parsed();
                    report.failed = assembly.stats.failed();
                    report.outputs = vec![pretty, compact];
                }
            }
            report.stages.push(stage);
        }

        report.elapsed_seconds = start.elapsed().as_secs_f64();
        Ok(report)
    }

    async fn fetch_index(config: &Config, store: &DocumentStore) -> Result<()> {
        let client = init_client(config)?;
        let document = fetch_index_document(&client, config)
            .await
            .context("Failed to fetch catalog page")?;
        store
            .persist_index(&document)
            .context("Failed to store catalog page")?;
        info!(
            "Saved catalog page to {}",
            store.paths().index_document().display()
        );
        Ok(())
    }

    fn parse_index(store: &DocumentStore) -> Result<usize> {
        let document = store.load_index().with_context(|| {
            format!(
                "Failed to read catalog page: {}",
                store.paths().index_document().display()
            )
        })?;
        let items = parse_index_document(&document).context("Failed to parse catalog page")?;
        let path = write_item_list(store.paths(), &items)?;
        info!("Saved {} catalog items to {}", items.len(), path.display());
        Ok(items.len())
    }
}
