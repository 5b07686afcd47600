//! earthquakes library: fetch, store and rank regional seismic events
//!
//! This library queries an FDSN event web service (INGV by default) for events
//! inside a bounding box and time window, upserts them into a local SQLite
//! database keyed by event identifier, and ranks the stored events by
//! magnitude.
//!
//! # Example
//!
//! ```no_run
//! use earthquakes::{run_pipeline, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     days: 1,
//!     min_magnitude: 4.0,
//!     top: 2,
//!     ..Default::default()
//! };
//!
//! let report = run_pipeline(&config).await?;
//! for line in &report.lines {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Nothing is spawned, so a
//! current-thread runtime is enough.

#![warn(missing_docs)]

pub mod bbox;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;
pub mod normalize;
pub mod report;
mod storage;

// Re-export public API
pub use bbox::{load_bounding_box, write_bounding_box, BoundingBox};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    ConfigError, EarthquakeError, FetchError, MalformedRecordError, StorageError, ValidationError,
};
pub use fetch::{EventService, RawEvent, TimeWindow};
pub use models::EarthquakeRecord;
pub use normalize::{normalize, normalize_batch, NormalizedBatch};
pub use report::format_records;
pub use run::{run_pipeline, run_pipeline_at, PipelineReport};
pub use storage::Store;

// Internal run module (wires the pipeline stages together)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use chrono::{DateTime, Utc};
    use log::info;

    use crate::bbox::load_bounding_box;
    use crate::config::Config;
    use crate::fetch::{EventService, TimeWindow};
    use crate::initialization::init_client;
    use crate::models::EarthquakeRecord;
    use crate::normalize::normalize_batch;
    use crate::report::format_records;
    use crate::storage::Store;

    /// Outcome of one fetch-store-rank run.
    #[derive(Debug, Clone)]
    pub struct PipelineReport {
        /// Events returned by the service
        pub fetched: usize,
        /// Events skipped because they could not be normalized
        pub skipped: usize,
        /// Rows written (inserted or refreshed) in the store
        pub stored: u64,
        /// Rows in the store after this run
        pub total_in_store: i64,
        /// Ranked records, strongest first
        pub results: Vec<EarthquakeRecord>,
        /// `results` rendered for display, one line each
        pub lines: Vec<String>,
        /// Time window sent to the service
        pub window: TimeWindow,
        /// Path to the SQLite database
        pub db_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the pipeline once: load the bounding box, fetch, normalize,
    /// upsert, rank and format.
    ///
    /// Malformed events (no identifier) are logged and skipped; the rest of
    /// the batch is still stored. Any other failure aborts the run before
    /// results are produced.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The run parameters are invalid
    /// - The bounding-box file cannot be loaded
    /// - The event service cannot be queried
    /// - The database cannot be opened or written
    pub async fn run_pipeline(config: &Config) -> Result<PipelineReport> {
        run_pipeline_at(config, Utc::now()).await
    }

    /// Same as [`run_pipeline`] with the query window ending at `now`.
    ///
    /// The window is computed once; the fetch and the `--window-only` ranking
    /// cutoff both use it.
    pub async fn run_pipeline_at(config: &Config, now: DateTime<Utc>) -> Result<PipelineReport> {
        let start_time = std::time::Instant::now();
        config.validate().context("Invalid run parameters")?;

        let region = load_bounding_box(&config.bbox_path).context("Failed to load bounding box")?;
        info!("Bounding box: {:?}", region);

        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let service = EventService::new(client, config.service_url.as_str());
        let window = TimeWindow::ending_at(now, config.days).context("Invalid time window")?;

        let raw_events = service
            .fetch_window(&region, &window, config.min_magnitude)
            .await
            .context("Failed to fetch earthquakes")?;

        let batch = normalize_batch(&raw_events);
        if !batch.rejected.is_empty() {
            info!(
                "Skipped {} of {} event(s) without a usable identifier",
                batch.rejected.len(),
                raw_events.len()
            );
        }

        let store = Store::open(&config.db_path)
            .await
            .context("Failed to open database")?;
        store
            .ensure_schema()
            .await
            .context("Failed to create database schema")?;
        let stored = store
            .upsert(&batch.records)
            .await
            .context("Failed to store earthquakes")?;

        let since = config.window_only.then_some(window.start);
        let results = store
            .query_top_k_since(config.min_magnitude, config.top, since)
            .await
            .context("Failed to query earthquakes")?;
        let total_in_store = store
            .count()
            .await
            .context("Failed to count stored earthquakes")?;
        store.close().await;

        info!(
            "Stored {} event(s); {} in database; {} ranked",
            stored,
            total_in_store,
            results.len()
        );

        Ok(PipelineReport {
            fetched: raw_events.len(),
            skipped: batch.rejected.len(),
            stored,
            total_in_store,
            lines: format_records(&results),
            results,
            window,
            db_path: config.db_path.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
