//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `earthquakes` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::process;

use earthquakes::initialization::init_logger_with;
use earthquakes::{run_pipeline, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_pipeline(&config).await {
        Ok(report) => {
            info!(
                "Fetched {} event(s) ({} skipped) in {:.1}s; results saved in {}",
                report.fetched,
                report.skipped,
                report.elapsed_seconds,
                report.db_path.display()
            );
            if report.lines.is_empty() {
                println!("No earthquakes matched.");
            }
            for line in &report.lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("earthquakes error: {:#}", e);
            process::exit(1);
        }
    }
}
