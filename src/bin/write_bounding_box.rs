//! Writes the default (Italy) bounding-box CSV used by `earthquakes`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use earthquakes::config::DEFAULT_BBOX_PATH;
use earthquakes::{write_bounding_box, BoundingBox};

#[derive(Debug, Parser)]
#[command(
    name = "write_bounding_box",
    about = "Create (or overwrite) a bounding-box CSV covering Italy."
)]
struct Args {
    /// Output CSV path
    #[arg(default_value = DEFAULT_BBOX_PATH)]
    path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    write_bounding_box(&args.path, &BoundingBox::ITALY)
        .with_context(|| format!("Failed to write {}", args.path.display()))?;
    println!("Bounding box written to {}", args.path.display());
    Ok(())
}
