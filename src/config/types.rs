//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BBOX_PATH, DEFAULT_DB_PATH, DEFAULT_TIMEOUT_SECS, INGV_EVENT_URL,
};
use crate::error_handling::ValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
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
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Parsed from the command line by the `earthquakes` binary, or built
/// programmatically (usually via `..Default::default()`) by library callers.
///
/// # Examples
///
/// ```no_run
/// use earthquakes::Config;
///
/// let config = Config {
///     days: 1,
///     min_magnitude: 4.0,
///     top: 2,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "earthquakes",
    about = "Fetch recent earthquakes in a bounding box, store them in SQLite, and print the strongest."
)]
pub struct Config {
    /// Number of results to print
    #[arg(
        short = 'k',
        long = "top",
        visible_alias = "K",
        default_value_t = 10,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub top: i64,

    /// Look back N days from now (UTC)
    #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
    pub days: i64,

    /// Minimum magnitude threshold
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min_magnitude: f64,

    /// Bounding-box CSV file (minlatitude,maxlatitude,minlongitude,maxlongitude)
    #[arg(long = "bbox", env = "EARTHQUAKES_BBOX", default_value = DEFAULT_BBOX_PATH)]
    pub bbox_path: PathBuf,

    /// Database path (SQLite file)
    #[arg(long, env = "EARTHQUAKES_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// FDSN event query endpoint
    #[arg(long, env = "EARTHQUAKES_SERVICE_URL", default_value = INGV_EVENT_URL)]
    pub service_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Only rank events inside the fetched time window
    #[arg(long)]
    pub window_only: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top: 10,
            days: 7,
            min_magnitude: 0.0,
            bbox_path: PathBuf::from(DEFAULT_BBOX_PATH),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            service_url: INGV_EVENT_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            window_only: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the caller-supplied run parameters.
    ///
    /// Programmatic callers bypass clap's range checks, so the run entry point
    /// calls this before touching the network.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top <= 0 {
            return Err(ValidationError::NonPositiveCount(self.top));
        }
        if self.days < 0 {
            return Err(ValidationError::NegativeDays(self.days));
        }
        if !self.min_magnitude.is_finite() {
            return Err(ValidationError::NonFiniteMagnitude(self.min_magnitude));
        }
        if self.timeout_seconds == 0 {
            return Err(ValidationError::ZeroTimeout);
        }
        Ok(())
    }
}
