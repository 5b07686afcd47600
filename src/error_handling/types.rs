//! Error type definitions.
//!
//! One enum per failure domain, plus [`EarthquakeError`] for the fetch entry
//! point, which can fail on validation or on the request.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
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

/// Bad bounding-box input.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The bounding-box file could not be opened, read, or written.
    #[error("Cannot access bounding box file {}: {}", path.display(), source)]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The CSV was structurally invalid or a value was not numeric.
    #[error("Invalid bounding box CSV {}: {}", path.display(), source)]
    Csv {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// The header row does not name exactly the four expected columns.
    #[error(
        "Bounding box header must be exactly minlatitude,maxlatitude,minlongitude,maxlongitude (found: {found})"
    )]
    Header {
        /// Header row as read, comma-joined
        found: String,
    },

    /// The file has a header but no data row, or more than one data row.
    #[error("Bounding box file must contain exactly one data row (found {rows})")]
    RowCount {
        /// Number of data rows found
        rows: usize,
    },

    /// The bounds are inverted or outside geographic range.
    #[error("Invalid bounding box: {0}")]
    InvalidBounds(String),
}

/// Bad caller-supplied parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `days` is below zero.
    #[error("days must be zero or positive (got {0})")]
    NegativeDays(i64),

    /// `days` reaches past the representable date range.
    #[error("days back is too large to compute a time window (got {0})")]
    DaysOutOfRange(i64),

    /// The magnitude threshold is NaN or infinite.
    #[error("minimum magnitude must be a finite number (got {0})")]
    NonFiniteMagnitude(f64),

    /// The requested result count is zero or negative.
    #[error("result count must be greater than 0 (got {0})")]
    NonPositiveCount(i64),

    /// The request timeout is zero.
    #[error("timeout must be greater than 0 seconds")]
    ZeroTimeout,
}

/// Failure talking to the remote event service.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure (connect, timeout, body read, request build).
    #[error("Event service request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The service answered with a non-success status.
    #[error("Event service returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Request URL, query string included
        url: String,
    },

    /// The body was not JSON at all.
    #[error("Event service returned an unparseable body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body was JSON but not a feature collection.
    #[error("Unexpected event service response: {0}")]
    UnexpectedShape(String),
}

/// A raw event that cannot become a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    /// Neither `id` nor `properties.eventId` is present and non-blank.
    #[error("event has no identifier")]
    MissingIdentifier,

    /// The identifier is neither a string nor an integer.
    #[error("event identifier has unsupported form: {0}")]
    UnsupportedIdentifier(String),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The database file or its directory could not be prepared.
    #[error("Database file error for {}: {}", path.display(), source)]
    File {
        /// Database file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// A stored value could not be mapped back into a record.
    #[error("Corrupt row for event {id}: {reason}")]
    CorruptRow {
        /// Identifier of the offending row
        id: String,
        /// What could not be mapped
        reason: String,
    },
}

/// Failure of [`EventService::fetch_events`](crate::fetch::EventService::fetch_events):
/// either the caller's parameters or the service itself.
#[derive(Error, Debug)]
pub enum EarthquakeError {
    /// The parameters were rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service could not be queried or answered with garbage.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
