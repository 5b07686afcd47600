//! Error handling.
//!
//! This module provides:
//! - Error type definitions, one per failure domain
//! - Retry strategy configuration
//! - Transient-error classification for the event service

mod retry;
mod types;

// Re-export public API
pub use retry::RetryPolicy;
pub use types::{
    ConfigError, EarthquakeError, FetchError, InitializationError, MalformedRecordError,
    StorageError, ValidationError,
};
