//! Retry strategy and transient-error classification for event queries.

use std::time::Duration;

use tokio_retry::strategy::{jitter, ExponentialBackoff};

use super::types::FetchError;
use crate::config::{
    HTTP_STATUS_TOO_MANY_REQUESTS, RETRY_BACKOFF_BASE_MS, RETRY_FACTOR, RETRY_MAX_ATTEMPTS,
    RETRY_MAX_DELAY_SECS,
};

/// Backoff parameters for the event query.
///
/// Delays follow `base^n * factor` milliseconds (n = 1, 2, ...), capped at
/// `max_delay` and jittered. `max_attempts` counts the initial request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: usize,
    /// Exponent base, in milliseconds
    pub base_ms: u64,
    /// Multiplier applied to each delay
    pub factor: u64,
    /// Upper bound on a single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: RETRY_MAX_ATTEMPTS,
            base_ms: RETRY_BACKOFF_BASE_MS,
            factor: RETRY_FACTOR,
            max_delay: Duration::from_secs(RETRY_MAX_DELAY_SECS),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay sequence ready for use with `tokio_retry::RetryIf`.
    ///
    /// Yields one delay per retry, so the iterator is `max_attempts - 1` long.
    pub fn strategy(&self) -> impl Iterator<Item = Duration> {
        ExponentialBackoff::from_millis(self.base_ms)
            .factor(self.factor)
            .max_delay(self.max_delay)
            .map(jitter)
            .take(self.max_attempts.saturating_sub(1))
    }
}

impl FetchError {
    /// Whether a new attempt could plausibly succeed.
    ///
    /// Timeouts, connection failures, 429 and 5xx are transient. Other client
    /// errors and malformed bodies are permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Request(e) => {
                if let Some(status) = e.status() {
                    return is_transient_status(status.as_u16());
                }
                e.is_timeout() || e.is_connect() || e.is_request()
            }
            FetchError::Status { status, .. } => is_transient_status(*status),
            FetchError::Decode(_) | FetchError::UnexpectedShape(_) => false,
        }
    }
}

fn is_transient_status(status: u16) -> bool {
    status == HTTP_STATUS_TOO_MANY_REQUESTS || (500..600).contains(&status)
}
