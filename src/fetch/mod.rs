//! Event retrieval from an FDSN event web service.
//!
//! One logical query per run: the time window, bounding box and magnitude
//! threshold are sent as query parameters and the service does the filtering.
//! Services cap the size of a response (INGV and USGS stop at 20000 events);
//! a truncated response is indistinguishable from a complete one and is
//! returned as-is.

mod types;
mod window;


use log::{debug, info, warn};
use reqwest::StatusCode;
use tokio_retry::RetryIf;

use crate::bbox::BoundingBox;
use crate::error_handling::{EarthquakeError, FetchError, RetryPolicy, ValidationError};

pub use types::{parse_feature_collection, RawEvent, RawGeometry, RawProperties};
pub use window::TimeWindow;

/// Client for an FDSN `fdsnws/event/1/query` endpoint.
#[derive(Debug, Clone)]
pub struct EventService {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl EventService {
    /// Service at `base_url` with the default retry policy.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetches events in `region` over the last `days_back` days with
    /// magnitude of at least `min_magnitude`.
    ///
    /// `days_back == 0` and negative thresholds are accepted. A service reply
    /// with no matching events yields an empty vector.
    ///
    /// # Errors
    ///
    /// - `EarthquakeError::Validation` for negative `days_back` or a non-finite threshold
    /// - `EarthquakeError::Fetch` once retries are exhausted, or immediately for
    ///   permanent failures
    pub async fn fetch_events(
        &self,
        region: &BoundingBox,
        days_back: i64,
        min_magnitude: f64,
    ) -> Result<Vec<RawEvent>, EarthquakeError> {
        let window = TimeWindow::ending_now(days_back)?;
        if !min_magnitude.is_finite() {
            return Err(ValidationError::NonFiniteMagnitude(min_magnitude).into());
        }
        Ok(self.fetch_window(region, &window, min_magnitude).await?)
    }

    /// Fetches events for an explicit window. Parameters are assumed valid.
    pub async fn fetch_window(
        &self,
        region: &BoundingBox,
        window: &TimeWindow,
        min_magnitude: f64,
    ) -> Result<Vec<RawEvent>, FetchError> {
        let params = query_params(region, window, min_magnitude);
        info!(
            "Querying {} for M>={} between {} and {}",
            self.base_url, min_magnitude, window.start, window.end
        );

        let service = self;
        let params = params.as_slice();
        let events = RetryIf::spawn(
            self.retry.strategy(),
            move || service.query_once(params),
            |e: &FetchError| {
                let transient = e.is_transient();
                if transient {
                    warn!("Transient event service error: {e}");
                }
                transient
            },
        )
        .await?;

        let outside = events
            .iter()
            .filter(|event| match (event.latitude(), event.longitude()) {
                (Some(lat), Some(lon)) => !region.contains(lat, lon),
                _ => false,
            })
            .count();
        if outside > 0 {
            debug!("{outside} event(s) returned outside the requested bounding box");
        }

        info!("Event service returned {} event(s)", events.len());
        Ok(events)
    }

    async fn query_once(&self, params: &[(&'static str, String)]) -> Result<Vec<RawEvent>, FetchError> {
        let response = self.client.get(&self.base_url).query(params).send().await?;
        let status = response.status();

        // FDSN services answer 204 when nothing matches
        if status == StatusCode::NO_CONTENT {
            debug!("Event service reported no matching events");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        parse_feature_collection(&body)
    }
}

/// Query-string parameters for one FDSN event query.
pub fn query_params(
    region: &BoundingBox,
    window: &TimeWindow,
    min_magnitude: f64,
) -> Vec<(&'static str, String)> {
    let (start, end) = window.query_bounds();
    vec![
        ("format", "geojson".to_string()),
        ("starttime", start),
        ("endtime", end),
        ("minlatitude", region.min_lat.to_string()),
        ("maxlatitude", region.max_lat.to_string()),
        ("minlongitude", region.min_lon.to_string()),
        ("maxlongitude", region.max_lon.to_string()),
        ("minmagnitude", min_magnitude.to_string()),
    ]
}
