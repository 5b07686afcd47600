//! Canonical earthquake record.

use chrono::{DateTime, Utc};

/// One seismic event in the local store.
///
/// `id` is the identifier assigned by the event service and is the
/// deduplication key. All other fields are optional because the service does
/// not guarantee them; missing values stay `None` rather than being defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    /// Service-assigned event identifier
    pub id: String,
    /// Origin time
    pub time: Option<DateTime<Utc>>,
    /// Magnitude as reported by the service
    pub magnitude: Option<f64>,
    /// Human-readable location description
    pub place: Option<String>,
    /// Epicentre latitude in degrees
    pub latitude: Option<f64>,
    /// Epicentre longitude in degrees
    pub longitude: Option<f64>,
    /// Hypocentre depth in kilometres
    pub depth_km: Option<f64>,
}
