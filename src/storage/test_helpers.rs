//! Shared test helpers for storage module tests.

use chrono::{DateTime, TimeZone, Utc};

use super::Store;
use crate::models::EarthquakeRecord;

/// Creates an in-memory store with the schema applied.
pub async fn create_test_store() -> Store {
    let store = Store::in_memory()
        .await
        .expect("Failed to create in-memory store");
    store
        .ensure_schema()
        .await
        .expect("Failed to create schema");
    store
}

/// Noon UTC on the given January 2026 day.
pub fn jan_2026(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()
}

/// Creates a record with the given identity, magnitude and time.
pub fn test_record(id: &str, magnitude: Option<f64>, time: Option<DateTime<Utc>>) -> EarthquakeRecord {
    EarthquakeRecord {
        id: id.to_string(),
        time,
        magnitude,
        place: Some(format!("Test {id}")),
        latitude: Some(42.0),
        longitude: Some(13.0),
        depth_km: Some(10.0),
    }
}
