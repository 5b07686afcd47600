// Shared test helpers for pipeline integration tests.

use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, Utc};
use httptest::Server;
use tempfile::TempDir;

use earthquakes::{write_bounding_box, BoundingBox, Config};

pub const QUERY_PATH: &str = "/fdsnws/event/1/query";

/// Builds a config pointing at `server`, with bbox and database inside `dir`.
pub fn test_config(server: &Server, dir: &TempDir) -> Config {
    let bbox_path = dir.path().join("bounding_box.csv");
    write_bounding_box(&bbox_path, &BoundingBox::ITALY).expect("Failed to write bounding box");
    Config {
        bbox_path,
        db_path: dir.path().join("earthquakes.db"),
        service_url: server.url(QUERY_PATH).to_string(),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// A GeoJSON feature timestamped `minutes_ago` before now, in INGV's naive format.
pub fn feature(id: Option<&str>, mag: f64, minutes_ago: i64) -> serde_json::Value {
    feature_at(id, mag, Utc::now() - TimeDelta::minutes(minutes_ago))
}

/// A GeoJSON feature with an explicit origin time.
pub fn feature_at(id: Option<&str>, mag: f64, time: DateTime<Utc>) -> serde_json::Value {
    let time = time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    let mut feature = serde_json::json!({
        "type": "Feature",
        "properties": {"mag": mag, "place": format!("Event M{mag}"), "time": time},
        "geometry": {"type": "Point", "coordinates": [13.0, 42.5, 10.0]}
    });
    if let Some(id) = id {
        feature["id"] = serde_json::json!(id);
    }
    feature
}

pub fn collection(features: Vec<serde_json::Value>) -> String {
    serde_json::json!({"type": "FeatureCollection", "features": features}).to_string()
}

#[allow(dead_code)] // Used by some test files only
pub fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("earthquakes.db")
}
