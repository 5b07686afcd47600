//! Raw GeoJSON event types returned by FDSN event services.
//!
//! Fields are kept loosely typed (`serde_json::Value`) where services disagree:
//! INGV sends `time` as a naive ISO string and the identifier as
//! `properties.eventId`, USGS sends epoch milliseconds and a top-level `id`.
//! Interpretation happens in the normalizer.

use serde::Deserialize;
use serde_json::Value;

use crate::error_handling::FetchError;

/// One feature of the event collection, as delivered by the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEvent {
    /// Top-level feature identifier (USGS style)
    #[serde(default)]
    pub id: Option<Value>,
    /// Event attributes
    #[serde(default)]
    pub properties: Option<RawProperties>,
    /// Hypocentre
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

/// The `properties` object of a feature.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProperties {
    /// Identifier as sent by INGV
    #[serde(default, rename = "eventId")]
    pub event_id: Option<Value>,
    /// Origin time, naive ISO string or epoch milliseconds
    #[serde(default)]
    pub time: Option<Value>,
    /// Magnitude, in whatever scale the service reports
    #[serde(default)]
    pub mag: Option<Value>,
    /// Location description
    #[serde(default)]
    pub place: Option<Value>,
}

/// GeoJSON point geometry: `[longitude, latitude, depth_km]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawGeometry {
    /// Usually an array of three numbers; anything else reads as no coordinates
    #[serde(default)]
    pub coordinates: Value,
}

impl RawEvent {
    fn coordinate(&self, index: usize) -> Option<f64> {
        self.geometry
            .as_ref()
            .and_then(|g| g.coordinates.get(index))
            .and_then(Value::as_f64)
    }

    /// First coordinate, if numeric.
    pub fn longitude(&self) -> Option<f64> {
        self.coordinate(0)
    }

    /// Second coordinate, if numeric.
    pub fn latitude(&self) -> Option<f64> {
        self.coordinate(1)
    }

    /// Third coordinate (kilometres below the surface), if numeric.
    pub fn depth_km(&self) -> Option<f64> {
        self.coordinate(2)
    }
}

/// Parses a GeoJSON FeatureCollection body into its features.
///
/// # Errors
///
/// - `FetchError::Decode` if the body is not JSON or a feature is not an object
/// - `FetchError::UnexpectedShape` if `features` is missing or not an array
pub fn parse_feature_collection(body: &[u8]) -> Result<Vec<RawEvent>, FetchError> {
    let mut document: Value = serde_json::from_slice(body)?;
    let features = match document.get_mut("features") {
        Some(features @ Value::Array(_)) => features.take(),
        Some(other) => {
            return Err(FetchError::UnexpectedShape(format!(
                "'features' is not an array (found {})",
                json_kind(other)
            )))
        }
        None => {
            return Err(FetchError::UnexpectedShape(
                "'features' is missing".to_string(),
            ))
        }
    };
    Ok(serde_json::from_value(features)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingv_feature() {
        let body = br#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {
                    "eventId": 41234567,
                    "time": "2026-01-03T12:00:00.120000",
                    "mag": 4.1,
                    "magType": "ML",
                    "place": "3 km SE Norcia (PG)"
                },
                "geometry": {"type": "Point", "coordinates": [13.1, 42.7, 9.6]}
            }]
        }"#;
        let events = parse_feature_collection(body).unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.id, None);
        let props = event.properties.as_ref().unwrap();
        assert_eq!(props.event_id, Some(serde_json::json!(41234567)));
        assert_eq!(props.place.as_ref().and_then(Value::as_str), Some("3 km SE Norcia (PG)"));
        assert_eq!(event.longitude(), Some(13.1));
        assert_eq!(event.latitude(), Some(42.7));
        assert_eq!(event.depth_km(), Some(9.6));
    }

    #[test]
    fn test_parse_empty_collection() {
        let events = parse_feature_collection(br#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_missing_features_is_unexpected_shape() {
        let result = parse_feature_collection(br#"{"not_features": []}"#);
        assert!(matches!(result, Err(FetchError::UnexpectedShape(_))));
    }

    #[test]
    fn test_features_not_array() {
        let result = parse_feature_collection(br#"{"features": {"a": 1}}"#);
        match result {
            Err(FetchError::UnexpectedShape(msg)) => assert!(msg.contains("object")),
            other => panic!("expected UnexpectedShape, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let result = parse_feature_collection(b"<html>Service Unavailable</html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_short_geometry_yields_none() {
        let events = parse_feature_collection(
            br#"{"features":[{"id":"a","geometry":{"coordinates":[10.0]}}]}"#,
        )
        .unwrap();
        assert_eq!(events[0].longitude(), Some(10.0));
        assert_eq!(events[0].latitude(), None);
        assert_eq!(events[0].depth_km(), None);
    }

    #[test]
    fn test_null_coordinates_do_not_sink_the_batch() {
        let body = br#"{"features":[
            {"id":"good","properties":{"mag":3.1},"geometry":{"coordinates":[13.0,42.0,5.0]}},
            {"id":"odd","properties":{"mag":2.0},"geometry":{"coordinates":null}},
            {"id":"flat","geometry":{"coordinates":"13,42"}}
        ]}"#;
        let events = parse_feature_collection(body).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].latitude(), Some(42.0));
        for event in &events[1..] {
            assert_eq!(event.longitude(), None);
            assert_eq!(event.latitude(), None);
            assert_eq!(event.depth_km(), None);
        }
    }
}
