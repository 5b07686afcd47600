//! Mapping of raw service events onto [`EarthquakeRecord`].
//!
//! Only the identifier is mandatory. Every other field is carried over when it
//! is present and well-formed and left as `None` otherwise.


use chrono::{DateTime, NaiveDateTime, Utc};
use log::{debug, warn};
use serde_json::Value;

use crate::error_handling::MalformedRecordError;
use crate::fetch::RawEvent;
use crate::models::EarthquakeRecord;

/// Naive timestamp layout used by INGV (no offset, UTC implied).
const NAIVE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Converts one raw event into a record.
///
/// # Errors
///
/// Returns `MalformedRecordError` if neither `id` nor `properties.eventId`
/// holds a usable identifier.
pub fn normalize(raw: &RawEvent) -> Result<EarthquakeRecord, MalformedRecordError> {
    let properties = raw.properties.as_ref();
    let id = identifier(raw.id.as_ref())
        .or_else(|| identifier(properties.and_then(|p| p.event_id.as_ref())))
        .unwrap_or(Err(MalformedRecordError::MissingIdentifier))?;

    let time = properties.and_then(|p| p.time.as_ref()).and_then(|value| {
        let parsed = parse_time(value);
        if parsed.is_none() {
            debug!("Event {id}: unrecognised time {value}");
        }
        parsed
    });

    Ok(EarthquakeRecord {
        time,
        magnitude: properties.and_then(|p| p.mag.as_ref()).and_then(Value::as_f64),
        place: properties
            .and_then(|p| p.place.as_ref())
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|place| !place.is_empty())
            .map(str::to_string),
        latitude: raw.latitude(),
        longitude: raw.longitude(),
        depth_km: raw.depth_km(),
        id,
    })
}

/// Valid records from a batch plus the position of each rejected event.
#[derive(Debug, Default)]
pub struct NormalizedBatch {
    /// Records in input order
    pub records: Vec<EarthquakeRecord>,
    /// Index into the input slice and the reason it was skipped
    pub rejected: Vec<(usize, MalformedRecordError)>,
}

/// Normalizes a whole fetch, skipping (and logging) malformed events.
pub fn normalize_batch(raws: &[RawEvent]) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();
    for (index, raw) in raws.iter().enumerate() {
        match normalize(raw) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                warn!("Skipping event #{index}: {e}");
                batch.rejected.push((index, e));
            }
        }
    }
    batch
}

/// `None` when the field is absent, `Some(Err)` when present but unusable.
fn identifier(value: Option<&Value>) -> Option<Result<String, MalformedRecordError>> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(Ok(s.trim().to_string())),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(Ok(n.to_string())),
        other => Some(Err(MalformedRecordError::UnsupportedIdentifier(
            other.to_string(),
        ))),
    }
}

/// Accepts RFC 3339, naive ISO-8601 (taken as UTC) and epoch milliseconds.
pub(crate) fn parse_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|t| t.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDateTime::parse_from_str(s, NAIVE_TIME_FORMAT)
                        .ok()
                        .map(|t| t.and_utc())
                })
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
