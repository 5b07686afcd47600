//! Human-readable rendering of ranked records.

use std::fmt::Display;

use crate::models::EarthquakeRecord;

const UNKNOWN: &str = "unknown";

/// One display line per record, in input order.
pub fn format_records(records: &[EarthquakeRecord]) -> Vec<String> {
    records.iter().map(format_record).collect()
}

/// `day: 2026-01-03, time: 12:00:00, magnitude: 5.2, place: ..., lat: .., lon: .., depth: .. km`
///
/// The magnitude is printed exactly as stored; whole values keep a `.0`.
pub fn format_record(record: &EarthquakeRecord) -> String {
    let (day, time) = match record.time {
        Some(t) => (
            t.format("%Y-%m-%d").to_string(),
            t.format("%H:%M:%S").to_string(),
        ),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
    };
    let depth = match record.depth_km {
        Some(d) => format!("{d:.1} km"),
        None => UNKNOWN.to_string(),
    };

    format!(
        "day: {day}, time: {time}, magnitude: {}, place: {}, lat: {}, lon: {}, depth: {depth}",
        or_unknown(record.magnitude.map(|m| format!("{m:?}"))),
        or_unknown(record.place.as_deref()),
        or_unknown(record.latitude),
        or_unknown(record.longitude),
    )
}

fn or_unknown<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record() -> EarthquakeRecord {
        EarthquakeRecord {
            id: "41234567".to_string(),
            time: Some(Utc.with_ymd_and_hms(2026, 1, 3, 12, 5, 9).unwrap()),
            magnitude: Some(5.2),
            place: Some("3 km SE Norcia (PG)".to_string()),
            latitude: Some(42.7),
            longitude: Some(13.1),
            depth_km: Some(9.6),
        }
    }

    #[test]
    fn test_format_full_record() {
        assert_eq!(
            format_record(&record()),
            "day: 2026-01-03, time: 12:05:09, magnitude: 5.2, place: 3 km SE Norcia (PG), lat: 42.7, lon: 13.1, depth: 9.6 km"
        );
    }

    #[test]
    fn test_format_missing_fields() {
        let bare = EarthquakeRecord {
            id: "bare".to_string(),
            time: None,
            magnitude: None,
            place: None,
            latitude: None,
            longitude: None,
            depth_km: None,
        };
        assert_eq!(
            format_record(&bare),
            "day: unknown, time: unknown, magnitude: unknown, place: unknown, lat: unknown, lon: unknown, depth: unknown"
        );
    }

    #[test]
    fn test_magnitude_is_not_rounded() {
        let precise = EarthquakeRecord {
            magnitude: Some(2.25),
            ..record()
        };
        assert!(format_record(&precise).contains("magnitude: 2.25,"));
    }

    #[test]
    fn test_magnitude_keeps_one_decimal() {
        let whole = EarthquakeRecord {
            magnitude: Some(4.0),
            ..record()
        };
        assert!(format_record(&whole).contains("magnitude: 4.0,"));
    }

    #[test]
    fn test_one_line_per_record_in_order() {
        let second = EarthquakeRecord {
            id: "2".to_string(),
            magnitude: Some(4.1),
            ..record()
        };
        let lines = format_records(&[record(), second]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("magnitude: 5.2"));
        assert!(lines[1].contains("magnitude: 4.1"));
        assert!(lines.iter().all(|line| !line.contains('\n')));
    }

    #[test]
    fn test_empty_input() {
        assert!(format_records(&[]).is_empty());
    }
}
