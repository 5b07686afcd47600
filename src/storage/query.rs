//! Ranking and lookup queries.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};

use super::Store;
use crate::error_handling::StorageError;
use crate::models::EarthquakeRecord;

const RECORD_COLUMNS: &str = "id, time_ms, magnitude, place, latitude, longitude, depth_km";

impl Store {
    /// Up to `k` records with `magnitude >= min_magnitude`, strongest first.
    ///
    /// Equal magnitudes are ordered by more recent `time` first (unknown times
    /// last), then by `id`. Records without a magnitude never qualify.
    /// `k <= 0` returns an empty vector.
    pub async fn query_top_k(
        &self,
        min_magnitude: f64,
        k: i64,
    ) -> Result<Vec<EarthquakeRecord>, StorageError> {
        self.query_top_k_since(min_magnitude, k, None).await
    }

    /// Same as [`Store::query_top_k`], restricted to events at or after `since`.
    /// Events with no recorded time are excluded when `since` is set.
    pub async fn query_top_k_since(
        &self,
        min_magnitude: f64,
        k: i64,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<EarthquakeRecord>, StorageError> {
        if k <= 0 {
            return Ok(Vec::new());
        }

        let mut query_builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {RECORD_COLUMNS} FROM earthquakes
             WHERE magnitude IS NOT NULL AND magnitude >= "
        ));
        query_builder.push_bind(min_magnitude);
        if let Some(since) = since {
            query_builder.push(" AND time_ms >= ");
            query_builder.push_bind(since.timestamp_millis());
        }
        query_builder.push(" ORDER BY magnitude DESC, time_ms DESC, id ASC LIMIT ");
        query_builder.push_bind(k);

        let rows = query_builder.build().fetch_all(&self.pool).await?;
        rows.iter().map(record_from_row).collect()
    }

    /// Looks up a single record by its identifier.
    pub async fn get(&self, id: &str) -> Result<Option<EarthquakeRecord>, StorageError> {
        let row = sqlx::query(
            "SELECT id, time_ms, magnitude, place, latitude, longitude, depth_km
             FROM earthquakes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(record_from_row).transpose()
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<i64, StorageError> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM earthquakes")
            .fetch_one(&self.pool)
            .await?)
    }
}

fn record_from_row(row: &SqliteRow) -> Result<EarthquakeRecord, StorageError> {
    let id: String = row.try_get("id")?;
    let time = match row.try_get::<Option<i64>, _>("time_ms")? {
        Some(ms) => Some(DateTime::from_timestamp_millis(ms).ok_or_else(|| {
            StorageError::CorruptRow {
                id: id.clone(),
                reason: format!("time_ms {ms} is out of range"),
            }
        })?),
        None => None,
    };

    Ok(EarthquakeRecord {
        time,
        magnitude: row.try_get("magnitude")?,
        place: row.try_get("place")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        depth_km: row.try_get("depth_km")?,
        id,
    })
}
