//! Record upsert.

use log::debug;

use super::Store;
use crate::error_handling::StorageError;
use crate::models::EarthquakeRecord;

const UPSERT_EARTHQUAKE: &str = "INSERT INTO earthquakes (id, time_ms, magnitude, place, latitude, longitude, depth_km)
     VALUES (?, ?, ?, ?, ?, ?, ?)
     ON CONFLICT(id) DO UPDATE SET
         time_ms=excluded.time_ms,
         magnitude=excluded.magnitude,
         place=excluded.place,
         latitude=excluded.latitude,
         longitude=excluded.longitude,
         depth_km=excluded.depth_km";

impl Store {
    /// Inserts `records`, replacing any stored row with the same `id`.
    ///
    /// The batch is written in one transaction: either every record lands or
    /// none does. Within a batch, a later duplicate `id` overwrites an earlier
    /// one. Returns the number of rows written.
    pub async fn upsert(&self, records: &[EarthquakeRecord]) -> Result<u64, StorageError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut written = 0u64;
        for record in records {
            let result = sqlx::query(UPSERT_EARTHQUAKE)
                .bind(&record.id)
                .bind(record.time.map(|t| t.timestamp_millis()))
                .bind(record.magnitude)
                .bind(record.place.as_deref())
                .bind(record.latitude)
                .bind(record.longitude)
                .bind(record.depth_km)
                .execute(&mut *tx)
                .await?;
            written += result.rows_affected();
        }
        tx.commit().await?;

        debug!("Upserted {written} earthquake row(s)");
        Ok(written)
    }
}
