// storage/schema.rs
// Idempotent table creation

use std::sync::atomic::Ordering;

use log::debug;

use super::Store;
use crate::error_handling::StorageError;

const CREATE_EARTHQUAKES_TABLE: &str = "CREATE TABLE IF NOT EXISTS earthquakes (
    id TEXT PRIMARY KEY NOT NULL,
    time_ms INTEGER,
    magnitude REAL,
    place TEXT,
    latitude REAL,
    longitude REAL,
    depth_km REAL
)";

const CREATE_RANKING_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_earthquakes_ranking
    ON earthquakes (magnitude DESC, time_ms DESC)";

impl Store {
    /// Creates the `earthquakes` table and its ranking index if absent.
    ///
    /// Never drops or alters existing data. After the first success on this
    /// handle, further calls return immediately.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        if self.schema_ready.load(Ordering::Acquire) {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query(CREATE_EARTHQUAKES_TABLE)
            .execute(&mut *tx)
            .await?;
        sqlx::query(CREATE_RANKING_INDEX).execute(&mut *tx).await?;
        tx.commit().await?;

        self.schema_ready.store(true, Ordering::Release);
        debug!("Schema for table 'earthquakes' is in place");
        Ok(())
    }
}
