//! Database connection management.
//!
//! Opens the SQLite file with:
//! - Automatic database file creation
//! - WAL journal mode
//! - A single connection (the pipeline is sequential)

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use super::Store;
use crate::error_handling::StorageError;

impl Store {
    /// Opens (creating if needed) the database file at `db_path`.
    ///
    /// The schema is not touched; call [`Store::ensure_schema`] next.
    pub async fn open(db_path: &Path) -> Result<Self, StorageError> {
        match OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(db_path)
        {
            Ok(_) => info!("Database file {} created.", db_path.display()),
            Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
                info!("Using existing database file {}.", db_path.display())
            }
            Err(e) => {
                error!("Failed to create database file: {e}");
                return Err(StorageError::File {
                    path: db_path.to_path_buf(),
                    source: e,
                });
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {e}");
                StorageError::SqlError(e)
            })?;

        Ok(Self::from_pool(pool))
    }

    /// Opens a private in-memory database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        // The database lives only as long as its connection, so keep it open.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self::from_pool(pool))
    }

    /// Checkpoints the WAL and closes the connection.
    pub async fn close(self) {
        if let Err(e) = sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
            .execute(&self.pool)
            .await
        {
            warn!("Failed to checkpoint WAL file (this is non-critical): {e}");
        }
        self.pool.close().await;
    }
}
