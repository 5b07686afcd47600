// storage/mod.rs
// Local SQLite store for earthquake records

mod insert;
mod pool;
mod query;
mod schema;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::sync::atomic::AtomicBool;

use sqlx::SqlitePool;

/// Handle to the local earthquake database.
///
/// Built once per run with [`Store::open`] (or [`Store::in_memory`] in tests)
/// and passed by reference to whatever needs it. A single connection is used;
/// two processes writing the same file at once is not supported.
#[derive(Debug)]
pub struct Store {
    pool: SqlitePool,
    schema_ready: AtomicBool,
}

impl Store {
    fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool,
            schema_ready: AtomicBool::new(false),
        }
    }

    /// Underlying pool, for ad-hoc queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
