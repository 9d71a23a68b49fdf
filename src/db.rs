use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use strum::IntoEnumIterator;

use crate::store::CollectionName;

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

/// One key-value table per collection. Safe to run on every start.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for collection in CollectionName::iter() {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY NOT NULL, value TEXT NOT NULL)",
            collection.table()
        );
        sqlx::query(&sql).execute(pool).await?;
        tracing::debug!(
            table = collection.table(),
            index = collection.index(),
            "Collection ready"
        );
    }

    log::info!(
        "Storage ready: {} collections",
        CollectionName::iter().count()
    );
    Ok(())
}

/// Fresh in-memory database. One connection that never expires, or the data
/// disappears with it.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    migrate(&pool).await.expect("migrations");
    pool
}
