use serde::{Serialize, de::DeserializeOwned};
use sqlx::SqlitePool;
use std::marker::PhantomData;
use strum_macros::{AsRefStr, EnumIter};
use tracing::debug;

use crate::error::ServiceError;

/// Durable collections owned by the record store. The index numbers are
/// assigned once and never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CollectionName {
    Employees = 0,
    Payrolls = 1,
    Attendances = 3,
}

impl CollectionName {
    pub fn table(&self) -> &str {
        self.as_ref()
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}

/// Ordered key-value view over one table: records are JSON text keyed by id.
pub struct Collection<T> {
    pool: SqlitePool,
    name: CollectionName,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            name: self.name,
            _record: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(pool: SqlitePool, name: CollectionName) -> Self {
        Self {
            pool,
            name,
            _record: PhantomData,
        }
    }

    pub async fn get(&self, key: &str) -> Result<Option<T>, ServiceError> {
        let sql = format!("SELECT value FROM {} WHERE id = ?", self.name.table());

        let row = sqlx::query_as::<_, (String,)>(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some((value,)) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    /// Upsert; a second insert under the same key replaces the first.
    pub async fn insert(&self, key: &str, value: &T) -> Result<(), ServiceError> {
        let json = serde_json::to_string(value)?;
        let sql = format!(
            "INSERT INTO {} (id, value) VALUES (?, ?) ON CONFLICT(id) DO UPDATE SET value = excluded.value",
            self.name.table()
        );

        sqlx::query(&sql)
            .bind(key)
            .bind(json)
            .execute(&self.pool)
            .await?;

        debug!(collection = self.name.table(), key, "Record stored");
        Ok(())
    }

    /// Whole collection in key order.
    pub async fn values(&self) -> Result<Vec<T>, ServiceError> {
        let sql = format!("SELECT value FROM {} ORDER BY id", self.name.table());

        let rows = sqlx::query_as::<_, (String,)>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(value,)| serde_json::from_str(&value).map_err(ServiceError::from))
            .collect()
    }
}
