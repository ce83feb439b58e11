use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::PathBuf;

use crate::api::{Record, Table};

/// Offline copy of backend rows, stored as JSON per (table, id)
pub struct CacheDb {
    conn: Connection,
}

impl CacheDb {
    pub fn new() -> Result<Self> {
        let cache_dir = Self::get_cache_dir();
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache dir {}", cache_dir.display()))?;

        let conn = Connection::open(cache_dir.join("cache.db"))?;
        let mut cache = CacheDb { conn };
        cache.init_schema()?;
        Ok(cache)
    }

    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut cache = CacheDb { conn };
        cache.init_schema()?;
        Ok(cache)
    }

    fn get_cache_dir() -> PathBuf {
        match dirs::cache_dir() {
            Some(dir) => dir.join("ceka"),
            None => std::env::temp_dir().join("ceka-cache"),
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS records (
                table_name TEXT NOT NULL,
                id TEXT NOT NULL,
                position INTEGER NOT NULL,
                payload TEXT NOT NULL,
                fetched_at TEXT NOT NULL,
                PRIMARY KEY (table_name, id)
            ) WITHOUT ROWID;
            ",
        )?;
        Ok(())
    }

    /// Replace every cached row of `T::TABLE` with `records`
    pub fn save_records<T: Record>(&mut self, records: &[T]) -> Result<()> {
        let table = T::TABLE.as_str();
        let fetched_at = Utc::now().to_rfc3339();

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM records WHERE table_name = ?1", params![table])?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO records (table_name, id, position, payload, fetched_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (position, record) in records.iter().enumerate() {
                let payload = serde_json::to_string(record)?;
                stmt.execute(params![
                    table,
                    record.record_id(),
                    position as i64,
                    payload,
                    fetched_at
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Cached rows of `T::TABLE` in the order they were saved
    ///
    /// Rows that no longer decode (schema drift) are skipped.
    pub fn load_records<T: Record>(&self) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(
            "SELECT payload FROM records WHERE table_name = ?1 ORDER BY position",
        )?;
        let payloads = stmt
            .query_map(params![T::TABLE.as_str()], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        let records = payloads
            .iter()
            .filter_map(|payload| match serde_json::from_str::<T>(payload) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(table = T::TABLE.as_str(), error = %e, "skipping undecodable cached row");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    pub fn clear_table(&self, table: Table) -> Result<()> {
        self.conn
            .execute("DELETE FROM records WHERE table_name = ?1", params![table.as_str()])?;
        Ok(())
    }

    pub fn count(&self, table: Table) -> Result<usize> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM records WHERE table_name = ?1",
            params![table.as_str()],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }
}
