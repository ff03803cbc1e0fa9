use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::{KeyValueStore, Record};
use crate::db;
use crate::errors::{codec_error, from_rusqlite, Result};
use crate::migrations::apply_migrations;

/// Store backed by the `kv_entries` table of a SQLite database
///
/// Values are kept as JSON text, so the file stays readable with the
/// `sqlite3` shell.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening sqlite store");
        Self::from_connection(db::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Record>> {
        let text: Option<String> = self
            .conn
            .query_row(
                "SELECT value_json FROM kv_entries WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;

        let Some(text) = text else {
            return Ok(None);
        };

        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(serde_json::Value::Object(record)) => Ok(Some(record)),
            Ok(other) => Err(codec_error(
                "kv_get",
                key,
                format!("expected a JSON object, found {}", other),
            )),
            Err(e) => Err(codec_error("kv_get", key, e.to_string())),
        }
    }

    fn put(&self, key: &str, record: Record) -> Result<()> {
        let text = serde_json::to_string(&record)
            .map_err(|e| codec_error("kv_put", key, e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value_json, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value_json = excluded.value_json,
                    updated_at = excluded.updated_at",
                params![key, text, chrono::Utc::now().timestamp_millis()],
            )
            .map_err(from_rusqlite)?;

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1", [key])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_entries", [])
            .map_err(from_rusqlite)?;
        Ok(())
    }
}
