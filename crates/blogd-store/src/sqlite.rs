// ABOUTME: SQLite-backed store for blog records, one table in a single local file.
// ABOUTME: Provides create, list, get, and delete operations plus schema initialization.

use std::path::Path;

use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// A persisted blog record. The id is assigned by the store on creation
/// and is the sole lookup and delete key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// SQLite-backed store holding blog records in a single local file.
/// The file is created on first open; the schema is initialized explicitly
/// before the store is handed out.
pub struct BlogStore {
    conn: Connection,
}

impl BlogStore {
    /// Open or create the database at the given path and initialize the schema.
    /// WAL mode lets multiple request-handling contexts share the file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        // AUTOINCREMENT keeps ids strictly increasing, so a deleted id is
        // never handed out again.
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS blogs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                body TEXT NOT NULL
            );",
        )?;

        Ok(Self { conn })
    }

    /// Insert a new record and re-read it to pick up the assigned id.
    pub fn create(&self, title: &str, body: &str) -> Result<Blog, StoreError> {
        self.conn.execute(
            "INSERT INTO blogs (title, body) VALUES (?1, ?2)",
            params![title, body],
        )?;

        let id = self.conn.last_insert_rowid();
        let blog = self.conn.query_row(
            "SELECT id, title, body FROM blogs WHERE id = ?1",
            params![id],
            |row| {
                Ok(Blog {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                })
            },
        )?;

        Ok(blog)
    }

    /// List every record, ordered by id.
    pub fn list(&self) -> Result<Vec<Blog>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, body FROM blogs ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(Blog {
                id: row.get(0)?,
                title: row.get(1)?,
                body: row.get(2)?,
            })
        })?;

        let mut blogs = Vec::new();
        for row in rows {
            blogs.push(row?);
        }
        Ok(blogs)
    }

    /// Look up a record by id. Returns None when no row matches.
    pub fn get(&self, id: i64) -> Result<Option<Blog>, StoreError> {
        let result = self.conn.query_row(
            "SELECT id, title, body FROM blogs WHERE id = ?1",
            params![id],
            |row| {
                Ok(Blog {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                })
            },
        );

        match result {
            Ok(blog) => Ok(Some(blog)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Sqlite(e)),
        }
    }

    /// Delete the record with the given id, returning how many rows matched.
    /// Zero matches is not an error; callers decide whether to care.
    pub fn delete(&self, id: i64) -> Result<usize, StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM blogs WHERE id = ?1", params![id])?;
        if deleted == 0 {
            tracing::debug!("delete of id {} matched no rows", id);
        }
        Ok(deleted)
    }
}
