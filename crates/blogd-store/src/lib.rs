// ABOUTME: Persistence layer for blogd, holding blog records in a SQLite file.
// ABOUTME: Provides the Blog entity and a BlogStore with create, list, get, and delete operations.

pub mod sqlite;

pub use sqlite::{Blog, BlogStore, StoreError};
