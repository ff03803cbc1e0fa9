//! Toy Robot Store - Persistence layer
//!
//! Provides:
//! - The `KeyValueStore` port the repositories are written against
//! - An in-memory adapter and a SQLite adapter
//! - An embedded, checksummed migration runner for the SQLite schema
//! - Robot and table repositories mapping entities to key-value records

pub mod db;
pub mod errors;
pub mod kv;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use kv::{KeyValueStore, MemoryStore, Record, SqliteStore};
pub use repo::{RobotRepository, TableRepository};
