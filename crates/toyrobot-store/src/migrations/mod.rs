//! Schema migrations for the SQLite store
//!
//! - SQL files embedded at compile time
//! - Applied in order, each inside its own transaction
//! - Recorded with a SHA-256 checksum; an edited migration is refused

mod checksums;
mod embedded;
mod runner;

pub use runner::{applied_migrations, apply_migrations};
