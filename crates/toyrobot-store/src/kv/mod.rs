//! Key-value storage port
//!
//! Game state lives under a handful of fixed keys, each holding a JSON
//! object. The engine only ever talks to a `KeyValueStore`; which adapter
//! sits behind it is decided by whoever opens the store.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::Result;

/// A stored value: a JSON object keyed by attribute name
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Key holding the robot's attributes
pub const ROBOT_KEY: &str = "robot";

/// Key holding the table's attributes
pub const TABLE_KEY: &str = "table";

/// Storage port for records
///
/// Implementations take `&self` so that several repositories can share one
/// store for the duration of a command.
pub trait KeyValueStore {
    /// Fetch the record stored under `key`
    fn get(&self, key: &str) -> Result<Option<Record>>;

    /// Store `record` under `key`, replacing any previous value
    fn put(&self, key: &str, record: Record) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn delete(&self, key: &str) -> Result<()>;

    /// Remove every key
    fn clear(&self) -> Result<()>;
}
