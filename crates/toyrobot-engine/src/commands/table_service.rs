//! Table commands

use toyrobot_core::model::DEFAULT_MAX_COORDINATE;
use toyrobot_core::Table;
use toyrobot_store::{KeyValueStore, TableRepository};

use super::failure::run_command;
use super::outcome::{CommandOutcome, CommandStatus};

pub const TABLE_CREATED_MESSAGE: &str = "Table created";
pub const TABLE_REMOVED_MESSAGE: &str = "Table removed";
pub const TABLE_EXISTS_MESSAGE: &str = "Table already exists";

/// Runs table commands against a store
pub struct TableService<'a> {
    tables: TableRepository<'a>,
}

impl<'a> TableService<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            tables: TableRepository::new(store),
        }
    }

    /// Create (or replace) the table from raw text bounds
    ///
    /// Each bound must be a non-negative integer; both are checked and every
    /// failure is reported.
    pub fn create_table(&self, max_x: &str, max_y: &str) -> CommandOutcome {
        run_command("table_create", CommandStatus::Success, || {
            let table = Table::from_raw(max_x, max_y)?;
            self.tables.save(&table)?;
            Ok(TABLE_CREATED_MESSAGE.to_string())
        })
    }

    /// Create a default table unless one is already stored
    pub fn ensure_table(&self) -> CommandOutcome {
        run_command("table_ensure", CommandStatus::Success, || {
            if self.tables.exists()? {
                return Ok(TABLE_EXISTS_MESSAGE.to_string());
            }
            self.tables
                .save(&Table::new(DEFAULT_MAX_COORDINATE, DEFAULT_MAX_COORDINATE))?;
            Ok(TABLE_CREATED_MESSAGE.to_string())
        })
    }

    /// Remove the table; removing a missing table succeeds
    pub fn remove_table(&self) -> CommandOutcome {
        run_command("table_remove", CommandStatus::Success, || {
            self.tables.delete()?;
            Ok(TABLE_REMOVED_MESSAGE.to_string())
        })
    }
}
