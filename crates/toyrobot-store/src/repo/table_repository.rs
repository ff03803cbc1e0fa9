use toyrobot_core::{Table, TableAttributes};

use super::{from_record, to_record};
use crate::errors::Result;
use crate::kv::{KeyValueStore, TABLE_KEY};

/// Persists the single table under [`TABLE_KEY`]
pub struct TableRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> TableRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn find(&self) -> Result<Option<Table>> {
        let Some(record) = self.store.get(TABLE_KEY)? else {
            tracing::debug!(key = TABLE_KEY, "table not found");
            return Ok(None);
        };

        let attributes: TableAttributes = from_record("table_find", TABLE_KEY, record)?;
        Ok(Some(Table::from(attributes)))
    }

    pub fn exists(&self) -> Result<bool> {
        Ok(self.store.get(TABLE_KEY)?.is_some())
    }

    pub fn save(&self, table: &Table) -> Result<()> {
        let record = to_record("table_save", TABLE_KEY, &table.attributes())?;
        self.store.put(TABLE_KEY, record)?;
        tracing::debug!(
            key = TABLE_KEY,
            max_x = table.max_x(),
            max_y = table.max_y(),
            "table saved"
        );
        Ok(())
    }

    pub fn delete(&self) -> Result<()> {
        self.store.delete(TABLE_KEY)?;
        tracing::debug!(key = TABLE_KEY, "table deleted");
        Ok(())
    }
}
