use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{KeyValueStore, Record};
use crate::errors::Result;

/// Process-local store, used by tests and by sessions that should not
/// outlive the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Stored keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Record>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, record: Record) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), record);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
