//! In-memory store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::StoreError;
use crate::theme::ThemeStore;

/// Map-backed store. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
