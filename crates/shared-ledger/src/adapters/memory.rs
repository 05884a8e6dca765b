use crate::errors::KVStoreError;
use crate::ports::{BatchPut, KeyValueStore};
use std::collections::HashMap;

/// In-memory key-value store for unit tests and embedding hosts.
///
/// Batch writes are atomic because they are applied under a single `&mut`
/// borrow with no fallible step in between.
#[derive(Debug, Default, Clone)]
pub struct InMemoryKVStore {
    data: HashMap<String, Vec<u8>>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &HashMap<String, Vec<u8>> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), KVStoreError> {
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchPut>) -> Result<(), KVStoreError> {
        for op in operations {
            self.data.insert(op.key, op.value);
        }
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }
}
