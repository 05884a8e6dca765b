//! Store doubles for exercising failure paths in module tests.

use crate::adapters::InMemoryKVStore;
use crate::errors::KVStoreError;
use crate::ports::{BatchPut, KeyValueStore};
use std::collections::HashSet;

/// In-memory store that fails reads or writes on selected keys.
///
/// A batch touching any failing key is rejected as a whole, like a real
/// transactional store would.
#[derive(Debug, Default)]
pub struct FaultyKVStore {
    inner: InMemoryKVStore,
    failing_reads: HashSet<String>,
    failing_writes: HashSet<String>,
}

impl FaultyKVStore {
    pub fn new(inner: InMemoryKVStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn fail_reads_of(mut self, key: &str) -> Self {
        self.failing_reads.insert(key.to_string());
        self
    }

    pub fn fail_writes_to(mut self, key: &str) -> Self {
        self.failing_writes.insert(key.to_string());
        self
    }

    pub fn inner(&self) -> &InMemoryKVStore {
        &self.inner
    }

    fn injected(key: &str) -> KVStoreError {
        KVStoreError::IOError {
            message: format!("injected failure on '{}'", key),
        }
    }
}

impl KeyValueStore for FaultyKVStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError> {
        if self.failing_reads.contains(key) {
            return Err(Self::injected(key));
        }
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), KVStoreError> {
        if self.failing_writes.contains(key) {
            return Err(Self::injected(key));
        }
        self.inner.put(key, value)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchPut>) -> Result<(), KVStoreError> {
        if let Some(op) = operations.iter().find(|op| self.failing_writes.contains(&op.key)) {
            return Err(Self::injected(&op.key));
        }
        self.inner.atomic_batch_write(operations)
    }
}
