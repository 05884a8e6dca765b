//! # Outbound Ports (Driven Ports)
//!
//! The storage capability the lifecycle modules require from their host.
//!
//! Production hosts back this with their own world-state database.
//! Testing uses `InMemoryKVStore` from the adapters module.

use crate::errors::KVStoreError;

/// Abstract interface for the host's flat keyed store.
///
/// Keys are non-empty strings; values are opaque bytes. The store performs
/// no schema enforcement.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key. `None` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), KVStoreError>;

    /// Execute an atomic batch of writes.
    ///
    /// Either ALL puts in the batch are applied, or NONE are.
    fn atomic_batch_write(&mut self, operations: Vec<BatchPut>) -> Result<(), KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, KVStoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// One put inside an atomic batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPut {
    pub key: String,
    pub value: Vec<u8>,
}

impl BatchPut {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
