//! # Key Index
//!
//! An ordered list of record keys stored as one JSON array under a single
//! well-known key. It is the only way to enumerate a record family, since
//! the store port offers no range scans.
//!
//! ## Invariants
//!
//! - Insertion order is preserved
//! - A key appears at most once (`append` is a no-op for known keys)
//! - The index is never pruned
//!
//! The stored form is a JSON array of strings; `null` decodes as empty.

use crate::errors::LedgerError;
use crate::ports::BatchPut;
use crate::stub::{encode_record, ChaincodeStub};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIndex {
    name: String,
    keys: Vec<String>,
}

impl KeyIndex {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    /// Load the index stored under `name`, or `None` if it was never written.
    pub fn load(stub: &ChaincodeStub<'_>, name: &str) -> Result<Option<Self>, LedgerError> {
        let Some(bytes) = stub.get_state(name)? else {
            return Ok(None);
        };
        let keys: Option<Vec<String>> = serde_json::from_slice(&bytes).map_err(|e| {
            LedgerError::storage(format!("cannot decode index '{}': {}", name, e))
        })?;
        Ok(Some(Self {
            name: name.to_string(),
            keys: keys.unwrap_or_default(),
        }))
    }

    /// Load the index, treating a never-written index as empty.
    pub fn load_or_empty(stub: &ChaincodeStub<'_>, name: &str) -> Result<Self, LedgerError> {
        Ok(Self::load(stub, name)?.unwrap_or_else(|| Self::empty(name)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Append `key`; returns `false` if it was already indexed.
    pub fn append(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn encode(&self) -> Result<Vec<u8>, LedgerError> {
        encode_record(&self.name, &self.keys)
    }

    /// The write that persists this index, for inclusion in an atomic batch.
    pub fn to_batch_put(&self) -> Result<BatchPut, LedgerError> {
        Ok(BatchPut::new(self.name.clone(), self.encode()?))
    }

    /// Persist this index on its own.
    pub fn store(&self, stub: &mut ChaincodeStub<'_>) -> Result<(), LedgerError> {
        let bytes = self.encode()?;
        stub.put_state(&self.name, &bytes)
    }
}
