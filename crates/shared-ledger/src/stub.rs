//! # Chaincode Stub
//!
//! The per-invocation handle every handler receives. It borrows the host's
//! store for the duration of one invocation and carries the identifier of
//! the enclosing host transaction.
//!
//! ## Boundary Rules
//!
//! - Absent keys are `None`, never an empty value
//! - Empty keys are rejected before they reach the store
//! - Store failures surface as `LedgerError::StorageFailure`

use crate::errors::LedgerError;
use crate::ports::{BatchPut, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Borrowed view of the ledger for a single invocation.
pub struct ChaincodeStub<'a> {
    store: &'a mut dyn KeyValueStore,
    tx_id: String,
}

impl<'a> ChaincodeStub<'a> {
    pub fn new(store: &'a mut dyn KeyValueStore, tx_id: impl Into<String>) -> Self {
        Self {
            store,
            tx_id: tx_id.into(),
        }
    }

    /// Identifier of the current host transaction. Observability only.
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }

    /// Read the raw bytes stored under `key`.
    pub fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.store.get(key)?)
    }

    /// Return the stored bytes unmodified, failing with `NotFound` if the
    /// key is absent. A present-but-empty value is returned as empty.
    pub fn query_state(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        self.get_state(key)?
            .ok_or_else(|| LedgerError::not_found(key))
    }

    pub fn state_exists(&self, key: &str) -> Result<bool, LedgerError> {
        Ok(self.store.exists(key)?)
    }

    /// Write raw bytes under `key`.
    pub fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        check_key(key)?;
        self.store.put(key, value)?;
        Ok(())
    }

    /// Commit several writes as one unit.
    pub fn put_states(&mut self, writes: Vec<BatchPut>) -> Result<(), LedgerError> {
        for write in &writes {
            check_key(&write.key)?;
        }
        self.store.atomic_batch_write(writes)?;
        Ok(())
    }

    /// Read and decode the record under `key`, failing with `NotFound` if
    /// the key is absent.
    pub fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<T, LedgerError> {
        let bytes = self
            .get_state(key)?
            .ok_or_else(|| LedgerError::not_found(key))?;
        decode_stored(key, &bytes)
    }

    /// Encode and write `record` under `key`.
    pub fn write_record<T: Serialize>(&mut self, key: &str, record: &T) -> Result<(), LedgerError> {
        let bytes = encode_record(key, record)?;
        self.put_state(key, &bytes)
    }
}

fn check_key(key: &str) -> Result<(), LedgerError> {
    if key.is_empty() {
        return Err(LedgerError::malformed("key must not be an empty string"));
    }
    Ok(())
}

/// Parse a caller-supplied JSON payload into a record.
///
/// Only a JSON object is a record; arrays and scalars are rejected even when
/// their elements would line up with the record's fields.
pub fn decode_payload<T: DeserializeOwned>(payload: &str, record: &str) -> Result<T, LedgerError> {
    serde_json::from_str(payload)
        .map_err(|e| e.to_string())
        .and_then(record_from_value)
        .map_err(|e| LedgerError::malformed(format!("cannot parse {} payload: {}", record, e)))
}

/// Decode a record previously stored under `key`.
pub fn decode_stored<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, LedgerError> {
    serde_json::from_slice(bytes)
        .map_err(|e| e.to_string())
        .and_then(record_from_value)
        .map_err(|e| LedgerError::storage(format!("cannot decode value under '{}': {}", key, e)))
}

fn record_from_value<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    let kind = match value {
        Value::Object(_) => return serde_json::from_value(value).map_err(|e| e.to_string()),
        Value::Array(_) => "array",
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    };
    Err(format!("expected a JSON object, found {}", kind))
}

/// Encode a record for storage under `key`.
pub fn encode_record<T: Serialize>(key: &str, record: &T) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(record)
        .map_err(|e| LedgerError::storage(format!("cannot encode value for '{}': {}", key, e)))
}
