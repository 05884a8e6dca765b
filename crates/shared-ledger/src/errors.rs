//! # Error Types
//!
//! Error model shared by every lifecycle module.
//!
//! ## Design Principles
//!
//! - One variant per failure kind the host can observe
//! - Every failure is scoped to a single invocation; nothing here is fatal
//! - No variant is retried internally (retry belongs to the caller)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures reported by a [`KeyValueStore`](crate::ports::KeyValueStore) adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// Underlying I/O failed.
    #[error("I/O error: {message}")]
    IOError { message: String },

    /// An adapter lock was poisoned by a panicking writer.
    #[error("Lock poisoned")]
    LockPoisoned,
}

/// Errors returned by a lifecycle module invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Payload could not be parsed into the expected record, a numeric
    /// argument failed to parse, or the argument count is wrong.
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// The key is absent from the ledger.
    #[error("Key not found: {key}")]
    NotFound { key: String },

    /// The key already exists and the write policy forbids overwriting it.
    #[error("Key already exists: {key}")]
    AlreadyExists { key: String },

    /// A wallet transfer exceeds the wallet's holding.
    #[error(
        "Not enough balance to complete the transfer: {available} available, {requested} requested"
    )]
    InsufficientBalance { available: i64, requested: i64 },

    /// An asset decrement would drive the available quantity below zero.
    #[error(
        "It is not possible to have negative balance: {available} available, {requested} requested"
    )]
    NegativeBalance { available: i64, requested: i64 },

    /// The store failed, or a stored value could not be decoded.
    #[error("Storage failure: {message}")]
    StorageFailure { message: String },

    /// Dispatch received a function name with no handler.
    #[error("Received unknown function {function} invocation")]
    UnknownFunction { function: String },
}

impl LedgerError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageFailure {
            message: message.into(),
        }
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// The closed kind of this error, as carried across the host boundary.
    pub fn error_type(&self) -> LedgerErrorType {
        match self {
            Self::MalformedInput { .. } => LedgerErrorType::MalformedInput,
            Self::NotFound { .. } => LedgerErrorType::NotFound,
            Self::AlreadyExists { .. } => LedgerErrorType::AlreadyExists,
            Self::InsufficientBalance { .. } => LedgerErrorType::InsufficientBalance,
            Self::NegativeBalance { .. } => LedgerErrorType::NegativeBalance,
            Self::StorageFailure { .. } => LedgerErrorType::StorageFailure,
            Self::UnknownFunction { .. } => LedgerErrorType::UnknownFunction,
        }
    }
}

impl From<KVStoreError> for LedgerError {
    fn from(err: KVStoreError) -> Self {
        Self::storage(err.to_string())
    }
}

/// Serializable error for the host boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerErrorPayload {
    pub error_type: LedgerErrorType,
    pub message: String,
}

impl From<LedgerError> for LedgerErrorPayload {
    fn from(err: LedgerError) -> Self {
        Self {
            error_type: err.error_type(),
            message: err.to_string(),
        }
    }
}

/// Error kind enumeration for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerErrorType {
    MalformedInput,
    NotFound,
    AlreadyExists,
    InsufficientBalance,
    NegativeBalance,
    StorageFailure,
    UnknownFunction,
}
