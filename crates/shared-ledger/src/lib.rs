//! # Shared Ledger Crate
//!
//! The keyed-record substrate shared by the asset lifecycle modules
//! (wallet ledger, asset registry, transaction log).
//!
//! ## Design Principles
//!
//! - **Explicit store handle**: every operation receives a [`ChaincodeStub`]
//!   borrowing the host's [`KeyValueStore`]; there is no ambient ledger state.
//! - **Closed error model**: every failure is a [`LedgerError`] variant,
//!   scoped to one invocation.
//! - **Host owns the transaction**: the substrate never locks, retries or
//!   demarcates transactions. Multi-key consistency relies on
//!   [`KeyValueStore::atomic_batch_write`].

pub mod adapters;
pub mod args;
pub mod chaincode;
pub mod errors;
pub mod index;
pub mod ports;
pub mod stub;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::InMemoryKVStore;
pub use args::{expect_args, parse_quantity};
pub use chaincode::{Chaincode, ChaincodeResponse, InvokeResult, WritePolicy};
pub use errors::{KVStoreError, LedgerError, LedgerErrorPayload, LedgerErrorType};
pub use index::KeyIndex;
pub use ports::{BatchPut, KeyValueStore};
pub use stub::{decode_payload, decode_stored, encode_record, ChaincodeStub};
