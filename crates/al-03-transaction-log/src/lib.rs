//! # Transaction Log (al-03)
//!
//! Append-only log of completed trades. `transfer` stores a caller-built
//! [`Transaction`] under its `transactionID`; `query` returns it verbatim.
//!
//! The log does not cross-check trades against wallets or assets: it is
//! the caller's job to have run `updateBalance` / `updateAsset` first.

pub mod dispatch;
pub mod domain;
pub mod ports;
pub mod service;

pub use dispatch::{functions, TradeCommand};
pub use domain::{Transaction, TransactionLogConfig};
pub use ports::TransactionLogApi;
pub use service::{TransactionLogService, CHAINCODE_NAME};
