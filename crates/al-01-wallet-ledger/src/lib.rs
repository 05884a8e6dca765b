//! # Wallet Ledger (al-01)
//!
//! Owns per-user asset-holding records and moves each one through the
//! issuance → approval → trading lifecycle.
//!
//! ## State Machine
//!
//! ```text
//! (none) ──issueAsset──→ ISSUED ──approveAsset──→ APPROVED ──updateBalance──→ TRADED
//!                                                                     ↑          │
//!                                                                     └──────────┘
//! ```
//!
//! `approveAsset` is accepted from any state; `issueAsset` on an existing
//! `userID` overwrites unless the `MustNotExist` policy is configured.
//!
//! ## Functions
//!
//! | Function | Args |
//! |----------|------|
//! | `issueAsset` | `[serialized Wallet]` |
//! | `approveAsset` | `[userID]` |
//! | `updateBalance` | `[userID, recipientAccountID, transferQuantity]` |
//! | `query` | `[userID]` |
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | `assetMyQuantity >= 0` | issuance validation, transfer balance check |
//! | `shareholders` is append-only | only `after_transfer` touches it |
//! | Rejected transfer persists nothing | validate before mutating, single write |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): Wallet record and transitions, no I/O
//! - **Ports Layer** (`ports/`): `WalletLedgerApi`
//! - **Dispatch** (`dispatch/`): closed command set parsed from host input
//! - **Service** (`service.rs`): API + `Chaincode` implementation over a stub

pub mod dispatch;
pub mod domain;
pub mod ports;
pub mod service;

pub use dispatch::{functions, WalletCommand};
pub use domain::{Wallet, WalletLedgerConfig, WalletStatus};
pub use ports::WalletLedgerApi;
pub use service::{WalletLedgerService, CHAINCODE_NAME};
